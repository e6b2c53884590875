//! A shuffled 52-card deck.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A single deck of 52 unique cards.
///
/// Cards are removed from the top as they are drawn and the deck is never
/// refilled; after 52 draws it stays empty.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards. The last element is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck shuffled with a generator seeded from `seed`.
    ///
    /// Equal seeds produce equal orderings.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::shuffled(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(&mut rng);
        Self { cards }
    }

    /// Creates a deck that yields `draws` in the listed order.
    ///
    /// Useful for scripting exact card sequences in tests.
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards: Vec<Card> = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
