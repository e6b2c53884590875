//! Round engine and phase management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{DealerHand, Hand};
use crate::result::Outcome;

mod actions;
mod dealer;
pub mod state;

pub use state::Phase;

/// A single round of blackjack against the dealer.
///
/// The round owns its deck and both hands for its whole lifetime. Starting
/// a new round means constructing a new `Round`; nothing carries over.
///
/// # Example
///
/// ```
/// use twentyone::{Phase, Round};
///
/// let mut round = Round::new(42);
/// round.deal()?;
///
/// // A natural blackjack on either side resolves the round at the deal.
/// if round.phase() == Phase::PlayerTurn {
///     round.stand()?;
///     round.dealer_play()?;
/// }
///
/// assert_eq!(round.phase(), Phase::Resolved);
/// assert!(round.outcome().is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Round {
    /// Cards remaining to be drawn.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: DealerHand,
    /// Current phase.
    phase: Phase,
    /// Final outcome, set once the round resolves.
    outcome: Option<Outcome>,
}

impl Round {
    /// Creates a new round with a freshly shuffled deck.
    ///
    /// Equal seeds deal identical rounds.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::shuffled(seed))
    }

    /// Creates a round from a prepared deck.
    ///
    /// Combine with [`Deck::stacked`] to script exact card sequences.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: DealerHand::new(),
            phase: Phase::Dealing,
            outcome: None,
        }
    }

    /// Deals two cards to each side, alternating player, dealer, player,
    /// dealer.
    ///
    /// If either starting hand is a natural blackjack the round resolves
    /// immediately. The dealer's natural is checked first, so two naturals
    /// count as a dealer win.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt or the deck holds
    /// fewer than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != Phase::Dealing {
            return Err(DealError::InvalidPhase);
        }

        if self.deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            if let Some(card) = self.deck.draw() {
                self.player.add_card(card);
            }
            if let Some(card) = self.deck.draw() {
                self.dealer.add_card(card);
            }
        }

        // Naturals resolve the round before any turn is taken.
        if self.dealer.is_blackjack() {
            self.resolve(Outcome::DealerBlackjack);
        } else if self.player.is_blackjack() {
            self.resolve(Outcome::PlayerBlackjack);
        } else {
            self.phase = Phase::PlayerTurn;
        }

        Ok(())
    }

    /// Draws a card from the deck.
    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    /// Ends the round with the given outcome and reveals the dealer's hand.
    pub(crate) fn resolve(&mut self, outcome: Outcome) {
        self.dealer.reveal_hole();
        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome, or `None` while the round is still being
    /// played.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
