use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Phase, Round};

/// The dealer stands at this value or above, soft or hard.
const DEALER_STAND: u8 = 17;

impl Round {
    /// Dealer plays out their hand and resolves the round.
    ///
    /// The dealer reveals the hole card and draws until reaching 17 or
    /// higher. A soft 17 stands like a hard 17. Drawing stops early if the
    /// deck runs out.
    ///
    /// Returns the cards drawn by the dealer; the final value is available
    /// through [`dealer`](Self::dealer) afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer turn phase.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.phase != Phase::DealerTurn {
            return Err(ActionError::InvalidPhase);
        }

        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();

        while self.dealer.value() < DEALER_STAND {
            let Some(card) = self.draw() else {
                break;
            };
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        let outcome = if self.dealer.is_bust() {
            Outcome::DealerBust
        } else {
            match self.player.value().cmp(&self.dealer.value()) {
                Ordering::Greater => Outcome::PlayerWin,
                Ordering::Less => Outcome::DealerWin,
                Ordering::Equal => Outcome::Push,
            }
        };
        self.resolve(outcome);

        Ok(drawn_cards)
    }
}
