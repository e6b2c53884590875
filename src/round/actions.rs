use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::{Phase, Round};

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 resolves the round as a player bust at once; the
    /// dealer never plays. Reaching 21 with three or more cards is not a
    /// blackjack and does not end the turn.
    ///
    /// Returns the drawn card, or `None` if the deck is exhausted, in
    /// which case the hand is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn phase.
    pub fn hit(&mut self) -> Result<Option<Card>, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        let Some(card) = self.draw() else {
            return Ok(None);
        };

        self.player.add_card(card);

        if self.player.is_bust() {
            self.resolve(Outcome::PlayerBust);
        }

        Ok(Some(card))
    }

    /// Player action: Stand (end the player turn).
    ///
    /// The dealer's hand is played out with [`dealer_play`](Self::dealer_play).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player turn phase.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidPhase);
        }

        self.phase = Phase::DealerTurn;

        Ok(())
    }
}
