//! Round outcome types.

/// Final result of a round, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Dealer was dealt a natural blackjack; the player loses.
    DealerBlackjack,
    /// Player was dealt a natural blackjack; the player wins.
    PlayerBlackjack,
    /// Player went over 21; the dealer never plays.
    PlayerBust,
    /// Dealer went over 21; the player wins.
    DealerBust,
    /// Dealer finished with the higher total.
    DealerWin,
    /// Player finished with the higher total.
    PlayerWin,
    /// Both totals were equal.
    Push,
}

impl Outcome {
    /// Returns whether the round ended in the player's favour.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin
        )
    }
}
