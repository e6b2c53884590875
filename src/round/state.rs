//! Round phase types.

/// Phase of a round.
///
/// A fresh round starts in [`Dealing`](Self::Dealing) and ends in
/// [`Resolved`](Self::Resolved). A natural blackjack at the initial deal
/// skips the player and dealer turns entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial cards have not been dealt yet.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is available.
    Resolved,
}
