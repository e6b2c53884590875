//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The round is not in the dealing phase.
    #[error("invalid round phase for dealing")]
    InvalidPhase,
    /// Not enough cards to deal both starting hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player and dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is not in the right phase for this action.
    #[error("invalid round phase for this action")]
    InvalidPhase,
}
