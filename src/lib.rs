//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that manages one round against the
//! dealer: the initial deal, player hits, the dealer's fixed drawing
//! policy, and the final outcome. Rendering hands and reading input are
//! left entirely to the caller, which polls [`Round::phase`] and reads the
//! hands back after each action.
//!
//! # Example
//!
//! ```
//! use twentyone::{Phase, Round};
//!
//! let mut round = Round::new(42);
//! round.deal()?;
//!
//! if round.phase() == Phase::PlayerTurn {
//!     round.stand()?;
//!     round.dealer_play()?;
//! }
//!
//! assert_eq!(round.phase(), Phase::Resolved);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError};
pub use hand::{DealerHand, Hand};
pub use result::Outcome;
pub use round::{Phase, Round};
