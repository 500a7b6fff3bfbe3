//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur while dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Every card has already been dealt.
    #[error("no cards left to deal")]
    Exhausted,
    /// Fewer cards remain than were requested.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left after the deal cursor.
        remaining: usize,
    },
}
