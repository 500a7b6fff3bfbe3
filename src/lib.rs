//! Composable playing-card deck construction with optional `no_std` support.
//!
//! A [`CardGenerator`] enumerates a configurable set of suits and faces into a
//! fresh, suit-major card sequence. [`Deck::new`] then applies
//! post-generation [`DeckOption`]s in order: adding or removing cards,
//! replicating the whole deck, adding jokers, or filtering.
//!
//! # Example
//!
//! ```
//! use decksmith::{Card, CardGenerator, Deck, DeckOption, Face, Suit};
//!
//! let generator = CardGenerator::default().without_faces([Face::TWO, Face::THREE]);
//! let mut deck = Deck::new(
//!     &generator,
//!     [DeckOption::deck_times(2), DeckOption::jokers(4)],
//! );
//! assert_eq!(deck.len(), 2 * 44 + 4);
//!
//! deck.shuffle_seeded(42);
//! deck.standard_sort();
//! assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Face::ACE));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
mod collections;
pub mod deck;
pub mod error;
pub mod generator;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, SUIT_CARD_AMOUNT, Suit};
pub use deck::Deck;
pub use error::DealError;
pub use generator::CardGenerator;
pub use options::{CardFilter, DeckOption, GeneratorOption};
