//! Generation-time and post-generation deck options.
//!
//! Options are applied in the order they are given and do not commute:
//! `[RemovedCards(kings), DeckTimes(2)]` and `[DeckTimes(2), RemovedCards(kings)]`
//! can produce different decks.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Face, Suit};

/// An option that changes what a [`CardGenerator`](crate::CardGenerator)
/// produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum GeneratorOption {
    /// Replace the suit list.
    Suits(Vec<Suit>),
    /// Append suits to the suit list. Existing suits are not deduplicated.
    ExtendedSuits(Vec<Suit>),
    /// Replace the face list.
    Faces(Vec<Face>),
    /// Append faces to the face list.
    AdditionalFaces(Vec<Face>),
    /// Remove every occurrence of the listed faces.
    WithoutFaces(Vec<Face>),
}

/// Predicate used by [`DeckOption::CustomFilter`]. Cards for which it returns
/// `true` are removed.
pub type CardFilter = Box<dyn Fn(&Card) -> bool>;

/// An option that edits an already generated card sequence.
///
/// Applied by [`Deck::new`](crate::Deck::new) or [`Deck::apply`](crate::Deck::apply).
#[non_exhaustive]
pub enum DeckOption {
    /// Append the cards at the end, in order.
    AddedCards(Vec<Card>),
    /// Set-based removal.
    ///
    /// Every copy of a listed card is dropped, however many times it is listed.
    /// The result is additionally capped at `len - list.len()` cards: copying
    /// stops once that many cards survive. With duplicates on either side this
    /// can drop cards that were not listed; use [`DeckOption::RemovedEachCard`]
    /// for exact multiset removal.
    RemovedCards(Vec<Card>),
    /// Multiset removal: each entry removes one matching card, earliest first.
    /// Entries without a remaining match are ignored.
    RemovedEachCard(Vec<Card>),
    /// Repeat the whole sequence this many times. Zero empties the deck.
    DeckTimes(usize),
    /// Append this many `(Star, Joker)` cards.
    JokersOfNum(usize),
    /// Remove every card matching the predicate.
    CustomFilter(CardFilter),
}

impl DeckOption {
    /// Creates a [`DeckOption::AddedCards`] option.
    #[must_use]
    pub fn added_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::AddedCards(cards.into_iter().collect())
    }

    /// Creates a [`DeckOption::RemovedCards`] option.
    #[must_use]
    pub fn removed_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::RemovedCards(cards.into_iter().collect())
    }

    /// Creates a [`DeckOption::RemovedEachCard`] option.
    #[must_use]
    pub fn removed_each_card(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::RemovedEachCard(cards.into_iter().collect())
    }

    /// Creates a [`DeckOption::DeckTimes`] option.
    #[must_use]
    pub const fn deck_times(times: usize) -> Self {
        Self::DeckTimes(times)
    }

    /// Creates a [`DeckOption::JokersOfNum`] option.
    #[must_use]
    pub const fn jokers(count: usize) -> Self {
        Self::JokersOfNum(count)
    }

    /// Creates a [`DeckOption::CustomFilter`] option.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{CardGenerator, Deck, DeckOption, Suit};
    ///
    /// let deck = Deck::new(
    ///     &CardGenerator::default(),
    ///     [DeckOption::custom_filter(|card| card.suit == Suit::Clubs)],
    /// );
    /// assert_eq!(deck.len(), 39);
    /// ```
    #[must_use]
    pub fn custom_filter(filter: impl Fn(&Card) -> bool + 'static) -> Self {
        Self::CustomFilter(Box::new(filter))
    }
}

impl fmt::Debug for DeckOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddedCards(cards) => f.debug_tuple("AddedCards").field(cards).finish(),
            Self::RemovedCards(cards) => f.debug_tuple("RemovedCards").field(cards).finish(),
            Self::RemovedEachCard(cards) => f.debug_tuple("RemovedEachCard").field(cards).finish(),
            Self::DeckTimes(times) => f.debug_tuple("DeckTimes").field(times).finish(),
            Self::JokersOfNum(count) => f.debug_tuple("JokersOfNum").field(count).finish(),
            Self::CustomFilter(_) => f.debug_tuple("CustomFilter").finish_non_exhaustive(),
        }
    }
}
