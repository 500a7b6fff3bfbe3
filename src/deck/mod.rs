//! The deck: an owned card sequence with a deal cursor.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, SUIT_CARD_AMOUNT};
use crate::error::DealError;
use crate::generator::CardGenerator;
use crate::options::DeckOption;

mod edit;
mod order;

/// An ordered sequence of cards.
///
/// Duplicates are allowed. The deal cursor points at the next card
/// [`deal`](Self::deal) returns. Applying options or reordering the deck
/// rewinds it to the top.
///
/// Two decks are equal when they hold the same cards in the same order. The
/// deal cursor is not compared.
#[derive(Debug, Clone, Eq)]
pub struct Deck {
    /// Cards, top of the deck first.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    deal_index: usize,
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// ```
/// use decksmith::{Card, Deck};
///
/// let deck = Deck::from(vec![Card::joker(), Card::joker()]);
/// assert_eq!(deck.len(), 2);
/// assert_eq!(deck.dealt(), 0);
/// ```
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl Deck {
    /// Generates the cards once and applies the options in order.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{CardGenerator, Deck, DeckOption};
    ///
    /// let deck = Deck::new(
    ///     &CardGenerator::default(),
    ///     [DeckOption::deck_times(2), DeckOption::jokers(2)],
    /// );
    /// assert_eq!(deck.len(), 106);
    /// ```
    #[must_use]
    pub fn new<I>(generator: &CardGenerator, options: I) -> Self
    where
        I: IntoIterator<Item = DeckOption>,
    {
        let mut deck = Self::from_cards(generator.generate());
        for option in options {
            deck.apply(option);
        }
        log::debug!("built deck of {} cards", deck.len());
        deck
    }

    /// Creates the standard 52-card deck in canonical order.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_cards(CardGenerator::standard().generate())
    }

    /// Wraps an existing card sequence.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            deal_index: 0,
        }
    }

    /// Returns the cards, top of the deck first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consumes the deck and returns its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Returns the number of cards, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Swaps the cards at two positions.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.cards.swap(i, j);
    }

    /// Returns the number of cards already dealt.
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.deal_index
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.deal_index)
    }

    /// Deals the card under the cursor and advances it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::Exhausted`] once every card has been dealt.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = *self
            .cards
            .get(self.deal_index)
            .ok_or(DealError::Exhausted)?;
        self.deal_index += 1;
        Ok(card)
    }

    /// Deals `count` cards at once.
    ///
    /// Nothing is dealt if fewer than `count` cards remain.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck cannot cover the request.
    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(DealError::NotEnoughCards {
                requested: count,
                remaining,
            });
        }

        let start = self.deal_index;
        self.deal_index += count;
        Ok(self.cards[start..self.deal_index].to_vec())
    }

    /// Moves the deal cursor back to the top of the deck.
    pub const fn reset_deal(&mut self) {
        self.deal_index = 0;
    }
}

impl fmt::Display for Deck {
    /// Renders the cards in rows of [`SUIT_CARD_AMOUNT`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cards.chunks(usize::from(SUIT_CARD_AMOUNT)).enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            for card in row {
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::card::{Face, Suit};

    #[test]
    fn deal_walks_the_cursor() {
        let mut deck = Deck::standard();
        assert_eq!(deck.deal(), Ok(Card::new(Suit::Spades, Face::ACE)));
        assert_eq!(deck.deal(), Ok(Card::new(Suit::Spades, Face::TWO)));
        assert_eq!(deck.dealt(), 2);
        assert_eq!(deck.remaining(), 50);
        assert_eq!(deck.len(), 52);

        deck.reset_deal();
        assert_eq!(deck.deal(), Ok(Card::new(Suit::Spades, Face::ACE)));
    }

    #[test]
    fn deal_from_empty_deck_fails() {
        let mut deck = Deck::from_cards(Vec::new());
        assert_eq!(deck.deal(), Err(DealError::Exhausted));
    }

    #[test]
    fn deal_many_is_all_or_nothing() {
        let generator = CardGenerator::default().with_suits([Suit::Clubs]);
        let mut deck = Deck::new(&generator, Vec::new());
        assert_eq!(deck.deal_many(10).map(|cards| cards.len()), Ok(10));
        assert_eq!(
            deck.deal_many(4),
            Err(DealError::NotEnoughCards {
                requested: 4,
                remaining: 3,
            })
        );
        assert_eq!(deck.dealt(), 10);
        assert_eq!(
            deck.deal_many(3),
            Ok(alloc::vec![
                Card::new(Suit::Clubs, Face::JACK),
                Card::new(Suit::Clubs, Face::QUEEN),
                Card::new(Suit::Clubs, Face::KING),
            ])
        );
        assert_eq!(deck.deal(), Err(DealError::Exhausted));
    }

    #[test]
    fn equality_ignores_the_deal_cursor() {
        let mut dealt = Deck::standard();
        assert!(dealt.deal().is_ok());
        assert_eq!(dealt, Deck::standard());

        let mut reordered = Deck::standard();
        reordered.swap(0, 1);
        assert_ne!(reordered, Deck::standard());
    }

    #[test]
    fn display_renders_one_suit_per_row() {
        let rendered = Deck::standard().to_string();
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.starts_with(" \u{2660}\u{fe0e} A "));
    }
}
