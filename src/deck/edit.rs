use alloc::vec::Vec;
use core::iter;

use crate::card::Card;
use crate::collections::{Map, Set};
use crate::options::DeckOption;

use super::Deck;

impl Deck {
    /// Applies a post-generation option and rewinds the deal cursor.
    pub fn apply(&mut self, option: DeckOption) {
        log::trace!("applying deck option {option:?} to {} cards", self.len());
        match option {
            DeckOption::AddedCards(cards) => self.add_cards(&cards),
            DeckOption::RemovedCards(cards) => self.remove_cards(&cards),
            DeckOption::RemovedEachCard(cards) => self.remove_each_card(&cards),
            DeckOption::DeckTimes(times) => self.replicate(times),
            DeckOption::JokersOfNum(count) => self.add_jokers(count),
            DeckOption::CustomFilter(filter) => self.remove_matching(filter),
        }
        self.deal_index = 0;
    }

    /// Appends cards to the bottom of the deck.
    pub fn add_cards(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Removes cards by value, dropping every copy of each listed card.
    ///
    /// The deck is scanned once and at most `len - cards.len()` cards are
    /// kept; scanning stops as soon as that many survive. When the deck holds
    /// several copies of a listed card, or the list repeats a card, the kept
    /// count and the actual survivors disagree: the deck either ends up with
    /// fewer cards than the cap or gets cut short after the cap is hit.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{Card, Deck, Face, Suit};
    ///
    /// let mut deck = Deck::standard();
    /// deck.replicate(2);
    /// deck.remove_cards(&[Card::new(Suit::Spades, Face::ACE)]);
    ///
    /// // Both aces of spades are gone, and the cap of 103 was never reached.
    /// assert_eq!(deck.len(), 102);
    /// ```
    pub fn remove_cards(&mut self, cards: &[Card]) {
        let mut keep = self.cards.len().saturating_sub(cards.len());
        let unwanted: Set<Card> = cards.iter().copied().collect();

        let mut kept = Vec::with_capacity(keep);
        for &card in &self.cards {
            if keep == 0 {
                break;
            }
            if !unwanted.contains(&card) {
                kept.push(card);
                keep -= 1;
            }
        }
        self.cards = kept;
    }

    /// Removes one matching card per list entry, earliest copies first.
    ///
    /// Entries that no longer match any card are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{Card, Deck, Face, Suit};
    ///
    /// let mut deck = Deck::standard();
    /// deck.replicate(2);
    /// deck.remove_each_card(&[Card::new(Suit::Spades, Face::ACE)]);
    /// assert_eq!(deck.len(), 103);
    /// ```
    pub fn remove_each_card(&mut self, cards: &[Card]) {
        let mut pending: Map<Card, usize> = Map::new();
        for &card in cards {
            *pending.entry(card).or_insert(0) += 1;
        }

        self.cards.retain(|card| match pending.get_mut(card) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        });
    }

    /// Replaces the deck with its cards repeated `times` times, in order.
    ///
    /// `0` empties the deck and `1` leaves it unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `times * len` overflows `usize`.
    pub fn replicate(&mut self, times: usize) {
        self.cards = self.cards.repeat(times);
    }

    /// Appends `count` jokers.
    pub fn add_jokers(&mut self, count: usize) {
        self.cards.extend(iter::repeat_n(Card::joker(), count));
    }

    /// Removes every card for which `filter` returns `true`.
    pub fn remove_matching<F>(&mut self, filter: F)
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.retain(|card| !filter(card));
    }
}
