use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

use super::Deck;

impl Deck {
    /// Sorts the deck by [`Card::order_key`], keeping equal cards in their
    /// current relative order.
    pub fn standard_sort(&mut self) {
        self.cards.sort_by_key(Card::order_key);
        self.deal_index = 0;
    }

    /// Returns whether the deck is in ascending [`Card::order_key`] order.
    #[must_use]
    pub fn is_standard_sorted(&self) -> bool {
        self.cards
            .windows(2)
            .all(|pair| pair[0].order_key() <= pair[1].order_key())
    }

    /// Shuffles the deck in place with the given random source.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.cards.shuffle(rng);
        self.deal_index = 0;
    }

    /// Shuffles the deck with a generator seeded from `seed`.
    ///
    /// The same seed always produces the same order.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::Deck;
    ///
    /// let mut a = Deck::standard();
    /// let mut b = Deck::standard();
    /// a.shuffle_seeded(42);
    /// b.shuffle_seeded(42);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle(&mut rng);
    }

    /// Shuffles the deck with a generator seeded from the current time.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle_by_time(&mut self) {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        log::trace!("shuffling with time seed {seed}");
        self.shuffle_seeded(seed);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::card::{Face, Suit};

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let low = Card::new(Suit::Spades, Face::new(14));
        let high = Card::new(Suit::Diamonds, Face::ACE);
        assert_eq!(low.order_key(), high.order_key());

        let mut deck = Deck::from_cards(alloc::vec![high, low, Card::new(Suit::Spades, Face::ACE)]);
        deck.standard_sort();
        assert_eq!(
            deck.cards(),
            &[Card::new(Suit::Spades, Face::ACE), high, low]
        );
    }

    #[test]
    fn seeded_shuffle_keeps_the_same_cards() {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(7);
        assert_ne!(deck, Deck::standard());

        let mut cards: Vec<Card> = deck.into_cards();
        cards.sort_by_key(Card::order_key);
        assert_eq!(cards, Deck::standard().into_cards());
    }

    #[test]
    fn different_seeds_give_different_orders() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();
        a.shuffle_seeded(1);
        b.shuffle_seeded(2);
        assert_ne!(a, b);
    }

    #[test]
    fn shuffle_rewinds_the_cursor() {
        let mut deck = Deck::standard();
        assert!(deck.deal().is_ok());
        deck.shuffle_seeded(3);
        assert_eq!(deck.dealt(), 0);
    }
}
