//! Card types and ordering keys.

use core::fmt;

/// Card suit.
///
/// Suits are ordered by declaration: `Spades < Diamonds < Clubs < Hearts < Star`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// The joker pseudo-suit.
    Star,
}

impl Suit {
    /// The four standard suits in the order of a brand new deck.
    pub const STANDARD: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Every suit, including [`Suit::Star`].
    pub const ALL: [Self; 5] = [
        Self::Spades,
        Self::Diamonds,
        Self::Clubs,
        Self::Hearts,
        Self::Star,
    ];

    /// Returns the position of the suit in the canonical order.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the display glyph of the suit.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Spades => "\u{2660}\u{fe0e}",
            Self::Diamonds => "\u{2666}\u{fe0e}",
            Self::Clubs => "\u{2663}\u{fe0e}",
            Self::Hearts => "\u{2665}\u{fe0e}",
            Self::Star => "\u{2606}",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// The rank of a card.
///
/// Any `u8` can be wrapped; the named constants cover `1..=14`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face(u8);

impl Face {
    /// Ace (1).
    pub const ACE: Self = Self(1);
    /// Two.
    pub const TWO: Self = Self(2);
    /// Three.
    pub const THREE: Self = Self(3);
    /// Four.
    pub const FOUR: Self = Self(4);
    /// Five.
    pub const FIVE: Self = Self(5);
    /// Six.
    pub const SIX: Self = Self(6);
    /// Seven.
    pub const SEVEN: Self = Self(7);
    /// Eight.
    pub const EIGHT: Self = Self(8);
    /// Nine.
    pub const NINE: Self = Self(9);
    /// Ten.
    pub const TEN: Self = Self(10);
    /// Jack (11).
    pub const JACK: Self = Self(11);
    /// Queen (12).
    pub const QUEEN: Self = Self(12);
    /// King (13).
    pub const KING: Self = Self(13);
    /// Joker (14).
    pub const JOKER: Self = Self(14);

    /// Ace through King, in ascending order.
    pub const STANDARD: [Self; 13] = [
        Self::ACE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
        Self::TEN,
        Self::JACK,
        Self::QUEEN,
        Self::KING,
    ];

    /// Creates a face from its numeric value.
    ///
    /// Note: This function does not validate the value. Values outside 1..=14
    /// are accepted and render as plain numbers.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the face.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// ```
/// use decksmith::Face;
///
/// assert_eq!(Face::from(12), Face::QUEEN);
/// assert_eq!(Face::from(42).to_string(), "42");
/// ```
impl From<u8> for Face {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            14 => f.write_str("?"),
            n => write!(f, "{n}"),
        }
    }
}

/// Cards per suit, used as the multiplier of [`Card::order_key`].
pub const SUIT_CARD_AMOUNT: u8 = Face::KING.value();

/// Number of cards in a default deck.
pub const DECK_SIZE: usize = Suit::STANDARD.len() * Face::STANDARD.len();

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The face of the card.
    pub face: Face,
}

impl Card {
    /// Creates a new card.
    ///
    /// Any suit and face combination is accepted.
    #[must_use]
    pub const fn new(suit: Suit, face: Face) -> Self {
        Self { suit, face }
    }

    /// Returns the conventional joker card, `(Star, Joker)`.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Star, Face::JOKER)
    }

    /// Returns the key used by the standard sort.
    ///
    /// Computed as `suit rank * SUIT_CARD_AMOUNT + face value`. Keys are only
    /// collision-free for standard suits with faces 1..=13; star cards sort
    /// after every standard card.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{Card, Face, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spades, Face::ACE).order_key(), 1);
    /// assert_eq!(Card::new(Suit::Diamonds, Face::ACE).order_key(), 14);
    /// assert_eq!(Card::joker().order_key(), 66);
    /// ```
    #[must_use]
    pub const fn order_key(&self) -> u16 {
        self.suit.rank() as u16 * SUIT_CARD_AMOUNT as u16 + self.face.value() as u16
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {} {} ", self.suit, self.face)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn face_renders_named_and_numeric_values() {
        assert_eq!(Face::ACE.to_string(), "A");
        assert_eq!(Face::SEVEN.to_string(), "7");
        assert_eq!(Face::TEN.to_string(), "10");
        assert_eq!(Face::QUEEN.to_string(), "Q");
        assert_eq!(Face::JOKER.to_string(), "?");
        assert_eq!(Face::new(0).to_string(), "0");
        assert_eq!(Face::new(42).to_string(), "42");
    }

    #[test]
    fn card_renders_with_padding() {
        let card = Card::new(Suit::Hearts, Face::KING);
        assert_eq!(card.to_string(), " \u{2665}\u{fe0e} K ");
        assert_eq!(Card::joker().to_string(), " \u{2606} ? ");
    }

    #[test]
    fn order_key_follows_suit_then_face() {
        let mut previous = 0;
        for suit in Suit::STANDARD {
            for face in Face::STANDARD {
                let key = Card::new(suit, face).order_key();
                assert!(key > previous);
                previous = key;
            }
        }
        assert!(Card::joker().order_key() > previous);
    }

    #[test]
    fn order_key_does_not_overflow() {
        assert_eq!(Card::new(Suit::Star, Face::new(u8::MAX)).order_key(), 307);
    }

    #[test]
    fn suit_rank_matches_declaration() {
        for (index, suit) in Suit::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(suit.rank()), index);
        }
        assert_eq!(SUIT_CARD_AMOUNT, 13);
        assert_eq!(DECK_SIZE, 52);
    }
}
