//! Deterministic card generation.

use alloc::vec::Vec;

use crate::card::{Card, Face, Suit};
use crate::collections::Set;
use crate::options::GeneratorOption;

/// Produces the fresh, unshuffled card sequence of a deck.
///
/// The generator holds an ordered list of suits and an ordered list of faces.
/// Neither list is deduplicated. Configure it with [`GeneratorOption`]s or the
/// builder methods:
///
/// ```
/// use decksmith::{CardGenerator, Face, Suit};
///
/// let generator = CardGenerator::default()
///     .with_suits([Suit::Hearts, Suit::Spades])
///     .without_faces([Face::ACE]);
/// assert_eq!(generator.size(), 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGenerator {
    suits: Vec<Suit>,
    faces: Vec<Face>,
}

impl Default for CardGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

impl CardGenerator {
    /// Creates the standard generator: four suits times Ace through King.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            suits: Suit::STANDARD.to_vec(),
            faces: Face::STANDARD.to_vec(),
        }
    }

    /// Creates a standard generator and applies the options in order.
    #[must_use]
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = GeneratorOption>,
    {
        let mut generator = Self::standard();
        for option in options {
            generator.apply(option);
        }
        generator
    }

    /// Applies a single generation-time option.
    pub fn apply(&mut self, option: GeneratorOption) {
        log::trace!("applying generator option {option:?}");
        match option {
            GeneratorOption::Suits(suits) => self.suits = suits,
            GeneratorOption::ExtendedSuits(suits) => self.suits.extend(suits),
            GeneratorOption::Faces(faces) => self.faces = faces,
            GeneratorOption::AdditionalFaces(faces) => self.faces.extend(faces),
            GeneratorOption::WithoutFaces(faces) => {
                let unwanted: Set<Face> = faces.into_iter().collect();
                self.faces.retain(|face| !unwanted.contains(face));
            }
        }
    }

    /// Replaces the suit list.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{CardGenerator, Suit};
    ///
    /// let generator = CardGenerator::default().with_suits([Suit::Hearts]);
    /// assert_eq!(generator.suits(), &[Suit::Hearts]);
    /// ```
    #[must_use]
    pub fn with_suits(mut self, suits: impl IntoIterator<Item = Suit>) -> Self {
        self.apply(GeneratorOption::Suits(suits.into_iter().collect()));
        self
    }

    /// Appends suits after the current suit list.
    ///
    /// Suits already present produce a second group of the same suit.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{CardGenerator, Suit};
    ///
    /// let generator = CardGenerator::default().with_extended_suits([Suit::Hearts]);
    /// assert_eq!(generator.suits().len(), 5);
    /// ```
    #[must_use]
    pub fn with_extended_suits(mut self, suits: impl IntoIterator<Item = Suit>) -> Self {
        self.apply(GeneratorOption::ExtendedSuits(suits.into_iter().collect()));
        self
    }

    /// Replaces the face list.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{CardGenerator, Face};
    ///
    /// let generator = CardGenerator::default().with_faces([Face::ACE]);
    /// assert_eq!(generator.size(), 4);
    /// ```
    #[must_use]
    pub fn with_faces(mut self, faces: impl IntoIterator<Item = Face>) -> Self {
        self.apply(GeneratorOption::Faces(faces.into_iter().collect()));
        self
    }

    /// Appends faces after the current face list.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{CardGenerator, Face};
    ///
    /// let generator = CardGenerator::default().with_additional_faces([Face::JOKER]);
    /// assert_eq!(generator.faces().last(), Some(&Face::JOKER));
    /// ```
    #[must_use]
    pub fn with_additional_faces(mut self, faces: impl IntoIterator<Item = Face>) -> Self {
        let faces = faces.into_iter().collect();
        self.apply(GeneratorOption::AdditionalFaces(faces));
        self
    }

    /// Removes every occurrence of the given faces.
    ///
    /// # Example
    ///
    /// ```
    /// use decksmith::{CardGenerator, Face};
    ///
    /// let generator = CardGenerator::default().without_faces([Face::ACE, Face::KING]);
    /// assert_eq!(generator.faces().len(), 11);
    /// ```
    #[must_use]
    pub fn without_faces(mut self, faces: impl IntoIterator<Item = Face>) -> Self {
        self.apply(GeneratorOption::WithoutFaces(faces.into_iter().collect()));
        self
    }

    /// Returns the configured suits.
    #[must_use]
    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    /// Returns the configured faces.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the number of cards [`generate`](Self::generate) will produce.
    #[must_use]
    pub fn size(&self) -> usize {
        self.suits.len() * self.faces.len()
    }

    /// Generates the cards, suit-major.
    ///
    /// All faces of the first suit come first, in face order, followed by the
    /// faces of the second suit, and so on.
    #[must_use]
    pub fn generate(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.size());
        for &suit in &self.suits {
            for &face in &self.faces {
                cards.push(Card::new(suit, face));
            }
        }
        log::debug!(
            "generated {} cards from {} suits and {} faces",
            cards.len(),
            self.suits.len(),
            self.faces.len()
        );
        cards
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn standard_generation_is_suit_major() {
        let cards = CardGenerator::standard().generate();
        assert_eq!(cards.len(), 52);
        assert_eq!(cards[0], Card::new(Suit::Spades, Face::ACE));
        assert_eq!(cards[12], Card::new(Suit::Spades, Face::KING));
        assert_eq!(cards[13], Card::new(Suit::Diamonds, Face::ACE));
        assert_eq!(cards[51], Card::new(Suit::Hearts, Face::KING));
    }

    #[test]
    fn generation_is_repeatable() {
        let generator = CardGenerator::default().with_extended_suits([Suit::Star]);
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn without_faces_removes_duplicates() {
        let generator = CardGenerator::default()
            .with_faces([Face::ACE, Face::TWO, Face::ACE, Face::THREE])
            .without_faces([Face::ACE, Face::ACE]);
        assert_eq!(generator.faces(), &[Face::TWO, Face::THREE]);
    }

    #[test]
    fn without_faces_ignores_missing_faces() {
        let generator = CardGenerator::default()
            .with_faces([Face::ACE])
            .without_faces([Face::KING, Face::QUEEN]);
        assert_eq!(generator.faces(), &[Face::ACE]);
    }

    #[test]
    fn options_apply_in_order() {
        let generator = CardGenerator::with_options(vec![
            GeneratorOption::Suits(vec![Suit::Clubs]),
            GeneratorOption::ExtendedSuits(vec![Suit::Clubs]),
            GeneratorOption::Faces(vec![Face::NINE]),
        ]);
        assert_eq!(
            generator.generate(),
            vec![
                Card::new(Suit::Clubs, Face::NINE),
                Card::new(Suit::Clubs, Face::NINE),
            ]
        );

        let reversed = CardGenerator::with_options(vec![
            GeneratorOption::Faces(vec![Face::NINE]),
            GeneratorOption::AdditionalFaces(vec![Face::TEN]),
            GeneratorOption::Faces(vec![Face::TWO]),
        ]);
        assert_eq!(reversed.faces(), &[Face::TWO]);
    }

    #[test]
    fn empty_suits_generate_nothing() {
        let generator = CardGenerator::default().with_suits(Vec::new());
        assert!(generator.generate().is_empty());
    }
}
