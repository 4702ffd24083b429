//! The `Meld` value type.
//!
//! A meld is either a *set* (three or more cards of one rank, distinct
//! suits) or a *run* (three or more consecutive ranks of one suit). Melds
//! are transient: the search computes them and a knocking player declares
//! them, but the table never stores them as ongoing game state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::error::GameError;

/// Which shape a legal meld takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Three or four cards of the same rank, all suits distinct.
    Set,
    /// Three or more same-suit cards with consecutive ranks.
    Run,
}

/// A group of cards held in canonical form.
///
/// Cards are stored sorted by rank then suit, so two melds built from the
/// same cards in any order compare equal. A `Meld` does not have to be
/// legal - [`Meld::kind`] returns `None` and [`Meld::validate`] an error
/// for card groups that form neither a set nor a run. The search only ever
/// produces legal melds; knock declarations are validated explicitly.
///
/// ```
/// use gin_rummy::cards::{Card, Suit};
/// use gin_rummy::melds::{Meld, MeldKind};
///
/// let run = Meld::new([
///     Card::new(3, Suit::Hearts),
///     Card::new(1, Suit::Hearts),
///     Card::new(2, Suit::Hearts),
/// ]);
/// assert_eq!(run.kind(), Some(MeldKind::Run));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meld {
    cards: SmallVec<[Card; 4]>,
}

impl Meld {
    /// Build a meld from any card ordering.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: SmallVec<[Card; 4]> = cards.into_iter().collect();
        cards.sort_unstable_by_key(|c| (c.rank, c.suit));
        Self { cards }
    }

    /// The cards, sorted by rank then suit.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the meld.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the meld holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the meld contains `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Classify the meld, or `None` if it is not legal.
    #[must_use]
    pub fn kind(&self) -> Option<MeldKind> {
        if self.cards.len() < 3 {
            return None;
        }

        let first = self.cards[0];

        let same_rank = self.cards.iter().all(|c| c.rank == first.rank);
        if same_rank {
            // Cards are sorted, so duplicate suits would be adjacent.
            let suits_distinct = self.cards.windows(2).all(|w| w[0].suit != w[1].suit);
            return suits_distinct.then_some(MeldKind::Set);
        }

        let same_suit = self.cards.iter().all(|c| c.suit == first.suit);
        if same_suit {
            let consecutive = self.cards.windows(2).all(|w| w[1].rank == w[0].rank + 1);
            return consecutive.then_some(MeldKind::Run);
        }

        None
    }

    /// Check legality, reporting why a declaration is malformed.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.cards.len() < 3 {
            return Err(GameError::InvalidMeld("a meld needs at least three cards"));
        }
        if self.kind().is_none() {
            return Err(GameError::InvalidMeld(
                "cards form neither a same-rank set nor a same-suit run",
            ));
        }
        Ok(())
    }

    /// Lowest rank in the meld. Zero for an empty meld.
    #[must_use]
    pub fn min_rank(&self) -> u8 {
        self.cards.first().map_or(0, |c| c.rank)
    }

    /// Highest rank in the meld. Zero for an empty meld.
    #[must_use]
    pub fn max_rank(&self) -> u8 {
        self.cards.last().map_or(0, |c| c.rank)
    }
}

impl std::fmt::Display for Meld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_set_classification() {
        let set = Meld::new([
            card(7, Suit::Hearts),
            card(7, Suit::Clubs),
            card(7, Suit::Spades),
        ]);
        assert_eq!(set.kind(), Some(MeldKind::Set));
        assert!(set.validate().is_ok());

        let four = Meld::new([
            card(7, Suit::Hearts),
            card(7, Suit::Clubs),
            card(7, Suit::Spades),
            card(7, Suit::Diamonds),
        ]);
        assert_eq!(four.kind(), Some(MeldKind::Set));
    }

    #[test]
    fn test_run_classification() {
        let run = Meld::new([
            card(11, Suit::Diamonds),
            card(13, Suit::Diamonds),
            card(12, Suit::Diamonds),
        ]);
        assert_eq!(run.kind(), Some(MeldKind::Run));
        assert_eq!(run.min_rank(), 11);
        assert_eq!(run.max_rank(), 13);
    }

    #[test]
    fn test_too_small() {
        let pair = Meld::new([card(7, Suit::Hearts), card(7, Suit::Clubs)]);
        assert_eq!(pair.kind(), None);
        assert_eq!(
            pair.validate(),
            Err(GameError::InvalidMeld("a meld needs at least three cards"))
        );
    }

    #[test]
    fn test_gap_is_not_a_run() {
        let gap = Meld::new([
            card(4, Suit::Hearts),
            card(5, Suit::Hearts),
            card(7, Suit::Hearts),
        ]);
        assert_eq!(gap.kind(), None);
        assert!(gap.validate().is_err());
    }

    #[test]
    fn test_duplicate_suit_is_not_a_set() {
        let dup = Meld::new([
            card(9, Suit::Clubs),
            card(9, Suit::Clubs),
            card(9, Suit::Hearts),
        ]);
        assert_eq!(dup.kind(), None);
    }

    #[test]
    fn test_canonical_form_makes_order_irrelevant() {
        let a = Meld::new([
            card(2, Suit::Spades),
            card(3, Suit::Spades),
            card(4, Suit::Spades),
        ]);
        let b = Meld::new([
            card(4, Suit::Spades),
            card(2, Suit::Spades),
            card(3, Suit::Spades),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let run = Meld::new([
            card(1, Suit::Hearts),
            card(2, Suit::Hearts),
            card(3, Suit::Hearts),
        ]);
        assert_eq!(run.to_string(), "[AH 2H 3H]");
    }
}
