//! Card representation.
//!
//! ## Canonical ordering
//!
//! Anything that needs a stable, documented card order (deck construction,
//! pivot selection in the meld search, state flattening by external
//! consumers) uses **suit-then-rank**: all hearts ace through king, then
//! diamonds, clubs, spades. `Card`'s `Ord` implements exactly this order
//! and [`Card::deck`] yields the 52 cards in it. This is a contract, not an
//! incidental detail - callers may rely on it.

use serde::{Deserialize, Serialize};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// One of the four suits.
///
/// The declaration order (hearts, diamonds, clubs, spades) is the suit
/// component of the canonical card ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Single-letter symbol (`H`, `D`, `C`, `S`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card: rank 1 (ace) through 13 (king) plus a suit.
///
/// Valid by construction: [`Card::new`] asserts the rank range, so every
/// `Card` in circulation has `rank` in `1..=13`.
///
/// ```
/// use gin_rummy::cards::{Card, Suit};
///
/// let ace = Card::new(1, Suit::Hearts);
/// let king = Card::new(13, Suit::Spades);
///
/// assert_eq!(ace.value(), 1);
/// assert_eq!(king.value(), 10); // face cards cap at 10
/// assert!(ace < king);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank, 1 (ace) through 13 (king). Aces are always low.
    pub rank: u8,
    /// Suit.
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    ///
    /// ## Panics
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        assert!((1..=13).contains(&rank), "Card rank must be 1-13, got {rank}");
        Self { rank, suit }
    }

    /// Deadwood point value: face value, capped at 10 for ranks 10-13.
    #[must_use]
    pub const fn value(self) -> u32 {
        if self.rank < 10 {
            self.rank as u32
        } else {
            10
        }
    }

    /// All 52 cards in canonical suit-then-rank order.
    ///
    /// ```
    /// use gin_rummy::cards::Card;
    ///
    /// let deck: Vec<_> = Card::deck().collect();
    /// assert_eq!(deck.len(), 52);
    /// assert!(deck.windows(2).all(|w| w[0] < w[1]));
    /// ```
    pub fn deck() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| (1..=13).map(move |rank| Card { rank, suit }))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.suit, self.rank).cmp(&(other.suit, other.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            n => (b'0' + n) as char,
        };
        write!(f, "{}{}", rank, self.suit)
    }
}
