//! Layoff enumeration.

use crate::cards::{Card, Suit};
use crate::melds::{Meld, MeldKind};

/// Every card that could be appended to one of the declared melds: the
/// missing suits of a set's rank, and the rank just beyond each end of a
/// run.
///
/// Duplicates are preserved - a card can appear once per meld it extends
/// (two runs in the same suit can both reach for the card between them).
/// Callers enumerating subsets of this list must handle that themselves.
///
/// Declarations are validated at knock time; card groups that are not
/// legal melds contribute nothing here.
///
/// ```
/// use gin_rummy::cards::{Card, Suit};
/// use gin_rummy::melds::Meld;
/// use gin_rummy::scoring::layoffable;
///
/// let run = Meld::new([
///     Card::new(7, Suit::Clubs),
///     Card::new(8, Suit::Clubs),
///     Card::new(9, Suit::Clubs),
/// ]);
/// assert_eq!(
///     layoffable(&[run]),
///     vec![Card::new(6, Suit::Clubs), Card::new(10, Suit::Clubs)]
/// );
/// ```
#[must_use]
pub fn layoffable(melds: &[Meld]) -> Vec<Card> {
    let mut possible = Vec::new();

    for meld in melds {
        match meld.kind() {
            Some(MeldKind::Set) => {
                let rank = meld.min_rank();
                for suit in Suit::ALL {
                    let card = Card::new(rank, suit);
                    if !meld.contains(card) {
                        possible.push(card);
                    }
                }
            }
            Some(MeldKind::Run) => {
                let suit = meld.cards()[0].suit;
                if meld.min_rank() > 1 {
                    possible.push(Card::new(meld.min_rank() - 1, suit));
                }
                if meld.max_rank() < 13 {
                    possible.push(Card::new(meld.max_rank() + 1, suit));
                }
            }
            None => {}
        }
    }

    possible
}
