//! Exact minimum-deadwood search.
//!
//! Finds the disjoint partition of a hand into melds and leftover deadwood
//! that minimizes total deadwood value. The search is a plain recursive
//! branch over one designated "pivot" card per level: either the pivot is
//! forced deadwood, or it joins one of its candidate melds and the meld's
//! cards leave the problem. Hands hold at most 11 cards, which keeps naive
//! recursion comfortably fast; no memoization is needed.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::GameError;
use crate::melds::analysis::{is_deadwood_unchecked, melds_in_unchecked};
use crate::melds::Meld;

/// The result of the optimal meld search: the minimum deadwood total and a
/// witnessing set of disjoint melds achieving it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldPartition {
    /// Minimum total deadwood value.
    pub deadwood: u32,
    /// Disjoint legal melds realizing that minimum.
    pub melds: Vec<Meld>,
}

impl MeldPartition {
    /// Whether the hand melds completely (gin).
    #[must_use]
    pub fn is_gin(&self) -> bool {
        self.deadwood == 0
    }
}

/// Compute the minimum deadwood value of `hand` and a meld partition that
/// achieves it.
///
/// The pivot at each level is the first meldable card in canonical order,
/// so the result is deterministic. On an exact tie between keeping the
/// pivot melded and discarding it to deadwood, the melded branch wins;
/// among equally good candidate melds, the one enumerated first by
/// [`melds_in`](crate::melds::melds_in) wins.
///
/// ```
/// use gin_rummy::cards::{Card, Suit};
/// use gin_rummy::melds::min_deadwood;
///
/// let hand: Vec<_> = [(1, Suit::Hearts), (2, Suit::Hearts), (3, Suit::Hearts), (9, Suit::Clubs)]
///     .into_iter()
///     .map(|(r, s)| Card::new(r, s))
///     .collect();
///
/// let partition = min_deadwood(&hand).unwrap();
/// assert_eq!(partition.deadwood, 9);
/// assert_eq!(partition.melds.len(), 1);
/// ```
///
/// Fails with [`GameError::DuplicateCard`] if the same card appears twice:
/// card identity must be unique within a hand.
pub fn min_deadwood(hand: &[Card]) -> Result<MeldPartition, GameError> {
    let mut cards = hand.to_vec();
    cards.sort_unstable();
    if let Some(dup) = cards.windows(2).find(|w| w[0] == w[1]) {
        return Err(GameError::DuplicateCard(dup[0]));
    }
    Ok(search(&cards))
}

/// Recursive solver. `cards` must be sorted and duplicate-free.
fn search(cards: &[Card]) -> MeldPartition {
    // Split off the cards that are locally deadwood regardless of which
    // partition is chosen; only the rest participate in the branching.
    let mut fixed = 0u32;
    let mut meldable = Vec::with_capacity(cards.len());
    for &card in cards {
        if is_deadwood_unchecked(card, cards) {
            fixed += card.value();
        } else {
            meldable.push(card);
        }
    }

    let Some(&pivot) = meldable.first() else {
        return MeldPartition {
            deadwood: fixed,
            melds: Vec::new(),
        };
    };

    // Branch B: the pivot joins one of its candidate melds.
    let mut best: Option<MeldPartition> = None;
    for meld in melds_in_unchecked(pivot, &meldable) {
        let rest: Vec<Card> = meldable.iter().copied().filter(|c| !meld.contains(*c)).collect();
        let mut candidate = search(&rest);
        candidate.deadwood += fixed;
        candidate.melds.push(meld);
        if best.as_ref().map_or(true, |b| candidate.deadwood < b.deadwood) {
            best = Some(candidate);
        }
    }

    // Branch A: the pivot is forced deadwood.
    let mut skipped = search(&meldable[1..]);
    skipped.deadwood += fixed + pivot.value();

    match best {
        Some(melded) if melded.deadwood <= skipped.deadwood => melded,
        _ => skipped,
    }
}
