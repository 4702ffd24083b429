//! Per-card meld primitives.
//!
//! These are *local* tests: whether a single card can participate in any
//! meld within a hand, and which candidate melds it participates in. The
//! candidates returned by [`melds_in`] may overlap each other - the global
//! optimizer in `search` is responsible for choosing a disjoint partition.

use crate::cards::Card;
use crate::error::GameError;
use crate::melds::Meld;

/// Whether `card` is deadwood in `hand`: part of no rank set of size >=3
/// and no same-suit run of length >=3.
///
/// ```
/// use gin_rummy::cards::{Card, Suit};
/// use gin_rummy::melds::is_deadwood;
///
/// let hand = vec![
///     Card::new(1, Suit::Hearts),
///     Card::new(2, Suit::Hearts),
///     Card::new(3, Suit::Hearts),
///     Card::new(7, Suit::Clubs),
/// ];
/// assert!(!is_deadwood(Card::new(1, Suit::Hearts), &hand).unwrap());
/// assert!(is_deadwood(Card::new(7, Suit::Clubs), &hand).unwrap());
/// ```
///
/// Fails with [`GameError::CardNotInHand`] if `card` is not in `hand`.
pub fn is_deadwood(card: Card, hand: &[Card]) -> Result<bool, GameError> {
    ensure_member(card, hand)?;
    Ok(is_deadwood_unchecked(card, hand))
}

/// Every candidate meld in `hand` that contains `card`: all rank-set
/// subsets of size >=3 through the card, and every run window of length
/// >=3 through the card inside its maximal contiguous same-suit block.
///
/// The result is a list of *candidates*, not a partition - melds may share
/// cards with one another.
///
/// Fails with [`GameError::CardNotInHand`] if `card` is not in `hand`.
pub fn melds_in(card: Card, hand: &[Card]) -> Result<Vec<Meld>, GameError> {
    ensure_member(card, hand)?;
    Ok(melds_in_unchecked(card, hand))
}

fn ensure_member(card: Card, hand: &[Card]) -> Result<(), GameError> {
    if hand.contains(&card) {
        Ok(())
    } else {
        Err(GameError::CardNotInHand(card))
    }
}

pub(crate) fn is_deadwood_unchecked(card: Card, hand: &[Card]) -> bool {
    let same_rank = hand.iter().filter(|c| c.rank == card.rank).count();
    if same_rank >= 3 {
        return false;
    }

    let (block, _) = run_block(card, hand);
    block.len() < 3
}

pub(crate) fn melds_in_unchecked(card: Card, hand: &[Card]) -> Vec<Meld> {
    let mut melds = Vec::new();

    // Rank sets: every subset of the same-rank cards of size >=3 that
    // includes `card`, smaller subsets first.
    let mut others: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| c.rank == card.rank && *c != card)
        .collect();
    others.sort_unstable();
    if others.len() >= 2 {
        for size in 2..=others.len() {
            for combo in combinations(&others, size) {
                melds.push(Meld::new(combo.into_iter().chain(std::iter::once(card))));
            }
        }
    }

    // Runs: every window of length >=3 through the card's position in its
    // maximal contiguous same-suit block.
    let (block, pos) = run_block(card, hand);
    if block.len() >= 3 {
        for hi in pos..block.len() {
            for lo in 0..=pos {
                if hi - lo >= 2 {
                    melds.push(Meld::new(block[lo..=hi].iter().copied()));
                }
            }
        }
    }

    melds
}

/// The maximal contiguous same-suit block through `card` (sorted by rank)
/// and the card's index within it. The block is just the card itself when
/// no same-suit neighbors connect to it.
fn run_block(card: Card, hand: &[Card]) -> (Vec<Card>, usize) {
    let mut suited: Vec<Card> = hand.iter().copied().filter(|c| c.suit == card.suit).collect();
    suited.sort_unstable_by_key(|c| c.rank);

    let Some(pos) = suited.iter().position(|&c| c == card) else {
        return (vec![card], 0);
    };

    let mut lo = pos;
    while lo > 0 && suited[lo - 1].rank + 1 == suited[lo].rank {
        lo -= 1;
    }
    let mut hi = pos;
    while hi + 1 < suited.len() && suited[hi].rank + 1 == suited[hi + 1].rank {
        hi += 1;
    }

    (suited[lo..=hi].to_vec(), pos - lo)
}

/// All `size`-element combinations of `items`, in index order.
fn combinations(items: &[Card], size: usize) -> Vec<Vec<Card>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(size);
    combine(items, size, 0, &mut current, &mut out);
    out
}

fn combine(items: &[Card], size: usize, start: usize, current: &mut Vec<Card>, out: &mut Vec<Vec<Card>>) {
    if current.len() == size {
        out.push(current.clone());
        return;
    }
    for i in start..items.len() {
        current.push(items[i]);
        combine(items, size, i + 1, current, out);
        current.pop();
    }
}
