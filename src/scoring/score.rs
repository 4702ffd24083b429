//! Final hand scoring.
//!
//! ## Sign convention
//!
//! The returned score is signed from the knocking player's perspective:
//! positive means the knocker nets that many points, negative means the
//! defender nets the absolute value. An undercut (the defender's deadwood,
//! after optimal layoffs, is strictly lower than the knocker's) pays the
//! defender `UNDERCUT_BONUS` plus the margin: the result is `-25 + diff`
//! where `diff = defender - knocker` is negative.

use crate::cards::Card;
use crate::error::GameError;
use crate::melds::{min_deadwood, Meld};
use crate::scoring::layoffable;

/// Flat bonus for going gin.
pub const GIN_BONUS: i32 = 25;

/// Flat bonus for undercutting a knocker.
pub const UNDERCUT_BONUS: i32 = 25;

/// Score a completed hand.
///
/// `ending` is the knocking player's hand, `declared` the melds it
/// declared, `other` the defender's hand.
///
/// - Gin (the ending hand melds completely): `GIN_BONUS` plus the
///   defender's optimal deadwood; no layoffs are allowed against gin.
/// - Otherwise the knocker counts every card outside its declared melds,
///   the defender counts its true minimum deadwood over every combination
///   of layoffs onto the declared melds, and the score is the difference -
///   or the undercut payout when the difference is negative.
///
/// The declaration is trusted as-is (it was validated at knock time); only
/// the defender's side is re-optimized.
pub fn score_hand(ending: &[Card], other: &[Card], declared: &[Meld]) -> Result<i32, GameError> {
    if min_deadwood(ending)?.is_gin() {
        let other_deadwood = min_deadwood(other)?.deadwood;
        return Ok(GIN_BONUS + other_deadwood as i32);
    }

    let ending_deadwood: i32 = ending
        .iter()
        .filter(|&&c| !declared.iter().any(|m| m.contains(c)))
        .map(|c| c.value() as i32)
        .sum();

    let other_deadwood = best_defense(other, declared)? as i32;

    let diff = other_deadwood - ending_deadwood;
    if diff >= 0 {
        Ok(diff)
    } else {
        Ok(-UNDERCUT_BONUS + diff)
    }
}

/// The defender's minimum deadwood over every subset of layoffable cards
/// it might keep in hand.
///
/// Cards in the layoffable list can leave the defender's hand (laid onto
/// the knocker's melds); every other card must be melded or counted. The
/// full powerset of the layoffable list is searched. A subset that would
/// put the same card in the trial hand twice (two melds both extending to
/// one card) describes the same physical layoff as its deduplicated
/// subset, which is always enumerated too, so it is skipped.
fn best_defense(other: &[Card], declared: &[Meld]) -> Result<u32, GameError> {
    let droppable = layoffable(declared);
    let must_meld: Vec<Card> = other
        .iter()
        .copied()
        .filter(|c| !droppable.contains(c))
        .collect();

    let mut best = u32::MAX;
    for mask in 0u32..(1 << droppable.len()) {
        let mut trial = must_meld.clone();
        for (i, &card) in droppable.iter().enumerate() {
            if mask & (1 << i) != 0 {
                trial.push(card);
            }
        }

        trial.sort_unstable();
        if trial.windows(2).any(|w| w[0] == w[1]) {
            continue;
        }

        let deadwood = min_deadwood(&trial)?.deadwood;
        if deadwood < best {
            best = deadwood;
        }
    }

    Ok(best)
}
