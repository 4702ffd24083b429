//! The uniformly random baseline.

use crate::error::GameError;
use crate::game::{Policy, Turn};
use crate::rng::GameRng;

/// Plays uniformly at random and never knocks.
///
/// Each turn it flips a coin between the stock and the visible discard
/// (falling back to the stock when no discard is available), then sheds a
/// uniformly random card. Deterministic for a given seed.
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn play(&mut self, turn: &mut Turn<'_>) -> Result<(), GameError> {
        if turn.top_discard().is_some() && self.rng.gen_bool(0.5) {
            turn.draw_discard()?;
        } else {
            turn.draw_stock()?;
        }

        let i = self.rng.gen_range_usize(0..turn.hand().len());
        let card = turn.hand()[i];
        turn.discard(card)
    }
}
