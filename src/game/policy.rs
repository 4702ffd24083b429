//! The strategy trait.

use crate::error::GameError;
use crate::game::Turn;

/// A gin rummy strategy.
///
/// The controller calls [`Policy::play`] once per turn with a [`Turn`]
/// view of the table; the policy must draw once and then discard or
/// knock. Errors abort the hand rather than being retried.
///
/// Policies carry their own state (an RNG, learned weights, opponent
/// models) and keep it across hands, so a single value can play a whole
/// matchup.
pub trait Policy {
    /// Play one full turn through the restricted view.
    fn play(&mut self, turn: &mut Turn<'_>) -> Result<(), GameError>;

    /// Called once per completed hand with this player's signed score:
    /// positive when they gained points, zero on a wash. The default does
    /// nothing; learning policies use it as a reward signal.
    fn hand_ended(&mut self, _score: i32) {}
}
