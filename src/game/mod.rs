//! Game orchestration.
//!
//! The pieces fit together in layers:
//!
//! - [`Turn`]: the restricted view a policy plays through. It enforces the
//!   draw-then-discard-or-knock protocol and hides everything a player
//!   could not see at a real table.
//! - [`Policy`]: the strategy trait. Implementations live in
//!   [`crate::policies`].
//! - [`Game`]: the controller for one hand at a time, from deal to score.
//! - [`run_matchup`]: a batch driver pitting two policies over many hands.

mod controller;
mod matchup;
mod policy;
mod turn;

pub use controller::{Game, HandOutcome};
pub use matchup::{run_matchup, MatchupStats};
pub use policy::Policy;
pub use turn::Turn;
