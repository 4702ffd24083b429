//! Built-in baseline strategies.
//!
//! Two reference opponents ship with the engine: [`RandomPolicy`] plays
//! uniformly at random and never knocks, [`GreedyPolicy`] chases minimum
//! deadwood one move at a time. Both exist as baselines to measure better
//! strategies against.

mod greedy;
mod random;

pub use greedy::GreedyPolicy;
pub use random::RandomPolicy;
