//! Batch matchups.
//!
//! A matchup plays many independent hands between the same two policies.
//! The driver forks the matchup RNG once per hand, so hand `n` of seed `s`
//! deals the same cards no matter how earlier hands went, and a single
//! interesting hand can be replayed in isolation.

use crate::error::GameError;
use crate::game::{Game, HandOutcome, Policy};
use crate::rng::GameRng;
use crate::table::Seat;

/// Aggregate results of a matchup, from the first seat's perspective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchupStats {
    /// Hands played.
    pub hands: u32,
    /// Hands the first seat won points in.
    pub first_wins: u32,
    /// Hands the second seat won points in.
    pub second_wins: u32,
    /// Hands that ended scoreless (exhaustion or a zero-margin knock).
    pub washes: u32,
    /// Net points for the first seat across all hands.
    pub first_net: i64,
}

impl MatchupStats {
    fn record(&mut self, outcome: &HandOutcome) {
        self.hands += 1;
        match outcome.winner() {
            Some(Seat::First) => self.first_wins += 1,
            Some(Seat::Second) => self.second_wins += 1,
            None => self.washes += 1,
        }
        self.first_net += i64::from(outcome.signed_for(Seat::First));
    }

    /// Average points per hand for the first seat. Zero before any hands
    /// are played.
    #[must_use]
    pub fn mean_margin(&self) -> f64 {
        if self.hands == 0 {
            0.0
        } else {
            self.first_net as f64 / f64::from(self.hands)
        }
    }
}

/// Play `hands` independent hands between two policies.
///
/// Both policies keep their state across hands, so learning policies see
/// the whole series. The first error from any hand aborts the matchup.
pub fn run_matchup<A: Policy, B: Policy>(
    first: A,
    second: B,
    hands: u32,
    seed: u64,
) -> Result<MatchupStats, GameError> {
    let mut rng = GameRng::new(seed);
    let mut game = Game::new(first, second);
    let mut stats = MatchupStats::default();

    for n in 0..hands {
        let mut hand_rng = rng.fork();
        let outcome = game.play(&mut hand_rng)?;
        log::trace!("hand {n}: {outcome:?}");
        stats.record(&outcome);
    }

    log::info!(
        "matchup over {} hands: {}-{}-{}, first seat nets {:+}",
        stats.hands,
        stats.first_wins,
        stats.second_wins,
        stats.washes,
        stats.first_net
    );
    Ok(stats)
}
