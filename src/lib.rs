//! # gin-rummy
//!
//! A deterministic gin rummy engine built for batch simulation and
//! strategy experiments.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through a seeded [`GameRng`];
//!    the same seed replays the same hand, card for card.
//!
//! 2. **Hands Are Cheap**: A [`Table`] is created per hand and dropped after
//!    scoring. Matchups run thousands of independent hands.
//!
//! 3. **Information Hiding By Construction**: Policies play through a
//!    [`Turn`] view that exposes only the active player's hand, the stock
//!    size, and the visible discard. Private state never reaches them.
//!
//! ## Modules
//!
//! - `cards`: Card and suit value types, the canonical 52-card deck
//! - `melds`: Meld legality, per-card meld enumeration, deadwood search
//! - `scoring`: Layoff candidates and hand scoring
//! - `table`: The deck/table state machine for one hand
//! - `game`: Turn protocol, hand controller, matchup driver
//! - `policies`: Built-in baseline strategies
//! - `rng`: Seeded, forkable RNG
//! - `error`: The crate-wide error type

pub mod cards;
pub mod error;
pub mod game;
pub mod melds;
pub mod policies;
pub mod rng;
pub mod scoring;
pub mod table;

// Re-export commonly used types
pub use crate::cards::{Card, Suit, DECK_SIZE};
pub use crate::error::GameError;
pub use crate::game::{Game, HandOutcome, MatchupStats, Policy, Turn, run_matchup};
pub use crate::melds::{is_deadwood, melds_in, min_deadwood, Meld, MeldKind, MeldPartition};
pub use crate::policies::{GreedyPolicy, RandomPolicy};
pub use crate::rng::{GameRng, GameRngState};
pub use crate::scoring::{layoffable, score_hand, GIN_BONUS, UNDERCUT_BONUS};
pub use crate::table::{
    CardLocation, Knock, Seat, Table, TablePhase, HAND_SIZE, STOCK_RESERVE,
};
