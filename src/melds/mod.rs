//! Melds and deadwood: classification, enumeration, and exact optimization.
//!
//! ## Modules
//!
//! - `meld`: the `Meld` value type (sets and runs) and its validation
//! - `analysis`: per-card primitives - `is_deadwood` and `melds_in`
//! - `search`: `min_deadwood`, the exact recursive partition solver

mod analysis;
mod meld;
mod search;

pub use analysis::{is_deadwood, melds_in};
pub use meld::{Meld, MeldKind};
pub use search::{min_deadwood, MeldPartition};
