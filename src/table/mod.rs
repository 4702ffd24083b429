//! The shared table: stock, discard marker, card locations, turn state.

mod location;
mod seat;
#[allow(clippy::module_inception)]
mod table;

pub use location::CardLocation;
pub use seat::Seat;
pub use table::{Knock, Table, TablePhase, HAND_SIZE, STOCK_RESERVE};
