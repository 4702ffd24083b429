//! Per-card location tracking.

use serde::{Deserialize, Serialize};

use crate::table::Seat;

/// Where a card currently is.
///
/// Every one of the 52 cards is in exactly one location at all times; the
/// table's location map partitions the deck across these states. Discarded
/// cards remember who discarded them, but only the single most recent
/// discard is drawable - earlier discards exist only in the location map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardLocation {
    /// Face-down in the stock.
    Stock,
    /// Held in a player's hand.
    InHand(Seat),
    /// In the discard pile, discarded by the given seat.
    Discarded(Seat),
}
