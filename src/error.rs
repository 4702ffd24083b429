//! Error taxonomy.
//!
//! Every failure the engine can surface is a contract violation local to
//! the current hand: the caller passed a card it does not hold, declared a
//! malformed meld, drew past the stock floor, or broke the turn protocol.
//! None of these are retried or degraded - the controller aborts the hand
//! and propagates the error so batch harnesses can treat it as a failure.

use thiserror::Error;

use crate::cards::Card;
use crate::table::STOCK_RESERVE;

/// Errors surfaced by the gin rummy engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A card passed to a hand-analysis function is not in that hand.
    #[error("card {0} is not in the given hand")]
    CardNotInHand(Card),

    /// A hand contains the same card twice.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),

    /// A knock declaration is malformed.
    #[error("invalid meld declaration: {0}")]
    InvalidMeld(&'static str),

    /// The active player tried to discard a card it does not hold.
    #[error("cannot discard {0}: not held by the active player")]
    NotHeld(Card),

    /// The stock is down to its reserve floor; the hand is exhausted
    /// rather than drawn out completely.
    #[error("stock is at its {STOCK_RESERVE}-card floor")]
    StockEmpty,

    /// No discard is available to draw (the marker was taken and nothing
    /// has been discarded since).
    #[error("no discard is available to draw")]
    DiscardEmpty,

    /// A table primitive was invoked after a knock or exhaustion.
    #[error("the hand is already over")]
    HandOver,

    /// A policy broke the one-draw-then-one-terminal-action protocol.
    #[error("turn protocol violation: {0}")]
    TurnProtocol(&'static str),
}
