//! Playing cards: suits, ranks, point values, and the canonical deck order.

mod card;

pub use card::{Card, Suit, DECK_SIZE};
