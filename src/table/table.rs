//! The deck/table state machine.
//!
//! A `Table` is created once per hand, mutated only through the
//! draw/discard/knock primitives, and dropped after scoring. It owns the
//! stock, both hands, the single-slot discard marker, the 52-card location
//! map, and the turn counter. Nothing here is global or shared: many
//! tables can run concurrently, one per hand.
//!
//! ## Turn convention
//!
//! The counter starts at 1 and odd turns belong to [`Seat::First`]. A
//! knock is checked before the counter advances, so the knocking seat is
//! whoever was active when [`Table::knock`] ran. [`Table::end_turn`]
//! advances the counter and flips to `Exhausted` once the stock is down to
//! [`STOCK_RESERVE`] cards.

use rustc_hash::FxHashMap;

use crate::cards::{Card, DECK_SIZE};
use crate::error::GameError;
use crate::melds::Meld;
use crate::rng::GameRng;
use crate::table::{CardLocation, Seat};

/// Cards left untouched at the bottom of the stock; reaching this floor
/// without a knock ends the hand as a wash.
pub const STOCK_RESERVE: usize = 2;

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 10;

/// Lifecycle state of a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TablePhase {
    /// Turns are still being played.
    InProgress,
    /// A player knocked; the declaration is stored and terminal.
    Knocked,
    /// The stock reached its reserve floor with no knock.
    Exhausted,
}

/// A knock declaration: who ended the hand, and with which melds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knock {
    pub seat: Seat,
    pub melds: Vec<Meld>,
}

/// The shared table for one hand.
pub struct Table {
    /// Undealt cards, drawn from the tail.
    stock: Vec<Card>,
    /// Location of every card in the deck.
    locations: FxHashMap<Card, CardLocation>,
    /// The single drawable discard. `None` between a discard draw and the
    /// next discard.
    top_discard: Option<Card>,
    /// Both hands, indexed by `Seat::index`.
    hands: [Vec<Card>; 2],
    /// Turn counter, starting at 1. Odd = first seat.
    turn: u32,
    phase: TablePhase,
    knock: Option<Knock>,
}

impl Table {
    /// Shuffle a fresh deck and deal a hand: one card seeds the discard
    /// marker (recorded as discarded by the second seat, so the first
    /// seat may take it on turn 1), then ten cards each, alternating,
    /// from the stock tail.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut stock: Vec<Card> = Card::deck().collect();
        rng.shuffle(&mut stock);

        let mut locations: FxHashMap<Card, CardLocation> =
            stock.iter().map(|&c| (c, CardLocation::Stock)).collect();

        let seed = stock.pop().expect("a fresh deck is never empty");
        locations.insert(seed, CardLocation::Discarded(Seat::Second));

        let mut hands = [Vec::with_capacity(HAND_SIZE + 1), Vec::with_capacity(HAND_SIZE + 1)];
        for _ in 0..HAND_SIZE {
            for seat in Seat::ALL {
                let card = stock.pop().expect("deal never empties the stock");
                locations.insert(card, CardLocation::InHand(seat));
                hands[seat.index()].push(card);
            }
        }

        let table = Self {
            stock,
            locations,
            top_discard: Some(seed),
            hands,
            turn: 1,
            phase: TablePhase::InProgress,
            knock: None,
        };
        debug_assert!(table.is_consistent());
        table
    }

    // === Observations ===

    /// Number of cards left in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// The currently drawable discard, if any.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.top_discard
    }

    /// A seat's hand. Scoring receives these as immutable snapshots; only
    /// the table primitives mutate them.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    /// Whose turn it is: odd turns belong to the first seat.
    #[must_use]
    pub fn active_seat(&self) -> Seat {
        if self.turn % 2 == 1 {
            Seat::First
        } else {
            Seat::Second
        }
    }

    /// The turn counter, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> TablePhase {
        self.phase
    }

    /// The knock declaration, once a player has knocked.
    #[must_use]
    pub fn knock_declaration(&self) -> Option<&Knock> {
        self.knock.as_ref()
    }

    /// Where a card currently is.
    #[must_use]
    pub fn location(&self, card: Card) -> Option<CardLocation> {
        self.locations.get(&card).copied()
    }

    // === Primitives ===

    /// Draw the top stock card into the active player's hand.
    ///
    /// Fails with [`GameError::StockEmpty`] at the reserve floor and
    /// [`GameError::HandOver`] once the hand is terminal.
    pub fn draw_stock(&mut self) -> Result<Card, GameError> {
        self.ensure_in_progress()?;
        if self.stock.len() <= STOCK_RESERVE {
            return Err(GameError::StockEmpty);
        }
        let Some(card) = self.stock.pop() else {
            return Err(GameError::StockEmpty);
        };
        let seat = self.active_seat();
        self.locations.insert(card, CardLocation::InHand(seat));
        self.hands[seat.index()].push(card);
        debug_assert!(self.is_consistent());
        Ok(card)
    }

    /// Take the visible discard into the active player's hand. The marker
    /// is unset until the next discard.
    ///
    /// Fails with [`GameError::DiscardEmpty`] if no discard is available.
    pub fn draw_discard(&mut self) -> Result<Card, GameError> {
        self.ensure_in_progress()?;
        let card = self.top_discard.take().ok_or(GameError::DiscardEmpty)?;
        let seat = self.active_seat();
        self.locations.insert(card, CardLocation::InHand(seat));
        self.hands[seat.index()].push(card);
        debug_assert!(self.is_consistent());
        Ok(card)
    }

    /// Discard a card from the active player's hand, making it the new
    /// visible discard.
    ///
    /// Fails with [`GameError::NotHeld`] if the active player does not
    /// hold `card`.
    pub fn discard(&mut self, card: Card) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let seat = self.active_seat();
        let hand = &mut self.hands[seat.index()];
        let Some(pos) = hand.iter().position(|&c| c == card) else {
            return Err(GameError::NotHeld(card));
        };
        hand.remove(pos);
        self.top_discard = Some(card);
        self.locations.insert(card, CardLocation::Discarded(seat));
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// End the hand by declaring melds. The declaration must consist of
    /// legal, pairwise-disjoint melds drawn entirely from the active
    /// player's hand; no cards leave the hand.
    ///
    /// Fails with [`GameError::InvalidMeld`] on a malformed declaration.
    pub fn knock(&mut self, melds: Vec<Meld>) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let seat = self.active_seat();
        let hand = &self.hands[seat.index()];

        let mut declared: Vec<Card> = Vec::new();
        for meld in &melds {
            meld.validate()?;
            for &card in meld.cards() {
                if !hand.contains(&card) {
                    return Err(GameError::InvalidMeld(
                        "declared meld contains a card the knocker does not hold",
                    ));
                }
                if declared.contains(&card) {
                    return Err(GameError::InvalidMeld("declared melds share a card"));
                }
                declared.push(card);
            }
        }

        self.phase = TablePhase::Knocked;
        self.knock = Some(Knock { seat, melds });
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Advance the turn counter after a completed turn, flipping to
    /// `Exhausted` when the stock has reached the reserve floor. No-op on
    /// a terminal table.
    pub fn end_turn(&mut self) {
        if self.phase != TablePhase::InProgress {
            return;
        }
        self.turn += 1;
        if self.stock.len() <= STOCK_RESERVE {
            self.phase = TablePhase::Exhausted;
        }
    }

    // === Invariants ===

    /// Whether the location map partitions the full deck consistently
    /// with the stock, hands, and discard marker. Checked by debug
    /// assertions after every primitive; exposed for tests.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.locations.len() != DECK_SIZE {
            return false;
        }

        let stock_marked = self
            .locations
            .values()
            .filter(|l| **l == CardLocation::Stock)
            .count();
        if stock_marked != self.stock.len() {
            return false;
        }
        if !self.stock.iter().all(|c| self.locations.get(c) == Some(&CardLocation::Stock)) {
            return false;
        }

        let mut held = 0;
        for seat in Seat::ALL {
            let hand = &self.hands[seat.index()];
            held += hand.len();
            let marked = self
                .locations
                .values()
                .filter(|l| **l == CardLocation::InHand(seat))
                .count();
            if marked != hand.len() {
                return false;
            }
            if !hand.iter().all(|c| self.locations.get(c) == Some(&CardLocation::InHand(seat))) {
                return false;
            }
        }

        let discarded = self
            .locations
            .values()
            .filter(|l| matches!(l, CardLocation::Discarded(_)))
            .count();
        if let Some(top) = self.top_discard {
            if !matches!(self.locations.get(&top), Some(CardLocation::Discarded(_))) {
                return false;
            }
        }

        self.stock.len() + held + discarded == DECK_SIZE
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.phase == TablePhase::InProgress {
            Ok(())
        } else {
            Err(GameError::HandOver)
        }
    }

    /// Test-only: a table with fixed hands, remaining cards in the stock
    /// in canonical order, and a seeded discard.
    #[cfg(test)]
    pub(crate) fn with_hands(first: Vec<Card>, second: Vec<Card>) -> Self {
        let mut stock: Vec<Card> = Card::deck()
            .filter(|c| !first.contains(c) && !second.contains(c))
            .collect();
        let mut locations: FxHashMap<Card, CardLocation> = Card::deck()
            .map(|c| {
                let loc = if first.contains(&c) {
                    CardLocation::InHand(Seat::First)
                } else if second.contains(&c) {
                    CardLocation::InHand(Seat::Second)
                } else {
                    CardLocation::Stock
                };
                (c, loc)
            })
            .collect();

        let seed = stock.pop().expect("fixed hands never cover the deck");
        locations.insert(seed, CardLocation::Discarded(Seat::Second));

        let table = Self {
            stock,
            locations,
            top_discard: Some(seed),
            hands: [first, second],
            turn: 1,
            phase: TablePhase::InProgress,
            knock: None,
        };
        debug_assert!(table.is_consistent());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn dealt(seed: u64) -> Table {
        let mut rng = GameRng::new(seed);
        Table::deal(&mut rng)
    }

    #[test]
    fn test_deal_shape() {
        let table = dealt(42);

        assert_eq!(table.hand(Seat::First).len(), HAND_SIZE);
        assert_eq!(table.hand(Seat::Second).len(), HAND_SIZE);
        assert_eq!(table.stock_len(), DECK_SIZE - 2 * HAND_SIZE - 1);
        assert!(table.top_discard().is_some());
        assert_eq!(table.turn(), 1);
        assert_eq!(table.active_seat(), Seat::First);
        assert_eq!(table.phase(), TablePhase::InProgress);
        assert!(table.is_consistent());

        // The seeded discard is on record as the second seat's discard.
        let top = table.top_discard().unwrap();
        assert_eq!(table.location(top), Some(CardLocation::Discarded(Seat::Second)));
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = dealt(7);
        let b = dealt(7);
        assert_eq!(a.hand(Seat::First), b.hand(Seat::First));
        assert_eq!(a.top_discard(), b.top_discard());
    }

    #[test]
    fn test_draw_stock_moves_card() {
        let mut table = dealt(42);
        let before = table.stock_len();

        let card = table.draw_stock().unwrap();

        assert_eq!(table.stock_len(), before - 1);
        assert_eq!(table.hand(Seat::First).len(), HAND_SIZE + 1);
        assert!(table.hand(Seat::First).contains(&card));
        assert_eq!(table.location(card), Some(CardLocation::InHand(Seat::First)));
        assert!(table.is_consistent());
    }

    #[test]
    fn test_draw_discard_clears_marker() {
        let mut table = dealt(42);
        let top = table.top_discard().unwrap();

        let card = table.draw_discard().unwrap();

        assert_eq!(card, top);
        assert_eq!(table.top_discard(), None);
        assert_eq!(table.location(card), Some(CardLocation::InHand(Seat::First)));
        assert_eq!(table.draw_discard(), Err(GameError::DiscardEmpty));
        assert!(table.is_consistent());
    }

    #[test]
    fn test_discard_sets_marker() {
        let mut table = dealt(42);
        let drawn = table.draw_stock().unwrap();

        table.discard(drawn).unwrap();

        assert_eq!(table.top_discard(), Some(drawn));
        assert_eq!(table.location(drawn), Some(CardLocation::Discarded(Seat::First)));
        assert_eq!(table.hand(Seat::First).len(), HAND_SIZE);
        assert!(table.is_consistent());
    }

    #[test]
    fn test_discard_requires_possession() {
        let mut table = dealt(42);
        // Find a card the first seat does not hold.
        let foreign = Card::deck()
            .find(|c| !table.hand(Seat::First).contains(c))
            .unwrap();
        assert_eq!(table.discard(foreign), Err(GameError::NotHeld(foreign)));
    }

    #[test]
    fn test_turn_alternation() {
        let mut table = dealt(42);
        assert_eq!(table.active_seat(), Seat::First);

        table.end_turn();
        assert_eq!(table.turn(), 2);
        assert_eq!(table.active_seat(), Seat::Second);

        table.end_turn();
        assert_eq!(table.active_seat(), Seat::First);
    }

    #[test]
    fn test_exhaustion_at_reserve_floor() {
        let mut table = dealt(42);

        // Burn the stock down to the floor, discarding each draw.
        while table.stock_len() > STOCK_RESERVE {
            let card = table.draw_stock().unwrap();
            table.discard(card).unwrap();
            table.end_turn();
        }

        assert_eq!(table.stock_len(), STOCK_RESERVE);
        assert_eq!(table.phase(), TablePhase::Exhausted);
        assert_eq!(table.draw_stock(), Err(GameError::HandOver));
        assert!(table.is_consistent());
    }

    #[test]
    fn test_stock_floor_blocks_draw() {
        let mut table = dealt(42);

        // Drain to just above the floor without ending turns.
        while table.stock_len() > STOCK_RESERVE {
            let card = table.draw_stock().unwrap();
            table.discard(card).unwrap();
        }
        assert_eq!(table.draw_stock(), Err(GameError::StockEmpty));
    }

    #[test]
    fn test_knock_stores_declaration() {
        let mut table = dealt(42);
        let hand: Vec<Card> = table.hand(Seat::First).to_vec();

        // Declare nothing: legal (all ten cards count as deadwood).
        table.knock(Vec::new()).unwrap();

        assert_eq!(table.phase(), TablePhase::Knocked);
        let knock = table.knock_declaration().unwrap();
        assert_eq!(knock.seat, Seat::First);
        assert!(knock.melds.is_empty());

        // The hand is untouched and the table is terminal.
        assert_eq!(table.hand(Seat::First), hand.as_slice());
        assert_eq!(table.draw_stock(), Err(GameError::HandOver));
        assert_eq!(table.discard(hand[0]), Err(GameError::HandOver));
    }

    #[test]
    fn test_knock_rejects_small_meld() {
        let mut table = dealt(42);
        let pair = Meld::new(table.hand(Seat::First)[..2].iter().copied());
        assert_eq!(
            table.knock(vec![pair]),
            Err(GameError::InvalidMeld("a meld needs at least three cards"))
        );
        assert_eq!(table.phase(), TablePhase::InProgress);
    }

    fn fixed_table() -> Table {
        let first: Vec<Card> = [
            (1, Suit::Hearts),
            (2, Suit::Hearts),
            (3, Suit::Hearts),
            (4, Suit::Hearts),
            (7, Suit::Clubs),
            (7, Suit::Diamonds),
            (7, Suit::Spades),
            (9, Suit::Clubs),
            (11, Suit::Diamonds),
            (13, Suit::Spades),
        ]
        .into_iter()
        .map(|(r, s)| Card::new(r, s))
        .collect();
        // Clubs disjoint from the 7C and 9C above.
        let second: Vec<Card> = [1, 2, 3, 4, 5, 6, 8, 10, 11, 12]
            .into_iter()
            .map(|r| Card::new(r, Suit::Clubs))
            .collect();
        Table::with_hands(first, second)
    }

    #[test]
    fn test_knock_accepts_legal_declaration() {
        let mut table = fixed_table();
        let run = Meld::new([
            Card::new(1, Suit::Hearts),
            Card::new(2, Suit::Hearts),
            Card::new(3, Suit::Hearts),
        ]);
        let set = Meld::new([
            Card::new(7, Suit::Clubs),
            Card::new(7, Suit::Diamonds),
            Card::new(7, Suit::Spades),
        ]);
        table.knock(vec![run, set]).unwrap();
        assert_eq!(table.phase(), TablePhase::Knocked);
        assert_eq!(table.knock_declaration().unwrap().melds.len(), 2);
    }

    #[test]
    fn test_knock_rejects_foreign_cards() {
        let mut table = fixed_table();
        // A legal run, but of the opponent's clubs.
        let meld = Meld::new([
            Card::new(1, Suit::Clubs),
            Card::new(2, Suit::Clubs),
            Card::new(3, Suit::Clubs),
        ]);
        assert_eq!(
            table.knock(vec![meld]),
            Err(GameError::InvalidMeld(
                "declared meld contains a card the knocker does not hold"
            ))
        );
        assert_eq!(table.phase(), TablePhase::InProgress);
    }

    #[test]
    fn test_knock_rejects_overlapping_melds() {
        let mut table = fixed_table();
        // The same legal run declared twice shares every card.
        let run = Meld::new([
            Card::new(2, Suit::Hearts),
            Card::new(3, Suit::Hearts),
            Card::new(4, Suit::Hearts),
        ]);
        assert_eq!(
            table.knock(vec![run.clone(), run]),
            Err(GameError::InvalidMeld("declared melds share a card"))
        );
    }

    #[test]
    fn test_conservation_through_a_busy_sequence() {
        let mut table = dealt(99);

        for _ in 0..6 {
            let card = table.draw_stock().unwrap();
            assert!(table.is_consistent());
            table.discard(card).unwrap();
            assert!(table.is_consistent());
            table.end_turn();

            let top = table.top_discard().unwrap();
            table.draw_discard().unwrap();
            assert!(table.is_consistent());
            table.discard(top).unwrap();
            assert!(table.is_consistent());
            table.end_turn();
        }
    }
}
