//! The restricted per-turn view.
//!
//! A [`Turn`] is the only handle a policy ever gets on the table. It
//! exposes exactly what the active player could see at a real table: their
//! own hand, the stock size, and the visible discard. Opponent hands and
//! stock order are unreachable by construction rather than by convention.
//!
//! ## Protocol
//!
//! A turn is one draw (stock or discard) followed by one terminal action
//! (discard or knock). The view tracks both steps and rejects anything out
//! of order with [`GameError::TurnProtocol`], so a misbehaving policy
//! aborts the hand instead of corrupting it.

use crate::cards::Card;
use crate::error::GameError;
use crate::melds::Meld;
use crate::table::{Seat, Table};

/// One player's turn in progress.
pub struct Turn<'a> {
    table: &'a mut Table,
    seat: Seat,
    drawn: bool,
    ended: bool,
}

impl<'a> Turn<'a> {
    pub(crate) fn new(table: &'a mut Table) -> Self {
        let seat = table.active_seat();
        Self {
            table,
            seat,
            drawn: false,
            ended: false,
        }
    }

    /// The seat playing this turn.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// The active player's own hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.table.hand(self.seat)
    }

    /// Number of cards left in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.table.stock_len()
    }

    /// The drawable discard, if any.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.table.top_discard()
    }

    /// Draw the top stock card.
    pub fn draw_stock(&mut self) -> Result<Card, GameError> {
        self.ensure_can_draw()?;
        let card = self.table.draw_stock()?;
        self.drawn = true;
        Ok(card)
    }

    /// Take the visible discard.
    pub fn draw_discard(&mut self) -> Result<Card, GameError> {
        self.ensure_can_draw()?;
        let card = self.table.draw_discard()?;
        self.drawn = true;
        Ok(card)
    }

    /// Discard a card, ending the turn.
    pub fn discard(&mut self, card: Card) -> Result<(), GameError> {
        self.ensure_can_end()?;
        self.table.discard(card)?;
        self.ended = true;
        Ok(())
    }

    /// Knock with the given meld declaration, ending the turn and the
    /// hand. All eleven cards stay in the knocker's hand for scoring.
    pub fn knock(&mut self, melds: Vec<Meld>) -> Result<(), GameError> {
        self.ensure_can_end()?;
        self.table.knock(melds)?;
        self.ended = true;
        Ok(())
    }

    /// Whether both protocol steps happened. Checked by the controller
    /// after the policy returns.
    #[must_use]
    pub(crate) fn is_complete(&self) -> bool {
        self.drawn && self.ended
    }

    fn ensure_can_draw(&self) -> Result<(), GameError> {
        if self.drawn {
            return Err(GameError::TurnProtocol("a turn draws exactly once"));
        }
        Ok(())
    }

    fn ensure_can_end(&self) -> Result<(), GameError> {
        if !self.drawn {
            return Err(GameError::TurnProtocol(
                "a turn must draw before discarding or knocking",
            ));
        }
        if self.ended {
            return Err(GameError::TurnProtocol(
                "a turn ends with a single discard or knock",
            ));
        }
        Ok(())
    }
}
