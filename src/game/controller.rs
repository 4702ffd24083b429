//! The single-hand controller.
//!
//! A [`Game`] owns two policies and plays hands between them: deal a
//! fresh [`Table`], alternate turns through [`Turn`] views, and score the
//! hand when someone knocks or the stock runs down to its floor.

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::game::{Policy, Turn};
use crate::rng::GameRng;
use crate::scoring::score_hand;
use crate::table::{Seat, Table, TablePhase};

/// How a hand ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// A player knocked. The score is signed from the knocker's
    /// perspective: negative means they were undercut.
    Knocked { knocker: Seat, score: i32 },
    /// The stock reached its reserve floor; nobody scores.
    Exhausted,
}

impl HandOutcome {
    /// The seat that netted points, or `None` on a wash.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        match *self {
            Self::Knocked { knocker, score } => {
                if score > 0 {
                    Some(knocker)
                } else if score < 0 {
                    Some(knocker.opponent())
                } else {
                    None
                }
            }
            Self::Exhausted => None,
        }
    }

    /// The score from `seat`'s perspective: positive when it gained
    /// points, zero on a wash.
    #[must_use]
    pub fn signed_for(&self, seat: Seat) -> i32 {
        match *self {
            Self::Knocked { knocker, score } => {
                if seat == knocker {
                    score
                } else {
                    -score
                }
            }
            Self::Exhausted => 0,
        }
    }
}

/// Two policies bound to their seats.
pub struct Game<A: Policy, B: Policy> {
    first: A,
    second: B,
}

impl<A: Policy, B: Policy> Game<A, B> {
    /// Seat `first` as player 1 and `second` as player 2.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Play one hand to completion.
    ///
    /// Deals from `rng`, alternates turns until a knock or exhaustion,
    /// scores the hand, and reports each policy's signed score through
    /// [`Policy::hand_ended`]. A policy that breaks the turn protocol or
    /// makes an illegal move aborts the hand with its error.
    pub fn play(&mut self, rng: &mut GameRng) -> Result<HandOutcome, GameError> {
        let mut table = Table::deal(rng);

        let outcome = loop {
            let seat = table.active_seat();
            log::trace!(
                "turn {}: {} to play, stock {}",
                table.turn(),
                seat,
                table.stock_len()
            );

            let mut turn = Turn::new(&mut table);
            match seat {
                Seat::First => self.first.play(&mut turn)?,
                Seat::Second => self.second.play(&mut turn)?,
            }
            if !turn.is_complete() {
                return Err(GameError::TurnProtocol(
                    "the policy returned without completing its turn",
                ));
            }

            match table.phase() {
                TablePhase::Knocked => {
                    let knock = table
                        .knock_declaration()
                        .expect("a knocked table stores its declaration");
                    let knocker = knock.seat;
                    let score = score_hand(
                        table.hand(knocker),
                        table.hand(knocker.opponent()),
                        &knock.melds,
                    )?;
                    log::debug!("{knocker} knocks on turn {} for {score}", table.turn());
                    break HandOutcome::Knocked { knocker, score };
                }
                TablePhase::Exhausted => break HandOutcome::Exhausted,
                TablePhase::InProgress => {
                    table.end_turn();
                    if table.phase() == TablePhase::Exhausted {
                        log::debug!("stock exhausted after turn {}", table.turn());
                        break HandOutcome::Exhausted;
                    }
                }
            }
        };

        self.first.hand_ended(outcome.signed_for(Seat::First));
        self.second.hand_ended(outcome.signed_for(Seat::Second));
        Ok(outcome)
    }

    /// Take both policies back out, keeping any state they accumulated.
    #[must_use]
    pub fn into_policies(self) -> (A, B) {
        (self.first, self.second)
    }
}
