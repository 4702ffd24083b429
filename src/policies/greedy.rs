//! The greedy deadwood-minimizing baseline.

use crate::cards::Card;
use crate::error::GameError;
use crate::game::{Policy, Turn};
use crate::melds::min_deadwood;

/// Chases minimum deadwood one move at a time.
///
/// Each turn it takes the visible discard only when some swap strictly
/// lowers the hand's optimal deadwood, otherwise it draws blind from the
/// stock and sheds whichever card leaves the lowest deadwood (the drawn
/// card when nothing improves). After drawing it knocks as soon as the
/// eleven-card hand's deadwood is under `knock_limit`, declaring the
/// optimal melds.
pub struct GreedyPolicy {
    knock_limit: u32,
}

impl GreedyPolicy {
    /// Knocks when deadwood drops below 3, close to gin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_knock_limit(3)
    }

    /// A custom knock threshold. A limit of 1 knocks only on gin; higher
    /// limits knock earlier and risk being undercut.
    #[must_use]
    pub fn with_knock_limit(knock_limit: u32) -> Self {
        Self { knock_limit }
    }
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for GreedyPolicy {
    fn play(&mut self, turn: &mut Turn<'_>) -> Result<(), GameError> {
        let hand: Vec<Card> = turn.hand().to_vec();
        let current = min_deadwood(&hand)?.deadwood;

        // Find the best swap of a held card for the visible discard.
        let mut swap_out = None;
        if let Some(top) = turn.top_discard() {
            let mut best = current;
            for (i, &held) in hand.iter().enumerate() {
                let mut trial = hand.clone();
                trial[i] = top;
                let deadwood = min_deadwood(&trial)?.deadwood;
                if deadwood < best {
                    best = deadwood;
                    swap_out = Some(held);
                }
            }
        }

        let drawn = match swap_out {
            Some(_) => turn.draw_discard()?,
            None => turn.draw_stock()?,
        };

        let full: Vec<Card> = turn.hand().to_vec();
        let partition = min_deadwood(&full)?;
        if partition.deadwood < self.knock_limit {
            return turn.knock(partition.melds);
        }

        let discard = match swap_out {
            Some(held) => held,
            None => {
                // Shed whichever card leaves the lowest deadwood; when no
                // removal improves on the old hand, shed the drawn card.
                let mut best_card = drawn;
                let mut best = current;
                for &card in &full {
                    let trial: Vec<Card> =
                        full.iter().copied().filter(|&c| c != card).collect();
                    let deadwood = min_deadwood(&trial)?.deadwood;
                    if deadwood < best {
                        best = deadwood;
                        best_card = card;
                    }
                }
                best_card
            }
        };
        turn.discard(discard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::game::{Game, HandOutcome};
    use crate::melds::Meld;
    use crate::rng::GameRng;
    use crate::table::{Seat, Table, TablePhase};

    fn card(rank: u8, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_greedy_ignores_a_useless_discard() {
        // The fixed-hand stock is in canonical order and none of these
        // cards are spades, so the seeded discard is the KS. No swap for
        // it lowers deadwood, so greedy draws blind from the stock.
        let first = vec![
            card(1, Suit::Hearts),
            card(2, Suit::Hearts),
            card(3, Suit::Hearts),
            card(7, Suit::Clubs),
            card(7, Suit::Diamonds),
            card(7, Suit::Spades),
            card(11, Suit::Clubs),
            card(12, Suit::Clubs),
            card(13, Suit::Clubs),
            card(9, Suit::Hearts),
        ];
        // Diamonds disjoint from the 7D above.
        let second: Vec<Card> = [1, 2, 3, 4, 5, 6, 8, 9, 10, 11]
            .into_iter()
            .map(|r| card(r, Suit::Diamonds))
            .collect();
        let mut table = Table::with_hands(first, second);
        assert_eq!(table.top_discard(), Some(card(13, Suit::Spades)));

        let mut turn = crate::game::Turn::new(&mut table);
        GreedyPolicy::new().play(&mut turn).unwrap();

        // Drew blind (the QS) and shed it straight back: only the loose
        // 9H could have left, and that would not lower deadwood.
        assert_eq!(table.stock_len(), 52 - 20 - 2);
        assert_eq!(table.top_discard(), Some(card(12, Suit::Spades)));
    }

    #[test]
    fn test_greedy_takes_discard_and_knocks_gin() {
        // With the JS and KS held, the canonical stock tail puts the QS
        // on the seeded discard. Swapping a heart for it reaches zero
        // deadwood, so greedy takes it, and since the eleven-card hand
        // still melds completely it knocks for gin on the spot.
        let first = vec![
            card(1, Suit::Hearts),
            card(2, Suit::Hearts),
            card(3, Suit::Hearts),
            card(4, Suit::Hearts),
            card(5, Suit::Hearts),
            card(7, Suit::Clubs),
            card(7, Suit::Diamonds),
            card(7, Suit::Spades),
            card(11, Suit::Spades),
            card(13, Suit::Spades),
        ];
        let second: Vec<Card> = [1, 2, 3, 4, 5, 6, 8, 9, 10, 11]
            .into_iter()
            .map(|r| card(r, Suit::Diamonds))
            .collect();
        let mut table = Table::with_hands(first, second);
        assert_eq!(table.top_discard(), Some(card(12, Suit::Spades)));

        let mut turn = crate::game::Turn::new(&mut table);
        GreedyPolicy::new().play(&mut turn).unwrap();

        assert_eq!(table.phase(), TablePhase::Knocked);
        let knock = table.knock_declaration().unwrap();
        assert_eq!(knock.seat, Seat::First);
        assert_eq!(knock.melds.len(), 3);
        // All eleven cards stay in hand, and all eleven meld.
        assert_eq!(table.hand(Seat::First).len(), 11);
        let declared: usize = knock.melds.iter().map(Meld::len).sum();
        assert_eq!(declared, 11);
    }

    #[test]
    fn test_greedy_discards_without_improvement() {
        // A hopeless hand: greedy draws from the stock and sheds a card,
        // leaving ten in hand.
        let first = vec![
            card(1, Suit::Hearts),
            card(4, Suit::Clubs),
            card(6, Suit::Diamonds),
            card(9, Suit::Spades),
            card(11, Suit::Hearts),
            card(2, Suit::Clubs),
            card(8, Suit::Diamonds),
            card(13, Suit::Spades),
            card(5, Suit::Hearts),
            card(10, Suit::Clubs),
        ];
        // Diamonds disjoint from the 6D and 8D above.
        let second: Vec<Card> = [1, 2, 3, 4, 5, 7, 9, 10, 11, 12]
            .into_iter()
            .map(|r| card(r, Suit::Diamonds))
            .collect();
        let mut table = Table::with_hands(first, second);

        let mut turn = crate::game::Turn::new(&mut table);
        GreedyPolicy::new().play(&mut turn).unwrap();

        assert_eq!(table.phase(), TablePhase::InProgress);
        assert_eq!(table.hand(Seat::First).len(), 10);
    }

    #[test]
    fn test_greedy_beats_random_over_a_series() {
        use crate::game::run_matchup;
        use crate::policies::RandomPolicy;

        let stats = run_matchup(GreedyPolicy::new(), RandomPolicy::new(9), 30, 42).unwrap();
        assert_eq!(stats.hands, 30);
        // Random never knocks, so the greedy seat takes every decided hand.
        assert_eq!(stats.second_wins, 0);
        assert!(stats.first_net >= 0);
    }

    #[test]
    fn test_greedy_mirror_is_deterministic() {
        let play = |seed| {
            let mut rng = GameRng::new(seed);
            let mut game = Game::new(GreedyPolicy::new(), GreedyPolicy::new());
            game.play(&mut rng).unwrap()
        };
        let a = play(11);
        let b = play(11);
        assert_eq!(a, b);
        assert!(matches!(
            a,
            HandOutcome::Knocked { .. } | HandOutcome::Exhausted
        ));
    }
}
