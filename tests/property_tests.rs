//! Property-based tests for the hand analysis pipeline.
//!
//! Random hands are drawn as subsequences of the 52-card deck, so they
//! are always duplicate-free the way real hands are.

use gin_rummy::cards::Card;
use gin_rummy::melds::{is_deadwood, melds_in, min_deadwood};
use gin_rummy::scoring::layoffable;
use proptest::prelude::*;

fn arb_hand(max: usize) -> impl Strategy<Value = Vec<Card>> {
    let deck: Vec<Card> = Card::deck().collect();
    proptest::sample::subsequence(deck, 0..=max)
}

proptest! {
    /// The optimal partition's melds are legal, disjoint, drawn from the
    /// hand, and account for every point of the reported deadwood.
    #[test]
    fn prop_partition_is_legal(hand in arb_hand(11)) {
        let partition = min_deadwood(&hand).unwrap();

        let mut melded: Vec<Card> = Vec::new();
        for meld in &partition.melds {
            prop_assert!(meld.validate().is_ok());
            for &card in meld.cards() {
                prop_assert!(hand.contains(&card));
                prop_assert!(!melded.contains(&card), "melds must not overlap");
                melded.push(card);
            }
        }

        let loose: u32 = hand
            .iter()
            .filter(|c| !melded.contains(c))
            .map(|c| c.value())
            .sum();
        prop_assert_eq!(partition.deadwood, loose);
    }

    /// Deadwood never exceeds the raw hand value, and hits zero exactly
    /// when the partition covers the whole hand.
    #[test]
    fn prop_deadwood_is_bounded(hand in arb_hand(11)) {
        let partition = min_deadwood(&hand).unwrap();
        let total: u32 = hand.iter().map(|c| c.value()).sum();

        prop_assert!(partition.deadwood <= total);
        let covered: usize = partition.melds.iter().map(|m| m.len()).sum();
        prop_assert_eq!(partition.is_gin(), covered == hand.len());
    }

    /// A card is deadwood exactly when no meld through it exists, and
    /// every enumerated meld is legal and contains the card.
    #[test]
    fn prop_melds_in_agrees_with_is_deadwood(hand in arb_hand(10)) {
        for &card in &hand {
            let melds = melds_in(card, &hand).unwrap();
            prop_assert_eq!(is_deadwood(card, &hand).unwrap(), melds.is_empty());
            for meld in &melds {
                prop_assert!(meld.contains(card));
                prop_assert!(meld.validate().is_ok());
            }
        }
    }

    /// Every layoff candidate genuinely extends one of the melds it was
    /// derived from.
    #[test]
    fn prop_layoff_candidates_extend_a_meld(hand in arb_hand(10)) {
        let partition = min_deadwood(&hand).unwrap();
        for candidate in layoffable(&partition.melds) {
            let extends = partition.melds.iter().any(|meld| {
                let mut cards: Vec<Card> = meld.cards().to_vec();
                cards.push(candidate);
                gin_rummy::melds::Meld::new(cards).kind().is_some()
            });
            prop_assert!(extends, "candidate {} extends nothing", candidate);
        }
    }

    /// Removing a card never lowers optimal deadwood by more than that
    /// card's value.
    #[test]
    fn prop_removal_is_locally_bounded(hand in arb_hand(8)) {
        let base = min_deadwood(&hand).unwrap().deadwood;
        for &card in &hand {
            let rest: Vec<Card> = hand.iter().copied().filter(|&c| c != card).collect();
            let reduced = min_deadwood(&rest).unwrap().deadwood;
            prop_assert!(reduced + card.value() >= base);
        }
    }
}
