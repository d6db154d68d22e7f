// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands made of same rank groups: pairs, trips, and quads.
//!
//! The ranker counts how many pairs of same rank cards there are in the hand,
//! in the Cribbage sense where one card can be part of many pairs: a run of 2
//! cards has 1 pair, a run of 3 has 3 pairs and a run of 4 has 6 pairs. The
//! pairs count together with the size of the largest group identifies the hand
//! category for any 7 cards hand:
//!
//! ```text
//!   pairs  group  hand
//!   0      1      high card
//!   1      2      pair
//!   2      2      two pair
//!   3      2      two pair (three pairs)
//!   3      3      three of a kind
//!   4      3      full house
//!   5      3      full house (trips and two pairs)
//!   6      3      full house (two trips)
//!   6      4      four of a kind
//!   7      4      four of a kind (quads and a pair)
//!   9      4      four of a kind (quads and trips)
//! ```
use crate::{Card, EvalError, HandRanking, RankedHand};

/// Number of cards the ranker works on.
const NUM_CARDS: usize = 7;

/// Returns the best hand made of pairs, trips, and quads for the given cards,
/// ignoring straights and flushes.
///
/// The cards must be sorted by descending rank.
pub(crate) fn grouped(cards: &[Card; NUM_CARDS]) -> Result<RankedHand, EvalError> {
    // Runs of same rank cards as (start, len) in descending rank order.
    let mut runs = [(0usize, 0usize); NUM_CARDS];
    let mut num_runs = 0;

    let mut pairs = 0;
    let mut run_len = 1;
    let mut biggest = 0;
    let mut first = 0;

    for idx in 1..=NUM_CARDS {
        if idx < NUM_CARDS && cards[idx].rank() == cards[idx - 1].rank() {
            run_len += 1;
            pairs += run_len - 1;
        } else {
            // The highest ranked run wins a tie for the largest group.
            if run_len > biggest {
                biggest = run_len;
                first = num_runs;
            }

            runs[num_runs] = (idx - run_len, run_len);
            num_runs += 1;
            run_len = 1;
        }
    }

    let ranking = classify(pairs, biggest)?;
    let runs = &runs[..num_runs];

    // A second group only fits next to a pair or trips, with quads the last
    // slot goes to the highest kicker.
    let mut second: Option<usize> = None;
    if biggest <= 3 {
        for (idx, &(_, len)) in runs.iter().enumerate() {
            if idx != first && len > 1 && second.is_none_or(|s| len > runs[s].1) {
                second = Some(idx);
            }
        }
    }

    let mut hand = [cards[0]; RankedHand::SIZE];
    let mut used = [false; NUM_CARDS];
    let mut len = 0;

    for (start, run_len) in [Some(first), second].into_iter().flatten().map(|r| runs[r]) {
        for idx in start..(start + run_len).min(start + RankedHand::SIZE - len) {
            hand[len] = cards[idx];
            used[idx] = true;
            len += 1;
        }
    }

    // Fill the hand with the remaining kickers, they are already sorted.
    for (card, _) in cards.iter().zip(used).filter(|(_, used)| !used) {
        if len == RankedHand::SIZE {
            break;
        }

        hand[len] = *card;
        len += 1;
    }

    Ok(RankedHand::new(hand, ranking))
}

/// Maps the number of same rank pairs and the largest group size to a hand
/// category.
fn classify(pairs: usize, group: usize) -> Result<HandRanking, EvalError> {
    let ranking = match (pairs, group) {
        (0, _) => HandRanking::HighCard,
        (1, _) => HandRanking::Pair,
        (2, _) => HandRanking::TwoPair,
        (3, 3) => HandRanking::ThreeOfAKind,
        (3, _) => HandRanking::TwoPair,
        (4 | 5, _) | (6, 3) => HandRanking::FullHouse,
        (6 | 7 | 9, 4) => HandRanking::FourOfAKind,
        _ => return Err(EvalError::InvalidPairCount { pairs, group }),
    };

    Ok(ranking)
}
