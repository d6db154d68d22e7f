// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards hand evaluator.
//!
//! Any 5 of the 7 cards can be used to make the best hand, this is the case for
//! Texas Hold'em and 7-Card Stud but not for Omaha where the hand must use
//! exactly two hole cards.
use crate::{
    Card, EvalError, RankedHand, grouped::grouped, straight::straight_or_flush,
};

/// The number of cards for an evaluation.
pub const NUM_CARDS: usize = 7;

/// Evaluates 7 cards and returns the best 5 cards hand.
///
/// The cards must be distinct and sorted by descending rank, this is not
/// checked and invalid input gives an invalid hand, use [try_evaluate] for
/// unchecked input.
///
/// Panics if the cards rank groups cannot come from 7 distinct cards.
///
/// ```
/// # use sevencard_eval::*;
/// let cards = ["AH", "KD", "9C", "5H", "4H", "3H", "2H"].map(|c| c.parse().unwrap());
/// let hand = evaluate(&cards);
/// assert_eq!(hand.ranking(), HandRanking::StraightFlush);
/// assert_eq!(hand.to_string(), "Straight Flush [5H 4H 3H 2H AH]");
/// ```
pub fn evaluate(cards: &[Card; NUM_CARDS]) -> RankedHand {
    match grouped(cards) {
        Ok(hand) => best_of(straight_or_flush(cards), hand),
        Err(e) => panic!("{e}"),
    }
}

/// Checks the cards and evaluates them.
///
/// Returns an error if there are not 7 cards, if the cards are not sorted by
/// descending rank, or if there are duplicate cards.
pub fn try_evaluate(cards: &[Card]) -> Result<RankedHand, EvalError> {
    let cards: &[Card; NUM_CARDS] = cards.try_into().map_err(|_| EvalError::CardCount {
        expected: NUM_CARDS,
        found: cards.len(),
    })?;

    if cards.windows(2).any(|w| w[0].rank() < w[1].rank()) {
        return Err(EvalError::Unsorted);
    }

    for (idx, card) in cards.iter().enumerate() {
        if cards[idx + 1..].contains(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    let hand = grouped(cards)?;
    Ok(best_of(straight_or_flush(cards), hand))
}

/// The grouped hand wins unless the straight or flush hand is stronger.
#[inline]
fn best_of(straight_or_flush: Option<RankedHand>, grouped: RankedHand) -> RankedHand {
    match straight_or_flush {
        Some(hand) if hand > grouped => hand,
        _ => grouped,
    }
}
