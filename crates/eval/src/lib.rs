// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sevencard Poker hand evaluator.
//!
//! The evaluator finds the best 5 cards hand that can be made with 7 cards, as
//! in Texas Hold'em and 7-Card Stud, and returns a [RankedHand] with the hand
//! category and its 5 cards ordered by significance. Ranked hands are totally
//! ordered so they can be compared to find the winner of a showdown, equal
//! hands split the pot.
//!
//! The cards given to [evaluate] must be 7 distinct cards sorted by descending
//! rank:
//!
//! ```
//! # use sevencard_eval::*;
//! let mut c1 = ["KH", "9D", "8C", "7S", "7D", "6C", "5H"].map(|c| c.parse::<Card>().unwrap());
//! let mut c2 = ["AH", "AD", "QC", "9S", "7H", "4C", "2H"].map(|c| c.parse::<Card>().unwrap());
//! c1.sort_unstable_by(|a, b| b.cmp(a));
//! c2.sort_unstable_by(|a, b| b.cmp(a));
//!
//! let h1 = evaluate(&c1);
//! let h2 = evaluate(&c2);
//! assert_eq!(h1.ranking(), HandRanking::Straight);
//! assert_eq!(h2.ranking(), HandRanking::Pair);
//! assert!(h1 > h2);
//! ```
//!
//! The [rules] module merges hole and community cards for a game and checks the
//! input before evaluation.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
mod evaluator;
mod grouped;
mod hand;
mod ranking;
mod straight;

pub mod rules;

pub use error::EvalError;
pub use evaluator::{NUM_CARDS, evaluate, try_evaluate};
pub use hand::RankedHand;
pub use ranking::HandRanking;

// Reexport cards types.
pub use sevencard_cards::{Card, Deck, ParseCardError, Rank, Suit};

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<const N: usize>(s: &str) -> [Card; N] {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<Card>>();
        cards.try_into().unwrap()
    }

    /// Parses 7 cards, e.g. "AH KD 9C 5H 4H 3H 2H".
    pub(crate) fn cards(s: &str) -> [Card; NUM_CARDS] {
        parse(s)
    }

    /// Parses the 5 cards of a hand.
    pub(crate) fn hand_cards(s: &str) -> [Card; RankedHand::SIZE] {
        parse(s)
    }
}
