// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand categories.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// The category of a 5 cards Poker hand.
///
/// Categories are compared by [HandRanking::priority], a Royal Flush beats
/// everything else and High Card is the weakest category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandRanking {
    /// No grouping, straight or flush.
    HighCard,
    /// Two cards of the same rank.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight where all cards have the same suit.
    StraightFlush,
    /// An Ace high straight flush.
    RoyalFlush,
}

impl HandRanking {
    /// Number of hand categories.
    pub const COUNT: usize = 10;

    /// The strength of this category, from 0 for High Card to 9 for Royal Flush.
    pub const fn priority(&self) -> u8 {
        match self {
            HandRanking::HighCard => 0,
            HandRanking::Pair => 1,
            HandRanking::TwoPair => 2,
            HandRanking::ThreeOfAKind => 3,
            HandRanking::Straight => 4,
            HandRanking::Flush => 5,
            HandRanking::FullHouse => 6,
            HandRanking::FourOfAKind => 7,
            HandRanking::StraightFlush => 8,
            HandRanking::RoyalFlush => 9,
        }
    }

    /// Returns all categories from the weakest to the strongest.
    pub fn rankings() -> impl DoubleEndedIterator<Item = HandRanking> {
        use HandRanking::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl Ord for HandRanking {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for HandRanking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRanking::HighCard => "High Card",
            HandRanking::Pair => "Pair",
            HandRanking::TwoPair => "Two Pair",
            HandRanking::ThreeOfAKind => "Three of a Kind",
            HandRanking::Straight => "Straight",
            HandRanking::Flush => "Flush",
            HandRanking::FullHouse => "Full House",
            HandRanking::FourOfAKind => "Four of a Kind",
            HandRanking::StraightFlush => "Straight Flush",
            HandRanking::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}
