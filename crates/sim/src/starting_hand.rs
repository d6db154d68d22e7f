// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em starting hands classification.
use std::fmt;

use sevencard_eval::{Card, Rank};

/// The class of a two cards starting hand.
///
/// Suits only matter to tell suited from offsuit hands so there are 169
/// classes: 13 pairs, 78 suited, and 78 offsuit hands. The text form has the
/// higher rank first and a `s` or `o` suffix for non pairs, e.g. `AKs`, `T9o`,
/// `77`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StartingHand {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl StartingHand {
    /// Classifies two hole cards, in any order.
    pub fn new(c1: Card, c2: Card) -> Self {
        let (high, low) = if c1.rank() >= c2.rank() {
            (c1.rank(), c2.rank())
        } else {
            (c2.rank(), c1.rank())
        };

        Self {
            high,
            low,
            suited: high != low && c1.suit() == c2.suit(),
        }
    }

    /// The higher rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lower rank, equal to the higher rank for pairs.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// Checks if this is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    /// Checks if the two cards have the same suit.
    pub fn is_suited(&self) -> bool {
        self.suited
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high, self.low)?;
        if self.is_pair() {
            Ok(())
        } else if self.suited {
            write!(f, "s")
        } else {
            write!(f, "o")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use sevencard_eval::Deck;

    fn class(c1: &str, c2: &str) -> String {
        StartingHand::new(c1.parse().unwrap(), c2.parse().unwrap()).to_string()
    }

    #[test]
    fn starting_hand_to_string() {
        assert_eq!(class("AH", "KH"), "AKs");
        assert_eq!(class("KH", "AH"), "AKs");
        assert_eq!(class("9C", "TD"), "T9o");
        assert_eq!(class("7S", "7D"), "77");
        assert_eq!(class("2C", "7D"), "72o");
    }

    #[test]
    fn starting_hand_accessors() {
        let hand = StartingHand::new("5D".parse().unwrap(), "QD".parse().unwrap());
        assert_eq!(hand.high(), Rank::Queen);
        assert_eq!(hand.low(), Rank::Five);
        assert!(hand.is_suited());
        assert!(!hand.is_pair());

        let pair = StartingHand::new("5D".parse().unwrap(), "5C".parse().unwrap());
        assert!(pair.is_pair());
        assert!(!pair.is_suited());
    }

    #[test]
    fn all_starting_hands() {
        let mut classes = HashSet::default();
        let mut pairs = 0;
        Deck::default().for_each(2, |cards| {
            let hand = StartingHand::new(cards[0], cards[1]);
            if hand.is_pair() {
                pairs += 1;
            }
            classes.insert(hand);
        });

        assert_eq!(classes.len(), 169);
        assert_eq!(classes.iter().filter(|h| h.is_pair()).count(), 13);
        assert_eq!(classes.iter().filter(|h| h.is_suited()).count(), 78);

        // 6 combinations for each pair.
        assert_eq!(pairs, 13 * 6);
    }
}
