// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The best 5 cards hand.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, HandRanking};

/// A 5 cards hand with its category.
///
/// The cards are ordered from the most to the least significant for the hand
/// category, for example a two pair hand has the higher pair first, then the
/// lower pair and then the kicker, and an Ace low straight ends with the Ace.
///
/// Hands compare by category first and then by the rank of each card in order,
/// suits are never compared so two hands can be equal even if they have
/// different cards (a split pot).
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct RankedHand {
    cards: [Card; RankedHand::SIZE],
    ranking: HandRanking,
}

impl RankedHand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand, the cards must be in descending order of significance.
    pub fn new(cards: [Card; Self::SIZE], ranking: HandRanking) -> Self {
        Self { cards, ranking }
    }

    /// The hand category.
    pub fn ranking(&self) -> HandRanking {
        self.ranking
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card; Self::SIZE] {
        &self.cards
    }

    /// Returns the card at the given position.
    ///
    /// Panics if `idx >= 5`.
    pub fn card(&self, idx: usize) -> Card {
        self.cards[idx]
    }

    /// Checks if the hand contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl Ord for RankedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranking.cmp(&other.ranking).then_with(|| {
            let ranks = self.cards.iter().map(|c| c.rank());
            ranks.cmp(other.cards.iter().map(|c| c.rank()))
        })
    }
}

impl PartialOrd for RankedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedHand {}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.ranking)?;
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RankedHand({self})")
    }
}
