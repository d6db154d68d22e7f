// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when evaluating cards that are not a valid 7 cards hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Wrong number of cards.
    #[error("expected {expected} cards, got {found}")]
    CardCount {
        /// The number of cards required.
        expected: usize,
        /// The number of cards given.
        found: usize,
    },
    /// The same card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// The cards are not sorted by descending rank.
    #[error("cards are not sorted by descending rank")]
    Unsorted,
    /// The rank groups do not match any 7 cards hand.
    #[error("invalid pair count {pairs} with largest group of {group} cards")]
    InvalidPairCount {
        /// Number of same rank card pairs.
        pairs: usize,
        /// Size of the largest same rank group.
        group: usize,
    },
}
