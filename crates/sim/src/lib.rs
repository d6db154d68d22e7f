// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Sevencard starting hands simulation.
//!
//! Plays random Hold'em hands to a showdown and counts, for each of the 169
//! starting hands classes, how many times the hand was dealt and how many times
//! it won or split the pot:
//!
//! ```
//! # use sevencard_sim::*;
//! # use sevencard_eval::rules::TexasHoldem;
//! let config = Config {
//!     iterations: 1_000,
//!     seats: 2,
//!     threads: 2,
//!     seed: Some(42),
//! };
//!
//! let stats = simulate(&config, &TexasHoldem).unwrap();
//! let dealt = stats.tabulate().iter().map(|r| r.dealt).sum::<u64>();
//! assert_eq!(dealt, 2_000);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod simulation;
mod starting_hand;
mod stats;

pub use simulation::{play_hand, simulate};
pub use starting_hand::StartingHand;
pub use stats::{HandRecord, HandStats};

/// The simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The total number of hands to play.
    pub iterations: usize,
    /// The number of players at the table.
    pub seats: usize,
    /// The number of worker threads.
    pub threads: usize,
    /// Seed for the workers random generators, random if not set.
    pub seed: Option<u64>,
}
