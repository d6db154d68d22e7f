// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per starting hand counters shared by the simulation workers.
use ahash::HashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::StartingHand;

#[derive(Debug, Default)]
struct Counter {
    dealt: AtomicU64,
    won: AtomicU64,
}

impl Counter {
    fn inc_dealt(&self) {
        self.dealt.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_won(&self) {
        self.won.fetch_add(1, Ordering::Relaxed);
    }

    fn record(&self, hand: StartingHand) -> HandRecord {
        HandRecord {
            hand,
            dealt: self.dealt.load(Ordering::Relaxed),
            won: self.won.load(Ordering::Relaxed),
        }
    }
}

/// The results for a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandRecord {
    /// The starting hand class.
    pub hand: StartingHand,
    /// How many times the hand was dealt.
    pub dealt: u64,
    /// How many times the hand won or split the pot.
    pub won: u64,
}

impl HandRecord {
    /// The fraction of dealt hands that won.
    pub fn win_rate(&self) -> f64 {
        if self.dealt == 0 {
            0.0
        } else {
            self.won as f64 / self.dealt as f64
        }
    }
}

/// Dealt and won counters for each starting hand.
///
/// Counters can be updated concurrently from many threads, a counter is created
/// the first time its starting hand is seen.
#[derive(Debug, Default)]
pub struct HandStats {
    counters: RwLock<HashMap<StartingHand, Counter>>,
}

impl HandStats {
    /// Records that a starting hand has been dealt.
    pub fn record_dealt(&self, hand: StartingHand) {
        self.with_counter(hand, Counter::inc_dealt);
    }

    /// Records that a starting hand has won.
    pub fn record_won(&self, hand: StartingHand) {
        self.with_counter(hand, Counter::inc_won);
    }

    /// Returns the results for a starting hand.
    pub fn get(&self, hand: StartingHand) -> Option<HandRecord> {
        self.counters.read().get(&hand).map(|c| c.record(hand))
    }

    /// The number of starting hands seen.
    pub fn len(&self) -> usize {
        self.counters.read().len()
    }

    /// Checks if no hand has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counters.read().is_empty()
    }

    /// Returns the results for all starting hands from the highest to the
    /// lowest win rate.
    pub fn tabulate(&self) -> Vec<HandRecord> {
        let mut records = self
            .counters
            .read()
            .iter()
            .map(|(hand, counter)| counter.record(*hand))
            .collect::<Vec<_>>();

        records.sort_by(|r1, r2| {
            r2.win_rate()
                .total_cmp(&r1.win_rate())
                .then_with(|| r2.hand.cmp(&r1.hand))
        });

        records
    }

    fn with_counter<F>(&self, hand: StartingHand, f: F)
    where
        F: FnOnce(&Counter),
    {
        {
            let counters = self.counters.read();
            if let Some(counter) = counters.get(&hand) {
                f(counter);
                return;
            }
        }

        let mut counters = self.counters.write();
        f(counters.entry(hand).or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn hand(c1: &str, c2: &str) -> StartingHand {
        StartingHand::new(c1.parse().unwrap(), c2.parse().unwrap())
    }

    #[test]
    fn record_and_tabulate() {
        let stats = HandStats::default();
        assert!(stats.is_empty());

        let aa = hand("AH", "AD");
        let ako = hand("AH", "KD");
        let sevendeuce = hand("7C", "2D");

        for _ in 0..4 {
            stats.record_dealt(aa);
            stats.record_dealt(ako);
            stats.record_dealt(sevendeuce);
        }

        for _ in 0..3 {
            stats.record_won(aa);
        }
        stats.record_won(ako);
        stats.record_won(ako);

        assert_eq!(stats.len(), 3);
        assert_eq!(
            stats.get(aa),
            Some(HandRecord {
                hand: aa,
                dealt: 4,
                won: 3
            })
        );
        assert_eq!(stats.get(hand("KS", "KC")), None);

        let table = stats.tabulate();
        let order = table.iter().map(|r| r.hand.to_string()).collect::<Vec<_>>();
        assert_eq!(order, ["AA", "AKo", "72o"]);
        assert_eq!(table[0].win_rate(), 0.75);
        assert_eq!(table[2].win_rate(), 0.0);
    }

    #[test]
    fn concurrent_updates() {
        const NUM_TASKS: usize = 4;
        const UPDATES: u64 = 1_000;

        let stats = HandStats::default();
        let hands = [hand("AH", "AD"), hand("QS", "JS"), hand("9C", "4D")];

        thread::scope(|s| {
            for _ in 0..NUM_TASKS {
                s.spawn(|| {
                    for _ in 0..UPDATES {
                        for hand in hands {
                            stats.record_dealt(hand);
                            stats.record_won(hand);
                        }
                    }
                });
            }
        });

        for hand in hands {
            let record = stats.get(hand).unwrap();
            assert_eq!(record.dealt, NUM_TASKS as u64 * UPDATES);
            assert_eq!(record.won, NUM_TASKS as u64 * UPDATES);
        }
    }
}
