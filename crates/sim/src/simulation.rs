// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo simulation of starting hands.
use anyhow::{Context, Result, bail, ensure};
use log::{debug, info};
use rand::prelude::*;
use std::{cmp::Ordering, thread};

use sevencard_eval::{Card, Deck, RankedHand, rules::PokerRules};

use crate::{Config, HandStats, StartingHand};

/// Plays `config.iterations` hands split across `config.threads` workers and
/// returns the dealt and won counters for each starting hand.
///
/// Each worker has its own random generator, seeded with the configuration
/// seed plus the worker index when a seed is given. Blocks until all workers
/// have completed and returns the first worker error if any.
pub fn simulate<R: PokerRules>(config: &Config, rules: &R) -> Result<HandStats> {
    ensure!(config.threads > 0, "The number of threads must be positive");
    ensure!(config.seats >= 2, "A game needs at least 2 seats");
    ensure!(
        rules.hole_cards() >= 2,
        "A starting hand needs at least 2 hole cards"
    );

    let needed = rules.community_cards() + config.seats * rules.hole_cards();
    ensure!(
        needed <= Deck::SIZE,
        "{} seats need {needed} cards, the deck has {}",
        config.seats,
        Deck::SIZE
    );

    info!(
        "Simulating {} hands with {} seats on {} threads",
        config.iterations, config.seats, config.threads
    );

    let stats = HandStats::default();
    let hands_per_task = config.iterations / config.threads;
    let extra_hands = config.iterations % config.threads;

    thread::scope(|s| -> Result<()> {
        let handles = (0..config.threads)
            .map(|task_id| {
                let stats = &stats;
                let hands = hands_per_task + usize::from(task_id < extra_hands);

                s.spawn(move || -> Result<()> {
                    let mut rng = match config.seed {
                        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
                        None => SmallRng::from_os_rng(),
                    };

                    for _ in 0..hands {
                        play_hand(rules, &mut rng, config.seats, stats)?;
                    }

                    debug!("Task {task_id} played {hands} hands");
                    Ok(())
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            match handle.join() {
                Ok(res) => res?,
                Err(_) => bail!("A simulation task panicked"),
            }
        }

        Ok(())
    })?;

    Ok(stats)
}

/// Deals and plays one hand, records a dealt hand for each seat and a win for
/// each seat that has the best hand.
pub fn play_hand<R, G>(rules: &R, rng: &mut G, seats: usize, stats: &HandStats) -> Result<()>
where
    R: PokerRules + ?Sized,
    G: Rng + ?Sized,
{
    let mut deck = Deck::new_and_shuffled(rng);
    let mut deal = |count: usize| -> Result<Vec<Card>> {
        (0..count)
            .map(|_| deck.deal().context("The deck is out of cards"))
            .collect()
    };

    // Deal the community cards first, the order doesn't matter for the stats.
    let community = deal(rules.community_cards())?;

    let mut starting_hands = Vec::with_capacity(seats);
    let mut hands = Vec::with_capacity(seats);

    for _ in 0..seats {
        let hole = deal(rules.hole_cards())?;
        let starting_hand = match hole.as_slice() {
            [c1, c2, ..] => StartingHand::new(*c1, *c2),
            _ => bail!("A starting hand needs at least 2 hole cards"),
        };

        stats.record_dealt(starting_hand);
        starting_hands.push(starting_hand);
        hands.push(rules.rank_hand(&hole, &community)?);
    }

    for idx in winners(&hands) {
        stats.record_won(starting_hands[idx]);
    }

    Ok(())
}

/// Returns the indices of the best hands, more than one for a split pot.
fn winners(hands: &[RankedHand]) -> Vec<usize> {
    let mut best: Option<&RankedHand> = None;
    let mut winners = Vec::with_capacity(hands.len());

    for (idx, hand) in hands.iter().enumerate() {
        match best.map(|b| hand.cmp(b)) {
            None | Some(Ordering::Greater) => {
                best = Some(hand);
                winners.clear();
                winners.push(idx);
            }
            Some(Ordering::Equal) => winners.push(idx),
            Some(Ordering::Less) => {}
        }
    }

    winners
}
