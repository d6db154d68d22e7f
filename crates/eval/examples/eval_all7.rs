// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// High Card:       23294460
// Pair:            58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  37260
// Royal Flush:     4324
// ```

use std::time::Instant;

use sevencard_eval::*;

fn main() {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandRanking::COUNT];

    Deck::default().for_each(NUM_CARDS, |hand| {
        let mut cards = [hand[0]; NUM_CARDS];
        cards.copy_from_slice(hand);
        cards.sort_unstable_by(|a, b| b.cmp(a));

        let ranking = evaluate(&cards).ranking();
        counts[ranking.priority() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for ranking in HandRanking::rankings() {
        let label = format!("{ranking}:");
        println!("{label:<17}{}", counts[ranking.priority() as usize]);
    }
}
