// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the best hand for a player, run with:
//
// ```bash
// $ cargo r --example best_hand -- --hole 5H AH --board 2H 9C 4H KD 3H
// Straight Flush [5H 4H 3H 2H AH]
// ```
use anyhow::Result;
use clap::Parser;

use sevencard_eval::{
    Card,
    rules::{PokerRules, SevenCardStud, TexasHoldem},
};

#[derive(Debug, Parser)]
struct Cli {
    /// The player hole cards, 2 for Hold'em or 7 for Stud (e.g. AH KD).
    #[clap(long, num_args = 1.., required = true)]
    hole: Vec<Card>,
    /// The community cards, leave empty for 7-Card Stud.
    #[clap(long, num_args = 0..)]
    board: Vec<Card>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules: &dyn PokerRules = if cli.board.is_empty() {
        &SevenCardStud
    } else {
        &TexasHoldem
    };

    let hand = rules.rank_hand(&cli.hole, &cli.board)?;
    println!("{hand}");

    Ok(())
}
