// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Prints the win rate of each Hold'em starting hand.
use anyhow::Result;
use clap::Parser;
use log::{error, info};
use std::{num::NonZeroUsize, thread, time::Instant};

use sevencard_eval::rules::TexasHoldem;
use sevencard_sim::{Config, simulate};

#[derive(Debug, Parser)]
struct Cli {
    /// The number of hands to play.
    #[clap(long, short, default_value_t = 1_000_000)]
    iterations: usize,
    /// The number of players at the table.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
    seats: u8,
    /// The number of worker threads, defaults to the available cores.
    #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..=1024))]
    threads: Option<u16>,
    /// Seed for reproducible runs.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let threads = match cli.threads {
        Some(threads) => threads as usize,
        None => thread::available_parallelism().map_or(1, NonZeroUsize::get),
    };

    let config = Config {
        iterations: cli.iterations,
        seats: cli.seats as usize,
        threads,
        seed: cli.seed,
    };

    if let Err(e) = run(config) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let now = Instant::now();
    let stats = simulate(&config, &TexasHoldem)?;
    info!("Completed in {:.3}s", now.elapsed().as_secs_f64());

    for record in stats.tabulate() {
        println!("{}\t{:.4}\t{}", record.hand, record.win_rate(), record.dealt);
    }

    Ok(())
}
