// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Coinche hands CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{error, info};

use coinche_cards::{Card, Deck, Hand, order_hand, unrank_combination};
use coinche_trainer::{Config, Trainer};

#[derive(Debug, Parser)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints the hand with the given combination index.
    Unrank {
        /// The combination index.
        index: u32,
    },
    /// Prints the combination index of a hand key.
    Rank {
        /// The comma separated hand cards (eg. hearts_7,spades_ace,..).
        key: String,
    },
    /// Prints the ordered key of a hand.
    Order {
        /// The hand cards (eg. hearts_7 spades_ace ..).
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Prints hands from a training sequence.
    Train {
        /// The training sequence seed.
        #[clap(long, short, default_value_t = 42)]
        seed: u64,
        /// The first position in the sequence.
        #[clap(long, default_value_t = 0)]
        start: usize,
        /// Number of hands to print.
        #[clap(long, short, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=1000))]
        count: u16,
    },
}

fn symbols(hand: &Hand) -> String {
    hand.ordered()
        .iter()
        .map(|c| format!("{}{}", c.suit().symbol(), c.rank()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(command: Command) -> Result<Vec<String>> {
    let lines = match command {
        Command::Unrank { index } => {
            let deck = Deck::default();
            let cards = unrank_combination(index)?.map(|pos| deck.cards()[pos]);
            let hand = Hand::new(&cards)?;

            vec![
                cards
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
                hand.to_key(),
                symbols(&hand),
            ]
        }
        Command::Rank { key } => {
            let hand = Hand::from_key(&key)?;
            vec![hand.index(&Deck::default())?.to_string()]
        }
        Command::Order { cards } => {
            let cards = cards
                .iter()
                .flat_map(|s| s.split(','))
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().parse::<Card>())
                .collect::<Result<Vec<_>, _>>()?;

            vec![
                order_hand(&cards)?
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ]
        }
        Command::Train { seed, start, count } => {
            info!("Generating training sequence with seed {seed}");
            let mut trainer = Trainer::new(Config { seed, start })?;

            let mut lines = Vec::with_capacity(count as usize);
            let mut hand = trainer.hand()?;
            for n in 0..count {
                if n > 0 {
                    hand = trainer.next_hand()?;
                }

                let position = trainer.session().position;
                let index = trainer.sequence().index(position)?;
                lines.push(format!("{position} {index} {hand}"));
            }

            lines
        }
    };

    Ok(lines)
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
