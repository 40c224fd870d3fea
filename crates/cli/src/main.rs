// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use serde::Serialize;
use std::fmt::Display;

use showdown_eval::{Card, parse_cards};

pub mod report;
use report::{CompareReport, EvalReport, SampleReport};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Print reports as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Evaluate a 5 or 7 cards hand, i.e. `eval AS KD 10H 9C 2S`.
    Eval {
        /// The hand cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Compare two hands of 5 or 7 cards.
    Compare {
        /// The first hand, i.e. "AS KD 10H 9C 2S".
        #[clap(long, short)]
        first: String,
        /// The second hand.
        #[clap(long, short)]
        second: String,
    },
    /// Deal random hands and count their categories.
    Sample {
        /// Number of hands to deal.
        #[clap(long, short = 'n', default_value_t = 100_000)]
        hands: usize,
        /// Number of cards per hand, 5 or 7.
        #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=7))]
        size: u8,
        /// The random generator seed.
        #[clap(long)]
        seed: Option<u64>,
    },
}

/// The command to run.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Eval(Vec<Card>),
    Compare(Vec<Card>, Vec<Card>),
    Sample {
        hands: usize,
        size: usize,
        seed: Option<u64>,
    },
}

/// The CLI configuration.
#[derive(Debug, Clone, PartialEq)]
struct Config {
    command: Command,
    json: bool,
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let command = match cli.command {
            Cmd::Eval { cards } => Command::Eval(parse_cards(&cards.join(" "))?),
            Cmd::Compare { first, second } => {
                Command::Compare(parse_cards(&first)?, parse_cards(&second)?)
            }
            Cmd::Sample { hands, size, seed } => Command::Sample {
                hands,
                size: size as usize,
                seed,
            },
        };

        Ok(Config {
            command,
            json: cli.json,
        })
    }
}

fn print<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

fn run(config: Config) -> Result<()> {
    match &config.command {
        Command::Eval(cards) => print(&EvalReport::new(cards)?, config.json),
        Command::Compare(first, second) => print(&CompareReport::new(first, second)?, config.json),
        Command::Sample { hands, size, seed } => {
            print(&SampleReport::new(*hands, *size, *seed)?, config.json)
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let res = Config::try_from(Cli::parse()).and_then(run);
    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}
