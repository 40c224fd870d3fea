// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards hand is ranked by matching its cards against each hand
//! category, from straight flush down to high card, and the first category
//! that matches gives the hand [Evaluation]. A seven cards hand is ranked by
//! evaluating its 21 five cards subsets and keeping the best one.
//!
//! Evaluations compare by category, then primary rank, then secondary rank,
//! and then kickers ranks, suits never break a tie:
//!
//! ```
//! # use showdown_eval::*;
//! let quads = evaluate(&parse_cards("9C 9D 9H 9S 2C").unwrap()).unwrap();
//! let house = evaluate(&parse_cards("AC AD AH KS KC").unwrap()).unwrap();
//! assert!(quads.beats(&house));
//! ```
use crate::{Card, Error};

mod evaluation;
mod five;
mod seven;

pub use evaluation::{Evaluation, HandCategory};
pub use five::{FiveCardHand, evaluate};
pub use seven::{SevenCardHand, resolve};

/// Parses a list of cards separated by spaces or commas, i.e. `"AS, KD 10H"`.
///
/// This function doesn't check for duplicates, hands constructors do.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, Error> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<Card>().map_err(Error::from))
        .collect()
}
