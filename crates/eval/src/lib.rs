// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Evaluates five cards Poker hands into a comparable [Evaluation] that
//! records the hand category, the ranks that define it, and the kickers, and
//! resolves the best five cards hand out of seven cards.
//!
//! ```
//! # use showdown_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let h1 = FiveCardHand::new(&cards[0..5]).unwrap();
//! let h2 = FiveCardHand::new(&cards[5..]).unwrap();
//! assert!(h2.beats(&h1));
//!
//! let hand = "AC AD AS 2C 2D KC 5D".parse::<SevenCardHand>().unwrap();
//! assert_eq!(hand.evaluation().to_string(), "full house: A over 2");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    Evaluation, FiveCardHand, HandCategory, SevenCardHand, evaluate, parse_cards, resolve,
};

mod error;
pub use error::Error;

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseError, Rank, Suit};
