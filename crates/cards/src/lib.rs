// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!("ah".parse(), Ok(ah));
//! assert_eq!(Card::parse("ace", "hearts"), Ok(ah));
//! assert_eq!(ah.to_string(), "A♡");
//! ```
//!
//! and a [Deck] type for shuffling, cutting, and dealing cards:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.deal_cards(5);
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.remaining(), Deck::SIZE - 5);
//! ```
//!
//! To iterate through all the 5 cards hands left in a deck:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;

pub use card::{Card, ParseError, Rank, Suit};
pub use deck::Deck;
