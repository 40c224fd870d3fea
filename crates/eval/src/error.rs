// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand construction errors.
use thiserror::Error;

use crate::{Card, ParseError};

/// Error returned when a hand cannot be built from its cards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The hand has the wrong number of cards.
    #[error("hand must contain {expected} cards, found {found}")]
    HandSize {
        /// The number of cards required by the hand.
        expected: usize,
        /// The number of cards given.
        found: usize,
    },
    /// The same card appears more than once in the hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// A card token could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Checks a hand has exactly `size` distinct cards.
pub(crate) fn check_hand(cards: &[Card], size: usize) -> Result<(), Error> {
    if cards.len() != size {
        return Err(Error::HandSize {
            expected: size,
            found: cards.len(),
        });
    }

    let mut seen = 0u64;
    for card in cards {
        let bit = 1u64 << card.id();
        if seen & bit != 0 {
            return Err(Error::DuplicateCard(*card));
        }

        seen |= bit;
    }

    Ok(())
}
