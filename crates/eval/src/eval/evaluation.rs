// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and evaluations.
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use crate::{Card, Rank};

/// The hand category from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    /// High card.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// Whether an evaluation in this category has a secondary rank.
    pub fn has_secondary_rank(&self) -> bool {
        matches!(self, HandCategory::TwoPair | HandCategory::FullHouse)
    }

    /// The number of kickers of an evaluation in this category.
    pub fn kickers_count(&self) -> usize {
        match self {
            HandCategory::HighCard | HandCategory::Flush => 4,
            HandCategory::Pair => 3,
            HandCategory::ThreeOfAKind => 2,
            HandCategory::TwoPair | HandCategory::FourOfAKind => 1,
            HandCategory::Straight | HandCategory::FullHouse | HandCategory::StraightFlush => 0,
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "high card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two pair",
            HandCategory::ThreeOfAKind => "three of a kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full house",
            HandCategory::FourOfAKind => "four of a kind",
            HandCategory::StraightFlush => "straight flush",
        };

        write!(f, "{name}")
    }
}

/// The evaluation of a five cards hand.
///
/// Which fields are meaningful depends on the category:
///
/// | Category        | Primary rank  | Secondary rank | Kickers |
/// |-----------------|---------------|----------------|---------|
/// | High card       | highest card  | -              | 4       |
/// | Pair            | pair          | -              | 3       |
/// | Two pair        | higher pair   | lower pair     | 1       |
/// | Three of a kind | trips         | -              | 2       |
/// | Straight        | highest card  | -              | 0       |
/// | Flush           | highest card  | -              | 4       |
/// | Full house      | trips         | pair           | 0       |
/// | Four of a kind  | quads         | -              | 1       |
/// | Straight flush  | highest card  | -              | 0       |
///
/// For an ace to five straight the highest card is the five. Kickers are
/// sorted by descending rank.
///
/// Evaluations are ordered by category, primary rank, secondary rank, and
/// kickers ranks, suits are never compared. Two evaluations are equal when
/// the hands they come from tie.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    category: HandCategory,
    primary_rank: Rank,
    secondary_rank: Option<Rank>,
    kickers: Vec<Card>,
}

impl Evaluation {
    /// Only the evaluator builds evaluations, so the layout in the table above
    /// always holds.
    pub(crate) fn new(
        category: HandCategory,
        primary_rank: Rank,
        secondary_rank: Option<Rank>,
        kickers: Vec<Card>,
    ) -> Self {
        debug_assert_eq!(
            category.has_secondary_rank(),
            secondary_rank.is_some(),
            "{category} secondary rank {secondary_rank:?}"
        );
        debug_assert_eq!(
            category.kickers_count(),
            kickers.len(),
            "{category} kickers {kickers:?}"
        );
        debug_assert!(kickers.windows(2).all(|w| w[0].rank() >= w[1].rank()));

        Self {
            category,
            primary_rank,
            secondary_rank,
            kickers,
        }
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The rank that defines the category strength.
    pub fn primary_rank(&self) -> Rank {
        self.primary_rank
    }

    /// The lower pair rank for two pair and the pair rank for full house.
    pub fn secondary_rank(&self) -> Option<Rank> {
        self.secondary_rank
    }

    /// The cards not used by the category sorted by descending rank.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// The kickers ranks.
    pub fn kicker_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.kickers.iter().map(Card::rank)
    }

    /// Checks if this evaluation beats the other.
    pub fn beats(&self, other: &Evaluation) -> bool {
        self > other
    }

    /// Checks if this evaluation ties with the other.
    pub fn ties_with(&self, other: &Evaluation) -> bool {
        self == other
    }

    /// Checks if this evaluation loses to the other.
    pub fn loses_to(&self, other: &Evaluation) -> bool {
        self < other
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then(self.primary_rank.cmp(&other.primary_rank))
            .then_with(|| {
                debug_assert_eq!(
                    self.secondary_rank.is_some(),
                    other.secondary_rank.is_some(),
                    "{} secondary rank mismatch",
                    self.category
                );
                // A present rank beats an absent one.
                self.secondary_rank.cmp(&other.secondary_rank)
            })
            .then_with(|| {
                self.kicker_ranks()
                    .zip(other.kicker_ranks())
                    .map(|(r1, r2)| r1.cmp(&r2))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.category, self.secondary_rank) {
            (HandCategory::FullHouse, Some(pair)) => {
                write!(f, "{}: {} over {}", self.category, self.primary_rank, pair)?
            }
            (_, Some(pair)) => write!(f, "{}: {} and {}", self.category, self.primary_rank, pair)?,
            (HandCategory::Straight | HandCategory::StraightFlush | HandCategory::Flush, _) => {
                write!(f, "{}: {} high", self.category, self.primary_rank)?
            }
            _ => write!(f, "{}: {}", self.category, self.primary_rank)?,
        }

        if !self.kickers.is_empty() {
            write!(f, ", kickers")?;
            for card in &self.kickers {
                write!(f, " {card}")?;
            }
        }

        Ok(())
    }
}
