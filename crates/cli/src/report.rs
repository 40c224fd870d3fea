// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Commands execution and reports.
use anyhow::{Result, bail};
use log::info;
use rand::{SeedableRng, rngs::SmallRng};
use serde::Serialize;
use std::{cmp::Ordering, fmt};

use showdown_eval::{Card, Deck, Evaluation, FiveCardHand, HandCategory, SevenCardHand, resolve};

/// A hand evaluation report.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    /// The hand cards.
    pub cards: Vec<Card>,
    /// The best five cards for a seven cards hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<Vec<Card>>,
    /// The hand evaluation.
    pub evaluation: Evaluation,
}

impl EvalReport {
    /// Evaluates a five or seven cards hand.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let report = match cards.len() {
            FiveCardHand::SIZE => {
                let hand = FiveCardHand::new(cards)?;
                Self {
                    cards: cards.to_vec(),
                    best: None,
                    evaluation: hand.evaluation().clone(),
                }
            }
            SevenCardHand::SIZE => {
                let (evaluation, best) = resolve(cards)?;
                Self {
                    cards: cards.to_vec(),
                    best: Some(best.to_vec()),
                    evaluation,
                }
            }
            n => bail!("a hand must have 5 or 7 cards, found {n}"),
        };

        Ok(report)
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cards(f, &self.cards)?;

        if let Some(best) = &self.best {
            write!(f, "-> best ")?;
            write_cards(f, best)?;
        }

        write!(f, "-> {}", self.evaluation)
    }
}

/// The outcome of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    /// The first hand wins.
    First,
    /// The second hand wins.
    Second,
    /// The hands tie.
    Tie,
}

/// Two hands comparison report.
#[derive(Debug, Serialize)]
pub struct CompareReport {
    /// The first hand.
    pub first: EvalReport,
    /// The second hand.
    pub second: EvalReport,
    /// The comparison outcome.
    pub winner: Winner,
}

impl CompareReport {
    /// Compares two hands of five or seven cards.
    pub fn new(first: &[Card], second: &[Card]) -> Result<Self> {
        let first = EvalReport::new(first)?;
        let second = EvalReport::new(second)?;

        let winner = match first.evaluation.cmp(&second.evaluation) {
            Ordering::Greater => Winner::First,
            Ordering::Less => Winner::Second,
            Ordering::Equal => Winner::Tie,
        };

        Ok(Self {
            first,
            second,
            winner,
        })
    }
}

impl fmt::Display for CompareReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "first:  {}", self.first)?;
        writeln!(f, "second: {}", self.second)?;
        match self.winner {
            Winner::First => write!(f, "first hand wins"),
            Winner::Second => write!(f, "second hand wins"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// Number of sampled hands in a category.
#[derive(Debug, Serialize)]
pub struct CategoryCount {
    /// The hand category.
    pub category: HandCategory,
    /// Number of hands.
    pub count: usize,
    /// Fraction of all the sampled hands.
    pub frequency: f64,
}

/// Random hands sampling report.
#[derive(Debug, Serialize)]
pub struct SampleReport {
    /// Number of sampled hands.
    pub hands: usize,
    /// Cards per hand.
    pub size: usize,
    /// The seed used for the random generator.
    pub seed: u64,
    /// Counts per category from the strongest.
    pub counts: Vec<CategoryCount>,
}

impl SampleReport {
    /// Deals `hands` hands of `size` cards, each from a fresh shuffled deck.
    pub fn new(hands: usize, size: usize, seed: Option<u64>) -> Result<Self> {
        if size != FiveCardHand::SIZE && size != SevenCardHand::SIZE {
            bail!("sample size must be 5 or 7, found {size}");
        }

        let seed = seed.unwrap_or_else(rand::random);
        info!("Sampling {hands} hands of {size} cards with seed {seed}");

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut counts = [0usize; 9];

        for _ in 0..hands {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards = deck.deal_cards(size);
            let report = EvalReport::new(&cards)?;
            counts[report.evaluation.category() as usize] += 1;
        }

        let counts = HandCategory::categories()
            .rev()
            .map(|category| {
                let count = counts[category as usize];
                CategoryCount {
                    category,
                    count,
                    frequency: if hands > 0 {
                        count as f64 / hands as f64
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        Ok(Self {
            hands,
            size,
            seed,
            counts,
        })
    }
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} hands of {} cards, seed {}",
            self.hands, self.size, self.seed
        )?;

        for c in &self.counts {
            writeln!(
                f,
                "{:<16} {:>10} {:>9.4}%",
                c.category.to_string(),
                c.count,
                c.frequency * 100.0
            )?;
        }

        Ok(())
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for card in cards {
        write!(f, "{card} ")?;
    }

    Ok(())
}
