// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hands evaluation.
use std::{cmp::Reverse, fmt, str::FromStr};

use super::{Evaluation, HandCategory, parse_cards};
use crate::{Card, Error, Rank, error::check_hand};

/// Ranks bits for an ace to five straight.
const WHEEL: u16 = (1 << 14) | (1 << 5) | (1 << 4) | (1 << 3) | (1 << 2);

/// Evaluates exactly five distinct cards.
///
/// ```
/// # use showdown_eval::*;
/// let cards = ["AS", "2D", "3C", "4H", "5S"].map(|c| c.parse::<Card>().unwrap());
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category(), HandCategory::Straight);
/// assert_eq!(eval.primary_rank(), Rank::Five);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, Error> {
    check_hand(cards, FiveCardHand::SIZE)?;

    let mut ordered = [cards[0]; FiveCardHand::SIZE];
    ordered.copy_from_slice(cards);
    ordered.sort_by_key(|c| Reverse(c.rank()));

    Ok(Evaluator::new(&ordered).evaluate())
}

/// Five cards evaluator.
///
/// Matches the categories from the strongest to the weakest and returns the
/// first match, the order resolves hands that match more than one pattern.
pub(crate) struct Evaluator<'a> {
    /// Cards by descending rank.
    ordered: &'a [Card; 5],
    /// Number of cards for each rank value.
    histogram: [u8; 15],
    /// A bit set for each rank value in the hand.
    rank_bits: u16,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for cards sorted by descending rank.
    pub(crate) fn new(ordered: &'a [Card; 5]) -> Self {
        let mut histogram = [0; 15];
        let mut rank_bits = 0;
        for card in ordered {
            let value = card.rank().value();
            histogram[value as usize] += 1;
            rank_bits |= 1 << value;
        }

        Self {
            ordered,
            histogram,
            rank_bits,
        }
    }

    pub(crate) fn evaluate(&self) -> Evaluation {
        self.straight_flush()
            .or_else(|| self.four_of_a_kind())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.three_of_a_kind())
            .or_else(|| self.two_pair())
            .or_else(|| self.pair())
            .unwrap_or_else(|| self.high_card())
    }

    fn straight_flush(&self) -> Option<Evaluation> {
        let rank = self.straight_rank().filter(|_| self.is_flush())?;
        Some(Evaluation::new(
            HandCategory::StraightFlush,
            rank,
            None,
            vec![],
        ))
    }

    fn four_of_a_kind(&self) -> Option<Evaluation> {
        let quads = self.rank_with_count(4, None)?;
        Some(Evaluation::new(
            HandCategory::FourOfAKind,
            quads,
            None,
            self.kickers(&[quads]),
        ))
    }

    fn full_house(&self) -> Option<Evaluation> {
        let trips = self.rank_with_count(3, None)?;
        let pair = self.rank_with_count(2, None)?;
        Some(Evaluation::new(
            HandCategory::FullHouse,
            trips,
            Some(pair),
            vec![],
        ))
    }

    fn flush(&self) -> Option<Evaluation> {
        if !self.is_flush() {
            return None;
        }

        Some(Evaluation::new(
            HandCategory::Flush,
            self.ordered[0].rank(),
            None,
            self.ordered[1..].to_vec(),
        ))
    }

    fn straight(&self) -> Option<Evaluation> {
        let rank = self.straight_rank()?;
        Some(Evaluation::new(HandCategory::Straight, rank, None, vec![]))
    }

    fn three_of_a_kind(&self) -> Option<Evaluation> {
        let trips = self.rank_with_count(3, None)?;
        Some(Evaluation::new(
            HandCategory::ThreeOfAKind,
            trips,
            None,
            self.kickers(&[trips]),
        ))
    }

    fn two_pair(&self) -> Option<Evaluation> {
        let high = self.rank_with_count(2, None)?;
        let low = self.rank_with_count(2, Some(high))?;
        Some(Evaluation::new(
            HandCategory::TwoPair,
            high,
            Some(low),
            self.kickers(&[high, low]),
        ))
    }

    fn pair(&self) -> Option<Evaluation> {
        let pair = self.rank_with_count(2, None)?;
        Some(Evaluation::new(
            HandCategory::Pair,
            pair,
            None,
            self.kickers(&[pair]),
        ))
    }

    fn high_card(&self) -> Evaluation {
        Evaluation::new(
            HandCategory::HighCard,
            self.ordered[0].rank(),
            None,
            self.ordered[1..].to_vec(),
        )
    }

    fn is_flush(&self) -> bool {
        let suit = self.ordered[0].suit();
        self.ordered.iter().all(|c| c.suit() == suit)
    }

    /// The highest rank of a straight, a five for the wheel.
    fn straight_rank(&self) -> Option<Rank> {
        if self.rank_bits == WHEEL {
            return Some(Rank::Five);
        }

        // Five distinct ranks in a row.
        let run = self.rank_bits >> self.rank_bits.trailing_zeros();
        (self.rank_bits.count_ones() == 5 && run == 0b11111).then(|| self.ordered[0].rank())
    }

    /// The highest rank with exactly `count` cards.
    fn rank_with_count(&self, count: u8, excluded: Option<Rank>) -> Option<Rank> {
        Rank::ranks()
            .rev()
            .filter(|&r| Some(r) != excluded)
            .find(|r| self.histogram[r.value() as usize] == count)
    }

    /// The cards that don't have any of the used ranks.
    fn kickers(&self, used: &[Rank]) -> Vec<Card> {
        self.ordered
            .iter()
            .filter(|c| !used.contains(&c.rank()))
            .copied()
            .collect()
    }
}

/// A five cards Poker hand.
///
/// The hand is evaluated when it is created, hands are compared by their
/// evaluations:
///
/// ```
/// # use showdown_eval::*;
/// let royal = "TS JS QS KS AS".parse::<FiveCardHand>().unwrap();
/// let quads = "AC AD AH AS KC".parse::<FiveCardHand>().unwrap();
/// assert!(royal.beats(&quads));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiveCardHand {
    cards: [Card; 5],
    ordered: [Card; 5],
    evaluation: Evaluation,
}

impl FiveCardHand {
    /// The number of cards in the hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from exactly five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, Error> {
        check_hand(cards, Self::SIZE)?;

        let mut hand = [cards[0]; Self::SIZE];
        hand.copy_from_slice(cards);

        let mut ordered = hand;
        ordered.sort_by_key(|c| Reverse(c.rank()));

        Ok(Self::from_parts(hand, ordered))
    }

    /// Creates a hand from valid cards and their descending rank order.
    pub(crate) fn from_parts(cards: [Card; 5], ordered: [Card; 5]) -> Self {
        let evaluation = Evaluator::new(&ordered).evaluate();
        Self {
            cards,
            ordered,
            evaluation,
        }
    }

    /// The cards in the order they were given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards sorted by descending rank.
    pub fn ordered(&self) -> &[Card] {
        &self.ordered
    }

    /// This hand evaluation.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Checks if this hand beats the other.
    pub fn beats(&self, other: &FiveCardHand) -> bool {
        self.evaluation.beats(&other.evaluation)
    }

    /// Checks if this hand ties with the other.
    pub fn ties_with(&self, other: &FiveCardHand) -> bool {
        self.evaluation.ties_with(&other.evaluation)
    }

    /// Checks if this hand loses to the other.
    pub fn loses_to(&self, other: &FiveCardHand) -> bool {
        self.evaluation.loses_to(&other.evaluation)
    }
}

impl FromStr for FiveCardHand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(&parse_cards(s)?)
    }
}

impl fmt::Display for FiveCardHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }

        write!(f, "-> {}", self.evaluation)
    }
}
