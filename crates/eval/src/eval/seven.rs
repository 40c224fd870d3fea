// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards hands resolution.
use log::debug;
use std::{cmp::Reverse, fmt, str::FromStr};

use super::{Evaluation, FiveCardHand, parse_cards};
use crate::{Card, Error, error::check_hand};

/// Finds the best five cards hand out of exactly seven distinct cards.
///
/// Returns the best evaluation and the five cards that make it in the order
/// they appear in `cards`. When more than one subset has the best evaluation
/// the one that comes first in `cards` order wins.
///
/// ```
/// # use showdown_eval::*;
/// let cards = parse_cards("AC AD AS 2C 2D KC 5D").unwrap();
/// let (eval, best) = resolve(&cards).unwrap();
/// assert_eq!(eval.category(), HandCategory::FullHouse);
/// assert_eq!(eval.primary_rank(), Rank::Ace);
/// assert_eq!(eval.secondary_rank(), Some(Rank::Deuce));
/// assert_eq!(best, parse_cards("AC AD AS 2C 2D").unwrap().as_slice());
/// ```
pub fn resolve(cards: &[Card]) -> Result<(Evaluation, [Card; 5]), Error> {
    let hand = SevenCardHand::new(cards)?;
    let best = hand.best_hand();
    let mut five = [cards[0]; FiveCardHand::SIZE];
    five.copy_from_slice(best.cards());
    Ok((best.evaluation().clone(), five))
}

/// Evaluates the 21 five cards subsets, sorting the seven cards only once.
///
/// Subsets are visited in lexicographic order of the positions they include,
/// the first subset with the best evaluation wins.
fn best_five(cards: &[Card; 7]) -> FiveCardHand {
    // Positions of the cards by descending rank.
    let mut by_rank = [0, 1, 2, 3, 4, 5, 6];
    by_rank.sort_by_key(|&i| Reverse(cards[i].rank()));

    let subset = |x1: usize, x2: usize| {
        let mut hand = [cards[0]; FiveCardHand::SIZE];
        let mut ordered = [cards[0]; FiveCardHand::SIZE];

        let positions = (0..SevenCardHand::SIZE).filter(|&i| i != x1 && i != x2);
        for (h, pos) in hand.iter_mut().zip(positions) {
            *h = cards[pos];
        }

        let positions = by_rank.iter().filter(|&&i| i != x1 && i != x2);
        for (o, &pos) in ordered.iter_mut().zip(positions) {
            *o = cards[pos];
        }

        FiveCardHand::from_parts(hand, ordered)
    };

    // Including the lowest positions first means excluding the highest, the
    // first subset excludes the last two cards.
    let mut best = subset(5, 6);
    for x1 in (0..5).rev() {
        for x2 in ((x1 + 1)..SevenCardHand::SIZE).rev() {
            let candidate = subset(x1, x2);
            if candidate.beats(&best) {
                best = candidate;
            }
        }
    }

    debug!("Best hand {:?} {}", best.cards(), best.evaluation());
    best
}

/// A seven cards Poker hand.
///
/// The best five cards hand is found when the hand is created:
///
/// ```
/// # use showdown_eval::*;
/// let hand = "AC 6H 7D 8S 9C QH TD".parse::<SevenCardHand>().unwrap();
/// assert_eq!(hand.evaluation().category(), HandCategory::Straight);
/// assert_eq!(hand.evaluation().primary_rank(), Rank::Ten);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SevenCardHand {
    cards: [Card; 7],
    best: FiveCardHand,
}

impl SevenCardHand {
    /// The number of cards in the hand.
    pub const SIZE: usize = 7;

    /// Creates a hand from exactly seven distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self, Error> {
        check_hand(cards, Self::SIZE)?;

        let mut hand = [cards[0]; Self::SIZE];
        hand.copy_from_slice(cards);

        Ok(Self {
            cards: hand,
            best: best_five(&hand),
        })
    }

    /// The cards in the order they were given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards sorted by descending rank.
    pub fn ordered(&self) -> Vec<Card> {
        let mut ordered = self.cards.to_vec();
        ordered.sort_by_key(|c| Reverse(c.rank()));
        ordered
    }

    /// The best five cards hand.
    pub fn best_hand(&self) -> &FiveCardHand {
        &self.best
    }

    /// The best five cards hand evaluation.
    pub fn evaluation(&self) -> &Evaluation {
        self.best.evaluation()
    }

    /// Checks if this hand beats the other.
    pub fn beats(&self, other: &SevenCardHand) -> bool {
        self.evaluation().beats(other.evaluation())
    }

    /// Checks if this hand ties with the other.
    pub fn ties_with(&self, other: &SevenCardHand) -> bool {
        self.evaluation().ties_with(other.evaluation())
    }

    /// Checks if this hand loses to the other.
    pub fn loses_to(&self, other: &SevenCardHand) -> bool {
        self.evaluation().loses_to(other.evaluation())
    }
}

impl FromStr for SevenCardHand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(&parse_cards(s)?)
    }
}

impl fmt::Display for SevenCardHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }

        write!(f, "-> best {}", self.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, HandCategory, Rank::{self, *}, evaluate};
    use rand::{SeedableRng, rngs::SmallRng};

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn hand(s: &str) -> SevenCardHand {
        s.parse().unwrap()
    }

    fn check(
        s: &str,
        category: HandCategory,
        primary: Rank,
        secondary: Option<Rank>,
        kickers: &str,
    ) {
        let h = hand(s);
        let e = h.evaluation();
        assert_eq!(e.category(), category, "{s}");
        assert_eq!(e.primary_rank(), primary, "{s}");
        assert_eq!(e.secondary_rank(), secondary, "{s}");
        assert_eq!(e.kickers(), cards(kickers), "{s}");
    }

    #[test]
    fn seven_card_hand() {
        let h = hand("AC 6H 7D 8S 9C QH TD");
        assert_eq!(h.cards(), cards("AC 6H 7D 8S 9C QH TD"));
        assert_eq!(h.ordered(), cards("AC QH TD 9C 8S 7D 6H"));
        assert_eq!(h.evaluation().category(), HandCategory::Straight);
        assert_eq!(h.evaluation().primary_rank(), Ten);
        assert_eq!(h.best_hand().cards(), cards("6H 7D 8S 9C TD"));
        assert_eq!(h.best_hand().ordered(), cards("TD 9C 8S 7D 6H"));

        let h = hand("KC 2H AD AS AC 2D 5D");
        assert_eq!(h.ordered(), cards("AD AS AC KC 5D 2H 2D"));
        check(
            "KC 2H AD AS AC 2D 5D",
            HandCategory::FullHouse,
            Ace,
            Some(Deuce),
            "",
        );
    }

    #[test]
    fn aces_over_deuces() {
        let (eval, best) = resolve(&cards("AC AD AS 2C 2D KC 5D")).unwrap();
        assert_eq!(eval.category(), HandCategory::FullHouse);
        assert_eq!(eval.primary_rank(), Ace);
        assert_eq!(eval.secondary_rank(), Some(Deuce));
        assert!(eval.kickers().is_empty());
        assert_eq!(best, cards("AC AD AS 2C 2D").as_slice());
    }

    #[test]
    fn illegal_hands() {
        let err = |s: &str| SevenCardHand::new(&cards(s)).unwrap_err();

        assert_eq!(
            err("AC QH QD 2S 9C"),
            Error::HandSize {
                expected: 7,
                found: 5
            }
        );
        assert_eq!(
            err("4C QH QD 2S 4D 3H"),
            Error::HandSize {
                expected: 7,
                found: 6
            }
        );
        assert_eq!(
            err("4C QH QD 2S 4D 3H 5C 6D"),
            Error::HandSize {
                expected: 7,
                found: 8
            }
        );
        assert_eq!(
            err(""),
            Error::HandSize {
                expected: 7,
                found: 0
            }
        );
        assert_eq!(
            err("4C QH QD 2S 4D 3H QH"),
            Error::DuplicateCard("QH".parse().unwrap())
        );
        assert!(matches!(
            resolve(&cards("AC QH QD 2S 9C")),
            Err(Error::HandSize { found: 5, .. })
        ));
    }

    #[test]
    fn straight_flush() {
        use HandCategory::StraightFlush;
        check("7C TC 6C 9C JC QC 8C", StraightFlush, Queen, None, "");
        check("AC TH 2H 9H JH QH 8H", StraightFlush, Queen, None, "");
        check("3D AD 2D QD JD 4D 5D", StraightFlush, Five, None, "");
    }

    #[test]
    fn four_of_a_kind() {
        use HandCategory::FourOfAKind;
        check("AC AH AD 8S 2C 3D AS", FourOfAKind, Ace, None, "8S");
        check("8C 8H 8D AS AC AD 8S", FourOfAKind, Eight, None, "AS");
    }

    #[test]
    fn full_house() {
        use HandCategory::FullHouse;
        check("QC QH QD 5S 5C 2D JH", FullHouse, Queen, Some(Five), "");
        check("9C 9H 9D 8S 8C AD 8H", FullHouse, Nine, Some(Eight), "");
    }

    #[test]
    fn flush() {
        use HandCategory::Flush;
        check("2C AC QC JC 8C 4C KH", Flush, Ace, None, "QC JC 8C 4C");
        check("2S AS QC JS 8S 4S KD", Flush, Ace, None, "JS 8S 4S 2S");
        check("2D QD JD 8D 4D KH AH", Flush, Queen, None, "JD 8D 4D 2D");

        let clubs = hand("2C AC QC JC 8C 4C KH");
        let spades = hand("2S AS QC JS 8S 4S KD");
        let diamonds = hand("2D QD JD 8D 4D KH AH");
        assert!(clubs.beats(&spades));
        assert!(spades.beats(&diamonds));
    }

    #[test]
    fn straight() {
        use HandCategory::Straight;
        check("3C 4H 5D AS 7C 8D 2H", Straight, Five, None, "");
        check("JC 7H 6D 5S TC 9D 8H", Straight, Jack, None, "");
        check("JC 7H JD JS TC 9D 8H", Straight, Jack, None, "");

        let straight = hand("JC 7H 6D 5S TC 9D 8H");
        let with_trips = hand("JC 7H JD JS TC 9D 8H");
        assert!(straight.ties_with(&with_trips));
    }

    #[test]
    fn three_of_a_kind() {
        use HandCategory::ThreeOfAKind;
        check("KC KH KD 2S 5C 3D AS", ThreeOfAKind, King, None, "AS 5C");
        check("5C KH KD 2S KC 3D QS", ThreeOfAKind, King, None, "QS 5C");
        check("QC AH 6D 2S 6C 6S KS", ThreeOfAKind, Six, None, "AH KS");

        let ace_kicker = hand("KC KH KD 2S 5C 3D AS");
        let queen_kicker = hand("5C KH KD 2S KC 3D QS");
        assert!(ace_kicker.beats(&queen_kicker));
    }

    #[test]
    fn two_pair() {
        use HandCategory::TwoPair;
        check("AC AH QD QS JC 3D 3S", TwoPair, Ace, Some(Queen), "JC");
        check("AC AH QD QS TC 3D TS", TwoPair, Ace, Some(Queen), "TC");

        let jack_kicker = hand("AC AH QD QS JC 3D 3S");
        let ten_kicker = hand("AC AH QD QS TC 3D TS");
        assert!(jack_kicker.beats(&ten_kicker));
    }

    #[test]
    fn one_pair() {
        use HandCategory::Pair;
        check("KC KH 2D 3S 5C 9D AS", Pair, King, None, "AS 9D 5C");
        check("KC KH 2D 3S 5C 4D QS", Pair, King, None, "QS 5C 4D");
    }

    #[test]
    fn high_card() {
        use HandCategory::HighCard;
        check("AC KH QD JS 4C 9D 8H", HighCard, Ace, None, "KH QD JS 9D");
        check("9C 7H 8D 5S 4C 3D 2H", HighCard, Nine, None, "8D 7H 5S 4C");
    }

    #[test]
    fn ties_pick_first_subset() {
        // The five spades play.
        let h = hand("2C 3D AS KS QS JS TS");
        assert_eq!(h.evaluation().category(), HandCategory::StraightFlush);
        assert_eq!(h.best_hand().cards(), cards("AS KS QS JS TS"));

        // Two equal straights, the one with the first nine comes first.
        let h = hand("9C 8D 7H 6S 5C 9S 2D");
        assert_eq!(h.evaluation().category(), HandCategory::Straight);
        assert_eq!(h.evaluation().primary_rank(), Nine);
        assert_eq!(h.best_hand().cards(), cards("9C 8D 7H 6S 5C"));

        let (_, best) = resolve(&cards("9S 2D 9C 8D 7H 6S 5C")).unwrap();
        assert_eq!(best, cards("9S 8D 7H 6S 5C").as_slice());
    }

    #[test]
    fn resolve_does_not_mutate_input() {
        let input = cards("KC 2H AD AS AC 2D 5D");
        let copy = input.clone();
        let _ = resolve(&input).unwrap();
        assert_eq!(input, copy);
    }

    #[test]
    fn best_is_max_of_all_subsets() {
        let mut rng = SmallRng::seed_from_u64(2025);

        for _ in 0..500 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let seven = deck.deal_cards(SevenCardHand::SIZE);
            let h = SevenCardHand::new(&seven).unwrap();

            // Evaluate every 5 cards subset from a fresh deck of these cards.
            let mut best: Option<Evaluation> = None;
            for x1 in 0..7 {
                for x2 in (x1 + 1)..7 {
                    let five = seven
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| *i != x1 && *i != x2)
                        .map(|(_, c)| *c)
                        .collect::<Vec<_>>();
                    let e = evaluate(&five).unwrap();
                    if best.as_ref().is_none_or(|b| e > *b) {
                        best = Some(e);
                    }
                }
            }

            let best = best.unwrap();
            assert!(h.evaluation().ties_with(&best), "{h}");
            assert_eq!(evaluate(h.best_hand().cards()).unwrap(), best);
            assert!(h.best_hand().cards().iter().all(|c| seven.contains(c)));
        }
    }
}
