// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A cards deck with a dealing cursor.
use ahash::AHashSet;
use log::trace;
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck.
///
/// The deck is always a permutation of the 52 cards, dealing moves a cursor
/// over the cards so that a card is never dealt twice until [Deck::reset] is
/// called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    top: usize,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck shuffled `shuffles` times and then cut if `cut` is set.
    pub fn with_shuffles<R: Rng>(shuffles: usize, cut: bool, rng: &mut R) -> Self {
        let mut deck = Self::default();
        for _ in 0..shuffles {
            deck.shuffle(rng);
        }

        if cut {
            deck.cut();
        }

        deck
    }

    /// Shuffles all the cards, the dealing cursor is left where it is.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        trace!("Deck shuffled top={}", self.top);
    }

    /// Moves the bottom half of the deck on top of the top half.
    pub fn cut(&mut self) {
        let half = self.cards.len() / 2;
        self.cards.rotate_left(half);
        trace!("Deck cut at {half}");
    }

    /// Moves the dealing cursor back to the top card.
    pub fn reset(&mut self) {
        self.top = 0;
    }

    /// Deals a card from the deck, returns `None` if all cards have been dealt.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.peek()?;
        self.top += 1;
        Some(card)
    }

    /// Deals up to `n` cards, fewer if the deck runs out of cards.
    pub fn deal_cards(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.remaining());
        let cards = self.cards[self.top..self.top + n].to_vec();
        self.top += n;
        cards
    }

    /// The next card to deal without dealing it.
    pub fn peek(&self) -> Option<Card> {
        self.cards.get(self.top).copied()
    }

    /// The card at the given position, dealt or not.
    pub fn card_at(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// The position of a card in the deck.
    pub fn index_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| c == &card)
    }

    /// The position of the next card to deal.
    pub fn top_index(&self) -> usize {
        self.top
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.top
    }

    /// Checks if all cards have been dealt.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Moves a card to the given position.
    ///
    /// Positions past the end of the deck put the card at the bottom, see
    /// [Deck::put_cards] for dealt cards.
    pub fn put_card(&mut self, card: Card, index: usize) {
        self.put_cards(&[card], index);
    }

    /// Moves a card to the top of the cards left to deal.
    pub fn put_card_on_top(&mut self, card: Card) {
        self.put_card(card, 0);
    }

    /// Moves cards to consecutive positions starting at `index`.
    ///
    /// Only cards left to deal are moved, dealt cards stay where they are and
    /// `index` is clamped to the positions after the dealing cursor. A card
    /// repeated in `cards` is moved only once at its first position.
    pub fn put_cards(&mut self, cards: &[Card], index: usize) {
        let top = self.top;
        let mut seen = AHashSet::with_capacity(cards.len());
        let cards = cards
            .iter()
            .copied()
            .filter(|c| self.index_of(*c).is_some_and(|pos| pos >= top))
            .filter(|c| seen.insert(*c))
            .collect::<Vec<_>>();

        if cards.is_empty() {
            return;
        }

        // All removed cards are after the cursor.
        self.cards.retain(|c| !seen.contains(c));
        let index = index.clamp(top, self.cards.len());
        self.cards.splice(index..index, cards);
        trace!("Moved {} cards at {index} top={top}", seen.len());
    }

    /// Calls the `f` closure for each k-cards hand from the cards left to deal.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let cards = &self.cards[self.top..];
        let n = cards.len();
        if k > n {
            return;
        }

        // Lexicographic k-subsets of positions.
        let mut pos = (0..k).collect::<Vec<_>>();
        let mut hand = cards[..k].to_vec();

        loop {
            for (h, &p) in hand.iter_mut().zip(&pos) {
                *h = cards[p];
            }

            f(&hand);

            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards, top: 0 }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::SmallRng;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn deal_and_shuffle() {
        let mut deck = Deck::default();
        assert_eq!(deck.deal(), Some(card("2C")));
        assert_eq!(deck.deal(), Some(card("3C")));
        assert_eq!(deck.peek(), Some(card("4C")));
        assert_eq!(deck.deal(), Some(card("4C")));
        assert!(deck.deal_cards(0).is_empty());
        assert_eq!(
            deck.deal_cards(5),
            ["5C", "6C", "7C", "8C", "9C"].map(card).to_vec()
        );
        assert_eq!(deck.peek(), Some(card("TC")));
        assert_eq!(deck.deal_cards(52).len(), 44);
        assert!(deck.deal_cards(1).is_empty());
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
        assert_eq!(deck.peek(), None);
        assert_eq!(deck.top_index(), Deck::SIZE);
        assert_eq!(deck.deal(), None);
        assert_eq!(deck.top_index(), Deck::SIZE);

        deck.reset();
        assert_eq!(deck.peek(), Some(card("2C")));
        assert_eq!(deck.remaining(), Deck::SIZE);

        deck.cut();
        assert_eq!(deck.peek(), Some(card("2H")));
        assert_eq!(deck.card_at(Deck::SIZE - 1), Some(card("AD")));

        let mut rng = SmallRng::seed_from_u64(101);
        let shuffled = Deck::with_shuffles(10, false, &mut rng);
        assert_ne!(shuffled, Deck::default());
        assert_eq!(Deck::with_shuffles(0, false, &mut rng), Deck::default());

        // Same seed same permutation.
        let d1 = Deck::new_and_shuffled(&mut SmallRng::seed_from_u64(7));
        let d2 = Deck::new_and_shuffled(&mut SmallRng::seed_from_u64(7));
        assert_eq!(d1, d2);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        deck.cut();

        let mut cards = HashSet::default();
        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn shuffle_keeps_cursor() {
        let mut deck = Deck::default();
        deck.deal_cards(10);
        deck.shuffle(&mut SmallRng::seed_from_u64(3));
        assert_eq!(deck.top_index(), 10);
        assert_eq!(deck.remaining(), 42);
    }

    #[test]
    fn put_cards() {
        let mut deck = Deck::default();
        deck.put_card(card("AH"), 26);
        assert_eq!(deck.card_at(26), Some(card("AH")));

        deck.put_card_on_top(card("AH"));
        assert_eq!(deck.card_at(0), Some(card("AH")));
        assert_eq!(deck.card_at(1), Some(card("2C")));
        assert_ne!(deck.card_at(26), Some(card("AH")));

        deck.put_card(card("AH"), 51);
        assert_eq!(deck.card_at(51), Some(card("AH")));
        assert_ne!(deck.card_at(0), Some(card("AH")));

        deck.put_card(card("QS"), 51);
        assert_eq!(deck.card_at(51), Some(card("QS")));

        // Past the end goes to the bottom.
        deck.put_card(card("7S"), 52);
        assert_eq!(deck.card_at(51), Some(card("7S")));

        deck.put_cards(&[card("JC"), card("4D")], 26);
        assert_eq!(deck.card_at(26), Some(card("JC")));
        assert_eq!(deck.card_at(27), Some(card("4D")));

        deck.put_cards(&[card("2H"), card("3S"), card("2H")], 0);
        assert_eq!(deck.card_at(0), Some(card("2H")));
        assert_eq!(deck.card_at(1), Some(card("3S")));
        assert_ne!(deck.card_at(2), Some(card("2H")));

        deck.put_cards(&[], 0);
        assert_eq!(deck.card_at(0), Some(card("2H")));

        let cards = deck.into_iter().collect::<HashSet<_>>();
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn put_cards_at_bottom() {
        let mut deck = Deck::default();
        deck.put_cards(&[card("2C"), card("3C")], 51);
        assert_eq!(deck.card_at(50), Some(card("2C")));
        assert_eq!(deck.card_at(51), Some(card("3C")));
        assert_eq!(deck.index_of(card("4C")), Some(0));
    }

    #[test]
    fn put_cards_keeps_dealt_cards() {
        let mut deck = Deck::default();
        let dealt = deck.deal_cards(10);

        // Dealt cards don't move.
        deck.put_card(card("2C"), 51);
        assert_eq!(deck.card_at(0), Some(card("2C")));
        assert_eq!(deck.card_at(51), Some(card("AS")));
        assert_eq!(deck.peek(), Some(card("QC")));

        // Positions before the cursor go to the next card to deal.
        deck.put_card_on_top(card("AS"));
        assert_eq!(deck.top_index(), 10);
        assert_eq!(deck.peek(), Some(card("AS")));

        deck.put_cards(&[card("3C"), card("KD"), card("JH")], 5);
        assert_eq!(deck.deal_cards(2), vec![card("KD"), card("JH")]);

        let rest = deck.deal_cards(Deck::SIZE);
        assert_eq!(rest.len(), 40);
        assert!(rest.iter().all(|c| !dealt.contains(c)));
        assert!(rest.contains(&card("QC")));

        let all = dealt
            .into_iter()
            .chain(rest)
            .chain([card("KD"), card("JH")])
            .collect::<HashSet<_>>();
        assert_eq!(all.len(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_skips_dealt() {
        let mut deck = Deck::default();
        deck.deal_cards(45);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert!(!cards.contains(&card("2C")));
            count += 1;
        });
        assert_eq!(count, 21);

        deck.deal_cards(3);
        deck.for_each(5, |_| panic!("Only 4 cards left"));
    }
}
