// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Error returned when parsing a rank, a suit, or a card fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token is not a valid rank.
    #[error("invalid rank '{0}'")]
    Rank(String),
    /// The token is not a valid suit.
    #[error("invalid suit '{0}'")]
    Suit(String),
    /// The token is not a valid card.
    #[error("invalid card '{0}'")]
    Card(String),
}

/// A Poker card.
///
/// Two cards are equal when both rank and suit match. Cards are not `Ord`, to
/// sort cards by strength use their [Card::rank] as the sort key, the suit
/// never breaks ties:
///
/// ```
/// # use showdown_cards::{Card, Rank, Suit};
/// let mut cards = ["2H", "AS", "TD"]
///     .into_iter()
///     .map(|s| s.parse::<Card>().unwrap())
///     .collect::<Vec<_>>();
/// cards.sort_by_key(|c| std::cmp::Reverse(c.rank()));
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Parses a card from separate rank and suit tokens, e.g. `("ace", "s")`.
    pub fn parse(rank: &str, suit: &str) -> Result<Card, ParseError> {
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }

    /// This card unique id in the range 0..52.
    pub fn id(&self) -> u8 {
        self.suit.index() * 13 + (self.rank.value() - 2)
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses the compact form, a rank followed by a one character suit like
    /// `AS`, `10h`, `Td`, or `q♡`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| ParseError::Card(s.to_string()))?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseError::Card(s.to_string()));
        }

        let suit = Suit::try_from(suit).map_err(|_| ParseError::Card(s.to_string()))?;
        let rank = rank.parse().map_err(|_| ParseError::Card(s.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
///
/// The discriminant is the rank numeric strength, from 2 for a deuce up to 14
/// for an ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric strength 2..=14.
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .find(|r| r.value() == value)
            .ok_or_else(|| ParseError::Rank(value.to_string()))
    }
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.trim().to_ascii_uppercase().as_str() {
            "2" | "DEUCE" | "TWO" => Rank::Deuce,
            "3" | "TREY" | "THREE" => Rank::Trey,
            "4" | "FOUR" => Rank::Four,
            "5" | "FIVE" => Rank::Five,
            "6" | "SIX" => Rank::Six,
            "7" | "SEVEN" => Rank::Seven,
            "8" | "EIGHT" => Rank::Eight,
            "9" | "NINE" => Rank::Nine,
            "10" | "T" | "TEN" => Rank::Ten,
            "J" | "JACK" => Rank::Jack,
            "Q" | "QUEEN" => Rank::Queen,
            "K" | "KING" => Rank::King,
            "A" | "ACE" => Rank::Ace,
            _ => return Err(ParseError::Rank(s.to_string())),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            r => write!(f, "{}", r.value()),
        }
    }
}

/// Card suit.
///
/// Suits are only used to detect flushes and never to rank a hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit position in the [Suit::suits] sequence.
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    /// The suit glyph.
    pub fn glyph(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♢',
            Suit::Hearts => '♡',
            Suit::Spades => '♠',
        }
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' | '♣' | '♧' => Ok(Suit::Clubs),
            'D' | 'd' | '♦' | '♢' => Ok(Suit::Diamonds),
            'H' | 'h' | '♥' | '♡' => Ok(Suit::Hearts),
            'S' | 's' | '♠' | '♤' => Ok(Suit::Spades),
            _ => Err(ParseError::Suit(c.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Suit::try_from(c);
        }

        match token.to_ascii_uppercase().as_str() {
            "CLUBS" => Ok(Suit::Clubs),
            "DIAMONDS" => Ok(Suit::Diamonds),
            "HEARTS" => Ok(Suit::Hearts),
            "SPADES" => Ok(Suit::Spades),
            _ => Err(ParseError::Suit(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
