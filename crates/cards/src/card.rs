// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};

/// Rank names used in card tokens.
static RANK_NAMES: LazyLock<AHashMap<&'static str, Rank>> =
    LazyLock::new(|| Rank::ranks().map(|rank| (rank.name(), rank)).collect());

/// Error returned when a card token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid card token {token:?}")]
pub struct InvalidCardToken {
    /// The token that failed to parse.
    pub token: String,
}

/// A Poker card.
///
/// Cards are ordered by rank and then by suit, the suit order only makes the
/// ordering total and has no meaning when comparing hands.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Parses a card token like `10S`, `AH` or `2D`.
    ///
    /// The token is a rank name (`2`..`10`, `J`, `Q`, `K`, `A`) immediately
    /// followed by a suit symbol (`C`, `D`, `H`, `S`), both case sensitive.
    pub fn parse(token: &str) -> Result<Card, InvalidCardToken> {
        let invalid = || InvalidCardToken {
            token: token.to_string(),
        };

        let mut chars = token.chars();
        let suit = chars.next_back().and_then(Suit::from_symbol).ok_or_else(invalid)?;
        let rank = RANK_NAMES.get(chars.as_str()).copied().ok_or_else(invalid)?;

        Ok(Card::new(rank, suit))
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl FromStr for Card {
    type Err = InvalidCardToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

/// Parses a sequence of card tokens, stops at the first invalid token.
pub fn parse_cards<'a, I>(tokens: I) -> Result<Vec<Card>, InvalidCardToken>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().map(Card::parse).collect()
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

/// Card rank.
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
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The numeric rank value, from 2 for a deuce to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The rank name used in card tokens.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
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

    /// The suit position in [Suit::suits], useful for indexing per suit arrays.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The suit symbol used in card tokens.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Gets a suit from its symbol.
    pub fn from_symbol(symbol: char) -> Option<Suit> {
        match symbol {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(Card::parse("10S"), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!(Card::parse("AH"), Ok(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(Card::parse("2D"), Ok(Card::new(Rank::Deuce, Suit::Diamonds)));
        assert_eq!("QC".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Clubs)));

        let card = Card::parse("JS").unwrap();
        assert_eq!(card.rank().value(), 11);
        assert_eq!(card.suit(), Suit::Spades);
    }

    #[test]
    fn parse_invalid_tokens() {
        for token in ["", "S", "A", "10", "1S", "11H", "TS", "AX", "ah", "As", " AH", "AH ", "10SS"] {
            let err = Card::parse(token).unwrap_err();
            assert_eq!(err.token, token);
        }

        let err = Card::parse("ZZ").unwrap_err();
        assert_eq!(err.to_string(), "invalid card token \"ZZ\"");
    }

    #[test]
    fn parse_all_cards() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(Card::parse(&card.to_string()), Ok(card));
            }
        }
    }

    #[test]
    fn parse_many() {
        let cards = parse_cards(["8S", "9S", "10S"]).unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Eight, Suit::Spades),
                Card::new(Rank::Nine, Suit::Spades),
                Card::new(Rank::Ten, Suit::Spades),
            ]
        );

        let err = parse_cards("8S 9X 10S".split_whitespace()).unwrap_err();
        assert_eq!(err.token, "9X");
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());
        assert!(Rank::Ace > Rank::King);
    }

    #[test]
    fn card_ordering_by_rank_first() {
        let ace = Card::new(Rank::Ace, Suit::Clubs);
        let king = Card::new(Rank::King, Suit::Spades);
        assert!(ace > king);

        let ace_spades = Card::new(Rank::Ace, Suit::Spades);
        assert_ne!(ace, ace_spades);
        assert!(ace_spades > ace);
    }
}
