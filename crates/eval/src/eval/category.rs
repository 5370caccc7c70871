// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detection.
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Rank};

/// A hand category, categories are ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
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

    /// The category display name.
    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Straight values bits for a rank.
///
/// Bit `v` is set for a rank with value `v`, an ace sets both bit 14 and bit 1
/// as it plays high and low in straights.
#[inline]
pub(super) fn straight_bits(rank: Rank) -> u16 {
    let bits = 1u16 << rank.value();
    if rank == Rank::Ace { bits | 0b10 } else { bits }
}

/// Returns the high value of the highest straight in the `bits` mask.
///
/// A five high straight (the wheel) returns 5, there is no wrap around so
/// Q-K-A-2-3 is not a straight.
pub(super) fn highest_straight(bits: u16) -> Option<u8> {
    (5..=14u8).rev().find(|&high| (bits >> (high - 4)) & 0x1f == 0x1f)
}

/// Ranks and suits counts for a 5 to 7 cards hand.
///
/// Each predicate checks if the cards can make a hand of a given category,
/// a predicate is true also when the cards make a stronger hand, for example
/// four of a kind satisfies [HandStats::has_pair].
#[derive(Debug, Clone)]
pub struct HandStats {
    /// Counts indexed by rank value.
    ranks: [u8; 15],
    /// Counts indexed by suit.
    suits: [u8; 4],
    /// Straight bits per suit.
    suit_bits: [u16; 4],
}

impl HandStats {
    /// Computes the counts for the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut stats = HandStats {
            ranks: [0; 15],
            suits: [0; 4],
            suit_bits: [0; 4],
        };

        for card in cards {
            let suit = card.suit().index();
            stats.ranks[card.rank().value() as usize] += 1;
            stats.suits[suit] += 1;
            stats.suit_bits[suit] |= straight_bits(card.rank());
        }

        stats
    }

    /// Number of ranks that appear at least `min` times.
    fn ranks_with(&self, min: u8) -> usize {
        self.ranks.iter().filter(|&&count| count >= min).count()
    }

    /// Five consecutive ranks in the same suit.
    pub fn has_straight_flush(&self) -> bool {
        self.suits
            .iter()
            .zip(self.suit_bits)
            .any(|(&count, bits)| count >= 5 && highest_straight(bits).is_some())
    }

    /// A rank that appears four times.
    pub fn has_four_of_a_kind(&self) -> bool {
        self.ranks_with(4) > 0
    }

    /// A rank that appears three times and a different rank that appears at
    /// least twice, a second three of a kind can be used as the pair.
    pub fn has_full_house(&self) -> bool {
        self.ranks_with(3) > 0 && self.ranks_with(2) > 1
    }

    /// A suit that appears five times.
    pub fn has_flush(&self) -> bool {
        self.suits.iter().any(|&count| count >= 5)
    }

    /// Five consecutive ranks of any suit.
    pub fn has_straight(&self) -> bool {
        let bits = self.suit_bits.iter().fold(0, |acc, bits| acc | bits);
        highest_straight(bits).is_some()
    }

    /// A rank that appears three times.
    pub fn has_three_of_a_kind(&self) -> bool {
        self.ranks_with(3) > 0
    }

    /// Two different ranks that appear at least twice.
    pub fn has_two_pair(&self) -> bool {
        self.ranks_with(2) > 1
    }

    /// A rank that appears twice.
    pub fn has_pair(&self) -> bool {
        self.ranks_with(2) > 0
    }

    /// The strongest category these cards can make.
    pub fn category(&self) -> HandCategory {
        if self.has_straight_flush() {
            HandCategory::StraightFlush
        } else if self.has_four_of_a_kind() {
            HandCategory::FourOfAKind
        } else if self.has_full_house() {
            HandCategory::FullHouse
        } else if self.has_flush() {
            HandCategory::Flush
        } else if self.has_straight() {
            HandCategory::Straight
        } else if self.has_three_of_a_kind() {
            HandCategory::ThreeOfAKind
        } else if self.has_two_pair() {
            HandCategory::TwoPair
        } else if self.has_pair() {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }
}

/// Detects the strongest category that can be made with 5 to 7 cards.
pub fn detect_category(cards: &[Card]) -> HandCategory {
    let category = HandStats::new(cards).category();
    trace!("{cards:?} => {category}");
    category
}
