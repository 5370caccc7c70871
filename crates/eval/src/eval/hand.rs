// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluated hands and their comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Card;

use super::{HandCategory, detect_category, select_best_five};

/// The best hand made with 5 to 7 cards.
///
/// Hands are compared with [compare], so two hands with the same strength
/// are equal even if they are made of different cards or suits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    cards: [Card; 5],
}

impl EvaluatedHand {
    /// Creates a hand from a category and its five cards.
    ///
    /// The cards order must be the one produced by [select_best_five].
    pub fn new(category: HandCategory, cards: [Card; 5]) -> Self {
        Self { category, cards }
    }

    /// Evaluates the best hand that can be made with 5 to 7 cards.
    ///
    /// Panics if there are less than 5 cards.
    pub fn eval(cards: &[Card]) -> Self {
        assert!(cards.len() >= 5, "A hand needs at least 5 cards");

        let category = detect_category(cards);
        let best = select_best_five(cards, category).expect("A detected category is selectable");
        Self::new(category, best)
    }

    /// The hand category.
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// The five cards that make the hand.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    fn values(&self) -> [u8; 5] {
        self.cards.map(|c| c.rank().value())
    }

    fn values_descending(&self) -> [u8; 5] {
        let mut values = self.values();
        values.sort_unstable_by(|a, b| b.cmp(a));
        values
    }

    /// The straight high card value, a wheel (A-2-3-4-5) is five high.
    fn straight_high(&self) -> u8 {
        match self.values_descending() {
            [14, 5, 4, 3, 2] => 5,
            [high, ..] => high,
        }
    }
}

/// Compares two hands.
///
/// Hands are compared by category first, hands with the same category are
/// compared by their straight high card for straights, by their ranks in
/// descending order for flushes and high cards, and by their ranks in hand
/// order for the other categories so that groups are compared before kickers.
/// Suits never break ties.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.category.cmp(&b.category).then_with(|| match a.category {
        HandCategory::Straight | HandCategory::StraightFlush => {
            a.straight_high().cmp(&b.straight_high())
        }
        HandCategory::Flush | HandCategory::HighCard => {
            a.values_descending().cmp(&b.values_descending())
        }
        HandCategory::FourOfAKind
        | HandCategory::FullHouse
        | HandCategory::ThreeOfAKind
        | HandCategory::TwoPair
        | HandCategory::OnePair => a.values().cmp(&b.values()),
    })
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, c4, c5] = self.cards;
        write!(f, "{} [{c1} {c2} {c3} {c4} {c5}]", self.category)
    }
}
