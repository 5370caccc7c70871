// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards selection.
use showdown_cards::{Card, Rank, Suit};

use super::category::{HandCategory, highest_straight, straight_bits};

/// Selects the five cards that make a `category` hand out of 5 to 7 cards.
///
/// Cards are ordered with the most significant group first followed by the
/// kickers in descending rank order, straights are in ascending order with an
/// ace playing low first in a five high straight.
///
/// Returns `None` if the cards cannot make a `category` hand.
pub fn select_best_five(cards: &[Card], category: HandCategory) -> Option<[Card; 5]> {
    // Highest first, the selection doesn't depend on the input order.
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let five = match category {
        HandCategory::StraightFlush => {
            Suit::suits().find_map(|suit| suited(&sorted, suit).and_then(|c| best_straight(&c)))
        }
        HandCategory::FourOfAKind => groups_and_kickers(&sorted, &[4]),
        HandCategory::FullHouse => groups_and_kickers(&sorted, &[3, 2]),
        HandCategory::Flush => Suit::suits().find_map(|suit| suited(&sorted, suit)),
        HandCategory::Straight => best_straight(&sorted),
        HandCategory::ThreeOfAKind => groups_and_kickers(&sorted, &[3]),
        HandCategory::TwoPair => groups_and_kickers(&sorted, &[2, 2]),
        HandCategory::OnePair => groups_and_kickers(&sorted, &[2]),
        HandCategory::HighCard => groups_and_kickers(&sorted, &[]),
    }?;

    five.into_iter().take(5).collect::<Vec<_>>().try_into().ok()
}

/// The cards of a suit if there are at least five of them.
fn suited(cards: &[Card], suit: Suit) -> Option<Vec<Card>> {
    let suited = cards
        .iter()
        .copied()
        .filter(|c| c.suit() == suit)
        .collect::<Vec<_>>();
    (suited.len() >= 5).then_some(suited)
}

/// The five cards of the highest straight in ascending order.
fn best_straight(cards: &[Card]) -> Option<Vec<Card>> {
    let bits = cards.iter().fold(0, |acc, c| acc | straight_bits(c.rank()));
    let high = highest_straight(bits)?;

    let straight = (high - 4..=high)
        .filter_map(|value| {
            cards
                .iter()
                .copied()
                .find(|c| c.rank().value() == value || (value == 1 && c.rank() == Rank::Ace))
        })
        .collect();

    Some(straight)
}

/// Takes a group of cards of the same rank for each size in `groups`, then
/// fills the hand with the highest cards of the remaining ranks.
///
/// Each group uses the highest rank with enough cards not used by a previous
/// group, so with two three of a kind for a full house the higher rank is the
/// three of a kind and the lower one gives two cards for the pair.
fn groups_and_kickers(cards: &[Card], groups: &[usize]) -> Option<Vec<Card>> {
    let mut five: Vec<Card> = Vec::with_capacity(5);
    let mut used: Vec<Rank> = Vec::with_capacity(groups.len());

    for &size in groups {
        let rank = Rank::ranks().rev().find(|rank| {
            !used.contains(rank) && cards.iter().filter(|c| c.rank() == *rank).count() >= size
        })?;

        used.push(rank);
        five.extend(cards.iter().filter(|c| c.rank() == rank).take(size));
    }

    let missing = 5 - five.len();
    five.extend(
        cards
            .iter()
            .filter(|c| !used.contains(&c.rank()))
            .take(missing),
    );

    Some(five)
}
