// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluation of a Hold'em hand is done in two steps: [detect_category]
//! finds the strongest category that can be made with the seven cards, and
//! [select_best_five] picks the five cards that make that category ordered so
//! that they can be compared with [compare].
//!
//! Detection alone is useful when only the category is needed, see
//! [evaluate], while [best_five] returns an [EvaluatedHand] with both the
//! category and the cards, useful to compare hands and to show a winning hand.

mod category;
pub use category::{HandCategory, HandStats, detect_category};

mod hand;
pub use hand::{EvaluatedHand, compare};

mod select;
pub use select::select_best_five;

use showdown_cards::Card;

use crate::{CardSet, Result};

/// Evaluates the category of the best hand made with two hole cards and five
/// board cards.
pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<HandCategory> {
    let cards = seven_cards(hole, board)?;
    Ok(detect_category(&cards))
}

/// Evaluates the best hand made with two hole cards and five board cards.
pub fn best_five(hole: &[Card], board: &[Card]) -> Result<EvaluatedHand> {
    let cards = seven_cards(hole, board)?;
    Ok(EvaluatedHand::eval(&cards))
}

fn seven_cards(hole: &[Card], board: &[Card]) -> Result<[Card; 7]> {
    CardSet::Hole.check(hole)?;
    CardSet::Board.check(board)?;

    let mut cards = [board[0]; 7];
    cards[..2].copy_from_slice(hole);
    cards[2..].copy_from_slice(board);
    Ok(cards)
}
