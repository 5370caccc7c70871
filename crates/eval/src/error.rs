// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use std::fmt;

use showdown_cards::{Card, InvalidCardToken};

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the evaluator, they are always caused by invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A card token could not be parsed.
    #[error(transparent)]
    InvalidCardToken(#[from] InvalidCardToken),
    /// A set of cards doesn't have the expected number of cards.
    #[error("expected {expected} {set} cards, got {got}")]
    MalformedHandSize {
        /// The malformed set.
        set: CardSet,
        /// The expected number of cards.
        expected: usize,
        /// The number of cards supplied.
        got: usize,
    },
}

/// The sets of cards combined in a Hold'em hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSet {
    /// The player two private cards.
    Hole,
    /// The five community cards.
    Board,
}

impl CardSet {
    /// Number of cards in the set.
    pub fn size(&self) -> usize {
        match self {
            CardSet::Hole => 2,
            CardSet::Board => 5,
        }
    }

    /// Checks the number of cards, cards are never truncated or padded.
    pub(crate) fn check(self, cards: &[Card]) -> Result<()> {
        if cards.len() != self.size() {
            return Err(Error::MalformedHandSize {
                set: self,
                expected: self.size(),
                got: cards.len(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardSet::Hole => write!(f, "hole"),
            CardSet::Board => write!(f, "board"),
        }
    }
}
