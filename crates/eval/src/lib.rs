// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Texas Hold'em hand evaluator that finds the best five cards hand out of a
//! player two hole cards and the five board cards, compares hands with their
//! category tie-break rules, and finds the winners amongst a set of players.
//!
//! To evaluate a hand parse the cards and use [best_five]:
//!
//! ```
//! # use showdown_eval::*;
//! let hole = parse_cards(["8S", "9S"]).unwrap();
//! let board = parse_cards(["10S", "JS", "QS", "2H", "3D"]).unwrap();
//!
//! let hand = best_five(&hole, &board).unwrap();
//! assert_eq!(hand.category(), HandCategory::StraightFlush);
//! assert_eq!(hand.to_string(), "Straight Flush [8S 9S 10S JS QS]");
//! ```
//!
//! and [determine_winners] to find the winners, all players with the best
//! hand are winners:
//!
//! ```
//! # use showdown_eval::*;
//! let board = parse_cards(["5C", "6D", "7H", "8S", "9D"]).unwrap();
//! let players = [
//!     Player::try_new("Alice", &parse_cards(["AC", "AD"]).unwrap()).unwrap(),
//!     Player::try_new("Bob", &parse_cards(["KC", "QD"]).unwrap()).unwrap(),
//! ];
//!
//! let winners = determine_winners(&board, &players).unwrap();
//! assert_eq!(winners.len(), 2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::{CardSet, Error, Result};

pub mod eval;
pub use eval::{
    EvaluatedHand, HandCategory, HandStats, best_five, compare, detect_category, evaluate,
    select_best_five,
};

pub mod showdown;
pub use showdown::{Player, Winner, determine_winners};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, InvalidCardToken, Rank, Suit, parse_cards};
