// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = Card::new(Rank::Ten, Suit::Diamonds);
//! assert_eq!(td.to_string(), "10D");
//! ```
//!
//! or to parse them from tokens made of a rank name followed by a suit symbol:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit, parse_cards};
//! let ah = Card::parse("AH").unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//!
//! let board = parse_cards(["10S", "JS", "QS", "2H", "3D"]).unwrap();
//! assert_eq!(board.len(), 5);
//! assert!(Card::parse("1S").is_err());
//! ```
//!
//! and a [Deck] type to iterate all k-cards hands in a fixed order:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! // Iterate through all 7 cards hands (133M hands).
//! let mut counter = 0;
//! Deck::default().for_each(7, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 133_784_560);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, InvalidCardToken, Rank, Suit, parse_cards};

mod deck;
pub use deck::Deck;
