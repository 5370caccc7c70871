// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown report.
use serde::Serialize;
use std::fmt;

use showdown_eval::{Card, HandCategory, Player, Result, best_five, determine_winners};

/// A player hand in the report.
#[derive(Debug, Serialize)]
pub struct PlayerHand {
    /// The player name.
    pub id: String,
    /// The player hole cards.
    pub hole: Vec<String>,
    /// The best hand category.
    pub category: HandCategory,
    /// The best hand cards.
    pub best_hand: Vec<String>,
}

/// The showdown hands and winners.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The board cards.
    pub board: Vec<String>,
    /// The hand of each player.
    pub hands: Vec<PlayerHand>,
    /// The winners names.
    pub winners: Vec<String>,
}

impl Report {
    /// Evaluates the players hands and winners.
    pub fn new(board: &[Card], players: &[Player]) -> Result<Self> {
        let winners = determine_winners(board, players)?;

        let hands = players
            .iter()
            .map(|player| {
                let hand = best_five(&player.hole, board)?;
                Ok(PlayerHand {
                    id: player.id.clone(),
                    hole: tokens(&player.hole),
                    category: hand.category(),
                    best_hand: tokens(hand.cards()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            board: tokens(board),
            hands,
            winners: winners.into_iter().map(|w| w.player.id).collect(),
        })
    }
}

fn tokens(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board: {}", self.board.join(" "))?;

        let width = self.hands.iter().map(|h| h.id.len()).max().unwrap_or(0);
        for hand in &self.hands {
            writeln!(
                f,
                "{:<width$}  {:<7} {} [{}]",
                hand.id,
                hand.hole.join(" "),
                hand.category,
                hand.best_hand.join(" ")
            )?;
        }

        let label = if self.winners.len() > 1 { "Winners" } else { "Winner" };
        writeln!(f, "{label}: {}", self.winners.join(", "))
    }
}
