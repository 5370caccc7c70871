// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners.
use log::debug;
use serde::{Deserialize, Serialize};

use showdown_cards::Card;

use crate::{
    CardSet, Result,
    eval::{EvaluatedHand, best_five, compare},
};

/// A player at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The player identifier.
    pub id: String,
    /// The player hole cards.
    pub hole: [Card; 2],
}

impl Player {
    /// Creates a new player.
    pub fn new(id: impl Into<String>, hole: [Card; 2]) -> Self {
        Self {
            id: id.into(),
            hole,
        }
    }

    /// Creates a new player checking there are exactly two hole cards.
    pub fn try_new(id: impl Into<String>, hole: &[Card]) -> Result<Self> {
        CardSet::Hole.check(hole)?;
        Ok(Self::new(id, [hole[0], hole[1]]))
    }
}

/// A showdown winner with its best hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Winner {
    /// The winning player.
    pub player: Player,
    /// The player best hand.
    pub best_hand: EvaluatedHand,
}

/// Finds the players with the best hand.
///
/// All players tied with the best hand are winners, they are returned in the
/// same order as `players`. Returns an empty list if there are no players.
pub fn determine_winners(board: &[Card], players: &[Player]) -> Result<Vec<Winner>> {
    CardSet::Board.check(board)?;

    let hands = players
        .iter()
        .map(|player| {
            let hand = best_five(&player.hole, board)?;
            debug!("Player {} has {hand}", player.id);
            Ok((player, hand))
        })
        .collect::<Result<Vec<_>>>()?;

    let Some(best) = hands.iter().map(|(_, hand)| *hand).reduce(|best, hand| {
        if compare(&hand, &best).is_gt() {
            hand
        } else {
            best
        }
    }) else {
        return Ok(Vec::new());
    };

    let winners = hands
        .into_iter()
        .filter(|(_, hand)| compare(hand, &best).is_eq())
        .map(|(player, hand)| Winner {
            player: player.clone(),
            best_hand: hand,
        })
        .collect::<Vec<_>>();

    debug!(
        "Winners with {best}: {}",
        winners
            .iter()
            .map(|w| w.player.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(winners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, HandCategory};
    use ahash::HashSet;
    use showdown_cards::parse_cards;

    fn cards(tokens: &str) -> Vec<Card> {
        parse_cards(tokens.split_whitespace()).unwrap()
    }

    fn player(id: &str, hole: &str) -> Player {
        Player::try_new(id, &cards(hole)).unwrap()
    }

    fn winners(board: &str, players: &[Player]) -> Vec<String> {
        determine_winners(&cards(board), players)
            .unwrap()
            .into_iter()
            .map(|w| w.player.id)
            .collect()
    }

    #[test]
    fn single_winner() {
        let players = [
            player("Alice", "8S 9S"),
            player("Bob", "KS KH"),
            player("Charlie", "AS KD"),
        ];

        let result = determine_winners(&cards("10S JS QS 2H 3D"), &players).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].player.id, "Alice");
        assert_eq!(result[0].best_hand.category(), HandCategory::StraightFlush);
    }

    #[test]
    fn four_of_a_kind_kicker_wins() {
        let players = [player("A", "AC KC"), player("B", "QC JC")];
        assert_eq!(winners("7C 7D 7H 7S 2D", &players), vec!["A"]);
    }

    #[test]
    fn board_plays_tie() {
        let players = [player("Alice", "AC AD"), player("Bob", "KC QD")];
        let result = determine_winners(&cards("5C 6D 7H 8S 9D"), &players).unwrap();

        assert_eq!(result.len(), 2);
        let board = cards("5C 6D 7H 8S 9D");
        for winner in result {
            assert_eq!(winner.best_hand.category(), HandCategory::Straight);
            assert!(winner.best_hand.cards().iter().all(|c| board.contains(c)));
        }
    }

    #[test]
    fn three_way_tie() {
        let players = [
            player("Alice", "2C 3D"),
            player("Bob", "4C 5D"),
            player("Charlie", "6C 7D"),
        ];

        let ids = winners("AS KS QS JS 10S", &players);
        let ids = ids.iter().map(String::as_str).collect::<HashSet<_>>();
        assert_eq!(ids, HashSet::from_iter(["Alice", "Bob", "Charlie"]));
    }

    #[test]
    fn ties_keep_players_order() {
        let players = [
            player("Alice", "AC 2D"),
            player("Bob", "AD 2H"),
            player("Charlie", "KC 2C"),
            player("Dave", "AH 3C"),
        ];

        assert_eq!(winners("AS 9D 7H 5S 4C", &players), vec!["Alice", "Bob", "Dave"]);
    }

    #[test]
    fn wheel_loses_to_higher_straight() {
        let players = [player("Wheel", "AS KH"), player("SixHigh", "6D 9C")];
        assert_eq!(winners("2C 3D 4H 5S JD", &players), vec!["SixHigh"]);
    }

    #[test]
    fn suits_dont_break_ties() {
        let players = [player("Hearts", "AH KH"), player("Spades", "AS KS")];
        let ids = winners("QD JC 9C 4D 2H", &players);
        assert_eq!(ids, vec!["Hearts", "Spades"]);
    }

    #[test]
    fn one_player_wins() {
        let players = [player("Alone", "2C 7D")];
        assert_eq!(winners("AS KD 9H 5S 3C", &players), vec!["Alone"]);
    }

    #[test]
    fn no_players() {
        let result = determine_winners(&cards("AS KD 9H 5S 3C"), &[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn malformed_board() {
        let players = [player("Alice", "2C 7D")];
        let err = determine_winners(&cards("AS KD 9H 5S"), &players).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedHandSize {
                set: CardSet::Board,
                expected: 5,
                got: 4
            }
        );

        // The board is checked even with no players.
        assert!(determine_winners(&cards("AS KD 9H 5S 3C 2C"), &[]).is_err());
    }

    #[test]
    fn malformed_hole() {
        let err = Player::try_new("Alice", &cards("2C")).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedHandSize {
                set: CardSet::Hole,
                expected: 2,
                got: 1
            }
        );
        assert!(Player::try_new("Alice", &cards("2C 3C 4C")).is_err());
    }
}
