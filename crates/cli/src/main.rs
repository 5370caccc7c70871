// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
//!
//! Evaluates the players hands for a board and prints the winners:
//!
//! ```text
//! $ showdown --board "10S JS QS 2H 3D" -p Alice:8S,9S -p Bob:KS,KH
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use showdown_eval::{Player, parse_cards};

mod report;
use report::Report;

#[derive(Debug, Parser)]
#[clap(about = "Finds the winners of a Texas Hold'em showdown.")]
struct Cli {
    /// The five board cards separated by spaces, e.g. "10S JS QS 2H 3D".
    #[clap(long, short)]
    board: String,
    /// A player as NAME:CARD,CARD, e.g. Alice:8S,9S, repeat for each player.
    #[clap(long = "player", short = 'p', required = true)]
    players: Vec<String>,
    /// Prints the report as JSON.
    #[clap(long)]
    json: bool,
}

/// Parses a player argument with format NAME:CARD,CARD.
fn parse_player(arg: &str) -> Result<Player> {
    let Some((id, hole)) = arg.split_once(':') else {
        bail!("Invalid player {arg:?}, expected NAME:CARD,CARD");
    };

    let id = id.trim();
    if id.is_empty() {
        bail!("Invalid player {arg:?}, missing name");
    }

    let hole = parse_cards(hole.split(',').map(str::trim))
        .with_context(|| format!("Invalid player {id} cards"))?;
    Player::try_new(id, &hole).with_context(|| format!("Invalid player {id} cards"))
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let board = parse_cards(cli.board.split_whitespace()).context("Invalid board")?;
    let players = cli
        .players
        .iter()
        .map(|arg| parse_player(arg))
        .collect::<Result<Vec<_>>>()?;

    info!("Evaluating {} players", players.len());
    let report = Report::new(&board, &players)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_eval::Card;

    #[test]
    fn player_argument() {
        let player = parse_player("Alice:8S,9S").unwrap();
        assert_eq!(player.id, "Alice");
        assert_eq!(
            player.hole,
            [Card::parse("8S").unwrap(), Card::parse("9S").unwrap()]
        );

        let player = parse_player(" Bob : 10D , AH").unwrap();
        assert_eq!(player.id, "Bob");
        assert_eq!(player.hole[0], Card::parse("10D").unwrap());
    }

    #[test]
    fn invalid_player_argument() {
        assert!(parse_player("Alice").is_err());
        assert!(parse_player(":8S,9S").is_err());
        assert!(parse_player("Alice:8S").is_err());
        assert!(parse_player("Alice:8S,9S,10S").is_err());

        let err = parse_player("Alice:8S,1S").unwrap_err();
        assert_eq!(err.to_string(), "Invalid player Alice cards");
        assert_eq!(err.root_cause().to_string(), "invalid card token \"1S\"");
    }

    #[test]
    fn cli_arguments() {
        let cli = Cli::try_parse_from([
            "showdown",
            "--board",
            "10S JS QS 2H 3D",
            "-p",
            "Alice:8S,9S",
            "--player",
            "Bob:KS,KH",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.board, "10S JS QS 2H 3D");
        assert_eq!(cli.players, vec!["Alice:8S,9S", "Bob:KS,KH"]);
        assert!(cli.json);

        // At least one player is required.
        assert!(Cli::try_parse_from(["showdown", "-b", "10S JS QS 2H 3D"]).is_err());
    }
}
