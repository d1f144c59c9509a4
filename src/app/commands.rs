//! Command-line surface.
//!
//! The `game-launcher` binary parses [`Cli`] and hands its [`Command`] to
//! [`execute`](crate::app::execute). Global flags override the config file.

use crate::storage::StorageFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catalogue and launch locally installed games.
#[derive(Parser, Debug)]
#[command(name = "game-launcher", author, version, about)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, env = "GAME_LAUNCHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Library file to use instead of the configured one
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Snapshot encoding of the library file (binary, json)
    #[arg(long, global = true)]
    pub format: Option<StorageFormat>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Library operations, one per subcommand.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a game to the library
    Add {
        /// Display name
        name: String,
        /// Executable to start on launch
        path: String,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a game by id
    Remove { id: String },

    /// List games, optionally only one genre
    List {
        /// Exact, case-sensitive genre
        #[arg(long)]
        genre: Option<String>,
    },

    /// Show every field of one game
    Show { id: String },

    /// Search names, genres and descriptions
    Search {
        keyword: String,
        /// Rank names by fuzzy match instead of substring search
        #[arg(long)]
        fuzzy: bool,
    },

    /// Edit a game's name, path, genre or description
    Update {
        id: String,
        /// Field assignment, e.g. --set genre=Puzzle (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment, required = true)]
        assignments: Vec<(String, String)>,
    },

    /// Launch a game and record the play
    Launch {
        id: String,
        /// Minutes to add to the game's play time
        #[arg(long, default_value_t = 0)]
        minutes: u64,
    },

    /// Show library statistics
    Stats,

    /// List the genres in use
    Genres,

    /// Remove every game and delete the library file
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Parses `field=value`. The value may be empty (clears optional fields).
fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{raw}'"))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }

    Ok((field.to_string(), value.to_string()))
}
