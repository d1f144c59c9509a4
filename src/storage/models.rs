//! Storage record models for the persistence layer.
//!
//! [`GameRecord`] is the on-disk shape of a game. It is kept apart from the
//! domain [`Game`] so the file formats stay plain (strings and Unix-second
//! timestamps) while the domain works with paths and `chrono` types.

use crate::domain::Game;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents a game record in storage.
///
/// Optional fields and counters default when absent, so older or hand-edited
/// JSON files missing them still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier assigned at creation.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Executable path.
    pub path: String,

    /// Optional genre.
    #[serde(default)]
    pub genre: Option<String>,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Unix timestamp when the game was added.
    #[serde(default)]
    pub added_date: i64,

    /// Unix timestamp of the most recent launch, `None` if never launched.
    #[serde(default)]
    pub last_played: Option<i64>,

    /// Cumulative minutes played.
    #[serde(default)]
    pub play_time: u64,

    /// Cumulative launch count.
    #[serde(default)]
    pub play_count: u32,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            name: game.name.clone(),
            path: game.path_display(),
            genre: game.genre.clone(),
            description: game.description.clone(),
            added_date: game.added_date.timestamp(),
            last_played: game.last_played.map(|t| t.timestamp()),
            play_time: game.play_time,
            play_count: game.play_count,
        }
    }
}

impl From<GameRecord> for Game {
    /// Converts a stored record back into a domain game.
    ///
    /// Timestamps outside chrono's range fall back to the Unix epoch.
    fn from(record: GameRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            path: PathBuf::from(record.path),
            genre: record.genre,
            description: record.description,
            added_date: from_unix(record.added_date),
            last_played: record.last_played.map(from_unix),
            play_time: record.play_time,
            play_count: record.play_count,
        }
    }
}

fn from_unix(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
