//! Display-ready projections of library data.
//!
//! View models hold only formatted strings, so components never look at
//! timestamps or counters directly.

use crate::domain::game::format_play_time;
use crate::domain::Game;
use crate::library::{search, LibraryStats};
use chrono::{DateTime, Utc};

/// One row of the game table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRow {
    pub id: String,
    pub name: String,
    pub genre: String,
    pub plays: String,
    pub play_time: String,
    pub last_played: String,
    /// Character ranges of `name` to highlight (fuzzy search only).
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl GameRow {
    /// Builds a row for `game`; `query` turns on match highlighting.
    #[must_use]
    pub fn new(game: &Game, now: DateTime<Utc>, query: Option<&str>) -> Self {
        let highlight_ranges = query
            .map(|q| search::highlight_ranges(&game.name, q))
            .unwrap_or_default();

        Self {
            id: game.id.clone(),
            name: game.name.clone(),
            genre: game.genre.clone().unwrap_or_else(|| "-".to_string()),
            plays: game.play_count.to_string(),
            play_time: format_play_time(game.play_time),
            last_played: game.last_played_ago(now),
            highlight_ranges,
        }
    }
}

/// Every field of a single game, labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDetail {
    pub title: String,
    pub fields: Vec<(&'static str, String)>,
}

impl GameDetail {
    #[must_use]
    pub fn new(game: &Game, now: DateTime<Utc>) -> Self {
        let last_played = game.last_played.map_or_else(
            || "never".to_string(),
            |at| format!("{} ({})", at.format("%Y-%m-%d %H:%M"), game.last_played_ago(now)),
        );

        Self {
            title: game.name.clone(),
            fields: vec![
                ("id", game.id.clone()),
                ("path", game.path_display()),
                ("genre", game.genre.clone().unwrap_or_else(|| "-".to_string())),
                ("description", game.description.clone().unwrap_or_else(|| "-".to_string())),
                ("added", game.added_date.format("%Y-%m-%d %H:%M").to_string()),
                ("last played", last_played),
                ("plays", game.play_count.to_string()),
                ("play time", format_play_time(game.play_time)),
            ],
        }
    }
}

/// Library statistics, formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub fields: Vec<(&'static str, String)>,
}

impl From<&LibraryStats> for StatsView {
    fn from(stats: &LibraryStats) -> Self {
        Self {
            fields: vec![
                ("games", stats.total_games.to_string()),
                ("total plays", stats.total_plays.to_string()),
                ("total play time", format_play_time(stats.total_play_time)),
                ("most played", stats.most_played_name().to_string()),
            ],
        }
    }
}

/// Message shown instead of an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl EmptyState {
    /// The library has no games at all.
    #[must_use]
    pub fn empty_library() -> Self {
        Self {
            message: "No games in your library yet".to_string(),
            subtitle: "Add one with: game-launcher add <NAME> <PATH>".to_string(),
        }
    }

    /// A search or filter matched nothing.
    #[must_use]
    pub fn no_matches(what: &str) -> Self {
        Self {
            message: format!("No games match {what}"),
            subtitle: "Try a shorter keyword or --fuzzy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game;

    #[test]
    fn test_row_formats_counters() {
        let mut chess = Game::new("Chess", "/bin/chess", None, None);
        chess.record_launch(125, game::now());

        let row = GameRow::new(&chess, game::now(), None);
        assert_eq!(row.genre, "-");
        assert_eq!(row.plays, "1");
        assert_eq!(row.play_time, "2h 05m");
        assert_eq!(row.last_played, "just now");
        assert!(row.highlight_ranges.is_empty());
    }

    #[test]
    fn test_stats_view_uses_sentinel() {
        let view = StatsView::from(&LibraryStats::default());
        assert_eq!(view.fields[3], ("most played", "N/A".to_string()));
    }
}
