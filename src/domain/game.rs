//! Game domain model.
//!
//! A [`Game`] is a catalogued executable with identity, descriptive metadata
//! and usage counters. Identity and creation time are fixed when the game is
//! created; the counters only ever grow, through launches.

use chrono::{DateTime, SubsecRound, Utc};
use std::path::PathBuf;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Mask applied to the random part of generated identifiers (24 bits).
const ID_SUFFIX_MASK: u32 = 0x00ff_ffff;

/// A game in the user's library.
///
/// # Fields
///
/// - `id`: Opaque identifier, `<unix millis>-<random hex>`, never changes
/// - `name`: Display name, never empty
/// - `path`: Executable to start on launch, never empty
/// - `genre` / `description`: Optional descriptive text
/// - `added_date`: When the game was added, whole seconds
/// - `last_played`: Most recent launch, `None` until first launch
/// - `play_time`: Cumulative minutes played
/// - `play_count`: Cumulative number of launches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub added_date: DateTime<Utc>,
    pub last_played: Option<DateTime<Utc>>,
    pub play_time: u64,
    pub play_count: u32,
}

impl Game {
    /// Creates a new, never-played game with a freshly generated id.
    ///
    /// Empty `genre` and `description` values are stored as `None`. No
    /// validation happens here; the library rejects empty names and paths
    /// before calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use game_launcher::domain::Game;
    ///
    /// let game = Game::new("Chess", "/bin/chess", Some("Board"), None);
    /// assert_eq!(game.play_count, 0);
    /// assert!(game.last_played.is_none());
    /// assert_eq!(game.genre.as_deref(), Some("Board"));
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        genre: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            path: path.into(),
            genre: non_empty(genre),
            description: non_empty(description),
            added_date: now(),
            last_played: None,
            play_time: 0,
            play_count: 0,
        }
    }

    /// Records one launch: bumps the launch counter, adds `minutes` of play
    /// time and stamps `last_played`.
    pub fn record_launch(&mut self, minutes: u64, at: DateTime<Utc>) {
        self.play_count = self.play_count.saturating_add(1);
        self.play_time = self.play_time.saturating_add(minutes);
        self.last_played = Some(at);
    }

    /// Applies the fields set in `update`.
    ///
    /// Values are trimmed; an empty genre or description clears it. Callers
    /// validate the result (non-empty name and path, no duplicates).
    pub fn apply(&mut self, update: &GameUpdate) {
        if let Some(name) = &update.name {
            self.name = name.trim().to_string();
        }
        if let Some(path) = &update.path {
            self.path = PathBuf::from(path.trim());
        }
        if let Some(genre) = &update.genre {
            self.genre = non_empty(Some(genre));
        }
        if let Some(description) = &update.description {
            self.description = non_empty(Some(description));
        }
    }

    /// Case-insensitive substring match over name, genre and description.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches_keyword(&self, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);

        contains(&self.name)
            || self.genre.as_deref().is_some_and(contains)
            || self.description.as_deref().is_some_and(contains)
    }

    /// The executable path as display text.
    #[must_use]
    pub fn path_display(&self) -> String {
        self.path.display().to_string()
    }

    /// Returns a human-readable string describing how long ago the game was
    /// last launched, relative to `now`.
    ///
    /// - Never launched: "never"
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use game_launcher::domain::Game;
    ///
    /// let mut game = Game::new("Chess", "/bin/chess", None, None);
    /// let now = Utc::now();
    /// assert_eq!(game.last_played_ago(now), "never");
    ///
    /// game.last_played = Some(now - Duration::minutes(5));
    /// assert_eq!(game.last_played_ago(now), "5m ago");
    /// ```
    #[must_use]
    pub fn last_played_ago(&self, now: DateTime<Utc>) -> String {
        let Some(last_played) = self.last_played else {
            return "never".to_string();
        };

        let diff = (now - last_played).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Field-wise update of a game's editable metadata.
///
/// Only `name`, `path`, `genre` and `description` are editable. Identity,
/// creation date and usage counters can't be changed through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameUpdate {
    pub name: Option<String>,
    pub path: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

impl GameUpdate {
    /// Names of the fields an update may touch.
    pub const FIELDS: [&'static str; 4] = ["name", "path", "genre", "description"];

    /// Builds an update from loosely typed `field → value` pairs.
    ///
    /// Unknown field names are ignored. A later pair for the same field wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use game_launcher::domain::GameUpdate;
    ///
    /// let update = GameUpdate::from_pairs([("genre", "Puzzle"), ("rating", "5")]);
    /// assert_eq!(update.genre.as_deref(), Some("Puzzle"));
    /// assert!(update.name.is_none());
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut update = Self::default();

        for (field, value) in pairs {
            let slot = match field.as_ref() {
                "name" => &mut update.name,
                "path" => &mut update.path,
                "genre" => &mut update.genre,
                "description" => &mut update.description,
                other => {
                    tracing::debug!(field = %other, "ignoring non-editable field");
                    continue;
                }
            };
            *slot = Some(value.into());
        }

        update
    }

    /// Returns `true` when the update touches no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.path.is_none()
            && self.genre.is_none()
            && self.description.is_none()
    }
}

/// Generates a new game identifier: creation time in milliseconds followed by
/// a random 24-bit hex suffix.
#[must_use]
pub fn generate_id() -> String {
    let suffix = rand::random::<u32>() & ID_SUFFIX_MASK;
    format!("{}-{suffix:06x}", Utc::now().timestamp_millis())
}

/// Current time truncated to whole seconds, the resolution persisted on disk.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Formats a number of minutes as `"Xm"` or `"Xh YYm"`.
///
/// # Examples
///
/// ```
/// use game_launcher::domain::game::format_play_time;
///
/// assert_eq!(format_play_time(0), "0m");
/// assert_eq!(format_play_time(45), "45m");
/// assert_eq!(format_play_time(125), "2h 05m");
/// ```
#[must_use]
pub fn format_play_time(minutes: u64) -> String {
    if minutes < 60 {
        format!("{minutes}m")
    } else {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_game_starts_unplayed() {
        let game = Game::new("Chess", "/bin/chess", Some("  "), Some("Classic"));
        assert_eq!(game.play_count, 0);
        assert_eq!(game.play_time, 0);
        assert!(game.last_played.is_none());
        assert!(game.genre.is_none());
        assert_eq!(game.description.as_deref(), Some("Classic"));
        assert_eq!(game.added_date.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_generated_ids_have_timestamp_prefix() {
        let id = generate_id();
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 6);
        assert!(u32::from_str_radix(suffix, 16).is_ok());
    }

    #[test]
    fn test_record_launch_updates_counters() {
        let mut game = Game::new("Chess", "/bin/chess", None, None);
        let at = now();
        game.record_launch(30, at);
        game.record_launch(0, at);
        assert_eq!(game.play_count, 2);
        assert_eq!(game.play_time, 30);
        assert_eq!(game.last_played, Some(at));
    }

    #[test]
    fn test_matches_keyword_checks_all_text_fields() {
        let game = Game::new("Doom", "/games/doom", Some("Shooter"), Some("Rip and tear"));
        assert!(game.matches_keyword("doo"));
        assert!(game.matches_keyword("shoot"));
        assert!(game.matches_keyword("tear"));
        assert!(!game.matches_keyword("puzzle"));
    }

    #[test]
    fn test_last_played_ago_buckets() {
        let mut game = Game::new("Chess", "/bin/chess", None, None);
        let now = Utc::now();

        game.last_played = Some(now - Duration::seconds(10));
        assert_eq!(game.last_played_ago(now), "just now");

        game.last_played = Some(now - Duration::hours(3));
        assert_eq!(game.last_played_ago(now), "3h ago");

        game.last_played = Some(now - Duration::days(8));
        assert_eq!(game.last_played_ago(now), "8d ago");
    }

    #[test]
    fn test_update_from_pairs_ignores_unknown_fields() {
        let update = GameUpdate::from_pairs([("play_count", "99"), ("id", "x")]);
        assert!(update.is_empty());

        let update = GameUpdate::from_pairs(vec![
            ("name".to_string(), "A".to_string()),
            ("name".to_string(), "B".to_string()),
        ]);
        assert_eq!(update.name.as_deref(), Some("B"));
    }
}
