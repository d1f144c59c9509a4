//! Aggregate library statistics.

use crate::domain::Game;

/// Shown in place of the most played game when the library is empty.
pub const NO_GAMES: &str = "N/A";

/// Totals over the whole library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryStats {
    /// Number of games in the library.
    pub total_games: usize,

    /// Sum of every game's play time, in minutes.
    pub total_play_time: u64,

    /// Sum of every game's launch count.
    pub total_plays: u64,

    /// Name of the game with the highest launch count, `None` when empty.
    ///
    /// On ties the first game encountered wins.
    pub most_played: Option<String>,
}

impl LibraryStats {
    /// Computes statistics in a single pass over `games`.
    ///
    /// # Examples
    ///
    /// ```
    /// use game_launcher::library::LibraryStats;
    ///
    /// let stats = LibraryStats::from_games(std::iter::empty());
    /// assert_eq!(stats.total_games, 0);
    /// assert_eq!(stats.most_played_name(), "N/A");
    /// ```
    pub fn from_games<'a>(games: impl IntoIterator<Item = &'a Game>) -> Self {
        let mut stats = Self::default();
        let mut most_played: Option<&Game> = None;

        for game in games {
            stats.total_games += 1;
            stats.total_play_time = stats.total_play_time.saturating_add(game.play_time);
            stats.total_plays = stats.total_plays.saturating_add(u64::from(game.play_count));

            if most_played.map_or(true, |best| game.play_count > best.play_count) {
                most_played = Some(game);
            }
        }

        stats.most_played = most_played.map(|game| game.name.clone());
        stats
    }

    /// Name of the most played game, or [`NO_GAMES`] for an empty library.
    #[must_use]
    pub fn most_played_name(&self) -> &str {
        self.most_played.as_deref().unwrap_or(NO_GAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(name: &str, plays: u32, minutes: u64) -> Game {
        let mut game = Game::new(name, format!("/games/{name}"), None, None);
        game.play_count = plays;
        game.play_time = minutes;
        game
    }

    #[test]
    fn test_totals_sum_all_games() {
        let games = [game("a", 2, 30), game("b", 5, 10), game("c", 0, 0)];
        let stats = LibraryStats::from_games(&games);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.total_plays, 7);
        assert_eq!(stats.total_play_time, 40);
        assert_eq!(stats.most_played_name(), "b");
    }

    #[test]
    fn test_ties_keep_first_encountered() {
        let games = [game("first", 3, 0), game("second", 3, 0)];
        assert_eq!(LibraryStats::from_games(&games).most_played_name(), "first");

        let unplayed = [game("x", 0, 0), game("y", 0, 0)];
        assert_eq!(LibraryStats::from_games(&unplayed).most_played_name(), "x");
    }
}
