//! The game library manager.
//!
//! [`GameLibrary`] owns the in-memory record set, enforces validation and
//! hands the full snapshot to its [`Storage`] backend after every mutation.
//! Nothing here is fatal: rejections come back as `Err` values carrying a
//! message, unknown ids as `false`/`None`, and persistence failures are
//! logged while the in-memory state stays authoritative.

use crate::domain::error::{LauncherError, Result};
use crate::domain::game::{self, generate_id};
use crate::domain::{Game, GameUpdate};
use crate::infrastructure::Launcher;
use crate::library::search;
use crate::library::stats::LibraryStats;
use crate::storage::{GameRecord, Storage};
use std::collections::BTreeSet;
use std::path::Path;

/// In-memory game collection backed by snapshot storage.
///
/// Games are kept in insertion order, which is also the order of the
/// persisted snapshot, so listings show games in the order they were added.
///
/// # Examples
///
/// ```
/// use game_launcher::infrastructure::ProcessLauncher;
/// use game_launcher::library::GameLibrary;
/// use game_launcher::storage::MemoryStorage;
///
/// let mut library = GameLibrary::open(
///     Box::new(MemoryStorage::new()),
///     Box::new(ProcessLauncher),
/// );
///
/// let chess = library.add("Chess", "/usr/games/chess", Some("Board"), None)?;
/// assert_eq!(library.len(), 1);
/// assert_eq!(library.get(&chess.id).map(|g| g.name.as_str()), Some("Chess"));
/// # Ok::<(), game_launcher::LauncherError>(())
/// ```
pub struct GameLibrary {
    games: Vec<Game>,
    storage: Box<dyn Storage>,
    launcher: Box<dyn Launcher>,
}

impl GameLibrary {
    /// Opens a library over `storage`, loading whatever snapshot it holds.
    ///
    /// An unreadable snapshot yields an empty library (the backend logs why).
    /// If the snapshot holds the same id twice, the later record wins and
    /// takes the earlier one's position.
    pub fn open(storage: Box<dyn Storage>, launcher: Box<dyn Launcher>) -> Self {
        let _span = tracing::debug_span!("library_open").entered();

        let mut games: Vec<Game> = Vec::new();
        for record in storage.load() {
            let game = Game::from(record);
            match games.iter_mut().find(|existing| existing.id == game.id) {
                Some(existing) => {
                    tracing::warn!(id = %game.id, "duplicate id in snapshot, keeping the later record");
                    *existing = game;
                }
                None => games.push(game),
            }
        }

        tracing::debug!(game_count = games.len(), "library loaded");

        Self {
            games,
            storage,
            launcher,
        }
    }

    /// Adds a new game.
    ///
    /// `name` and `path` are trimmed and must not be empty. A path that
    /// doesn't exist only produces a warning. Empty `genre`/`description`
    /// values are stored as absent.
    ///
    /// # Errors
    ///
    /// - [`LauncherError::Validation`] if `name` or `path` is empty
    /// - [`LauncherError::Duplicate`] if a game with the same name and path exists
    pub fn add(
        &mut self,
        name: &str,
        path: &str,
        genre: Option<&str>,
        description: Option<&str>,
    ) -> Result<Game> {
        let _span = tracing::debug_span!("library_add", name = %name, path = %path).entered();

        let name = name.trim();
        let path = path.trim();

        if name.is_empty() {
            tracing::debug!("rejected: empty name");
            return Err(LauncherError::Validation("game name must not be empty".to_string()));
        }
        if path.is_empty() {
            tracing::debug!("rejected: empty path");
            return Err(LauncherError::Validation("game path must not be empty".to_string()));
        }

        if !Path::new(path).exists() {
            tracing::warn!(path = %path, "executable path does not exist, adding anyway");
        }

        if self.has_duplicate(name, Path::new(path), None) {
            tracing::debug!("rejected: duplicate name and path");
            return Err(LauncherError::Duplicate {
                name: name.to_string(),
                path: path.to_string(),
            });
        }

        let mut game = Game::new(name, path, genre, description);
        while self.get(&game.id).is_some() {
            game.id = generate_id();
        }

        self.games.push(game.clone());
        self.persist();

        tracing::info!(id = %game.id, "game added");
        Ok(game)
    }

    /// Removes a game. Returns `false` if `id` is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let _span = tracing::debug_span!("library_remove", id = %id).entered();

        let Some(index) = self.position(id) else {
            tracing::warn!(id = %id, "cannot remove: game not found");
            return false;
        };

        let game = self.games.remove(index);

        self.persist();
        tracing::info!(name = %game.name, "game removed");
        true
    }

    /// Looks up a game by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Returns every game, in creation order.
    #[must_use]
    pub fn list_all(&self) -> Vec<&Game> {
        self.games.iter().collect()
    }

    /// Returns games whose name, genre or description contains `keyword`,
    /// ignoring case.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&Game> {
        let needle = keyword.to_lowercase();
        self.games
            .iter()
            .filter(|game| game.matches_keyword(&needle))
            .collect()
    }

    /// Returns games whose name fuzzily matches `query`, best match first.
    #[must_use]
    pub fn fuzzy_search(&self, query: &str) -> Vec<&Game> {
        search::rank_fuzzy(&self.games, query)
    }

    /// Returns games whose genre is exactly `genre` (case-sensitive).
    #[must_use]
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|game| game.genre.as_deref() == Some(genre))
            .collect()
    }

    /// Returns the distinct genres in the library, sorted.
    #[must_use]
    pub fn genres(&self) -> Vec<&str> {
        self.games
            .iter()
            .filter_map(|game| game.genre.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Updates a game's editable fields.
    ///
    /// Returns `false` without changing anything if `id` is unknown, if the
    /// update would leave the name or path empty, or if it would duplicate
    /// another game's name and path.
    pub fn update(&mut self, id: &str, update: &GameUpdate) -> bool {
        let _span = tracing::debug_span!("library_update", id = %id).entered();

        let Some(index) = self.position(id) else {
            tracing::warn!(id = %id, "cannot update: game not found");
            return false;
        };

        let current = &self.games[index];
        let mut candidate = current.clone();
        candidate.apply(update);

        if candidate.name.is_empty() || candidate.path.as_os_str().is_empty() {
            tracing::warn!(id = %id, "cannot update: name and path must not be empty");
            return false;
        }

        let identity_changed = candidate.name != current.name || candidate.path != current.path;
        if identity_changed && self.has_duplicate(&candidate.name, &candidate.path, Some(id)) {
            tracing::warn!(id = %id, "cannot update: another game has the same name and path");
            return false;
        }

        if update.path.is_some() && !candidate.path.exists() {
            tracing::warn!(path = ?candidate.path, "executable path does not exist");
        }

        self.games[index] = candidate;
        self.persist();

        tracing::info!(id = %id, "game updated");
        true
    }

    /// Launches a game, recording zero minutes of play time.
    ///
    /// See [`launch_with_duration`](Self::launch_with_duration).
    pub fn launch(&mut self, id: &str) -> bool {
        self.launch_with_duration(id, 0)
    }

    /// Launches a game and adds `minutes` to its play time.
    ///
    /// Returns `false` if `id` is unknown or its executable is missing; the
    /// counters are left unchanged in both cases. Otherwise the launch is
    /// recorded and persisted before the process is started, and the result
    /// reflects whether the operating system accepted the start request.
    pub fn launch_with_duration(&mut self, id: &str, minutes: u64) -> bool {
        let _span = tracing::debug_span!("library_launch", id = %id, minutes = minutes).entered();

        let now = game::now();
        let Some(entry) = self.games.iter_mut().find(|game| game.id == id) else {
            tracing::warn!(id = %id, "cannot launch: game not found");
            return false;
        };

        if !entry.path.exists() {
            tracing::warn!(path = ?entry.path, "cannot launch: executable not found");
            return false;
        }

        entry.record_launch(minutes, now);
        let path = entry.path.clone();
        let play_count = entry.play_count;

        self.persist();

        match self.launcher.launch(&path) {
            Ok(()) => {
                tracing::info!(id = %id, play_count = play_count, "game launched");
                true
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "failed to start game process");
                false
            }
        }
    }

    /// Computes aggregate statistics over the whole library.
    #[must_use]
    pub fn statistics(&self) -> LibraryStats {
        LibraryStats::from_games(&self.games)
    }

    /// Removes every game and deletes the stored snapshot.
    pub fn clear(&mut self) {
        let removed = self.games.len();
        self.games.clear();
        self.storage.clear();
        tracing::info!(removed = removed, "library cleared");
    }

    /// Number of games in the library.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Returns `true` if the library holds no games.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Location of the backing snapshot file, if any.
    #[must_use]
    pub fn storage_location(&self) -> Option<&Path> {
        self.storage.location()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.games.iter().position(|game| game.id == id)
    }

    fn has_duplicate(&self, name: &str, path: &Path, except_id: Option<&str>) -> bool {
        self.games.iter().any(|game| {
            Some(game.id.as_str()) != except_id && game.name == name && game.path == path
        })
    }

    /// Writes the full snapshot. Failures are logged; memory stays authoritative.
    fn persist(&mut self) {
        let records: Vec<GameRecord> = self.games.iter().map(GameRecord::from).collect();

        if let Err(e) = self.storage.save(&records) {
            tracing::error!(error = %e, "failed to persist library, keeping in-memory state");
        }
    }
}

impl std::fmt::Debug for GameLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLibrary")
            .field("games", &self.games.len())
            .field("storage", &self.storage.location())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingLauncher {
        launched: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&mut self, path: &Path) -> Result<()> {
            self.launched.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    struct RefusingLauncher;

    impl Launcher for RefusingLauncher {
        fn launch(&mut self, path: &Path) -> Result<()> {
            Err(LauncherError::Launch(path.display().to_string()))
        }
    }

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn save(&mut self, _records: &[GameRecord]) -> Result<()> {
            Err(LauncherError::Storage("disk full".to_string()))
        }

        fn load(&self) -> Vec<GameRecord> {
            Vec::new()
        }

        fn clear(&mut self) {}
    }

    /// Shares one `MemoryStorage` between the library and the test.
    #[derive(Clone, Default)]
    struct SharedStorage(Arc<Mutex<MemoryStorage>>);

    impl Storage for SharedStorage {
        fn save(&mut self, records: &[GameRecord]) -> Result<()> {
            self.0.lock().unwrap().save(records)
        }

        fn load(&self) -> Vec<GameRecord> {
            self.0.lock().unwrap().load()
        }

        fn clear(&mut self) {
            self.0.lock().unwrap().clear();
        }
    }

    fn library() -> (GameLibrary, RecordingLauncher) {
        let launcher = RecordingLauncher::default();
        let library = GameLibrary::open(Box::new(MemoryStorage::new()), Box::new(launcher.clone()));
        (library, launcher)
    }

    /// A path guaranteed to exist on any test machine.
    fn existing_path() -> String {
        std::env::current_exe().unwrap().display().to_string()
    }

    #[test]
    fn test_every_mutation_saves_a_snapshot() {
        let storage = SharedStorage::default();
        let mut library = GameLibrary::open(Box::new(storage.clone()), Box::new(RecordingLauncher::default()));
        let saves = || storage.0.lock().unwrap().save_count();

        let game = library.add("Runner", &existing_path(), None, None).unwrap();
        assert_eq!(saves(), 1);

        assert!(library.update(&game.id, &GameUpdate::from_pairs([("genre", "Arcade")])));
        assert_eq!(saves(), 2);

        assert!(library.launch(&game.id));
        assert_eq!(saves(), 3);

        assert!(library.add("Runner", &existing_path(), None, None).is_err());
        assert!(!library.remove("unknown"));
        assert_eq!(saves(), 3);

        assert!(library.remove(&game.id));
        assert_eq!(saves(), 4);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_add_trims_and_stores() {
        let (mut library, _) = library();
        let game = library.add("  Chess ", " /bin/chess ", Some("Board"), Some("")).unwrap();

        assert_eq!(game.name, "Chess");
        assert_eq!(game.path, PathBuf::from("/bin/chess"));
        assert!(game.description.is_none());
        assert_eq!(library.get(&game.id), Some(&game));
    }

    #[test]
    fn test_add_rejects_blank_fields() {
        let (mut library, _) = library();

        assert!(matches!(
            library.add("   ", "/bin/chess", None, None),
            Err(LauncherError::Validation(_))
        ));
        assert!(matches!(
            library.add("Chess", "", None, None),
            Err(LauncherError::Validation(_))
        ));
        assert!(library.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_name_and_path() {
        let (mut library, _) = library();
        library.add("Chess", "/bin/chess", None, None).unwrap();

        let err = library.add("Chess", "/bin/chess", Some("Board"), None).unwrap_err();
        assert!(matches!(err, LauncherError::Duplicate { .. }));
        assert_eq!(library.len(), 1);

        library.add("Chess", "/usr/bin/chess", None, None).unwrap();
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn test_list_all_is_creation_order() {
        let (mut library, _) = library();
        let expected: Vec<String> = (0..25).map(|i| format!("g{i:02}")).collect();
        for name in &expected {
            library.add(name, &format!("/games/{name}"), None, None).unwrap();
        }

        let names: Vec<&str> = library.list_all().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, expected);

        let fourth = library.list_all()[3].id.clone();
        assert!(library.remove(&fourth));
        let names: Vec<&str> = library.list_all().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names[2..4], ["g02", "g04"]);
    }

    #[test]
    fn test_most_played_tie_goes_to_first_added() {
        let (mut library, _) = library();
        let path = existing_path();
        for name in ["first", "second", "third"] {
            let game = library.add(name, &path, None, None).unwrap();
            assert!(library.launch(&game.id));
        }

        assert_eq!(library.statistics().most_played_name(), "first");
    }

    #[test]
    fn test_open_keeps_snapshot_order_and_later_duplicate() {
        let mut a = Game::new("A", "/games/a", None, None);
        a.id = "9".to_string();
        let mut b = Game::new("B", "/games/b", None, None);
        b.id = "1".to_string();
        let mut a2 = a.clone();
        a2.name = "A2".to_string();

        let records = [&a, &b, &a2].map(GameRecord::from).to_vec();
        let library = GameLibrary::open(Box::new(MemoryStorage::with_records(records)), Box::new(RefusingLauncher));

        let names: Vec<&str> = library.list_all().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["A2", "B"]);
    }

    #[test]
    fn test_search_and_filter() {
        let (mut library, _) = library();
        library.add("Doom", "/games/doom", Some("Shooter"), None).unwrap();
        library.add("Tetris", "/games/tetris", Some("Puzzle"), Some("Falling blocks")).unwrap();
        library.add("Portal", "/games/portal", Some("Puzzle"), None).unwrap();

        assert_eq!(library.search("BLOCK").len(), 1);
        assert_eq!(library.search("puzzle").len(), 2);
        assert_eq!(library.search("").len(), 3);
        assert_eq!(library.filter_by_genre("Puzzle").len(), 2);
        assert!(library.filter_by_genre("puzzle").is_empty());
        assert_eq!(library.genres(), vec!["Puzzle", "Shooter"]);
    }

    #[test]
    fn test_update_whitelisted_fields() {
        let (mut library, _) = library();
        let game = library.add("Chess", "/bin/chess", Some("Board"), None).unwrap();

        let update = GameUpdate::from_pairs([("name", "Chess 2"), ("genre", ""), ("play_count", "9")]);
        assert!(library.update(&game.id, &update));

        let updated = library.get(&game.id).unwrap();
        assert_eq!(updated.name, "Chess 2");
        assert!(updated.genre.is_none());
        assert_eq!(updated.play_count, 0);
        assert_eq!(updated.added_date, game.added_date);
    }

    #[test]
    fn test_update_rejections_leave_game_unchanged() {
        let (mut library, _) = library();
        let a = library.add("A", "/games/a", None, None).unwrap();
        library.add("B", "/games/b", None, None).unwrap();

        assert!(!library.update("missing", &GameUpdate::default()));
        assert!(!library.update(&a.id, &GameUpdate::from_pairs([("name", " ")])));
        assert!(!library.update(&a.id, &GameUpdate::from_pairs([("name", "B"), ("path", "/games/b")])));
        assert_eq!(library.get(&a.id), Some(&a));
    }

    #[test]
    fn test_launch_updates_counters_and_hands_off() {
        let (mut library, launcher) = library();
        let path = existing_path();
        let game = library.add("Runner", &path, None, None).unwrap();

        assert!(library.launch(&game.id));
        assert!(library.launch_with_duration(&game.id, 25));

        let launched = library.get(&game.id).unwrap();
        assert_eq!(launched.play_count, 2);
        assert_eq!(launched.play_time, 25);
        assert!(launched.last_played.is_some());
        assert_eq!(launcher.launched.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_launch_missing_path_changes_nothing() {
        let (mut library, launcher) = library();
        let game = library.add("Ghost", "/no/such/game", None, None).unwrap();

        assert!(!library.launch(&game.id));
        assert!(!library.launch("unknown-id"));

        let unchanged = library.get(&game.id).unwrap();
        assert_eq!(unchanged.play_count, 0);
        assert!(unchanged.last_played.is_none());
        assert!(launcher.launched.lock().unwrap().is_empty());
    }

    #[test]
    fn test_refused_start_is_reported_after_recording() {
        let mut library = GameLibrary::open(Box::new(MemoryStorage::new()), Box::new(RefusingLauncher));
        let game = library.add("Runner", &existing_path(), None, None).unwrap();

        assert!(!library.launch(&game.id));
        assert_eq!(library.get(&game.id).unwrap().play_count, 1);
    }

    #[test]
    fn test_storage_failures_are_not_fatal() {
        let mut library = GameLibrary::open(Box::new(FailingStorage), Box::new(RefusingLauncher));

        let game = library.add("Chess", "/bin/chess", None, None).unwrap();
        assert_eq!(library.len(), 1);
        assert!(library.remove(&game.id));
        assert!(library.is_empty());
    }

    #[test]
    fn test_open_loads_existing_snapshot() {
        let game = Game::new("Chess", "/bin/chess", None, None);
        let storage = MemoryStorage::with_records(vec![GameRecord::from(&game)]);

        let library = GameLibrary::open(Box::new(storage), Box::new(RefusingLauncher));
        assert_eq!(library.get(&game.id), Some(&game));
    }

    #[test]
    fn test_clear_empties_library() {
        let (mut library, _) = library();
        library.add("Chess", "/bin/chess", None, None).unwrap();
        library.clear();
        assert!(library.is_empty());
        assert_eq!(library.statistics().most_played_name(), crate::library::stats::NO_GAMES);
    }
}
