//! Command dispatch.
//!
//! [`execute`] maps each [`Command`] onto one library call and captures the
//! result as an [`Outcome`]. Rendering happens later, in the UI layer, so the
//! dispatch logic can be tested without looking at text.

use crate::app::Command;
use crate::domain::{Game, GameUpdate};
use crate::library::{GameLibrary, LibraryStats};

/// What a listing shows, used for headings and empty-state messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    All,
    Genre(String),
    Search { keyword: String, fuzzy: bool },
}

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Game),
    Removed(String),
    Updated(Game),
    Launched(Game),
    Games { games: Vec<Game>, listing: Listing },
    Detail(Game),
    Stats(LibraryStats),
    Genres(Vec<String>),
    Cleared(usize),
    /// The command was rejected or could not be carried out.
    Failed(String),
}

impl Outcome {
    /// Returns `true` for outcomes that should end the process unsuccessfully.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Executes `command` against `library`.
pub fn execute(library: &mut GameLibrary, command: Command) -> Outcome {
    let _span = tracing::debug_span!("execute").entered();

    match command {
        Command::Add {
            name,
            path,
            genre,
            description,
        } => match library.add(&name, &path, genre.as_deref(), description.as_deref()) {
            Ok(game) => Outcome::Added(game),
            Err(e) => Outcome::Failed(e.to_string()),
        },

        Command::Remove { id } => {
            let Some(name) = library.get(&id).map(|game| game.name.clone()) else {
                return not_found(&id);
            };
            if library.remove(&id) {
                Outcome::Removed(name)
            } else {
                not_found(&id)
            }
        }

        Command::List { genre: None } => Outcome::Games {
            games: owned(library.list_all()),
            listing: Listing::All,
        },

        Command::List { genre: Some(genre) } => Outcome::Games {
            games: owned(library.filter_by_genre(&genre)),
            listing: Listing::Genre(genre),
        },

        Command::Show { id } => library
            .get(&id)
            .cloned()
            .map_or_else(|| not_found(&id), Outcome::Detail),

        Command::Search { keyword, fuzzy } => {
            let games = if fuzzy {
                library.fuzzy_search(&keyword)
            } else {
                library.search(&keyword)
            };
            Outcome::Games {
                games: owned(games),
                listing: Listing::Search { keyword, fuzzy },
            }
        }

        Command::Update { id, assignments } => {
            let update = GameUpdate::from_pairs(assignments);

            if update.is_empty() {
                return Outcome::Failed(format!(
                    "nothing to update; editable fields are {}",
                    GameUpdate::FIELDS.join(", ")
                ));
            }
            if library.get(&id).is_none() {
                return not_found(&id);
            }

            if library.update(&id, &update) {
                library
                    .get(&id)
                    .cloned()
                    .map_or_else(|| not_found(&id), Outcome::Updated)
            } else {
                Outcome::Failed(
                    "update rejected: name and path must be non-empty and unique".to_string(),
                )
            }
        }

        Command::Launch { id, minutes } => {
            let Some(game) = library.get(&id) else {
                return not_found(&id);
            };
            let path = game.path_display();

            if library.launch_with_duration(&id, minutes) {
                library
                    .get(&id)
                    .cloned()
                    .map_or_else(|| not_found(&id), Outcome::Launched)
            } else {
                Outcome::Failed(format!("could not launch {path}"))
            }
        }

        Command::Stats => Outcome::Stats(library.statistics()),

        Command::Genres => Outcome::Genres(library.genres().into_iter().map(String::from).collect()),

        Command::Clear { yes: false } => Outcome::Failed(format!(
            "refusing to delete {} games without --yes",
            library.len()
        )),

        Command::Clear { yes: true } => {
            let removed = library.len();
            library.clear();
            Outcome::Cleared(removed)
        }
    }
}

fn owned(games: Vec<&Game>) -> Vec<Game> {
    games.into_iter().cloned().collect()
}

fn not_found(id: &str) -> Outcome {
    Outcome::Failed(format!("no game with id '{id}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::Result;
    use crate::infrastructure::Launcher;
    use crate::storage::MemoryStorage;
    use std::path::Path;

    struct NoopLauncher;

    impl Launcher for NoopLauncher {
        fn launch(&mut self, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    fn library() -> GameLibrary {
        GameLibrary::open(Box::new(MemoryStorage::new()), Box::new(NoopLauncher))
    }

    fn add(library: &mut GameLibrary, name: &str, path: &str) -> Game {
        let command = Command::Add {
            name: name.to_string(),
            path: path.to_string(),
            genre: Some("Board".to_string()),
            description: None,
        };
        match execute(library, command) {
            Outcome::Added(game) => game,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_add_then_duplicate_fails() {
        let mut library = library();
        add(&mut library, "Chess", "/bin/chess");

        let outcome = execute(
            &mut library,
            Command::Add {
                name: "Chess".to_string(),
                path: "/bin/chess".to_string(),
                genre: None,
                description: None,
            },
        );
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_remove_reports_name_or_not_found() {
        let mut library = library();
        let chess = add(&mut library, "Chess", "/bin/chess");

        assert_eq!(
            execute(&mut library, Command::Remove { id: chess.id.clone() }),
            Outcome::Removed("Chess".to_string())
        );
        assert!(execute(&mut library, Command::Remove { id: chess.id }).is_failure());
    }

    #[test]
    fn test_update_without_editable_fields_fails() {
        let mut library = library();
        let chess = add(&mut library, "Chess", "/bin/chess");

        let outcome = execute(
            &mut library,
            Command::Update {
                id: chess.id,
                assignments: vec![("play_count".to_string(), "10".to_string())],
            },
        );
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_launch_missing_path_fails() {
        let mut library = library();
        let ghost = add(&mut library, "Ghost", "/no/such/game");

        let outcome = execute(&mut library, Command::Launch { id: ghost.id, minutes: 5 });
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let mut library = library();
        add(&mut library, "Chess", "/bin/chess");

        assert!(execute(&mut library, Command::Clear { yes: false }).is_failure());
        assert_eq!(library.len(), 1);
        assert_eq!(execute(&mut library, Command::Clear { yes: true }), Outcome::Cleared(1));
        assert!(library.is_empty());
    }

    #[test]
    fn test_list_by_genre() {
        let mut library = library();
        add(&mut library, "Chess", "/bin/chess");

        match execute(&mut library, Command::List { genre: Some("Board".to_string()) }) {
            Outcome::Games { games, listing } => {
                assert_eq!(games.len(), 1);
                assert_eq!(listing, Listing::Genre("Board".to_string()));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
