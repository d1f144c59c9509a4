//! Game Launcher: catalogue and launch locally installed games.
//!
//! The crate keeps a library of game records (name, executable path, genre,
//! description and usage counters) in memory and rewrites the whole set to a
//! single snapshot file after every change.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI shim (main.rs)                                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - clap commands                                    │
//! │  - Command → Outcome dispatch                       │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────────┐   ┌───────────────────────────┐
//! │ Library (library/)        │   │ UI Layer (ui/)            │
//! │ - Validation, queries     │   │ - Outcome → text          │
//! │ - Launch, statistics      │   │ - Theming                 │
//! └───────────────────────────┘   └───────────────────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Storage Layer (storage/)                           │
//! │  - Storage trait                                    │
//! │  - Atomic binary / JSON snapshots, in-memory        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths, process launching                │
//! │  - Error types, Game model                          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Command-line surface and dispatch
//! - [`domain`]: Core domain types (Game, errors)
//! - [`infrastructure`]: Platform paths and process launching
//! - [`library`]: The game library manager
//! - [`storage`]: Snapshot persistence backends
//! - [`ui`]: Text rendering with theme support
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! An optional TOML file, by default `<config_dir>/game-launcher/config.toml`:
//!
//! ```toml
//! data_file = "~/games/library.json"
//! storage_format = "json"
//! theme_name = "launcher-light"
//! trace_level = "info"
//! log_to_file = true
//! ```
//!
//! # Examples
//!
//! ```rust
//! use game_launcher::infrastructure::ProcessLauncher;
//! use game_launcher::storage::JsonStorage;
//! use game_launcher::GameLibrary;
//!
//! let dir = tempfile::tempdir()?;
//! let storage = JsonStorage::new(dir.path().join("games.json"))?;
//! let mut library = GameLibrary::open(Box::new(storage), Box::new(ProcessLauncher));
//!
//! let chess = library.add("Chess", "/usr/games/chess", Some("Board"), None)?;
//! assert_eq!(library.statistics().total_games, 1);
//! assert!(library.remove(&chess.id));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod library;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{execute, Cli, Command, Outcome};
pub use domain::{Game, GameUpdate, LauncherError, Result};
pub use library::{GameLibrary, LibraryStats};
pub use storage::StorageFormat;
pub use ui::Theme;

use infrastructure::{expand_tilde, get_data_dir, ProcessLauncher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Launcher configuration, read from TOML. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Library file. Default: `games.db` (or `games.json`) in the data
    /// directory. A leading `~` is expanded.
    pub data_file: Option<String>,

    /// Snapshot encoding. Default: `binary`.
    pub storage_format: StorageFormat,

    /// Built-in theme name: `launcher-dark` or `launcher-light`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log level: `trace`, `debug`, `info`, `warn`, `error`. Default: `warn`.
    pub trace_level: Option<String>,

    /// Also append logs to a rotating file in the data directory.
    pub log_to_file: bool,

    /// Disable ANSI colors in output and stderr logs.
    pub no_color: bool,
}

impl Config {
    /// Reads configuration from `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Config`] if the file exists but can't be read
    /// or isn't valid TOML for this structure.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(LauncherError::Config(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };

        toml::from_str(&contents).map_err(|e| {
            LauncherError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Applies command-line overrides on top of the file values.
    #[must_use]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(data_file) = &cli.data_file {
            self.data_file = Some(data_file.display().to_string());
        }
        if let Some(format) = cli.format {
            self.storage_format = format;
        }
        if let Some(level) = &cli.log_level {
            self.trace_level = Some(level.clone());
        }
        self.no_color |= cli.no_color;
        self
    }

    /// Resolved location of the library file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_file.as_deref().map_or_else(
            || get_data_dir().join(self.storage_format.default_file_name()),
            expand_tilde,
        )
    }

    /// Theme selected by `theme_file` / `theme_name`.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let theme_file = self.theme_file.as_deref().map(expand_tilde);
        Theme::resolve(self.theme_name.as_deref(), theme_file.as_deref())
    }
}

/// Opens the configured library with the process launcher.
///
/// # Errors
///
/// Returns an error if the library file's directory can't be created.
pub fn open_library(config: &Config) -> Result<GameLibrary> {
    let path = config.storage_path();
    tracing::debug!(path = ?path, format = %config.storage_format, "opening library");

    let storage = config.storage_format.open(path)?;
    Ok(GameLibrary::open(storage, Box::new(ProcessLauncher)))
}
