//! Storage layer for persistent game data.
//!
//! Every mutation of the library rewrites the whole record set through a
//! [`Storage`] backend (snapshot persistence). File backends replace the
//! snapshot atomically: write a temporary sibling, then rename it over the
//! target.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `snapshot`: Shared atomic snapshot file implementation
//! - `binary`: Length-prefixed binary format (default)
//! - `json`: JSON text format
//! - `memory`: In-memory backend
//! - `models`: Storage record types separate from domain models

pub mod backend;
pub mod binary;
pub mod json;
pub mod memory;
pub mod models;
pub mod snapshot;

pub use backend::Storage;
pub use binary::{BinaryFormat, BinaryStorage};
pub use json::{JsonFormat, JsonStorage};
pub use memory::MemoryStorage;
pub use models::GameRecord;
pub use snapshot::{FileStorage, SnapshotFormat};

use crate::domain::error::{LauncherError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// On-disk snapshot encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Length-prefixed binary encoding.
    #[default]
    Binary,
    /// Pretty-printed JSON array.
    Json,
}

impl StorageFormat {
    /// Default snapshot file name for this format.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Binary => "games.db",
            Self::Json => "games.json",
        }
    }

    /// Opens a file backend of this format at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory can't be created.
    pub fn open(self, path: PathBuf) -> Result<Box<dyn Storage>> {
        Ok(match self {
            Self::Binary => Box::new(BinaryStorage::new(path)?),
            Self::Json => Box::new(JsonStorage::new(path)?),
        })
    }
}

impl FromStr for StorageFormat {
    type Err = LauncherError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" | "db" => Ok(Self::Binary),
            "json" => Ok(Self::Json),
            other => Err(LauncherError::Config(format!(
                "unknown storage format '{other}' (expected 'binary' or 'json')"
            ))),
        }
    }
}

impl std::fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::Json => "json",
        })
    }
}
