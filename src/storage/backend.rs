//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over snapshot
//! persistence backends. The library always hands a backend the complete
//! record set; there is no incremental write path.
//!
//! # Design Philosophy
//!
//! The trait is kept to the three operations the library needs. Loading and
//! clearing never fail from the caller's point of view: a missing or
//! unreadable snapshot is an empty library, and a failed delete is logged.
//! Saving reports errors so the library can log them and keep its in-memory
//! state as the source of truth.

use crate::domain::error::Result;
use crate::storage::models::GameRecord;
use std::path::Path;

/// Abstraction over snapshot persistence backends.
///
/// # Implementations
///
/// - [`BinaryStorage`](crate::storage::BinaryStorage): length-prefixed binary file (default)
/// - [`JsonStorage`](crate::storage::JsonStorage): pretty-printed JSON array
/// - [`MemoryStorage`](crate::storage::MemoryStorage): in-process snapshot
///
/// # Examples
///
/// ```no_run
/// use game_launcher::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let storage = JsonStorage::new(PathBuf::from("/tmp/games.json"))?;
/// let records = storage.load();
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Replaces the stored snapshot with `records`.
    ///
    /// File-backed implementations write a temporary file and rename it over
    /// the target, so readers never observe a partial snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, writing or the final rename fails. The
    /// previous snapshot is left untouched in that case.
    fn save(&mut self, records: &[GameRecord]) -> Result<()>;

    /// Loads the stored snapshot.
    ///
    /// Returns an empty list when nothing has been stored yet or the stored
    /// data can't be decoded as a sequence of records.
    fn load(&self) -> Vec<GameRecord>;

    /// Removes the stored snapshot. Failures are logged, not returned.
    fn clear(&mut self);

    /// Location of the backing file, if the backend has one.
    fn location(&self) -> Option<&Path> {
        None
    }
}
