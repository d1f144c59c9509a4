//! In-memory storage backend.
//!
//! Holds the latest snapshot in process memory. Useful when embedding the
//! library without a file (and in tests). Nothing survives the process.

use crate::domain::error::Result;
use crate::storage::backend::Storage;
use crate::storage::models::GameRecord;

/// Snapshot storage that never touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Vec<GameRecord>,
    saves: usize,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with `records`, as if previously saved.
    #[must_use]
    pub fn with_records(records: Vec<GameRecord>) -> Self {
        Self { records, saves: 0 }
    }

    /// Number of successful saves since creation.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, records: &[GameRecord]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Vec<GameRecord> {
        self.records.clone()
    }

    fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> GameRecord {
        GameRecord {
            id: id.to_string(),
            name: format!("Game {id}"),
            path: format!("/games/{id}"),
            genre: None,
            description: None,
            added_date: 0,
            last_played: None,
            play_time: 0,
            play_count: 0,
        }
    }

    #[test]
    fn test_save_replaces_snapshot_and_counts() {
        let mut storage = MemoryStorage::with_records(vec![record("old")]);
        assert_eq!(storage.save_count(), 0);

        storage.save(&[record("1"), record("2")]).unwrap();
        storage.save(&[record("2")]).unwrap();

        assert_eq!(storage.save_count(), 2);
        assert_eq!(storage.load(), vec![record("2")]);

        storage.clear();
        assert!(storage.load().is_empty());
    }
}
