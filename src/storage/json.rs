//! JSON snapshot format.
//!
//! A human-readable alternative to the binary format. The file is a single
//! top-level array with one object per game:
//!
//! ```json
//! [
//!   {
//!     "id": "1700000000000-a1b2c3",
//!     "name": "Chess",
//!     "path": "/usr/games/chess",
//!     "genre": "Board",
//!     "description": null,
//!     "added_date": 1700000000,
//!     "last_played": null,
//!     "play_time": 0,
//!     "play_count": 0
//!   }
//! ]
//! ```
//!
//! Any other top-level value is treated as unreadable.

use crate::domain::error::{LauncherError, Result};
use crate::storage::models::GameRecord;
use crate::storage::snapshot::{FileStorage, SnapshotFormat};
use serde_json::Value;

/// Pretty-printed JSON array encoding.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat;

impl SnapshotFormat for JsonFormat {
    const NAME: &'static str = "json";

    fn encode(records: &[GameRecord]) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(records)
            .map_err(|e| LauncherError::Storage(format!("failed to serialize JSON: {e}")))
    }

    fn decode(bytes: &[u8]) -> Result<Vec<GameRecord>> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| LauncherError::Storage(format!("failed to parse JSON: {e}")))?;

        if !value.is_array() {
            return Err(LauncherError::Storage(
                "snapshot is not a list of games".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| LauncherError::Storage(format!("invalid game record: {e}")))
    }
}

/// JSON file storage backend.
pub type JsonStorage = FileStorage<JsonFormat>;
