//! Binary snapshot format.
//!
//! The reference on-disk format: a 4-byte magic header followed by the
//! `bincode` encoding of the record list (a little-endian `u64` length prefix,
//! then each record's fields in declaration order).

use crate::domain::error::{LauncherError, Result};
use crate::storage::models::GameRecord;
use crate::storage::snapshot::{FileStorage, SnapshotFormat};

/// Magic bytes identifying a game library snapshot.
const MAGIC: &[u8; 4] = b"GLDB";

/// Length-prefixed `bincode` encoding behind a magic header.
#[derive(Debug, Clone, Copy)]
pub struct BinaryFormat;

impl SnapshotFormat for BinaryFormat {
    const NAME: &'static str = "binary";

    fn encode(records: &[GameRecord]) -> Result<Vec<u8>> {
        let body = bincode::serialize(records)
            .map_err(|e| LauncherError::Storage(format!("failed to encode snapshot: {e}")))?;

        let mut bytes = Vec::with_capacity(MAGIC.len() + body.len());
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&body);
        Ok(bytes)
    }

    fn decode(bytes: &[u8]) -> Result<Vec<GameRecord>> {
        let body = bytes
            .strip_prefix(MAGIC.as_slice())
            .ok_or_else(|| LauncherError::Storage("not a game library snapshot".to_string()))?;

        bincode::deserialize(body)
            .map_err(|e| LauncherError::Storage(format!("failed to decode snapshot: {e}")))
    }
}

/// Binary file storage backend.
pub type BinaryStorage = FileStorage<BinaryFormat>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GameRecord {
        GameRecord {
            id: "1700000000000-00beef".to_string(),
            name: "Chess".to_string(),
            path: "/usr/games/chess".to_string(),
            genre: Some("Board".to_string()),
            description: None,
            added_date: 1_700_000_000,
            last_played: Some(1_700_000_600),
            play_time: 42,
            play_count: 7,
        }
    }

    #[test]
    fn test_encoding_starts_with_magic() {
        let bytes = BinaryFormat::encode(&[sample()]).unwrap();
        assert_eq!(&bytes[..4], MAGIC);
    }

    #[test]
    fn test_decode_rejects_foreign_bytes() {
        assert!(BinaryFormat::decode(b"").is_err());
        assert!(BinaryFormat::decode(b"[{\"id\": 1}]").is_err());
    }

    #[test]
    fn test_decode_rejects_truncated_snapshot() {
        let bytes = BinaryFormat::encode(&[sample()]).unwrap();
        assert!(BinaryFormat::decode(&bytes[..bytes.len() - 3]).is_err());
    }

    #[test]
    fn test_decode_recovers_records() {
        let bytes = BinaryFormat::encode(&[sample()]).unwrap();
        assert_eq!(BinaryFormat::decode(&bytes).unwrap(), vec![sample()]);
    }
}
