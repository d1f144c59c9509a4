//! Snapshot file storage shared by the file-backed formats.
//!
//! [`FileStorage`] owns the file handling: parent directory creation, atomic
//! replace through a `<target>.tmp` sibling, temporary file cleanup and the
//! "empty on anything unreadable" load policy. The byte encoding is supplied
//! by a [`SnapshotFormat`].
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n), decodes the entire file once at startup
//! - **Write**: O(n), encodes and rewrites the entire dataset on every change
//! - **Best for**: personal libraries of a few thousand games at most

use crate::domain::error::Result;
use crate::storage::backend::Storage;
use crate::storage::models::GameRecord;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Byte encoding of a full record snapshot.
pub trait SnapshotFormat {
    /// Short format name used in logs.
    const NAME: &'static str;

    /// Encodes the complete record list.
    ///
    /// # Errors
    ///
    /// Returns an error if the records can't be serialized.
    fn encode(records: &[GameRecord]) -> Result<Vec<u8>>;

    /// Decodes a complete record list.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid encoding of a sequence
    /// of records.
    fn decode(bytes: &[u8]) -> Result<Vec<GameRecord>>;
}

/// Single-file snapshot storage with atomic replace.
///
/// # Thread Safety
///
/// This type is `Send` but assumes a single writer. No advisory locking is
/// done against other processes using the same file.
pub struct FileStorage<F> {
    /// Path to the snapshot file on disk.
    file_path: PathBuf,

    _format: PhantomData<fn() -> F>,
}

impl<F: SnapshotFormat> FileStorage<F> {
    /// Creates a storage backend for `file_path`.
    ///
    /// The file itself is not touched; parent directories are created so the
    /// first save can succeed.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory can't be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, format = F::NAME, "initializing snapshot storage");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                tracing::debug!(parent = ?parent, "creating parent directory");
                fs::create_dir_all(parent)?;
            }
        }

        Ok(Self {
            file_path,
            _format: PhantomData,
        })
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Sibling path the next snapshot is written to before the rename.
    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.file_path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        Ok(())
    }

    /// Writes `bytes` to the temporary file and renames it over the target.
    ///
    /// The temporary file never outlives a failed attempt.
    fn write_atomic(&self, bytes: &[u8]) -> Result<()> {
        let tmp_path = self.tmp_path();

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        let result = Self::write_file(&tmp_path, bytes).and_then(|()| {
            tracing::trace!("renaming temporary file to final location");
            fs::rename(&tmp_path, &self.file_path).map_err(Into::into)
        });

        if result.is_err() && tmp_path.exists() {
            if let Err(e) = fs::remove_file(&tmp_path) {
                tracing::warn!(tmp_path = ?tmp_path, error = %e, "failed to remove temporary file");
            }
        }

        result
    }
}

impl<F: SnapshotFormat> Storage for FileStorage<F> {
    fn save(&mut self, records: &[GameRecord]) -> Result<()> {
        let _span = tracing::debug_span!("snapshot_save",
            path = ?self.file_path,
            format = F::NAME,
            count = records.len()
        ).entered();

        let bytes = F::encode(records)?;
        self.write_atomic(&bytes)?;

        tracing::debug!(bytes = bytes.len(), "snapshot saved");
        Ok(())
    }

    fn load(&self) -> Vec<GameRecord> {
        let _span = tracing::debug_span!("snapshot_load",
            path = ?self.file_path,
            format = F::NAME
        ).entered();

        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no snapshot yet, starting empty");
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read snapshot, starting empty");
                return Vec::new();
            }
        };

        match F::decode(&bytes) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "snapshot loaded");
                records
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to decode snapshot, starting empty");
                Vec::new()
            }
        }
    }

    fn clear(&mut self) {
        match fs::remove_file(&self.file_path) {
            Ok(()) => tracing::debug!(path = ?self.file_path, "snapshot removed"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => {
                tracing::error!(path = ?self.file_path, error = %e, "failed to remove snapshot");
            }
        }
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.file_path)
    }
}

impl<F> std::fmt::Debug for FileStorage<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStorage")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}
