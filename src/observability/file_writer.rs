//! Size-rotated log file.
//!
//! [`RotatingFile`] is an [`io::Write`] sink for the file logging layer. Before
//! each write it checks the current file size; once the file is over the limit
//! it is renamed to `<name>.<unix seconds>` and a fresh file is started. Only
//! the newest few backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Append-only log file with size-based rotation.
///
/// The file is opened lazily on the first write, so constructing one never
/// fails. Wrap it in a `Mutex` to share it with a `tracing-subscriber` layer.
pub struct RotatingFile {
    file_path: PathBuf,
    file: Option<File>,
    max_bytes: u64,
    max_backups: usize,
}

impl RotatingFile {
    /// Creates a writer for `file_path` with the default limits.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer that rotates past `max_bytes` and keeps `max_backups`.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            file: None,
            max_bytes,
            max_backups,
        }
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn check_and_rotate(&mut self) -> io::Result<()> {
        let too_big = fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes);

        if too_big {
            self.file = None;
            self.rotate_files()?;
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let backup_path = self.backup_prefix().map_or_else(
            || self.file_path.with_extension(timestamp.to_string()),
            |prefix| self.file_path.with_file_name(format!("{prefix}{timestamp}")),
        );

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// File name prefix shared by every backup, e.g. `game-launcher.log.`.
    fn backup_prefix(&self) -> Option<String> {
        self.file_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{name}."))
    }

    fn cleanup_old_backups(&self) -> io::Result<()> {
        let Some(parent_dir) = self.file_path.parent() else {
            return Ok(());
        };
        let Some(prefix) = self.backup_prefix() else {
            return Ok(());
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Suffixes are millisecond timestamps; newest first.
        backups.sort_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }

    fn file(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            self.file = Some(file);
        }

        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file not open"))
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check_and_rotate()?;
        self.file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("test.log."))
            .count()
    }

    #[test]
    fn test_appends_without_rotation_below_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.log");
        let mut writer = RotatingFile::new(path.clone());
        assert_eq!(writer.path(), path.as_path());

        writeln!(writer, "first").unwrap();
        writeln!(writer, "second").unwrap();
        writer.flush().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert_eq!(backups(dir.path()), 0);
    }

    #[test]
    fn test_rotates_and_caps_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.log");
        let mut writer = RotatingFile::with_limits(path.clone(), 4, 2);

        for line in 0..6 {
            writeln!(writer, "line {line}").unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        assert!(path.exists());
        assert_eq!(backups(dir.path()), 2);
    }
}
