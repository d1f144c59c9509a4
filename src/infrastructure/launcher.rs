//! Process start hand-off.
//!
//! The library records a launch and then asks a [`Launcher`] to start the
//! executable. The launcher only reports whether the start request was
//! accepted; the spawned process is not supervised, its exit code is not
//! collected and its output is not captured.

use crate::domain::error::{LauncherError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

/// Starts game executables.
pub trait Launcher: Send {
    /// Starts `path` as a detached process.
    ///
    /// # Errors
    ///
    /// Returns an error if the operating system refuses to start it.
    fn launch(&mut self, path: &Path) -> Result<()>;
}

/// Launches games with [`std::process::Command`].
///
/// The process runs in the executable's directory with its standard streams
/// detached from the launcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, path: &Path) -> Result<()> {
        let _span = tracing::debug_span!("process_launch", path = ?path).entered();

        let mut command = Command::new(path);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            command.current_dir(dir);
        }

        let child = command
            .spawn()
            .map_err(|e| LauncherError::Launch(format!("{}: {e}", path.display())))?;

        tracing::info!(pid = child.id(), "game process started");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_launch_error() {
        let mut launcher = ProcessLauncher;
        let err = launcher
            .launch(Path::new("/definitely/not/a/real/game-binary"))
            .unwrap_err();
        assert!(matches!(err, LauncherError::Launch(_)));
    }
}
