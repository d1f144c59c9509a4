//! Error types for the game launcher.
//!
//! This module defines the centralized error type [`LauncherError`] and a type
//! alias [`Result`] used throughout the crate. Library operations turn most of
//! these into boolean or absent results at their boundary; the error values
//! carry the human-readable message that explains the rejection.

use thiserror::Error;

/// The main error type for game launcher operations.
///
/// # Examples
///
/// ```
/// use game_launcher::domain::LauncherError;
///
/// let err = LauncherError::Validation("game name must not be empty".to_string());
/// assert_eq!(err.to_string(), "Invalid input: game name must not be empty");
/// ```
#[derive(Debug, Error)]
pub enum LauncherError {
    /// A required field was empty or malformed.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A game with the same name and path is already in the library.
    #[error("Duplicate game: '{name}' at {path} is already in the library")]
    Duplicate {
        /// Name of the rejected game.
        name: String,
        /// Executable path of the rejected game.
        path: String,
    },

    /// No game exists with the given identifier.
    #[error("Game not found: {0}")]
    NotFound(String),

    /// Encoding, decoding or replacing the snapshot file failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The operating system refused to start the game executable.
    #[error("Launch error: {0}")]
    Launch(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for game launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
