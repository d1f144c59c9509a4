//! Domain layer for the game launcher.
//!
//! This module contains the core domain types, independent of how they are
//! persisted or presented.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`game`]: Game model, editable-field updates and id generation
//!
//! # Examples
//!
//! ```
//! use game_launcher::domain::{Game, Result};
//!
//! fn create_game() -> Result<Game> {
//!     Ok(Game::new("Chess", "/usr/games/chess", Some("Board"), None))
//! }
//! ```

pub mod error;
pub mod game;

pub use error::{LauncherError, Result};
pub use game::{Game, GameUpdate};
