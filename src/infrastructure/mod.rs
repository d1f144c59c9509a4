//! Infrastructure layer for filesystem and operating-system interactions.
//!
//! - [`paths`]: Platform data/config locations and `~` expansion
//! - [`launcher`]: Handing a game executable off to the OS

pub mod launcher;
pub mod paths;

pub use launcher::{Launcher, ProcessLauncher};
pub use paths::{expand_tilde, get_config_path, get_data_dir};
