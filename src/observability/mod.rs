//! Logging setup.
//!
//! Every module logs through `tracing` macros. This module installs the
//! subscriber that turns those events into output: a stderr layer and an
//! optional size-rotated log file in the data directory.
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file or `--log-level`
//! 3. Default: `"warn"`
//!
//! # Usage
//!
//! ```rust
//! use game_launcher::observability::init_tracing;
//! use game_launcher::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("launcher initialized");
//! ```

mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, LOG_FILE_NAME};
