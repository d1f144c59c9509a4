//! Application layer: command-line parsing and command dispatch.
//!
//! ```text
//! Cli ─parse─▶ Command ─execute─▶ Outcome ─ui::render─▶ text
//! ```
//!
//! - [`commands`]: `clap` definitions of the global flags and subcommands
//! - [`handler`]: Maps a command onto the library and captures an [`Outcome`]

pub mod commands;
pub mod handler;

pub use commands::{Cli, Command};
pub use handler::{execute, Listing, Outcome};
