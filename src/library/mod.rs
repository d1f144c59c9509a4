//! The game library: validation, queries, launching and statistics.
//!
//! - [`manager`]: [`GameLibrary`], the id-keyed collection over a storage backend
//! - [`search`]: Fuzzy ranking and match highlighting
//! - [`stats`]: Aggregate counters

pub mod manager;
pub mod search;
pub mod stats;

pub use manager::GameLibrary;
pub use stats::{LibraryStats, NO_GAMES};
