//! Text rendering layer.
//!
//! Command outcomes are rendered to plain `String`s, colored with the active
//! [`Theme`] unless color is disabled.
//!
//! ```text
//! Outcome → viewmodel → components → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready rows, details and statistics
//! - [`renderer`]: Top-level `Outcome` rendering
//! - [`components`]: Header, table, field panel and empty state
//! - [`helpers`]: [`Painter`] and column helpers
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use helpers::Painter;
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{EmptyState, GameDetail, GameRow, StatsView};
