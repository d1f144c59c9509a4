//! Composable text components.
//!
//! Each component turns a view model into a block of lines. Components never
//! print; the renderer joins their output.
//!
//! - [`header`]: Section title with an underline
//! - [`table`]: Game list with ID, NAME, GENRE, PLAYS, PLAY TIME, LAST PLAYED
//! - [`fields`]: Aligned `label: value` panel (details, statistics)
//! - [`empty`]: Message shown instead of an empty table

pub mod empty;
pub mod fields;
pub mod header;
pub mod table;

pub use empty::render_empty_state;
pub use fields::render_fields;
pub use header::render_header;
pub use table::render_table;
