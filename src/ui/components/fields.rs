//! Labelled value panel.

use crate::ui::helpers::{pad, width, Painter};
use std::fmt::Write;

/// Renders `label: value` lines with the values aligned in one column.
///
/// ```text
/// id           1718000000000-a1b2c3
/// play time    2h 05m
/// ```
pub fn render_fields(fields: &[(&str, String)], painter: &Painter<'_>) -> String {
    let label_width = fields.iter().map(|(label, _)| width(label)).max().unwrap_or(0) + 2;

    let mut out = String::new();
    for (label, value) in fields {
        let _ = writeln!(
            out,
            "{}{}{}",
            painter.dim(label),
            pad(label, label_width),
            painter.text(value)
        );
    }
    out.truncate(out.trim_end_matches('\n').len());
    out
}
