//! Section header component.

use crate::ui::helpers::{width, Painter};

/// Renders `title` in the header color, underlined to its width.
pub fn render_header(title: &str, painter: &Painter<'_>) -> String {
    let colors = &painter.theme().colors;
    format!(
        "{}\n{}",
        painter.strong(title, &colors.header_fg),
        painter.rule(width(title))
    )
}
