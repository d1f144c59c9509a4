//! Empty state component.

use crate::ui::helpers::Painter;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state: the message, then a dimmed hint.
pub fn render_empty_state(empty: &EmptyState, painter: &Painter<'_>) -> String {
    format!("{}\n{}", painter.accent(&empty.message), painter.dim(&empty.subtitle))
}
