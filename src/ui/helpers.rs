//! Shared rendering utilities.
//!
//! Renderers build plain `String`s through a [`Painter`], which wraps text in
//! the theme's ANSI sequences, or leaves it untouched when color is off.
//! Column math always counts characters, never bytes.

use crate::ui::theme::Theme;

/// Applies a [`Theme`] to text.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    theme: &'a Theme,
    color: bool,
}

impl<'a> Painter<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme, color: bool) -> Self {
        Self { theme, color }
    }

    #[must_use]
    pub const fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// `text` in the foreground color `hex`.
    #[must_use]
    pub fn paint(&self, text: &str, hex: &str) -> String {
        if self.color {
            format!("{}{text}{}", Theme::fg(hex), Theme::reset())
        } else {
            text.to_string()
        }
    }

    /// `text` in bold, colored `hex`.
    #[must_use]
    pub fn strong(&self, text: &str, hex: &str) -> String {
        if self.color {
            format!("{}{}{text}{}", Theme::bold(), Theme::fg(hex), Theme::reset())
        } else {
            text.to_string()
        }
    }

    #[must_use]
    pub fn text(&self, text: &str) -> String {
        self.paint(text, &self.theme.colors.text_normal)
    }

    #[must_use]
    pub fn dim(&self, text: &str) -> String {
        self.paint(text, &self.theme.colors.text_dim)
    }

    #[must_use]
    pub fn accent(&self, text: &str) -> String {
        self.strong(text, &self.theme.colors.accent)
    }

    #[must_use]
    pub fn success(&self, text: &str) -> String {
        self.paint(text, &self.theme.colors.success)
    }

    #[must_use]
    pub fn danger(&self, text: &str) -> String {
        self.strong(text, &self.theme.colors.danger)
    }

    /// Renders `text` with the character ranges in `ranges` highlighted.
    ///
    /// Ranges are `(start, end)` character indices with an exclusive end, as
    /// produced by fuzzy matching. Without color the text comes back as is.
    #[must_use]
    pub fn highlighted(&self, text: &str, ranges: &[(usize, usize)]) -> String {
        if ranges.is_empty() || !self.color {
            return self.text(text);
        }

        let colors = &self.theme.colors;
        let normal = Theme::fg(&colors.text_normal);
        let mark = format!("{}{}", Theme::fg(&colors.match_highlight_fg), Theme::bg(&colors.match_highlight_bg));

        let chars: Vec<char> = text.chars().collect();
        let mut out = normal.clone();
        let mut current_pos = 0;

        for &(start, end) in ranges {
            let start = start.min(chars.len());
            let end = end.min(chars.len());
            if start < current_pos || start >= end {
                continue;
            }

            out.extend(&chars[current_pos..start]);
            out.push_str(&mark);
            out.extend(&chars[start..end]);
            out.push_str(Theme::reset());
            out.push_str(&normal);
            current_pos = end;
        }

        out.extend(&chars[current_pos..]);
        out.push_str(Theme::reset());
        out
    }

    /// A horizontal rule `width` characters wide.
    #[must_use]
    pub fn rule(&self, width: usize) -> String {
        self.paint(&"─".repeat(width), &self.theme.colors.border)
    }
}

/// Number of characters `text` occupies.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, marking the cut with `…`.
///
/// # Examples
///
/// ```
/// use game_launcher::ui::helpers::truncate;
///
/// assert_eq!(truncate("Chess", 10), "Chess");
/// assert_eq!(truncate("Stardew Valley", 8), "Stardew…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Spaces needed to pad `text` out to `column` characters.
#[must_use]
pub fn pad(text: &str, column: usize) -> String {
    " ".repeat(column.saturating_sub(width(text)))
}
