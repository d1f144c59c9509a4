//! Theme management and ANSI escape sequence generation.
//!
//! Themes are small TOML documents. Two are built in (`launcher-dark`, the
//! default, and `launcher-light`); any other theme can be loaded from a file.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#4cc2ff"
//! text_normal = "#e6eaf0"
//! text_dim = "#98a2b3"
//! border = "#1a212b"
//! accent = "#71d2ff"
//! match_highlight_fg = "#0e141b"
//! match_highlight_bg = "#4cc2ff"
//! success = "#4cc2ff"
//! danger = "#ff5d5d"
//! ```

use crate::domain::error::{LauncherError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "launcher-dark";

/// Names of the built-in themes.
pub const BUILTIN_THEMES: [&str; 2] = ["launcher-dark", "launcher-light"];

/// Color scheme used by the renderers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette, as `#rrggbb` strings.
    pub colors: ThemeColors,
}

/// Color definitions for every rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Titles and table headers.
    pub header_fg: String,
    /// Regular text.
    pub text_normal: String,
    /// Secondary text (ids, paths, hints).
    pub text_dim: String,
    /// Separator lines.
    pub border: String,
    /// Emphasised values (game names in details, totals).
    pub accent: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,
    /// Confirmation messages.
    pub success: String,
    /// Rejections and failures.
    pub danger: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "launcher-dark" => include_str!("../../themes/launcher-dark.toml"),
            "launcher-light" => include_str!("../../themes/launcher-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LauncherError::Config`] if the file can't be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            LauncherError::Config(format!("failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| LauncherError::Config(format!("failed to parse theme TOML: {e}")))
    }

    /// Picks the theme for a run: `theme_file` first, then `theme_name`,
    /// then the default. Problems with either are logged and skipped.
    #[must_use]
    pub fn resolve(theme_name: Option<&str>, theme_file: Option<&Path>) -> Self {
        if let Some(file) = theme_file {
            match Self::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(error = %e, "falling back from custom theme"),
            }
        }

        if let Some(name) = theme_name {
            match Self::from_name(name) {
                Some(theme) => return theme,
                None => tracing::warn!(theme = %name, "unknown built-in theme"),
            }
        }

        Self::default()
    }

    /// Converts `#rrggbb` to an RGB tuple, white on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground color escape sequence for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background color escape sequence for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used if the embedded default theme ever fails to parse.
    fn fallback() -> Self {
        let white = || "#ffffff".to_string();
        Self {
            name: "plain".to_string(),
            colors: ThemeColors {
                header_fg: white(),
                text_normal: white(),
                text_dim: "#a0a0a0".to_string(),
                border: "#a0a0a0".to_string(),
                accent: white(),
                match_highlight_fg: "#000000".to_string(),
                match_highlight_bg: white(),
                success: white(),
                danger: white(),
            },
        }
    }
}

impl Default for Theme {
    /// The `launcher-dark` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("nope").is_none());
    }

    #[test]
    fn test_fg_escape_sequence() {
        assert_eq!(Theme::fg("#4cc2ff"), "\u{1b}[38;2;76;194;255m");
        assert_eq!(Theme::bg("bad"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn test_resolve_prefers_file_then_name() {
        let mut file = NamedTempFile::new().unwrap();
        let mut custom = Theme::default();
        custom.name = "custom".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        assert_eq!(Theme::resolve(Some("launcher-light"), Some(file.path())).name, "custom");
        assert_eq!(Theme::resolve(Some("launcher-light"), None).name, "launcher-light");
        assert_eq!(
            Theme::resolve(Some("missing"), Some(Path::new("/no/such/theme.toml"))).name,
            DEFAULT_THEME
        );
    }
}
