//! Game table component.
//!
//! Renders rows as left-aligned columns: ID, NAME, GENRE, PLAYS, PLAY TIME
//! and LAST PLAYED. Column widths follow the widest cell, except NAME and
//! GENRE which are capped and truncated with `…`.

use crate::ui::helpers::{pad, truncate, width, Painter};
use crate::ui::viewmodel::GameRow;
use std::fmt::Write;

const HEADERS: [&str; 6] = ["ID", "NAME", "GENRE", "PLAYS", "PLAY TIME", "LAST PLAYED"];

const MAX_NAME_WIDTH: usize = 32;
const MAX_GENRE_WIDTH: usize = 16;

/// Gap between columns.
const GAP: usize = 2;

/// Renders the header line, a rule and one line per row.
///
/// Highlight ranges are dropped for names that had to be truncated.
pub fn render_table(rows: &[GameRow], painter: &Painter<'_>) -> String {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.id.clone(),
                truncate(&row.name, MAX_NAME_WIDTH),
                truncate(&row.genre, MAX_GENRE_WIDTH),
                row.plays.clone(),
                row.play_time.clone(),
                row.last_played.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(width);
    for line in &cells {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(width(cell));
        }
    }

    let mut out = String::new();
    let colors = &painter.theme().colors;

    let header: String = HEADERS
        .iter()
        .zip(widths)
        .map(|(title, w)| format!("{title}{}", pad(title, w + GAP)))
        .collect();
    let _ = writeln!(out, "{}", painter.strong(header.trim_end(), &colors.header_fg));

    let total_width = widths.iter().sum::<usize>() + GAP * (widths.len() - 1);
    let _ = writeln!(out, "{}", painter.rule(total_width));

    for (row, line) in rows.iter().zip(&cells) {
        let name = if line[1] == row.name {
            painter.highlighted(&line[1], &row.highlight_ranges)
        } else {
            painter.text(&line[1])
        };

        let mut rendered = String::new();
        let _ = write!(rendered, "{}{}", painter.dim(&line[0]), pad(&line[0], widths[0] + GAP));
        let _ = write!(rendered, "{name}{}", pad(&line[1], widths[1] + GAP));
        for (i, cell) in line.iter().enumerate().skip(2) {
            rendered.push_str(&painter.text(cell));
            if i + 1 < line.len() {
                rendered.push_str(&pad(cell, widths[i] + GAP));
            }
        }
        let _ = writeln!(out, "{rendered}");
    }

    out.truncate(out.trim_end_matches('\n').len());
    out
}
