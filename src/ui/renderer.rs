//! Turns command outcomes into terminal text.

use crate::app::{Listing, Outcome};
use crate::domain::game;
use crate::ui::components::{render_empty_state, render_fields, render_header, render_table};
use crate::ui::helpers::Painter;
use crate::ui::viewmodel::{EmptyState, GameDetail, GameRow, StatsView};

/// Renders `outcome` as text, without a trailing newline.
#[must_use]
pub fn render(outcome: &Outcome, painter: &Painter<'_>) -> String {
    let now = game::now();

    match outcome {
        Outcome::Added(game) => format!(
            "{} {} {}",
            painter.success("Added"),
            painter.accent(&game.name),
            painter.dim(&format!("({})", game.id))
        ),

        Outcome::Removed(name) => format!("{} {}", painter.success("Removed"), painter.accent(name)),

        Outcome::Updated(game) => {
            let detail = GameDetail::new(game, now);
            format!(
                "{} {}\n{}",
                painter.success("Updated"),
                painter.accent(&game.name),
                render_fields(&detail.fields, painter)
            )
        }

        Outcome::Launched(game) => format!(
            "{} {} {}",
            painter.success("Launched"),
            painter.accent(&game.name),
            painter.dim(&format!("(play #{})", game.play_count))
        ),

        Outcome::Games { games, listing } => render_listing(games, listing, painter, now),

        Outcome::Detail(game) => {
            let detail = GameDetail::new(game, now);
            format!(
                "{}\n{}",
                render_header(&detail.title, painter),
                render_fields(&detail.fields, painter)
            )
        }

        Outcome::Stats(stats) => format!(
            "{}\n{}",
            render_header("Library statistics", painter),
            render_fields(&StatsView::from(stats).fields, painter)
        ),

        Outcome::Genres(genres) if genres.is_empty() => painter.dim("No genres yet"),
        Outcome::Genres(genres) => genres
            .iter()
            .map(|genre| painter.text(genre))
            .collect::<Vec<_>>()
            .join("\n"),

        Outcome::Cleared(removed) => format!(
            "{} {}",
            painter.success("Cleared"),
            painter.text(&format!("{removed} games"))
        ),

        Outcome::Failed(message) => format!("{} {}", painter.danger("error:"), painter.text(message)),
    }
}

fn render_listing(
    games: &[crate::domain::Game],
    listing: &Listing,
    painter: &Painter<'_>,
    now: chrono::DateTime<chrono::Utc>,
) -> String {
    let (title, query) = match listing {
        Listing::All => ("Games".to_string(), None),
        Listing::Genre(genre) => (format!("Genre: {genre}"), None),
        Listing::Search { keyword, fuzzy } => (
            format!("Search: {keyword}"),
            fuzzy.then_some(keyword.as_str()),
        ),
    };

    if games.is_empty() {
        let empty = match listing {
            Listing::All => EmptyState::empty_library(),
            Listing::Genre(genre) => EmptyState::no_matches(&format!("genre '{genre}'")),
            Listing::Search { keyword, .. } => EmptyState::no_matches(&format!("'{keyword}'")),
        };
        return render_empty_state(&empty, painter);
    }

    let rows: Vec<GameRow> = games.iter().map(|game| GameRow::new(game, now, query)).collect();
    let count = match rows.len() {
        1 => "1 game".to_string(),
        n => format!("{n} games"),
    };

    format!(
        "{}\n{}\n{}",
        render_header(&title, painter),
        render_table(&rows, painter),
        painter.dim(&count)
    )
}
