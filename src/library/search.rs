//! Fuzzy matching over game names.
//!
//! Plain keyword search lives on [`Game::matches_keyword`]; this module adds
//! ranked fuzzy matching and the character ranges the front end highlights.
//! Both match case-insensitively against the name as displayed, so a ranked
//! hit always has highlight positions in the same string.

use crate::domain::Game;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

fn matcher() -> SkimMatcherV2 {
    SkimMatcherV2::default().ignore_case()
}

/// Ranks `games` by fuzzy score of their name against `query`.
///
/// The query is split on whitespace and every token must match the name.
/// Games are returned best match first; equal scores keep input order. An
/// empty query returns every game in input order.
pub fn rank_fuzzy<'a>(games: impl IntoIterator<Item = &'a Game>, query: &str) -> Vec<&'a Game> {
    let _span = tracing::debug_span!("rank_fuzzy", query_len = query.len()).entered();

    let tokens: Vec<&str> = query.split_whitespace().collect();

    if tokens.is_empty() {
        return games.into_iter().collect();
    }

    let matcher = matcher();

    let mut scored: Vec<(i64, &Game)> = games
        .into_iter()
        .filter_map(|game| {
            tokens
                .iter()
                .map(|token| matcher.fuzzy_match(&game.name, token))
                .sum::<Option<i64>>()
                .map(|score| (score, game))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    tracing::debug!(matched = scored.len(), "fuzzy ranking complete");
    scored.into_iter().map(|(_, game)| game).collect()
}

/// Computes character index ranges of `text` matched by `query`.
///
/// Consecutive matched characters are coalesced into `(start, end)` ranges
/// with an exclusive end. Returns an empty list when nothing matches.
///
/// # Examples
///
/// ```
/// use game_launcher::library::search::highlight_ranges;
///
/// assert_eq!(highlight_ranges("Chess", "che"), vec![(0, 3)]);
/// assert!(highlight_ranges("Chess", "xyz").is_empty());
/// ```
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher().fuzzy_indices(text, query) else {
        return Vec::new();
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();

    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }

    ranges
}
