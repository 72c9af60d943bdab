use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};
use any_ascii::any_ascii;
use itertools::Itertools;

use crate::model::{TextOrList, WorkMode};

/// Canonical text form used for every comparison: ASCII-folded, lowercased,
/// with `_`/`-` runs and whitespace runs collapsed to single spaces.
pub(crate) fn normalize_text(input: &str) -> String {
  any_ascii(input)
    .to_lowercase()
    .chars()
    .map(|c| match c {
      '_' | '-' => ' ',
      c => c,
    })
    .collect::<String>()
    .split_whitespace()
    .join(" ")
}

/// Normalizes a list-or-comma-string field into non-empty tokens,
/// deduplicated by their normalized form, original order preserved.
pub(crate) fn parse_list(input: &TextOrList) -> Vec<String> {
  match input {
    TextOrList::Text(text) => tokens(text.split(',')),
    TextOrList::List(items) => tokens(items.iter().map(String::as_str)),
  }
}

fn tokens<'s>(parts: impl Iterator<Item = &'s str>) -> Vec<String> {
  parts.map(normalize_text).filter(|token| !token.is_empty()).unique().collect()
}

pub(crate) fn parse_work_mode(input: &str) -> Option<WorkMode> {
  let text = normalize_text(input);

  if text.contains("remote") {
    Some(WorkMode::Remote)
  } else if text.contains("hybrid") {
    Some(WorkMode::Hybrid)
  } else if text.contains("on site") || text.contains("onsite") || text.contains("in person") {
    Some(WorkMode::OnSite)
  } else {
    None
  }
}

const SEASONS: [(&str, &str); 5] = [("summer", "summer"), ("fall", "fall"), ("autumn", "fall"), ("winter", "winter"), ("spring", "spring")];

const MONTHS: [(&str, &str); 12] = [
  ("january", "winter"),
  ("february", "winter"),
  ("march", "spring"),
  ("april", "spring"),
  ("may", "summer"),
  ("june", "summer"),
  ("july", "summer"),
  ("august", "summer"),
  ("september", "fall"),
  ("october", "fall"),
  ("november", "fall"),
  ("december", "winter"),
];

static SEASON_KEYWORDS: LazyLock<AhoCorasick> = LazyLock::new(|| keyword_automaton(&SEASONS.map(|(keyword, _)| keyword)));
static MONTH_KEYWORDS: LazyLock<AhoCorasick> = LazyLock::new(|| keyword_automaton(&MONTHS.map(|(keyword, _)| keyword)));

// Leftmost-first: when a term mentions several keywords, the earliest
// mention wins, and table order breaks ties at the same position.
fn keyword_automaton(keywords: &[&str]) -> AhoCorasick {
  AhoCorasick::builder().match_kind(MatchKind::LeftmostFirst).build(keywords).unwrap()
}

/// Reduces a term to one of `summer`/`fall`/`winter`/`spring`. Season names
/// win over month names, the earliest mention wins within each tier, and
/// unrecognized terms pass through normalized but otherwise unchanged.
pub(crate) fn season_from_term(term: &str) -> String {
  let text = normalize_text(term);

  if let Some(found) = SEASON_KEYWORDS.find(&text) {
    return SEASONS[found.pattern().as_usize()].1.to_string();
  }

  if let Some(found) = MONTH_KEYWORDS.find(&text) {
    return MONTHS[found.pattern().as_usize()].1.to_string();
  }

  text
}

/// Graduation-year tokens additionally drop inner whitespace, so "20 28"
/// and "2028" compare equal.
pub(crate) fn normalize_year(input: &str) -> String {
  normalize_text(input).chars().filter(|c| !c.is_whitespace()).collect()
}

pub(crate) fn required_experience_ordinal(level: &str) -> Option<u8> {
  match normalize_text(level).as_str() {
    "entry" => Some(0),
    "mid" => Some(1),
    "senior" => Some(2),
    _ => None,
  }
}

pub(crate) fn student_experience_ordinal(level: &str) -> Option<u8> {
  match normalize_text(level).as_str() {
    "none" => Some(0),
    "projects" => Some(1),
    "internship" => Some(2),
    _ => None,
  }
}
