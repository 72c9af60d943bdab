use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

use crate::{
  matching::normalize::{normalize_text, parse_list, parse_work_mode},
  model::{InternshipMatchInput, TextOrList, WorkMode},
};

// Legacy channels: older listings embed structured data as lines inside the
// free-text description. Structured fields always win when present.
static SEASON_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?im)^\s*season\s*:\s*(.+)$").unwrap());
static CATEGORY_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?im)^\s*category\s*:\s*(.+)$").unwrap());
static REQUIRED_SKILLS_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?im)^\s*required\s+skills\s*:\s*(.+)$").unwrap());
static PREFERRED_SKILLS_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?im)^\s*preferred\s+skills\s*:\s*(.+)$").unwrap());
static LOCATION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^()]*)\)\s*$").unwrap());

/// Explicit `work_mode` field first, then a trailing `(...)` annotation on
/// the location string, e.g. "New York, NY (Hybrid)".
pub(crate) fn derive_work_mode(internship: &InternshipMatchInput) -> Option<WorkMode> {
  if let Some(mode) = internship.work_mode.as_deref().and_then(parse_work_mode) {
    return Some(mode);
  }

  let location = internship.location.as_deref()?;
  let suffix = LOCATION_SUFFIX.captures(location)?;

  parse_work_mode(suffix.get(1)?.as_str())
}

/// Explicit `term` field first, then a `Season: <value>` line anywhere in
/// the description.
pub(crate) fn derive_term(internship: &InternshipMatchInput) -> Option<String> {
  if let Some(term) = internship.term.as_deref()
    && !term.trim().is_empty()
  {
    return Some(term.trim().to_string());
  }

  let description = internship.description.as_deref()?;
  let captures = SEASON_LINE.captures(description)?;

  Some(captures.get(1)?.as_str().trim().to_string())
}

/// Explicit `category` field first, then a `Category: <value>` line in the
/// description, normalized for substring comparison.
pub(crate) fn derive_category(internship: &InternshipMatchInput) -> Option<String> {
  let raw = match internship.category.as_deref().map(str::trim).filter(|category| !category.is_empty()) {
    Some(category) => category.to_string(),
    None => CATEGORY_LINE.captures(internship.description.as_deref()?)?.get(1)?.as_str().trim().to_string(),
  };

  let name = normalize_text(&raw);

  (!name.is_empty()).then_some(name)
}

/// The location with any trailing parenthetical annotation stripped,
/// normalized for substring comparison against preferred locations.
pub(crate) fn derive_location_name(internship: &InternshipMatchInput) -> Option<String> {
  let location = internship.location.as_deref()?;
  let name = normalize_text(LOCATION_SUFFIX.replace(location, "").as_ref());

  (!name.is_empty()).then_some(name)
}

/// Union of explicit required-skill text and `Required skills:` description
/// lines, normalized and deduplicated.
pub(crate) fn required_skill_texts(internship: &InternshipMatchInput) -> Vec<String> {
  skill_texts(&internship.required_skills, internship.description.as_deref(), &REQUIRED_SKILLS_LINE)
}

pub(crate) fn preferred_skill_texts(internship: &InternshipMatchInput) -> Vec<String> {
  skill_texts(&internship.preferred_skills, internship.description.as_deref(), &PREFERRED_SKILLS_LINE)
}

fn skill_texts(explicit: &TextOrList, description: Option<&str>, line: &Regex) -> Vec<String> {
  let from_description = description
    .and_then(|text| line.captures(text))
    .and_then(|captures| captures.get(1))
    .map(|m| parse_list(&TextOrList::Text(m.as_str().to_string())))
    .unwrap_or_default();

  parse_list(explicit).into_iter().chain(from_description).unique().collect()
}

/// Free-text coursework topics merged with catalog category display names,
/// so catalog-backed listings still participate in the text tier when the
/// student carries no category IDs.
pub(crate) fn coursework_texts(internship: &InternshipMatchInput) -> Vec<String> {
  parse_list(&internship.coursework)
    .into_iter()
    .chain(internship.coursework_category_names.iter().map(|name| normalize_text(name)))
    .filter(|topic| !topic.is_empty())
    .unique()
    .collect()
}

/// Everything a listing asks for, skill-wise: canonical IDs merged with the
/// union of explicit and description-derived skill text. Used by admin
/// tooling to show what an evaluation looked at.
pub fn infer_skills(internship: &InternshipMatchInput) -> Vec<String> {
  internship
    .required_skill_ids
    .iter()
    .chain(internship.preferred_skill_ids.iter())
    .cloned()
    .chain(required_skill_texts(internship))
    .chain(preferred_skill_texts(internship))
    .unique()
    .collect()
}

#[cfg(test)]
mod tests {
  use crate::model::{InternshipMatchInput, WorkMode};

  #[test]
  fn work_mode_prefers_explicit_field() {
    let internship = InternshipMatchInput::builder().work_mode("On-site").location("New York, NY (Hybrid)").build();

    assert_eq!(super::derive_work_mode(&internship), Some(WorkMode::OnSite));
  }

  #[test]
  fn work_mode_falls_back_to_location_suffix() {
    let internship = InternshipMatchInput::builder().location("New York, NY (Hybrid)").build();

    assert_eq!(super::derive_work_mode(&internship), Some(WorkMode::Hybrid));

    let internship = InternshipMatchInput::builder().location("New York, NY").build();

    assert_eq!(super::derive_work_mode(&internship), None);
  }

  #[test]
  fn term_falls_back_to_season_line() {
    let internship = InternshipMatchInput::builder().description("Great team.\nSeason: Summer 2026\nApply now.").build();

    assert_eq!(super::derive_term(&internship).as_deref(), Some("Summer 2026"));

    let internship = InternshipMatchInput::builder().term("Fall").description("Season: Summer").build();

    assert_eq!(super::derive_term(&internship).as_deref(), Some("Fall"));
  }

  #[test]
  fn category_falls_back_to_description_line() {
    let internship = InternshipMatchInput::builder().description("Category: Quantitative Finance\nSeason: Summer").build();

    assert_eq!(super::derive_category(&internship).as_deref(), Some("quantitative finance"));

    let internship = InternshipMatchInput::builder().category("Data Science").description("Category: Finance").build();

    assert_eq!(super::derive_category(&internship).as_deref(), Some("data science"));
  }

  #[test]
  fn coursework_texts_include_category_names() {
    let internship = InternshipMatchInput::builder()
      .coursework("Statistics")
      .coursework_category_names(vec!["Linear Algebra".into(), "statistics".into()])
      .build();

    assert_eq!(super::coursework_texts(&internship), vec!["statistics", "linear algebra"]);
  }

  #[test]
  fn location_name_strips_annotation() {
    let internship = InternshipMatchInput::builder().location("Chicago, IL (On-site)").build();

    assert_eq!(super::derive_location_name(&internship).as_deref(), Some("chicago, il"));
  }

  #[test]
  fn skill_texts_merge_explicit_and_description() {
    let internship = InternshipMatchInput::builder()
      .required_skills(vec!["Excel"])
      .description("Required skills: excel, financial modeling\nPreferred skills: PowerPoint")
      .build();

    assert_eq!(super::required_skill_texts(&internship), vec!["excel", "financial modeling"]);
    assert_eq!(super::preferred_skill_texts(&internship), vec!["powerpoint"]);
  }

  #[test]
  fn infer_skills_puts_catalog_ids_first() {
    let internship = InternshipMatchInput::builder()
      .required_skill_ids(vec!["sk-1".into()])
      .preferred_skill_ids(vec!["sk-1".into(), "sk-2".into()])
      .required_skills("Excel")
      .build();

    assert_eq!(super::infer_skills(&internship), vec!["sk-1", "sk-2", "excel"]);
  }
}
