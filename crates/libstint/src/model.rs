use std::fmt;

use bon::Builder;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Boundary type for fields that arrive either as a proper list or as a
/// single comma-delimited string. It is normalized into a token list by
/// `normalize::parse_list` as soon as matching starts and never compared
/// directly.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TextOrList {
  Text(String),
  List(Vec<String>),
}

impl Default for TextOrList {
  fn default() -> Self {
    TextOrList::List(Vec::new())
  }
}

impl From<&str> for TextOrList {
  fn from(value: &str) -> Self {
    TextOrList::Text(value.to_string())
  }
}

impl<S: Into<String>> From<Vec<S>> for TextOrList {
  fn from(value: Vec<S>) -> Self {
    TextOrList::List(value.into_iter().map(Into::into).collect())
  }
}

/// Work arrangements we understand. Anything else derives to `None` and is
/// treated as unknown by filters and signals.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
  Remote,
  Hybrid,
  OnSite,
}

impl fmt::Display for WorkMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      WorkMode::Remote => write!(f, "remote"),
      WorkMode::Hybrid => write!(f, "hybrid"),
      WorkMode::OnSite => write!(f, "on-site"),
    }
  }
}

/// A snapshot of one internship listing's matchable attributes.
///
/// Canonical catalog identifiers (`*_ids`) take precedence over their
/// free-text counterparts whenever both sides of an evaluation carry them.
/// The `description` field doubles as a legacy channel: `Category:`,
/// `Season:`, `Required skills:` and `Preferred skills:` lines are honored
/// when the structured fields are absent.
#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize)]
#[builder(on(String, into), on(TextOrList, into))]
#[serde(default)]
pub struct InternshipMatchInput {
  #[builder(default)]
  pub id: String,
  pub title: Option<String>,
  #[builder(default)]
  pub majors: TextOrList,
  #[builder(default)]
  pub target_graduation_years: Vec<String>,
  pub hours_per_week: Option<f64>,
  pub location: Option<String>,
  pub description: Option<String>,
  pub work_mode: Option<String>,
  pub term: Option<String>,
  pub experience_level: Option<String>,
  pub category: Option<String>,
  #[builder(default)]
  pub required_skills: TextOrList,
  #[builder(default)]
  pub preferred_skills: TextOrList,
  #[builder(default)]
  pub coursework: TextOrList,
  #[builder(default)]
  pub required_skill_ids: Vec<String>,
  #[builder(default)]
  pub preferred_skill_ids: Vec<String>,
  #[builder(default)]
  pub coursework_item_ids: Vec<String>,
  #[builder(default)]
  pub coursework_category_ids: Vec<String>,
  #[builder(default)]
  pub coursework_category_names: Vec<String>,
  pub created_at: Option<Timestamp>,
}

/// The student side of an evaluation.
#[derive(Builder, Clone, Debug, Default, Deserialize, Serialize)]
#[builder(on(String, into), on(TextOrList, into))]
#[serde(default)]
pub struct StudentMatchProfile {
  #[builder(default)]
  pub majors: TextOrList,
  pub year: Option<String>,
  pub experience_level: Option<String>,
  #[builder(default)]
  pub skills: TextOrList,
  #[builder(default)]
  pub skill_ids: Vec<String>,
  #[builder(default)]
  pub coursework: TextOrList,
  #[builder(default)]
  pub coursework_item_ids: Vec<String>,
  #[builder(default)]
  pub coursework_category_ids: Vec<String>,
  pub availability_hours_per_week: Option<f64>,
  #[builder(default)]
  pub preferred_terms: Vec<String>,
  #[builder(default)]
  pub preferred_locations: Vec<String>,
  #[builder(default)]
  pub preferred_work_modes: Vec<WorkMode>,
  #[builder(default)]
  pub remote_only: bool,
}

/// Outcome of evaluating one internship against one profile.
#[derive(Clone, Debug, Serialize)]
pub struct MatchResult {
  pub score: f64,
  pub reasons: Vec<String>,
  pub gaps: Vec<String>,
  pub eligible: bool,
  pub matching_version: &'static str,
  pub max_score: f64,
  pub normalized_score: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub breakdown: Option<MatchBreakdown>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct MatchBreakdown {
  pub contributions: Vec<SignalContribution>,
}

/// One signal's share of the score, kept structured so callers can render
/// their own debugging views instead of parsing reason strings.
#[derive(Clone, Debug, Serialize)]
pub struct SignalContribution {
  pub key: &'static str,
  pub weight: f64,
  pub raw: f64,
  pub points: f64,
  pub evidence: Vec<String>,
}
