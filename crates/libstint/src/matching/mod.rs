pub(crate) mod extractors;
pub(crate) mod filters;
pub(crate) mod normalize;
pub(crate) mod signals;

pub mod evaluate;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use serde_inline_default::serde_inline_default;

use crate::{
  error::StintError,
  matching::normalize::{normalize_year, parse_list, required_experience_ordinal, season_from_term, student_experience_ordinal},
  model::{InternshipMatchInput, StudentMatchProfile, WorkMode},
};

/// One non-negative weight per scoring signal. The sum of all weights is the
/// maximum score of an evaluation; callers may override any subset per call
/// without affecting anyone else.
#[serde_inline_default]
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct MatchWeights {
  #[serde_inline_default(4.0)]
  pub required_skills: f64,
  #[serde_inline_default(2.0)]
  pub preferred_skills: f64,
  #[serde_inline_default(1.5)]
  pub coursework: f64,
  #[serde_inline_default(3.5)]
  pub major: f64,
  #[serde_inline_default(1.5)]
  pub graduation_year: f64,
  #[serde_inline_default(1.5)]
  pub experience: f64,
  #[serde_inline_default(2.0)]
  pub availability: f64,
  #[serde_inline_default(1.0)]
  pub location_mode: f64,
}

impl Default for MatchWeights {
  fn default() -> Self {
    MatchWeights {
      required_skills: 4.0,
      preferred_skills: 2.0,
      coursework: 1.5,
      major: 3.5,
      graduation_year: 1.5,
      experience: 1.5,
      availability: 2.0,
      location_mode: 1.0,
    }
  }
}

impl MatchWeights {
  pub fn sum(&self) -> f64 {
    self.required_skills + self.preferred_skills + self.coursework + self.major + self.graduation_year + self.experience + self.availability + self.location_mode
  }

  pub fn validate(&self) -> Result<(), StintError> {
    let fields = [
      ("required_skills", self.required_skills),
      ("preferred_skills", self.preferred_skills),
      ("coursework", self.coursework),
      ("major", self.major),
      ("graduation_year", self.graduation_year),
      ("experience", self.experience),
      ("availability", self.availability),
      ("location_mode", self.location_mode),
    ];

    for (name, value) in fields {
      if !value.is_finite() || value < 0.0 {
        return Err(StintError::InvalidWeights(format!("{name} must be a non-negative number")));
      }
    }

    Ok(())
  }
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct MatchOptions {
  #[serde(default)]
  pub explain: bool,
}

pub(crate) trait Signal {
  fn key(&self) -> &'static str;
  fn label(&self) -> &'static str;
  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome;
}

/// Raw (unweighted) outcome of one signal. `detail` feeds the reason string
/// when points end up positive, `gap` is recorded regardless of points.
#[derive(Debug, Default)]
pub(crate) struct SignalOutcome {
  pub raw: f64,
  pub detail: Option<String>,
  pub gap: Option<String>,
  pub evidence: Vec<String>,
}

/// Everything derived from the two inputs, computed once per evaluation so
/// filters and signals compare precomputed tokens instead of re-parsing.
pub(crate) struct MatchContext<'e> {
  pub internship: &'e InternshipMatchInput,
  pub profile: &'e StudentMatchProfile,

  pub work_mode: Option<WorkMode>,
  pub term: Option<String>,
  pub location_name: Option<String>,

  pub internship_majors: Vec<String>,
  pub profile_majors: Vec<String>,

  pub required_skill_texts: Vec<String>,
  pub preferred_skill_texts: Vec<String>,
  pub profile_skills: Vec<String>,

  pub internship_coursework: Vec<String>,
  pub profile_coursework: Vec<String>,

  pub target_years: Vec<String>,
  pub student_year: Option<String>,

  pub required_experience: Option<u8>,
  pub student_experience: Option<u8>,
}

impl<'e> MatchContext<'e> {
  pub(crate) fn new(internship: &'e InternshipMatchInput, profile: &'e StudentMatchProfile) -> MatchContext<'e> {
    MatchContext {
      internship,
      profile,
      work_mode: extractors::derive_work_mode(internship),
      term: extractors::derive_term(internship),
      location_name: extractors::derive_location_name(internship),
      internship_majors: parse_list(&internship.majors),
      profile_majors: parse_list(&profile.majors),
      required_skill_texts: extractors::required_skill_texts(internship),
      preferred_skill_texts: extractors::preferred_skill_texts(internship),
      profile_skills: parse_list(&profile.skills),
      internship_coursework: extractors::coursework_texts(internship),
      profile_coursework: parse_list(&profile.coursework),
      target_years: internship.target_graduation_years.iter().map(|year| normalize_year(year)).filter(|year| !year.is_empty()).collect(),
      student_year: profile.year.as_deref().map(normalize_year).filter(|year| !year.is_empty()),
      required_experience: internship.experience_level.as_deref().and_then(required_experience_ordinal),
      student_experience: profile.experience_level.as_deref().and_then(student_experience_ordinal),
    }
  }

  /// The internship's season, derived from whatever term is available.
  pub(crate) fn season(&self) -> Option<String> {
    self.term.as_deref().map(season_from_term)
  }

  /// Category text used by the major signal's substring fallback: explicit
  /// or description-derived category, else the first listed major.
  pub(crate) fn category_text(&self) -> Option<String> {
    extractors::derive_category(self.internship).or_else(|| self.internship_majors.first().cloned())
  }
}

/// Division guarded against empty denominators, per the "missing data scores
/// zero, never errors" rule.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
  if denominator == 0 { 0.0 } else { numerator as f64 / denominator as f64 }
}

pub(crate) fn round3(value: f64) -> f64 {
  (value * 1_000.0).round() / 1_000.0
}

pub(crate) fn round4(value: f64) -> f64 {
  (value * 10_000.0).round() / 10_000.0
}
