use tracing::instrument;

use crate::{
  matching::{
    MatchContext, MatchOptions, MatchWeights, Signal,
    filters::{self, FilterDecision},
    round3, round4,
    signals::{AvailabilityFit, CourseworkAlignment, ExperienceAlignment, GraduationYearFit, LocationModeFit, MajorAlignment, PreferredSkills, RequiredSkills},
  },
  model::{InternshipMatchInput, MatchBreakdown, MatchResult, SignalContribution, StudentMatchProfile},
};

/// Bumped whenever scoring or filtering behavior changes in a way that makes
/// stored results incomparable.
pub const MATCHING_VERSION: &str = "rules-v1";

/// Scores one internship against one student profile. Pure and deterministic,
/// identical inputs always produce identical results.
///
/// Eligibility filters run in a fixed order: mode, term, hours and location
/// checks first, then skills and coursework are scored, then the graduation
/// and experience filters. An ineligible listing keeps the reasons and gaps
/// accumulated up to the failing filter but scores zero.
#[instrument(skip_all, fields(internship_id = %internship.id))]
pub fn evaluate_internship_match(internship: &InternshipMatchInput, profile: &StudentMatchProfile, weights: &MatchWeights, options: &MatchOptions) -> MatchResult {
  let cx = MatchContext::new(internship, profile);
  let max_score = round3(weights.sum());

  let mut tally = Tally::new(options.explain);

  if let FilterDecision::Fail(gap) = filters::pre_scoring(&cx) {
    return tally.ineligible(gap, max_score);
  }

  tally.apply(&cx, &RequiredSkills, weights.required_skills);
  tally.apply(&cx, &PreferredSkills, weights.preferred_skills);
  tally.apply(&cx, &CourseworkAlignment, weights.coursework);

  if let FilterDecision::Fail(gap) = filters::post_skills(&cx) {
    return tally.ineligible(gap, max_score);
  }

  tally.apply(&cx, &MajorAlignment, weights.major);
  tally.apply(&cx, &GraduationYearFit, weights.graduation_year);
  tally.apply(&cx, &ExperienceAlignment, weights.experience);
  tally.apply(&cx, &AvailabilityFit, weights.availability);
  tally.apply(&cx, &LocationModeFit, weights.location_mode);

  tally.finish(max_score)
}

/// Running state of one evaluation. Points are rounded per signal before
/// accumulation so the breakdown always sums to the final score exactly.
struct Tally {
  score: f64,
  reasons: Vec<(f64, String)>,
  gaps: Vec<String>,
  contributions: Option<Vec<SignalContribution>>,
}

impl Tally {
  fn new(explain: bool) -> Tally {
    Tally {
      score: 0.0,
      reasons: Vec::new(),
      gaps: Vec::new(),
      contributions: explain.then(Vec::new),
    }
  }

  fn apply(&mut self, cx: &MatchContext, signal: &dyn Signal, weight: f64) {
    let outcome = signal.evaluate(cx);
    let points = round3(outcome.raw * weight);

    tracing::debug!(signal = signal.key(), raw = outcome.raw, points, "scored signal");

    self.score += points;

    if points > 0.0
      && let Some(detail) = outcome.detail
    {
      self.reasons.push((points, format!("{}: {detail} (+{points:.1})", signal.label())));
    }

    if let Some(gap) = outcome.gap {
      self.gaps.push(gap);
    }

    if let Some(contributions) = self.contributions.as_mut() {
      contributions.push(SignalContribution {
        key: signal.key(),
        weight,
        raw: round4(outcome.raw),
        points,
        evidence: outcome.evidence,
      });
    }
  }

  /// Reasons and gaps accumulated so far survive, points do not.
  fn ineligible(mut self, gap: String, max_score: f64) -> MatchResult {
    self.gaps.push(gap);

    MatchResult {
      score: 0.0,
      reasons: self.sorted_reasons(),
      gaps: self.gaps,
      eligible: false,
      matching_version: MATCHING_VERSION,
      max_score,
      normalized_score: 0.0,
      breakdown: self.contributions.map(|_| MatchBreakdown { contributions: Vec::new() }),
    }
  }

  fn finish(mut self, max_score: f64) -> MatchResult {
    let score = round3(self.score);
    let normalized_score = if max_score > 0.0 { round4(score / max_score) } else { 0.0 };

    MatchResult {
      score,
      reasons: self.sorted_reasons(),
      gaps: self.gaps,
      eligible: true,
      matching_version: MATCHING_VERSION,
      max_score,
      normalized_score,
      breakdown: self.contributions.map(|contributions| MatchBreakdown { contributions }),
    }
  }

  fn sorted_reasons(&mut self) -> Vec<String> {
    self.reasons.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    self.reasons.drain(..).map(|(_, reason)| reason).collect()
  }
}
