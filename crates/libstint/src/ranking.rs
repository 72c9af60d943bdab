use std::time::Instant;

use itertools::Itertools;
use jiff::Timestamp;
use metrics::histogram;
use serde::Serialize;
use tracing::instrument;

use crate::{
  matching::{MatchOptions, MatchWeights, evaluate::evaluate_internship_match},
  model::{InternshipMatchInput, MatchResult, StudentMatchProfile},
};

/// An eligible internship with the evaluation that ranked it.
#[derive(Clone, Debug, Serialize)]
pub struct RankedInternship {
  #[serde(flatten)]
  pub internship: InternshipMatchInput,
  #[serde(rename = "match")]
  pub match_: MatchResult,
}

/// Evaluates every candidate against the profile and returns the eligible
/// ones, best first. Ties on score break toward the most recently created
/// listing; listings without a creation time sort as oldest.
#[instrument(skip_all, fields(candidates = internships.len()))]
pub fn rank_internships(internships: Vec<InternshipMatchInput>, profile: &StudentMatchProfile, weights: &MatchWeights, options: &MatchOptions) -> Vec<RankedInternship> {
  let then = Instant::now();

  let ranked = internships
    .into_iter()
    .filter_map(|internship| {
      let match_ = evaluate_internship_match(&internship, profile, weights, options);

      histogram!("stint_scoring_scores").record(match_.score);

      match_.eligible.then_some(RankedInternship { internship, match_ })
    })
    .sorted_by(|a, b| {
      b.match_
        .score
        .total_cmp(&a.match_.score)
        .then_with(|| created_at(&b.internship).cmp(&created_at(&a.internship)))
    })
    .collect::<Vec<_>>();

  histogram!("stint_scoring_latency_seconds").record(then.elapsed().as_secs_f64());

  tracing::debug!(eligible = ranked.len(), "ranked candidates");

  ranked
}

fn created_at(internship: &InternshipMatchInput) -> Timestamp {
  internship.created_at.unwrap_or(Timestamp::UNIX_EPOCH)
}
