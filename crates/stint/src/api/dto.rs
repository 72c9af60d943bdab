use libstint::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct RankPayload {
  pub profile: StudentMatchProfile,
  #[validate(length(min = 1, message = "at least one internship must be provided"))]
  pub internships: Vec<InternshipMatchInput>,

  #[serde(default)]
  pub weights: MatchWeights,
  #[serde(default)]
  pub options: MatchOptions,

  // Body-side cap on returned hits, defaulting to the configured limit
  pub limit: Option<usize>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub(crate) struct EvaluatePayload {
  pub internship: InternshipMatchInput,
  pub profile: StudentMatchProfile,

  #[serde(default)]
  pub weights: MatchWeights,
}

#[derive(Serialize)]
pub(super) struct RankResponse {
  pub candidates: usize,
  pub eligible: usize,
  pub limit: usize,
  pub results: Vec<RankedInternship>,
}
