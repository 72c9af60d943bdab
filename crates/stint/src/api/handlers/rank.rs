use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use libstint::prelude::*;
use tracing::instrument;

use crate::api::{
  AppState,
  dto::{RankPayload, RankResponse},
  errors::AppError,
  middlewares::json_rejection::TypedJson,
};

/// Ranking preview: evaluates every supplied internship against the profile
/// and returns the eligible ones, best first, capped at the requested limit.
#[instrument(skip_all)]
pub async fn rank(State(state): State<AppState>, TypedJson(body): TypedJson<RankPayload>) -> Result<(StatusCode, impl IntoResponse), AppError> {
  body.weights.validate()?;

  let limit = body.limit.unwrap_or(state.config.rank_limit);
  let candidates = body.internships.len();

  let mut results = rank_internships(body.internships, &body.profile, &body.weights, &body.options);
  let eligible = results.len();

  results.truncate(limit);

  tracing::debug!(candidates, eligible, returned = results.len(), "ranked preview");

  Ok((StatusCode::OK, Json(RankResponse { candidates, eligible, limit, results })))
}
