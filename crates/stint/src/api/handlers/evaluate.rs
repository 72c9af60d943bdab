use axum::{Json, http::StatusCode, response::IntoResponse};
use libstint::prelude::*;
use tracing::instrument;

use crate::api::{dto::EvaluatePayload, errors::AppError, middlewares::json_rejection::TypedJson};

/// Single-pair report: always runs in explain mode so the caller gets the
/// full per-signal breakdown alongside reasons and gaps.
#[instrument(skip_all)]
pub async fn evaluate(TypedJson(body): TypedJson<EvaluatePayload>) -> Result<(StatusCode, impl IntoResponse), AppError> {
  body.weights.validate()?;

  let result = evaluate_internship_match(&body.internship, &body.profile, &body.weights, &MatchOptions { explain: true });

  Ok((StatusCode::OK, Json(result)))
}
