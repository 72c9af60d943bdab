use std::borrow::Cow;

use axum::{
  Json, RequestExt,
  body::Body,
  extract::{FromRequest, rejection::JsonRejection},
  http::{Request, StatusCode},
  response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::api::errors::ApiError;

/// Extractor for the rank and evaluate payloads: deserializes the body, then
/// runs the DTO's validation rules. Both kinds of failure render in the same
/// JSON error shape as `AppError`.
pub struct TypedJson<T>(pub T);

pub enum TypedJsonRejection {
  Unreadable(JsonRejection),
  Invalid(ValidationErrors),
}

impl IntoResponse for TypedJsonRejection {
  fn into_response(self) -> Response {
    match self {
      TypedJsonRejection::Unreadable(err) => {
        let status = match err {
          JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
          _ => StatusCode::BAD_REQUEST,
        };

        ApiError(status, "could not read request payload".to_string(), Some(vec![err.body_text()])).into_response()
      }

      TypedJsonRejection::Invalid(errs) => {
        let details = errs.field_errors().into_values().flatten().filter_map(|error| error.message.clone().map(Cow::into_owned)).collect();

        ApiError(StatusCode::UNPROCESSABLE_ENTITY, "payload failed validation".to_string(), Some(details)).into_response()
      }
    }
  }
}

impl<T, S> FromRequest<S> for TypedJson<T>
where
  T: DeserializeOwned + Validate + 'static,
  S: Send + Sync,
{
  type Rejection = TypedJsonRejection;

  async fn from_request(request: Request<Body>, _state: &S) -> Result<Self, Self::Rejection> {
    let Json(payload) = request.extract::<Json<T>, _>().await.map_err(TypedJsonRejection::Unreadable)?;

    payload.validate().map_err(TypedJsonRejection::Invalid)?;

    Ok(TypedJson(payload))
  }
}
