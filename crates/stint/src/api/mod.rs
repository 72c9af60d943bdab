use axum::{
  Router, middleware,
  routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use crate::{api::config::Config, trace};

pub mod config;
pub mod dto;
pub mod errors;

pub mod handlers;
mod middlewares;

#[derive(Clone)]
pub struct AppState {
  pub config: Config,
  pub prometheus: Option<PrometheusHandle>,
}

pub fn routes(config: &Config) -> anyhow::Result<Router> {
  let prometheus = match config.enable_prometheus {
    true => Some(trace::build_prometheus()?),
    false => None,
  };

  let state = AppState { config: config.clone(), prometheus };

  Ok(
    Router::new()
      .route("/rank", post(handlers::rank))
      .route("/evaluate", post(handlers::evaluate))
      .fallback(handlers::not_found)
      .layer(middleware::from_fn(middlewares::metrics))
      .layer(TraceLayer::new_for_http().make_span_with(middlewares::create_request_span))
      // The routes below will not go through the observability middlewares above
      .route("/healthz", get(handlers::healthz))
      .route("/metrics", get(handlers::prometheus))
      .layer(middleware::from_fn_with_state(state.clone(), middlewares::logging::api_logger))
      .layer(middleware::from_fn(middlewares::request_id))
      .with_state(state),
  )
}
