use thiserror::Error;

#[derive(Debug, Error)]
pub enum StintError {
  #[error("invalid weights: {0}")]
  InvalidWeights(String),
}
