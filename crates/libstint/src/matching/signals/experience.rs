use crate::matching::{MatchContext, Signal, SignalOutcome, normalize::normalize_text};

/// Rewards meeting the stated floor. Listings surviving the experience
/// filter with both levels known are at or above it by construction.
pub(crate) struct ExperienceAlignment;

impl Signal for ExperienceAlignment {
  fn key(&self) -> &'static str {
    "experience"
  }

  fn label(&self) -> &'static str {
    "Experience"
  }

  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome {
    match (cx.required_experience, cx.student_experience) {
      (Some(_), Some(_)) => {
        let level = cx.internship.experience_level.as_deref().map(normalize_text).unwrap_or_default();

        SignalOutcome {
          raw: 1.0,
          detail: Some(format!("meets the {level} experience level")),
          evidence: vec![format!("required={level}")],
          ..Default::default()
        }
      }
      _ => SignalOutcome::default(),
    }
  }
}
