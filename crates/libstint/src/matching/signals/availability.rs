use crate::matching::{MatchContext, Signal, SignalOutcome};

/// Closeness of the weekly commitment to the student's availability. The
/// ceiling filter already removed anything above it, so this rewards
/// listings that actually use the hours the student has.
pub(crate) struct AvailabilityFit;

impl Signal for AvailabilityFit {
  fn key(&self) -> &'static str {
    "availability"
  }

  fn label(&self) -> &'static str {
    "Availability"
  }

  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome {
    let (Some(hours), Some(availability)) = (cx.internship.hours_per_week, cx.profile.availability_hours_per_week) else {
      return SignalOutcome::default();
    };

    let closeness = (1.0 - (hours - availability).abs() / availability.max(1.0)).max(0.0);

    SignalOutcome {
      raw: closeness,
      detail: (closeness > 0.0).then(|| format!("{hours}h/week fits {availability}h availability")),
      evidence: vec![format!("hours={hours}"), format!("availability={availability}")],
      ..Default::default()
    }
  }
}
