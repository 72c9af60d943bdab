use ahash::AHashSet;
use itertools::Itertools;

use crate::matching::{MatchContext, Signal, SignalOutcome, ratio};

/// Direct major overlap first; failing that, a fixed half-credit when the
/// listing's category text contains one of the student's majors. A student
/// with majors but no alignment at all gets a gap, not a disqualification.
pub(crate) struct MajorAlignment;

impl Signal for MajorAlignment {
  fn key(&self) -> &'static str {
    "major"
  }

  fn label(&self) -> &'static str {
    "Major fit"
  }

  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome {
    if cx.profile_majors.is_empty() {
      return SignalOutcome::default();
    }

    let student = cx.profile_majors.iter().map(String::as_str).collect::<AHashSet<_>>();
    let matched = cx.internship_majors.iter().filter(|major| student.contains(major.as_str())).collect::<Vec<_>>();

    if !matched.is_empty() {
      return SignalOutcome {
        raw: ratio(matched.len(), cx.internship_majors.len().max(1)),
        detail: Some(format!("studies {}", matched.iter().join(", "))),
        evidence: vec![format!("matched={}", matched.len()), format!("listed={}", cx.internship_majors.len())],
        ..Default::default()
      };
    }

    if let Some(category) = cx.category_text()
      && let Some(major) = cx.profile_majors.iter().find(|major| category.contains(major.as_str()))
    {
      return SignalOutcome {
        raw: 0.5,
        detail: Some(format!("{category} relates to {major}")),
        evidence: vec!["fallback=category".to_string(), format!("category={category}")],
        ..Default::default()
      };
    }

    SignalOutcome {
      gap: Some("No major/category alignment".to_string()),
      evidence: vec!["matched=0".to_string()],
      ..Default::default()
    }
  }
}
