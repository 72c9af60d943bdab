use crate::matching::{MatchContext, Signal, SignalOutcome};

/// All or nothing. By the time this signal runs, a targeted listing that
/// excludes the student's class has already been filtered out, so a known
/// year against a non-empty target list is always a hit.
pub(crate) struct GraduationYearFit;

impl Signal for GraduationYearFit {
  fn key(&self) -> &'static str {
    "graduation_year"
  }

  fn label(&self) -> &'static str {
    "Graduation timing"
  }

  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome {
    match cx.student_year.as_deref() {
      Some(year) if !cx.target_years.is_empty() => SignalOutcome {
        raw: 1.0,
        detail: Some(format!("targets class of {year}")),
        evidence: vec![format!("year={year}")],
        ..Default::default()
      },
      _ => SignalOutcome::default(),
    }
  }
}
