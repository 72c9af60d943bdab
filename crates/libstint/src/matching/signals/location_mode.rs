use crate::matching::{MatchContext, Signal, SignalOutcome};

/// Full credit when the listing's work mode is known and acceptable. A
/// student with no mode preference accepts any known mode.
pub(crate) struct LocationModeFit;

impl Signal for LocationModeFit {
  fn key(&self) -> &'static str {
    "location_mode"
  }

  fn label(&self) -> &'static str {
    "Work mode"
  }

  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome {
    let Some(mode) = cx.work_mode else {
      return SignalOutcome::default();
    };

    let preferred = &cx.profile.preferred_work_modes;

    if preferred.is_empty() || preferred.contains(&mode) {
      SignalOutcome {
        raw: 1.0,
        detail: Some(format!("{mode} work")),
        evidence: vec![format!("mode={mode}")],
        ..Default::default()
      }
    } else {
      SignalOutcome::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    matching::{MatchContext, Signal},
    model::{InternshipMatchInput, StudentMatchProfile, WorkMode},
  };

  #[test]
  fn preferred_mode_earns_full_credit() {
    let internship = InternshipMatchInput::builder().work_mode("Remote").build();
    let profile = StudentMatchProfile::builder().preferred_work_modes(vec![WorkMode::Remote]).build();

    let cx = MatchContext::new(&internship, &profile);
    let outcome = super::LocationModeFit.evaluate(&cx);

    assert_eq!(outcome.raw, 1.0);
    assert_eq!(outcome.detail.as_deref(), Some("remote work"));
  }

  #[test]
  fn no_preference_accepts_any_known_mode() {
    let internship = InternshipMatchInput::builder().location("Austin, TX (Hybrid)").build();
    let profile = StudentMatchProfile::builder().build();

    let cx = MatchContext::new(&internship, &profile);

    assert_eq!(super::LocationModeFit.evaluate(&cx).raw, 1.0);
  }

  #[test]
  fn undetectable_mode_is_neutral() {
    let internship = InternshipMatchInput::builder().location("Austin, TX").build();
    let profile = StudentMatchProfile::builder().build();

    let cx = MatchContext::new(&internship, &profile);

    assert_eq!(super::LocationModeFit.evaluate(&cx).raw, 0.0);
  }
}
