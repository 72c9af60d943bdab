use ahash::AHashSet;
use itertools::Itertools;

use crate::matching::{MatchContext, Signal, SignalOutcome, ratio};

/// Catalog IDs are authoritative: when the listing carries required-skill
/// IDs and the student carries any skill IDs, text is never consulted.
pub(crate) struct RequiredSkills;

impl Signal for RequiredSkills {
  fn key(&self) -> &'static str {
    "required_skills"
  }

  fn label(&self) -> &'static str {
    "Required skills"
  }

  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome {
    let required_ids = cx.internship.required_skill_ids.iter().unique().collect::<Vec<_>>();

    if !required_ids.is_empty() && !cx.profile.skill_ids.is_empty() {
      let student = cx.profile.skill_ids.iter().map(String::as_str).collect::<AHashSet<_>>();
      let matched = required_ids.iter().filter(|id| student.contains(id.as_str())).count();
      let missing = required_ids.len() - matched;

      return SignalOutcome {
        raw: ratio(matched, required_ids.len()),
        detail: (matched > 0).then(|| format!("{matched} of {} required skills", required_ids.len())),
        gap: (missing > 0).then(|| format!("Missing {missing} required skill(s)")),
        evidence: vec![format!("matched={matched}"), format!("required={}", required_ids.len()), "source=catalog".to_string()],
      };
    }

    let required = &cx.required_skill_texts;

    if required.is_empty() {
      return SignalOutcome::default();
    }

    let student = cx.profile_skills.iter().map(String::as_str).collect::<AHashSet<_>>();
    let (matched, missing): (Vec<_>, Vec<_>) = required.iter().partition(|skill| student.contains(skill.as_str()));

    SignalOutcome {
      raw: ratio(matched.len(), required.len()),
      detail: (!matched.is_empty()).then(|| format!("{} of {} required skills", matched.len(), required.len())),
      gap: (!missing.is_empty()).then(|| format!("Missing required skills: {}", missing.iter().join(", "))),
      evidence: vec![format!("matched={}", matched.len()), format!("required={}", required.len()), "source=text".to_string()],
    }
  }
}

/// Same canonical-first resolution, but purely additive: nothing is said
/// about preferred skills the student lacks.
pub(crate) struct PreferredSkills;

impl Signal for PreferredSkills {
  fn key(&self) -> &'static str {
    "preferred_skills"
  }

  fn label(&self) -> &'static str {
    "Preferred skills"
  }

  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome {
    let preferred_ids = cx.internship.preferred_skill_ids.iter().unique().collect::<Vec<_>>();

    if !preferred_ids.is_empty() && !cx.profile.skill_ids.is_empty() {
      let student = cx.profile.skill_ids.iter().map(String::as_str).collect::<AHashSet<_>>();
      let matched = preferred_ids.iter().filter(|id| student.contains(id.as_str())).count();

      return SignalOutcome {
        raw: ratio(matched, preferred_ids.len()),
        detail: (matched > 0).then(|| format!("{matched} of {} preferred skills", preferred_ids.len())),
        evidence: vec![format!("matched={matched}"), format!("preferred={}", preferred_ids.len()), "source=catalog".to_string()],
        ..Default::default()
      };
    }

    let preferred = &cx.preferred_skill_texts;

    if preferred.is_empty() {
      return SignalOutcome::default();
    }

    let student = cx.profile_skills.iter().map(String::as_str).collect::<AHashSet<_>>();
    let matched = preferred.iter().filter(|skill| student.contains(skill.as_str())).count();

    SignalOutcome {
      raw: ratio(matched, preferred.len()),
      detail: (matched > 0).then(|| format!("{matched} of {} preferred skills", preferred.len())),
      evidence: vec![format!("matched={matched}"), format!("preferred={}", preferred.len()), "source=text".to_string()],
      ..Default::default()
    }
  }
}
