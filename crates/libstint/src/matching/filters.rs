use crate::{
  matching::MatchContext,
  matching::normalize::{normalize_text, parse_work_mode, season_from_term},
  model::WorkMode,
};

/// A failed hard filter makes the listing wholly ineligible, whatever the
/// signals would have scored.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum FilterDecision {
  Pass,
  Fail(String),
}

/// Filters 1 to 5, checked before any signal scores. First failure wins.
pub(crate) fn pre_scoring(cx: &MatchContext) -> FilterDecision {
  let checks = [remote_only_conflict, work_mode_preference, term_preference, availability_ceiling, location_preference];

  run(cx, &checks)
}

/// Graduation-year and experience eligibility. These historically run after
/// skills and coursework were scored, and callers rely on the reasons those
/// signals already produced, so they are checked separately.
pub(crate) fn post_skills(cx: &MatchContext) -> FilterDecision {
  run(cx, &[graduation_year, experience_floor])
}

fn run(cx: &MatchContext, checks: &[fn(&MatchContext) -> FilterDecision]) -> FilterDecision {
  for check in checks {
    if let FilterDecision::Fail(gap) = check(cx) {
      tracing::debug!(internship_id = %cx.internship.id, gap = %gap, "hard filter rejected listing");

      return FilterDecision::Fail(gap);
    }
  }

  FilterDecision::Pass
}

fn remote_only_conflict(cx: &MatchContext) -> FilterDecision {
  match cx.work_mode {
    Some(mode @ (WorkMode::OnSite | WorkMode::Hybrid)) if cx.profile.remote_only => FilterDecision::Fail(format!("Remote-only preference conflicts with in-person work ({mode})")),
    _ => FilterDecision::Pass,
  }
}

// Only the explicit field counts here. A mode inferred from the location
// suffix describes where the work happens, and in-person listings with a
// suffix-derived mode are judged by the location filter instead.
fn work_mode_preference(cx: &MatchContext) -> FilterDecision {
  let preferred = &cx.profile.preferred_work_modes;

  match cx.internship.work_mode.as_deref().and_then(parse_work_mode) {
    Some(mode) if !preferred.is_empty() && !preferred.contains(&mode) => FilterDecision::Fail(format!("Work mode mismatch ({mode} not among preferred modes)")),
    _ => FilterDecision::Pass,
  }
}

fn term_preference(cx: &MatchContext) -> FilterDecision {
  if cx.profile.preferred_terms.is_empty() {
    return FilterDecision::Pass;
  }

  let Some(season) = cx.season() else {
    return FilterDecision::Pass;
  };

  if cx.profile.preferred_terms.iter().any(|term| season_from_term(term) == season) {
    FilterDecision::Pass
  } else {
    FilterDecision::Fail(format!("Term mismatch ({season} not among preferred terms)"))
  }
}

// A strict ceiling: closeness to the student's availability is rewarded
// separately by the availability signal.
fn availability_ceiling(cx: &MatchContext) -> FilterDecision {
  match (cx.internship.hours_per_week, cx.profile.availability_hours_per_week) {
    (Some(hours), Some(availability)) if hours > availability => FilterDecision::Fail(format!("Hours exceed availability ({hours} > {availability})")),
    _ => FilterDecision::Pass,
  }
}

fn location_preference(cx: &MatchContext) -> FilterDecision {
  if !matches!(cx.work_mode, Some(WorkMode::OnSite | WorkMode::Hybrid)) || cx.profile.preferred_locations.is_empty() {
    return FilterDecision::Pass;
  }

  let Some(name) = cx.location_name.as_deref() else {
    return FilterDecision::Pass;
  };

  let near = cx.profile.preferred_locations.iter().map(|location| normalize_text(location)).any(|location| name.contains(&location) || location.contains(name));

  if near {
    FilterDecision::Pass
  } else {
    FilterDecision::Fail(format!("In-person location mismatch ({name} not among preferred locations)"))
  }
}

fn graduation_year(cx: &MatchContext) -> FilterDecision {
  match cx.student_year.as_deref() {
    Some(year) if !cx.target_years.is_empty() && !cx.target_years.iter().any(|target| target == year) => {
      FilterDecision::Fail(format!("Graduation year mismatch (class of {year} not targeted)"))
    }
    _ => FilterDecision::Pass,
  }
}

fn experience_floor(cx: &MatchContext) -> FilterDecision {
  match (cx.required_experience, cx.student_experience) {
    (Some(required), Some(student)) if student < required => {
      let level = cx.internship.experience_level.as_deref().map(normalize_text).unwrap_or_default();

      FilterDecision::Fail(format!("Experience below requirement ({level} level required)"))
    }
    _ => FilterDecision::Pass,
  }
}
