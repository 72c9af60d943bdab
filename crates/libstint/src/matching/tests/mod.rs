
use float_cmp::assert_approx_eq;

use crate::{
  matching::{MatchOptions, MatchWeights, evaluate::evaluate_internship_match, round3},
  model::{InternshipMatchInput, StudentMatchProfile, WorkMode},
};

fn explain() -> MatchOptions {
  MatchOptions { explain: true }
}

#[test]
fn evaluation_is_deterministic() {
  let internship = InternshipMatchInput::builder()
    .id("i-1")
    .majors(vec!["Finance", "Accounting"])
    .hours_per_week(20.0)
    .location("New York, NY (Hybrid)")
    .description("Required skills: excel, sql\nPreferred skills: powerpoint")
    .build();
  let profile = StudentMatchProfile::builder().majors(vec!["finance"]).skills(vec!["excel", "powerpoint"]).availability_hours_per_week(20.0).build();

  let first = evaluate_internship_match(&internship, &profile, &MatchWeights::default(), &explain());
  let second = evaluate_internship_match(&internship, &profile, &MatchWeights::default(), &explain());

  assert_eq!(first.score, second.score);
  assert_eq!(first.reasons, second.reasons);
  assert_eq!(first.gaps, second.gaps);
}

#[test]
fn breakdown_points_sum_to_the_score() {
  let internship = InternshipMatchInput::builder()
    .majors(vec!["Finance", "Economics", "Statistics"])
    .hours_per_week(15.0)
    .work_mode("hybrid")
    .required_skills("excel, sql, python")
    .preferred_skills("tableau")
    .coursework(vec!["econometrics", "corporate finance"])
    .build();
  let profile = StudentMatchProfile::builder()
    .majors(vec!["finance"])
    .skills(vec!["excel", "tableau"])
    .coursework("econometrics")
    .availability_hours_per_week(20.0)
    .build();

  let result = evaluate_internship_match(&internship, &profile, &MatchWeights::default(), &explain());
  let breakdown = result.breakdown.expect("explain mode returns a breakdown");

  assert_eq!(breakdown.contributions.len(), 8);

  let total: f64 = breakdown.contributions.iter().map(|c| c.points).sum();

  assert_approx_eq!(f64, round3(total), result.score);
}

#[test]
fn breakdown_is_omitted_without_explain() {
  let internship = InternshipMatchInput::builder().majors(vec!["Finance"]).build();
  let profile = StudentMatchProfile::builder().majors(vec!["finance"]).build();

  let result = evaluate_internship_match(&internship, &profile, &MatchWeights::default(), &MatchOptions::default());

  assert!(result.breakdown.is_none());
}

#[test]
fn ineligible_results_score_zero() {
  let internship = InternshipMatchInput::builder().hours_per_week(40.0).majors(vec!["Finance"]).build();
  let profile = StudentMatchProfile::builder().majors(vec!["finance"]).availability_hours_per_week(10.0).build();

  let result = evaluate_internship_match(&internship, &profile, &MatchWeights::default(), &explain());

  assert!(!result.eligible);
  assert_eq!(result.score, 0.0);
  assert_eq!(result.normalized_score, 0.0);
  assert!(result.breakdown.expect("explain still returns a breakdown").contributions.is_empty());
}

#[test]
fn normalized_score_stays_within_bounds() {
  let internship = InternshipMatchInput::builder()
    .majors(vec!["Finance"])
    .target_graduation_years(vec!["2028".into()])
    .experience_level("entry")
    .hours_per_week(20.0)
    .work_mode("remote")
    .required_skills("excel")
    .preferred_skills("sql")
    .coursework("statistics")
    .build();
  let profile = StudentMatchProfile::builder()
    .majors(vec!["finance"])
    .year("2028")
    .experience_level("projects")
    .skills(vec!["excel", "sql"])
    .coursework("statistics")
    .availability_hours_per_week(20.0)
    .preferred_work_modes(vec![WorkMode::Remote])
    .build();

  let result = evaluate_internship_match(&internship, &profile, &MatchWeights::default(), &MatchOptions::default());

  assert!(result.eligible);
  assert_approx_eq!(f64, result.score, 17.0);
  assert_approx_eq!(f64, result.normalized_score, 1.0);
  assert_approx_eq!(f64, result.max_score, 17.0);
}

#[test]
fn zero_weights_guard_normalization() {
  let weights = MatchWeights {
    required_skills: 0.0,
    preferred_skills: 0.0,
    coursework: 0.0,
    major: 0.0,
    graduation_year: 0.0,
    experience: 0.0,
    availability: 0.0,
    location_mode: 0.0,
  };

  let internship = InternshipMatchInput::builder().majors(vec!["Finance"]).build();
  let profile = StudentMatchProfile::builder().majors(vec!["finance"]).build();

  let result = evaluate_internship_match(&internship, &profile, &weights, &MatchOptions::default());

  assert_eq!(result.score, 0.0);
  assert_eq!(result.normalized_score, 0.0);
}

#[test]
fn canonical_ids_are_immune_to_text_changes() {
  let profile = StudentMatchProfile::builder().skill_ids(vec!["sk-excel".into(), "sk-sql".into()]).skills("nothing relevant").build();

  let variant = |text: &str| {
    InternshipMatchInput::builder()
      .required_skill_ids(vec!["sk-excel".into(), "sk-sql".into()])
      .required_skills(text)
      .build()
  };

  let a = evaluate_internship_match(&variant("excel, sql"), &profile, &MatchWeights::default(), &MatchOptions::default());
  let b = evaluate_internship_match(&variant("entirely different labels"), &profile, &MatchWeights::default(), &MatchOptions::default());

  assert_approx_eq!(f64, a.score, b.score);
  assert!(a.score > 0.0);
}

#[test]
fn reasons_are_sorted_by_points_descending() {
  let internship = InternshipMatchInput::builder()
    .majors(vec!["Finance"])
    .hours_per_week(20.0)
    .work_mode("remote")
    .required_skills("excel")
    .build();
  let profile = StudentMatchProfile::builder().majors(vec!["finance"]).skills("excel").availability_hours_per_week(20.0).build();

  let result = evaluate_internship_match(&internship, &profile, &MatchWeights::default(), &MatchOptions::default());

  assert!(result.reasons[0].starts_with("Required skills:"), "got {:?}", result.reasons);
  assert!(result.reasons[0].ends_with("(+4.0)"));

  let points = result
    .reasons
    .iter()
    .map(|reason| reason.rsplit_once("(+").and_then(|(_, tail)| tail.trim_end_matches(')').parse::<f64>().ok()).unwrap())
    .collect::<Vec<_>>();

  assert!(points.windows(2).all(|pair| pair[0] >= pair[1]), "got {points:?}");
}

#[test]
fn custom_weights_scale_points() {
  let weights = MatchWeights { required_skills: 8.0, ..Default::default() };

  let internship = InternshipMatchInput::builder().required_skills("excel").build();
  let profile = StudentMatchProfile::builder().skills("excel").build();

  let result = evaluate_internship_match(&internship, &profile, &weights, &MatchOptions::default());

  assert_approx_eq!(f64, result.score, 8.0);
  assert_approx_eq!(f64, result.max_score, 21.0);
  assert!(result.reasons[0].contains("(+8.0)"));
}
