use ahash::AHashSet;
use itertools::Itertools;

use crate::matching::{MatchContext, Signal, SignalOutcome, ratio};

/// Three-tier fallback: category IDs, then item IDs, then free-text topics.
/// Exactly one tier is scored per evaluation, so overlapping data never
/// counts twice.
pub(crate) struct CourseworkAlignment;

impl Signal for CourseworkAlignment {
  fn key(&self) -> &'static str {
    "coursework"
  }

  fn label(&self) -> &'static str {
    "Coursework"
  }

  fn evaluate(&self, cx: &MatchContext) -> SignalOutcome {
    if !cx.internship.coursework_category_ids.is_empty() && !cx.profile.coursework_category_ids.is_empty() {
      return overlap(&cx.internship.coursework_category_ids, &cx.profile.coursework_category_ids, "coursework categories", "categories");
    }

    if !cx.internship.coursework_item_ids.is_empty() && !cx.profile.coursework_item_ids.is_empty() {
      return overlap(&cx.internship.coursework_item_ids, &cx.profile.coursework_item_ids, "coursework items", "items");
    }

    if !cx.internship_coursework.is_empty() && !cx.profile_coursework.is_empty() {
      return overlap(&cx.internship_coursework, &cx.profile_coursework, "recommended topics", "text");
    }

    SignalOutcome::default()
  }
}

fn overlap(wanted: &[String], held: &[String], noun: &str, tier: &str) -> SignalOutcome {
  let wanted = wanted.iter().unique().collect::<Vec<_>>();
  let held = held.iter().map(String::as_str).collect::<AHashSet<_>>();
  let matched = wanted.iter().filter(|item| held.contains(item.as_str())).count();

  SignalOutcome {
    raw: ratio(matched, wanted.len()),
    detail: (matched > 0).then(|| format!("{matched} of {} {noun}", wanted.len())),
    evidence: vec![format!("matched={matched}"), format!("wanted={}", wanted.len()), format!("tier={tier}")],
    ..Default::default()
  }
}
