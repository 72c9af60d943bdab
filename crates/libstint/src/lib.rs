mod error;
mod matching;
mod model;
mod ranking;

pub mod prelude {
  pub use crate::error::StintError;
  pub use crate::matching::{
    MatchOptions, MatchWeights,
    evaluate::{MATCHING_VERSION, evaluate_internship_match},
    extractors::infer_skills,
  };
  pub use crate::model::{InternshipMatchInput, MatchBreakdown, MatchResult, SignalContribution, StudentMatchProfile, TextOrList, WorkMode};
  pub use crate::ranking::{RankedInternship, rank_internships};
}
