mod normalization;
mod scored_mode;
mod weights;

pub use normalization::{normalize_and_score, rank};
pub use scored_mode::{RankedMode, ScoredMode};
pub use weights::ScoreWeights;
