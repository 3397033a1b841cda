//! Logo candidate ranking
//!
//! Each image tag on a page gets a small heuristic score; the earliest tag
//! with the highest score is taken to be the site's logotype.

mod ranker;

pub use ranker::{best_tag, pick_logo, rank_tags, score_tag, RankedTag};
