//! Output module for emitting per-domain results
//!
//! This module handles:
//! - The [`OutputRecord`] produced for every input domain
//! - Writing records as `domain,url` CSV lines
//! - Counting outcomes into a [`BatchSummary`]

mod csv;
mod record;
mod stats;

pub use csv::CsvWriter;
pub use record::{Outcome, OutputRecord};
pub use stats::BatchSummary;
