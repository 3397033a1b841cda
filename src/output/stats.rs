//! Batch statistics
//!
//! Counts how each domain's processing ended, for the end-of-run log line.

use crate::output::{Outcome, OutputRecord};
use std::time::Duration;

/// Outcome counts for a whole batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of records emitted
    pub total: usize,

    /// Domains with a logo URL
    pub found: usize,

    /// Domains whose homepage had no usable image tag
    pub not_found: usize,

    /// Domains that could not be fetched or resolved
    pub failed: usize,

    /// Number of windows executed
    pub windows: usize,
}

impl BatchSummary {
    /// Counts one emitted record
    pub fn record(&mut self, record: &OutputRecord) {
        self.total += 1;
        match record.outcome {
            Outcome::Found(_) => self.found += 1,
            Outcome::NotFound => self.not_found += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    /// Logs the summary at info level
    pub fn log(&self, elapsed: Duration) {
        tracing::info!(
            "Processed {} domains in {} windows ({:?}): {} logos found, {} without logo, {} failed",
            self.total,
            self.windows,
            elapsed,
            self.found,
            self.not_found,
            self.failed
        );
    }
}
