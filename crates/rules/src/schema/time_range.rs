//! Absolute time range covered by a rule evaluation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The absolute `from`/`to` window the host resolved for a rule evaluation.
///
/// Carried into notification summaries so deep links replay the exact
/// window that triggered the alert.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }
}
