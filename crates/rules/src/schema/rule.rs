//! Aggregate rule definition.

use serde::{Deserialize, Serialize};

/// A user-defined alerting condition on a log field's value frequency.
///
/// A rule fires when some distinct value of `field` occurs at least (or,
/// with `match_more_or_equal` unset, fewer than) `number_of_matches` times
/// within `interval` minutes of messages matching `query`.
///
/// Rules are authored and persisted by the host system; this crate treats
/// them as immutable input for formatting and marshaling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    /// Display name, unique within the host system.
    pub name: String,
    /// Log message field whose distinct values are counted.
    pub field: String,
    /// Search query scoping the messages considered for matching.
    #[serde(default = "default_query")]
    pub query: String,
    /// Occurrence threshold a field value is compared against.
    pub number_of_matches: u64,
    /// Comparison mode: `true` means "at least", `false` means "less than".
    #[serde(default = "default_true")]
    pub match_more_or_equal: bool,
    /// Evaluation window in minutes.
    pub interval: u32,
    /// Number of prior matching messages included as context in an alert.
    #[serde(default)]
    pub backlog: u32,
    /// Keep sending notifications while the condition stays satisfied.
    #[serde(default)]
    pub repeat_notifications: bool,
    /// Restrict matching to a single stream; `None` searches all streams.
    #[serde(default)]
    pub stream_id: Option<String>,
}

fn default_query() -> String {
    "*".to_string()
}

fn default_true() -> bool {
    true
}
