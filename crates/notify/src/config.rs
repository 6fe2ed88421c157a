//! Email notification settings read from the host configuration.

use serde::{Deserialize, Serialize};

/// The subset of the host's email configuration consumed when building
/// alert summaries.
///
/// When `enabled` is false the summary carries no search links, since there
/// is no web interface to deep-link into from a delivered mail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EmailConfiguration {
    /// Whether email notifications are enabled at all.
    #[serde(default)]
    pub enabled: bool,
    /// Base URI of the web interface, used to compose deep links.
    #[serde(default)]
    pub web_interface_uri: String,
}
