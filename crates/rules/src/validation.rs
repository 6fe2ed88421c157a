//! Rule validation with structured errors and advisory warnings.
//!
//! Hosts call [`validate_rule`] before registering an alert condition.
//! Errors block registration; warnings are surfaced to the rule author.

use serde::{Deserialize, Serialize};

use crate::schema::Rule;

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field-path location, e.g. `"number_of_matches"`.
    pub path: String,
    pub message: String,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate a [`Rule`] before its alert condition is registered.
pub fn validate_rule(rule: &Rule) -> ValidationResult {
    let mut result = ValidationResult::new();

    if rule.name.trim().is_empty() {
        result.error("name", "rule name must not be empty");
    }
    if rule.field.trim().is_empty() {
        result.error("field", "field to aggregate on must not be empty");
    }
    if rule.number_of_matches == 0 {
        result.error(
            "number_of_matches",
            "match threshold must be at least 1",
        );
    }
    if rule.interval == 0 {
        result.error("interval", "evaluation interval must be at least 1 minute");
    }

    if rule.query.trim().is_empty() {
        result.warn("query", "empty query matches nothing; use \"*\" to match all messages");
    }
    if matches!(rule.stream_id.as_deref(), Some("")) {
        result.warn(
            "stream_id",
            "empty stream id is treated as no stream scoping",
        );
    }

    result
}
