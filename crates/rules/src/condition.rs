//! Alert-condition formatting and parameter marshaling.
//!
//! The host registers one alert condition per rule. These helpers render the
//! condition's human-readable description and title, and serialize a rule
//! into the generic parameter map the registration API consumes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::schema::Rule;

/// Fixed type tag identifying aggregate alert conditions in the host system.
pub const ALERT_CONDITION_TYPE: &str = "Aggregates Alert";

/// Threshold comparison mode of an alert condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdType {
    MoreOrEqual,
    Less,
}

impl ThresholdType {
    /// Select the threshold type encoded by a rule's comparison flag.
    pub fn from_rule(rule: &Rule) -> Self {
        if rule.match_more_or_equal {
            ThresholdType::MoreOrEqual
        } else {
            ThresholdType::Less
        }
    }

    /// The label embedded in condition parameter maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdType::MoreOrEqual => "MORE_OR_EQUAL",
            ThresholdType::Less => "LESS",
        }
    }
}

impl fmt::Display for ThresholdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render the natural-language description of a rule's matching condition.
pub fn condition_description(rule: &Rule) -> String {
    let matches = match ThresholdType::from_rule(rule) {
        ThresholdType::MoreOrEqual => format!("{} or more", rule.number_of_matches),
        ThresholdType::Less => format!("less than {}", rule.number_of_matches),
    };
    format!(
        "The same value of field '{}' occurs {} times in a {} minute interval",
        rule.field, matches, rule.interval
    )
}

/// Render the alert title for a rule.
pub fn condition_title(rule: &Rule) -> String {
    format!("Aggregate rule [{}] triggered an alert.", rule.name)
}

/// Serialize a rule into the generic parameter map consumed by the host's
/// alert-condition registration.
///
/// The map always carries `type` = [`ALERT_CONDITION_TYPE`] and a fixed
/// `grace` of zero; everything else is lifted from the rule.
pub fn condition_parameters(rule: &Rule) -> Map<String, Value> {
    let mut parameters = Map::new();
    parameters.insert("time".into(), json!(rule.interval));
    parameters.insert("description".into(), json!(condition_description(rule)));
    parameters.insert(
        "threshold_type".into(),
        json!(ThresholdType::from_rule(rule).as_str()),
    );
    parameters.insert("threshold".into(), json!(rule.number_of_matches));
    parameters.insert("grace".into(), json!(0));
    parameters.insert("type".into(), json!(ALERT_CONDITION_TYPE));
    parameters.insert("field".into(), json!(rule.field));
    parameters.insert("number_of_matches".into(), json!(rule.number_of_matches));
    parameters.insert(
        "match_more_or_equal".into(),
        json!(rule.match_more_or_equal),
    );
    parameters.insert("backlog".into(), json!(rule.backlog));
    parameters.insert(
        "repeat_notifications".into(),
        json!(rule.repeat_notifications),
    );
    parameters.insert("interval".into(), json!(rule.interval));
    parameters.insert("query".into(), json!(rule.query));
    parameters.insert("rule_name".into(), json!(rule.name));
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rule() -> Rule {
        Rule {
            name: "Admin login burst".to_string(),
            field: "user".to_string(),
            query: "action:login".to_string(),
            number_of_matches: 5,
            match_more_or_equal: true,
            interval: 10,
            backlog: 50,
            repeat_notifications: false,
            stream_id: None,
        }
    }

    #[test]
    fn description_more_or_equal() {
        let rule = sample_rule();
        assert_eq!(
            condition_description(&rule),
            "The same value of field 'user' occurs 5 or more times in a 10 minute interval"
        );
    }

    #[test]
    fn description_less_than() {
        let mut rule = sample_rule();
        rule.match_more_or_equal = false;
        assert_eq!(
            condition_description(&rule),
            "The same value of field 'user' occurs less than 5 times in a 10 minute interval"
        );
    }

    #[test]
    fn title_is_deterministic() {
        let rule = sample_rule();
        let first = condition_title(&rule);
        let second = condition_title(&rule);
        assert_eq!(first, second);
        assert_eq!(first, "Aggregate rule [Admin login burst] triggered an alert.");
    }

    #[test]
    fn parameters_always_tagged_with_condition_type() {
        let more = sample_rule();
        let mut less = sample_rule();
        less.match_more_or_equal = false;
        less.name = "Something else".to_string();
        less.number_of_matches = 0;

        for rule in [more, less] {
            let params = condition_parameters(&rule);
            assert_eq!(params["type"], json!(ALERT_CONDITION_TYPE));
        }
    }

    #[test]
    fn parameters_reflect_rule_fields() {
        let rule = sample_rule();
        let params = condition_parameters(&rule);

        assert_eq!(params["time"], json!(10));
        assert_eq!(params["interval"], json!(10));
        assert_eq!(params["threshold"], json!(5));
        assert_eq!(params["threshold_type"], json!("MORE_OR_EQUAL"));
        assert_eq!(params["grace"], json!(0));
        assert_eq!(params["field"], json!("user"));
        assert_eq!(params["query"], json!("action:login"));
        assert_eq!(params["rule_name"], json!("Admin login burst"));
        assert_eq!(params["backlog"], json!(50));
        assert_eq!(params["match_more_or_equal"], json!(true));
        assert_eq!(params["repeat_notifications"], json!(false));
        assert_eq!(params["description"], json!(condition_description(&rule)));
    }

    #[test]
    fn parameters_use_less_label_for_less_than_rules() {
        let mut rule = sample_rule();
        rule.match_more_or_equal = false;
        let params = condition_parameters(&rule);
        assert_eq!(params["threshold_type"], json!("LESS"));
    }

    #[test]
    fn threshold_type_labels() {
        assert_eq!(ThresholdType::MoreOrEqual.to_string(), "MORE_OR_EQUAL");
        assert_eq!(ThresholdType::Less.to_string(), "LESS");
        assert_eq!(
            serde_json::to_value(ThresholdType::MoreOrEqual).unwrap(),
            json!("MORE_OR_EQUAL")
        );
    }
}
