//! Alert summary bodies with per-value deep-link search URLs.

use aggregates_rules::schema::{Rule, TimeRange};
use chrono::SecondsFormat;
use indexmap::IndexMap;

use crate::config::EmailConfiguration;

/// Build the multi-line alert summary for a rule's matched terms.
///
/// Lists each matched field value with its occurrence count, in the order
/// the caller collected them. When email notification is enabled, every
/// value additionally gets a `Search:` line deep-linking into the web
/// interface with the evaluation window and an exact-match clause on the
/// value appended to the rule's query.
pub fn build_summary(
    rule: &Rule,
    email: &EmailConfiguration,
    matched_terms: &IndexMap<String, u64>,
    time_range: TimeRange,
) -> String {
    let mut summary = format!("Matched values for field [ {} ]\n", rule.field);

    for (value, occurrences) in matched_terms {
        summary.push_str(&format!("\nValue: {}\n", value));
        summary.push_str(&format!("Occurrences: {}\n", occurrences));

        if email.enabled {
            summary.push_str(&format!(
                "Search: {}\n",
                search_url(rule, email, value, time_range)
            ));
        } else {
            summary.push('\n');
        }
    }

    tracing::debug!(
        rule = %rule.name,
        terms = matched_terms.len(),
        links = email.enabled,
        "built alert summary"
    );

    summary
}

/// Compose the deep-link search URL for one matched value.
///
/// Scopes to `/streams/<id>` when the rule names a non-empty stream,
/// requests the message and source fields alongside the rule's field, pins
/// the absolute evaluation window, and percent-encodes a query combining
/// the rule's query with an exact-match clause on the value.
fn search_url(
    rule: &Rule,
    email: &EmailConfiguration,
    value: &str,
    time_range: TimeRange,
) -> String {
    let stream_path = match rule.stream_id.as_deref() {
        Some(id) if !id.is_empty() => format!("/streams/{}", id),
        _ => String::new(),
    };
    let fields = format!("message,source,{}", rule.field);
    let query = format!("{} AND {}:\"{}\"", rule.query, rule.field, value);

    format!(
        "{}{}/search?rangetype=absolute&fields={}&from={}&to={}&q={}",
        email.web_interface_uri,
        stream_path,
        urlencoding::encode(&fields),
        time_range.from.to_rfc3339_opts(SecondsFormat::Millis, true),
        time_range.to.to_rfc3339_opts(SecondsFormat::Millis, true),
        urlencoding::encode(&query),
    )
}
