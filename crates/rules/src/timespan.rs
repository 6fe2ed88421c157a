//! ISO-8601 timespan parsing and calendar-aware conversion to seconds.

use chrono::{DateTime, Days, Duration, Months, Utc};
use thiserror::Error;

/// Errors produced while parsing or resolving an ISO-8601 timespan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimespanError {
    #[error("empty timespan")]
    Empty,

    #[error("timespan does not start with 'P': {0}")]
    MissingDesignator(String),

    #[error("invalid number in timespan: {0}")]
    InvalidNumber(String),

    #[error("unexpected unit '{unit}' in timespan: {input}")]
    UnexpectedUnit { unit: char, input: String },

    #[error("timespan has no components: {0}")]
    NoComponents(String),

    #[error("timespan is out of the representable calendar range")]
    OutOfRange,
}

/// Convert an ISO-8601 timespan (e.g. `"PT5M"`, `"P1M2DT3H"`) into the
/// number of whole seconds it covers starting at `reference`.
///
/// Date components are calendar-dependent, so resolution advances
/// `reference` by the parsed components and measures the distance covered:
/// `"P1M"` anchored in February yields fewer seconds than one anchored in
/// January, and a month added to Jan 31 lands on the clamped Feb 28/29.
/// Time components (`H`/`M`/`S` after the `T`) are fixed-length.
pub fn timespan_to_seconds(
    timespan: &str,
    reference: DateTime<Utc>,
) -> Result<i64, TimespanError> {
    let span = Timespan::parse(timespan)?;
    let end = span.advance(reference).ok_or(TimespanError::OutOfRange)?;
    Ok((end - reference).num_seconds())
}

/// Parsed timespan components, date section folded to months/days and the
/// time section folded to seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timespan {
    months: u64,
    days: u64,
    seconds: u64,
}

impl Timespan {
    /// Parse the `P[nY][nM][nW][nD][T[nH][nM][nS]]` grammar with
    /// non-negative integer components. `M` means months before the `T`
    /// separator and minutes after it.
    fn parse(input: &str) -> Result<Self, TimespanError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(TimespanError::Empty);
        }

        let mut chars = s.chars();
        if chars.next() != Some('P') {
            return Err(TimespanError::MissingDesignator(s.to_string()));
        }

        let mut span = Timespan {
            months: 0,
            days: 0,
            seconds: 0,
        };
        let mut in_time = false;
        let mut saw_component = false;
        let mut saw_time_component = false;
        let mut num_buf = String::new();

        for ch in chars {
            if ch.is_ascii_digit() {
                num_buf.push(ch);
                continue;
            }
            if ch == 'T' && !in_time {
                // A number may not dangle before the time separator.
                if !num_buf.is_empty() {
                    return Err(TimespanError::InvalidNumber(s.to_string()));
                }
                in_time = true;
                continue;
            }

            let n: u64 = num_buf
                .parse()
                .map_err(|_| TimespanError::InvalidNumber(s.to_string()))?;
            num_buf.clear();

            match (in_time, ch) {
                (false, 'Y') => span.months = add(span.months, mul(n, 12)?)?,
                (false, 'M') => span.months = add(span.months, n)?,
                (false, 'W') => span.days = add(span.days, mul(n, 7)?)?,
                (false, 'D') => span.days = add(span.days, n)?,
                (true, 'H') => span.seconds = add(span.seconds, mul(n, 3_600)?)?,
                (true, 'M') => span.seconds = add(span.seconds, mul(n, 60)?)?,
                (true, 'S') => span.seconds = add(span.seconds, n)?,
                _ => {
                    return Err(TimespanError::UnexpectedUnit {
                        unit: ch,
                        input: s.to_string(),
                    })
                }
            }
            saw_component = true;
            saw_time_component = in_time;
        }

        if !num_buf.is_empty() {
            return Err(TimespanError::InvalidNumber(s.to_string()));
        }
        // Rejects both a bare "P"/"PT" and a dangling time separator ("P1DT").
        if !saw_component || (in_time && !saw_time_component) {
            return Err(TimespanError::NoComponents(s.to_string()));
        }

        Ok(span)
    }

    /// Advance `reference` by this timespan, months first, then days, then
    /// the fixed-length time section. Returns `None` when the result falls
    /// outside the representable calendar range.
    fn advance(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let mut end = reference;
        if self.months > 0 {
            let months = u32::try_from(self.months).ok()?;
            end = end.checked_add_months(Months::new(months))?;
        }
        if self.days > 0 {
            end = end.checked_add_days(Days::new(self.days))?;
        }
        if self.seconds > 0 {
            let seconds = i64::try_from(self.seconds).ok()?;
            end = end.checked_add_signed(Duration::try_seconds(seconds)?)?;
        }
        Some(end)
    }
}

fn add(acc: u64, n: u64) -> Result<u64, TimespanError> {
    acc.checked_add(n).ok_or(TimespanError::OutOfRange)
}

fn mul(n: u64, factor: u64) -> Result<u64, TimespanError> {
    n.checked_mul(factor).ok_or(TimespanError::OutOfRange)
}
