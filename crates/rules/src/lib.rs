//! Aggregate rule schema and alert-condition helpers.
//!
//! This crate provides:
//! - Rule and time-range schema types with serde deserialization
//! - ISO-8601 timespan parsing with calendar-aware arithmetic
//! - Alert-condition description, title, and parameter-map builders
//! - Structured rule validation with errors and warnings
//!
//! Rule matching itself runs in the host system; everything here is a pure
//! function over rule data.

pub mod condition;
pub mod schema;
pub mod timespan;
pub mod validation;
