//! Email notification summaries for aggregate rule alerts.
//!
//! This crate provides:
//! - `EmailConfiguration` subset read from the host configuration
//! - Summary builder listing matched field values with occurrence counts
//! - Deep-link search URL composition for email notifications
//!
//! Delivery itself (SMTP, templating, dispatch) stays in the host system;
//! this crate only produces the summary text.

pub mod config;
pub mod summary;

pub use config::EmailConfiguration;
pub use summary::build_summary;
