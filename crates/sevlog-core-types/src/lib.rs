//! Core types shared across sevlog crates
//!
//! - **Severity**: the six predefined levels with weights and tags
//! - **Schema constants**: canonical field keys and event names for the
//!   logger's own diagnostics

pub mod schema;
pub mod severity;

pub use severity::{ParseSeverityError, Severity};
