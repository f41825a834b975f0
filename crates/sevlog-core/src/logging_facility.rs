//! Diagnostics for the logger itself
//!
//! The logger reports its own configuration changes, sink failures and
//! Fatal exits as `tracing` events. This module provides:
//! - Single initialization point via `init(profile)`
//! - Test capture mode for asserting on those events
//!
//! # Usage
//!
//! ```rust
//! use sevlog_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
