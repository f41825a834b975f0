//! sevlog core: a small leveled logger
//!
//! This crate provides:
//! - A [`Logger`] that filters by severity threshold, optionally reports the
//!   call site and writes one formatted line per message to a [`Sink`]
//! - A process-wide logger ([`init`], [`global`]) and join/format style
//!   macros for each severity (`info!`/`infof!`, ...)
//! - Fatal logging as an explicit log-and-exit step with a swappable
//!   [`ExitStrategy`]
//! - Configuration from code, `serde` sources or the environment
//!
//! Line layout, as written by the stream sinks:
//!
//! ```text
//! 2024/01/23 01:23:23 [Info]  net/conn.rs:42 connected
//! ```
//!
//! The Panic severity only logs. Only the Fatal wrappers exit.

pub mod call_site;
pub mod config;
pub mod errors;
pub mod exit;
pub mod filter;
pub mod format;
pub mod global;
pub mod logger;
pub mod logging_facility;
pub mod macros;
pub mod sink;

// Re-export commonly used types
pub use call_site::CallSite;
pub use config::{LoggerBuilder, LoggerConfig};
pub use errors::{Result, SevlogError, SevlogErrorKind};
pub use exit::{ExitStrategy, ProcessExit, RecordingExit, FATAL_EXIT_CODE};
pub use filter::{CustomTagPolicy, Tag};
pub use global::{enable_call_site, global, init, set_severity_threshold};
pub use logger::Logger;
pub use sevlog_core_types::Severity;
pub use sink::{MemorySink, Sink, StderrSink, TracingSink, WriterSink};
