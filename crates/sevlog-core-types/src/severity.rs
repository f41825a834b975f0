//! Severity levels
//!
//! Severities are ordered by weight. The weight is what the logger compares
//! against its threshold; the tag is what appears between the brackets of an
//! emitted line.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Predefined logging severity, ordered from least to most urgent
///
/// ```
/// use sevlog_core_types::Severity;
///
/// assert_eq!(Severity::try_from("fatal".to_string()), Ok(Severity::Fatal));
/// assert_eq!(Severity::Fatal.tag(), "FATAL ERROR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    /// Logs only. Does not unwind or abort.
    Panic,
    /// Logs, then the Fatal wrappers exit the process with status 1.
    Fatal,
}

/// A severity name that matches no predefined level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity: {name}")]
pub struct ParseSeverityError {
    pub name: String,
}

impl Severity {
    /// All severities in ascending weight order
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Panic,
        Severity::Fatal,
    ];

    /// Numeric weight used for threshold comparisons (Debug=1 .. Fatal=6)
    pub const fn weight(self) -> u32 {
        match self {
            Severity::Debug => 1,
            Severity::Info => 2,
            Severity::Warning => 3,
            Severity::Error => 4,
            Severity::Panic => 5,
            Severity::Fatal => 6,
        }
    }

    /// Tag printed inside the brackets of an emitted line
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Panic => "PANIC",
            Severity::Fatal => "FATAL ERROR",
        }
    }

    /// Exact tag lookup, as used for caller-supplied tag names
    pub fn from_tag(tag: &str) -> Option<Severity> {
        Severity::ALL.into_iter().find(|s| s.tag() == tag)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Accepts either the tag or the variant name, ignoring case
impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, ParseSeverityError> {
        let trimmed = s.trim();
        Severity::ALL
            .into_iter()
            .find(|sev| {
                trimmed.eq_ignore_ascii_case(sev.tag())
                    || trimmed.eq_ignore_ascii_case(&format!("{:?}", sev))
            })
            .ok_or_else(|| ParseSeverityError {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
