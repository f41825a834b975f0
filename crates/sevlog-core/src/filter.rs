//! Threshold filtering
//!
//! Predefined severities pass when their weight is at least the threshold.
//! Caller-defined tags have no weight; whether they pass is decided by the
//! logger's [`CustomTagPolicy`].

use serde::{Deserialize, Serialize};
use sevlog_core_types::Severity;
use std::fmt;
use std::str::FromStr;

use crate::errors::SevlogError;

/// Threshold weight that lets every severity through
pub const SHOW_ALL: u32 = 0;

/// The tag a line is emitted under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    Level(Severity),
    Custom(&'a str),
}

impl<'a> Tag<'a> {
    /// Text printed between the brackets
    pub fn name(&self) -> &'a str {
        match self {
            Tag::Level(severity) => severity.tag(),
            Tag::Custom(name) => name,
        }
    }

    /// Predefined severity this tag resolves to, if any
    ///
    /// A custom name spelled exactly like a predefined tag (e.g.
    /// `"FATAL ERROR"`) resolves to that severity.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Tag::Level(severity) => Some(*severity),
            Tag::Custom(name) => Severity::from_tag(name),
        }
    }
}

impl From<Severity> for Tag<'_> {
    fn from(severity: Severity) -> Self {
        Tag::Level(severity)
    }
}

/// What to do with tags that match no predefined severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomTagPolicy {
    /// Emit regardless of threshold
    #[default]
    AlwaysShow,
    /// Never emit
    Suppress,
}

impl CustomTagPolicy {
    pub(crate) fn to_u8(self) -> u8 {
        match self {
            CustomTagPolicy::AlwaysShow => 0,
            CustomTagPolicy::Suppress => 1,
        }
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            1 => CustomTagPolicy::Suppress,
            _ => CustomTagPolicy::AlwaysShow,
        }
    }
}

impl fmt::Display for CustomTagPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomTagPolicy::AlwaysShow => f.write_str("always_show"),
            CustomTagPolicy::Suppress => f.write_str("suppress"),
        }
    }
}

impl FromStr for CustomTagPolicy {
    type Err = SevlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always_show" | "show" => Ok(CustomTagPolicy::AlwaysShow),
            "suppress" | "hide" => Ok(CustomTagPolicy::Suppress),
            _ => Err(SevlogError::InvalidConfig {
                key: "custom_tags".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Decide whether a line tagged `tag` is emitted
pub fn passes(tag: &Tag<'_>, threshold: u32, custom_tags: CustomTagPolicy) -> bool {
    match tag.severity() {
        Some(severity) => severity.weight() >= threshold,
        None => custom_tags == CustomTagPolicy::AlwaysShow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_show_all_passes_everything() {
        for severity in Severity::ALL {
            assert!(passes(&Tag::Level(severity), SHOW_ALL, CustomTagPolicy::AlwaysShow));
        }
    }

    #[test]
    fn test_equal_weight_passes() {
        let threshold = Severity::Warning.weight();
        assert!(passes(&Severity::Warning.into(), threshold, CustomTagPolicy::AlwaysShow));
        assert!(!passes(&Severity::Info.into(), threshold, CustomTagPolicy::AlwaysShow));
    }

    #[test]
    fn test_custom_tag_ignores_threshold() {
        let tag = Tag::Custom("CUSTOM");
        assert!(passes(&tag, Severity::Fatal.weight(), CustomTagPolicy::AlwaysShow));
        assert!(passes(&tag, u32::MAX, CustomTagPolicy::AlwaysShow));
        assert!(!passes(&tag, SHOW_ALL, CustomTagPolicy::Suppress));
    }

    #[test]
    fn test_custom_spelling_of_predefined_tag_uses_its_weight() {
        let tag = Tag::Custom("Debug");
        assert_eq!(tag.severity(), Some(Severity::Debug));
        assert!(!passes(&tag, Severity::Info.weight(), CustomTagPolicy::AlwaysShow));
        assert!(passes(&Tag::Custom("FATAL ERROR"), 6, CustomTagPolicy::Suppress));
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("show".parse::<CustomTagPolicy>().unwrap(), CustomTagPolicy::AlwaysShow);
        assert_eq!("Suppress".parse::<CustomTagPolicy>().unwrap(), CustomTagPolicy::Suppress);
        assert!("sometimes".parse::<CustomTagPolicy>().is_err());
    }

    #[test]
    fn test_policy_u8_round_trip() {
        for policy in [CustomTagPolicy::AlwaysShow, CustomTagPolicy::Suppress] {
            assert_eq!(CustomTagPolicy::from_u8(policy.to_u8()), policy);
        }
    }

    proptest! {
        #[test]
        fn prop_passes_iff_weight_reaches_threshold(threshold in 0u32..10, idx in 0usize..6) {
            let severity = Severity::ALL[idx];
            let emitted = passes(&Tag::Level(severity), threshold, CustomTagPolicy::AlwaysShow);
            prop_assert_eq!(emitted, severity.weight() >= threshold);
        }
    }
}
