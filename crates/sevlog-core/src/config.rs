//! Logger configuration
//!
//! Settings come from code, from any `serde` source, or from the
//! environment:
//!
//! | variable | meaning |
//! |---|---|
//! | `SEVLOG_LEVEL` | threshold severity (`debug`, `info`, `warning`, `error`, `panic`, `fatal`) |
//! | `SEVLOG_CALL_SITE` | `1`/`true`/`yes`/`on` to report `file:line` |
//! | `SEVLOG_CUSTOM_TAGS` | `always_show` or `suppress` |

use serde::{Deserialize, Serialize};
use sevlog_core_types::Severity;

use crate::errors::{Result, SevlogError};
use crate::exit::{ExitStrategy, ProcessExit};
use crate::filter::CustomTagPolicy;
use crate::logger::Logger;
use crate::sink::{Sink, StderrSink};

pub const ENV_LEVEL: &str = "SEVLOG_LEVEL";
pub const ENV_CALL_SITE: &str = "SEVLOG_CALL_SITE";
pub const ENV_CUSTOM_TAGS: &str = "SEVLOG_CUSTOM_TAGS";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum severity to emit; `None` shows everything
    pub threshold: Option<Severity>,
    pub call_site: bool,
    pub custom_tags: CustomTagPolicy,
}

impl LoggerConfig {
    /// Read settings from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`SevlogError::UnknownSeverity`] or
    /// [`SevlogError::InvalidConfig`] when a variable is set to a value that
    /// cannot be interpreted.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value
    ///
    /// Unset and empty variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Same as [`LoggerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = LoggerConfig::default();

        if let Some(level) = value(ENV_LEVEL) {
            config.threshold = Some(level.parse::<Severity>()?);
        }
        if let Some(flag) = value(ENV_CALL_SITE) {
            config.call_site = parse_flag(ENV_CALL_SITE, &flag)?;
        }
        if let Some(policy) = value(ENV_CUSTOM_TAGS) {
            config.custom_tags = policy.parse().map_err(|_| SevlogError::InvalidConfig {
                key: ENV_CUSTOM_TAGS.to_string(),
                value: policy.clone(),
            })?;
        }
        Ok(config)
    }

    /// Apply these settings to an existing logger
    ///
    /// Call-site reporting can only be switched on, so `call_site: false`
    /// leaves the logger's current setting alone.
    pub fn apply(&self, logger: &Logger) {
        if let Some(threshold) = self.threshold {
            logger.set_severity_threshold(threshold);
        }
        if self.call_site {
            logger.enable_call_site();
        }
        logger.set_custom_tag_policy(self.custom_tags);
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SevlogError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Assembles a [`Logger`] from a config, a sink and an exit strategy
///
/// ```
/// use sevlog_core::{Logger, LoggerConfig, MemorySink, RecordingExit, Severity};
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .config(LoggerConfig {
///         threshold: Some(Severity::Warning),
///         ..LoggerConfig::default()
///     })
///     .sink(sink.clone())
///     .exit_strategy(RecordingExit::new())
///     .build();
///
/// logger.info(format_args!("dropped"));
/// logger.error(format_args!("kept"));
/// assert_eq!(sink.lines(), vec!["[Error] - kept"]);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Box<dyn Sink>,
    exit: Box<dyn ExitStrategy>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: Box::new(StderrSink),
            exit: Box::new(ProcessExit),
        }
    }

    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn exit_strategy(mut self, exit: impl ExitStrategy + 'static) -> Self {
        self.exit = Box::new(exit);
        self
    }

    pub fn build(self) -> Logger {
        let logger = Logger::with_parts(self.sink, self.exit);
        self.config.apply(&logger);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = LoggerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_all_variables() {
        let config = LoggerConfig::from_lookup(lookup_from(&[
            (ENV_LEVEL, "warning"),
            (ENV_CALL_SITE, "yes"),
            (ENV_CUSTOM_TAGS, "suppress"),
        ]))
        .unwrap();
        assert_eq!(config.threshold, Some(Severity::Warning));
        assert!(config.call_site);
        assert_eq!(config.custom_tags, CustomTagPolicy::Suppress);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config =
            LoggerConfig::from_lookup(lookup_from(&[(ENV_LEVEL, "  "), (ENV_CALL_SITE, "")]))
                .unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_unknown_level() {
        let err = LoggerConfig::from_lookup(lookup_from(&[(ENV_LEVEL, "chatty")])).unwrap_err();
        assert_eq!(
            err,
            SevlogError::UnknownSeverity {
                name: "chatty".to_string()
            }
        );
    }

    #[test]
    fn test_bad_flag() {
        let err =
            LoggerConfig::from_lookup(lookup_from(&[(ENV_CALL_SITE, "sometimes")])).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_CONFIG");
    }

    #[test]
    fn test_bad_custom_tag_policy_names_variable() {
        let err =
            LoggerConfig::from_lookup(lookup_from(&[(ENV_CUSTOM_TAGS, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            SevlogError::InvalidConfig {
                key: ENV_CUSTOM_TAGS.to_string(),
                value: "maybe".to_string()
            }
        );
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: LoggerConfig =
            serde_json::from_str(r#"{"threshold": "error", "custom_tags": "suppress"}"#).unwrap();
        assert_eq!(config.threshold, Some(Severity::Error));
        assert!(!config.call_site);
        assert_eq!(config.custom_tags, CustomTagPolicy::Suppress);
    }

    #[test]
    fn test_apply_never_disables_call_site() {
        let logger = Logger::builder()
            .config(LoggerConfig {
                call_site: true,
                ..LoggerConfig::default()
            })
            .sink(crate::sink::MemorySink::new())
            .build();
        LoggerConfig::default().apply(&logger);
        assert!(logger.call_site_enabled());
    }
}
