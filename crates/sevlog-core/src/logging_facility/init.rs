//! Diagnostics initialization
//!
//! Installs the `tracing` subscriber that receives the logger's own
//! diagnostic events (configuration changes, sink failures, exits) and the
//! lines written through [`crate::sink::TracingSink`].

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Diagnostics profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, debug level
    Development,
    /// JSON output, info level
    Production,
    /// No output; tests install a capture layer instead
    Test,
}

impl Profile {
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "sevlog=debug,sevlog_core=debug",
            Profile::Production => "sevlog=info,sevlog_core=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Install the diagnostics subscriber
///
/// Only the first call has an effect. `RUST_LOG` overrides the profile's
/// default filter. Does nothing if the host already installed a global
/// subscriber.
///
/// ```
/// use sevlog_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()))
        };
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter())
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(filter())
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
