//! Logging macros
//!
//! Two families per severity:
//!
//! - join style (`info!`, ...) renders each value with `Display` and
//!   concatenates them with no separator
//! - format style (`infof!`, ...) takes a format string and arguments,
//!   like `format!`
//!
//! Every macro logs through the global logger unless the arguments start
//! with `logger = <expr>;`, which targets that logger instead. The join
//! variant for the Panic severity is `panic_log!` so it never shadows
//! `core::panic!`.
//!
//! ```
//! use sevlog_core::{info, infof, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone());
//! info!(logger = &logger; "a", 1, "b");
//! infof!(logger = &logger; "{}={}", "a", 1);
//! assert_eq!(sink.lines(), vec!["[Info]  - a1b", "[Info]  - a=1"]);
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __sevlog_join {
    () => {
        ::core::format_args!("")
    };
    ($($value:expr),+) => {
        ::core::format_args!(
            "{}",
            $crate::format::Joined(&[$(&$value as &dyn ::core::fmt::Display),+])
        )
    };
}

/// Join-style logging under `[Debug]`
#[macro_export]
macro_rules! debug {
    (logger = $logger:expr; $($value:expr),* $(,)?) => {
        $logger.debug($crate::__sevlog_join!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::global().debug($crate::__sevlog_join!($($value),*))
    };
}

/// Format-style logging under `[Debug]`
#[macro_export]
macro_rules! debugf {
    (logger = $logger:expr; $($arg:tt)+) => {
        $logger.debug(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().debug(::core::format_args!($($arg)+))
    };
}

/// Join-style logging under `[Info]`
#[macro_export]
macro_rules! info {
    (logger = $logger:expr; $($value:expr),* $(,)?) => {
        $logger.info($crate::__sevlog_join!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::global().info($crate::__sevlog_join!($($value),*))
    };
}

/// Format-style logging under `[Info]`
#[macro_export]
macro_rules! infof {
    (logger = $logger:expr; $($arg:tt)+) => {
        $logger.info(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().info(::core::format_args!($($arg)+))
    };
}

/// Join-style logging under `[Warning]`
#[macro_export]
macro_rules! warning {
    (logger = $logger:expr; $($value:expr),* $(,)?) => {
        $logger.warning($crate::__sevlog_join!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::global().warning($crate::__sevlog_join!($($value),*))
    };
}

/// Format-style logging under `[Warning]`
#[macro_export]
macro_rules! warningf {
    (logger = $logger:expr; $($arg:tt)+) => {
        $logger.warning(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().warning(::core::format_args!($($arg)+))
    };
}

/// Join-style logging under `[Error]`
#[macro_export]
macro_rules! error {
    (logger = $logger:expr; $($value:expr),* $(,)?) => {
        $logger.error($crate::__sevlog_join!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::global().error($crate::__sevlog_join!($($value),*))
    };
}

/// Format-style logging under `[Error]`
#[macro_export]
macro_rules! errorf {
    (logger = $logger:expr; $($arg:tt)+) => {
        $logger.error(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().error(::core::format_args!($($arg)+))
    };
}

/// Join-style logging under `[PANIC]`
///
/// Logs only; never unwinds or aborts.
#[macro_export]
macro_rules! panic_log {
    (logger = $logger:expr; $($value:expr),* $(,)?) => {
        $logger.panic($crate::__sevlog_join!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::global().panic($crate::__sevlog_join!($($value),*))
    };
}

/// Format-style logging under `[PANIC]`
///
/// Logs only; never unwinds or aborts.
#[macro_export]
macro_rules! panicf {
    (logger = $logger:expr; $($arg:tt)+) => {
        $logger.panic(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().panic(::core::format_args!($($arg)+))
    };
}

/// Join-style logging under `[FATAL ERROR]`
///
/// Exits with status 1 after logging.
#[macro_export]
macro_rules! fatal {
    (logger = $logger:expr; $($value:expr),* $(,)?) => {
        $logger.fatal($crate::__sevlog_join!($($value),*))
    };
    ($($value:expr),* $(,)?) => {
        $crate::global().fatal($crate::__sevlog_join!($($value),*))
    };
}

/// Format-style logging under `[FATAL ERROR]`
///
/// Exits with status 1 after logging.
#[macro_export]
macro_rules! fatalf {
    (logger = $logger:expr; $($arg:tt)+) => {
        $logger.fatal(::core::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::global().fatal(::core::format_args!($($arg)+))
    };
}

/// Join-style logging under a caller-chosen tag
///
/// Never exits, even when the tag is `"FATAL ERROR"`.
#[macro_export]
macro_rules! tag {
    (logger = $logger:expr; $name:expr $(, $value:expr)* $(,)?) => {
        $logger.tag($name, $crate::__sevlog_join!($($value),*))
    };
    ($name:expr $(, $value:expr)* $(,)?) => {
        $crate::global().tag($name, $crate::__sevlog_join!($($value),*))
    };
}

/// Format-style logging under a caller-chosen tag
#[macro_export]
macro_rules! tagf {
    (logger = $logger:expr; $name:expr, $($arg:tt)+) => {
        $logger.tag($name, ::core::format_args!($($arg)+))
    };
    ($name:expr, $($arg:tt)+) => {
        $crate::global().tag($name, ::core::format_args!($($arg)+))
    };
}
