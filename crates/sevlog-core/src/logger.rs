//! The logger
//!
//! A [`Logger`] owns its configuration, its sink and its exit strategy.
//! Configuration lives in atomics so a shared `&Logger` can be
//! reconfigured from any thread; every emission re-reads it, so a changed
//! threshold applies from the next call on.
//!
//! Every public emission method is `#[track_caller]`: the call site is the
//! code that invoked the method (or the macro that expanded to it).

use sevlog_core_types::schema::{
    EVENT_CONFIG_CHANGED, EVENT_EXIT, OP_ENABLE_CALL_SITE, OP_LOG_AND_EXIT, OP_SET_CUSTOM_TAGS,
    OP_SET_THRESHOLD,
};
use sevlog_core_types::Severity;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::call_site::{render_location, CallSite};
use crate::config::LoggerBuilder;
use crate::exit::{ExitStrategy, ProcessExit, FATAL_EXIT_CODE};
use crate::filter::{passes, CustomTagPolicy, Tag, SHOW_ALL};
use crate::format::{format_line, NO_LOCATION};
use crate::sink::{Sink, StderrSink};

pub struct Logger {
    threshold: AtomicU32,
    show_call_site: AtomicBool,
    custom_tags: AtomicU8,
    sink: Box<dyn Sink>,
    exit: Box<dyn ExitStrategy>,
}

impl Logger {
    /// Logger with default settings writing to `sink`
    ///
    /// Shows every severity, omits call sites, exits the process on Fatal.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self::with_parts(Box::new(sink), Box::new(ProcessExit))
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) fn with_parts(sink: Box<dyn Sink>, exit: Box<dyn ExitStrategy>) -> Self {
        Self {
            threshold: AtomicU32::new(SHOW_ALL),
            show_call_site: AtomicBool::new(false),
            custom_tags: AtomicU8::new(CustomTagPolicy::default().to_u8()),
            sink,
            exit,
        }
    }

    // ===== Configuration =====

    /// Current threshold weight
    pub fn threshold(&self) -> u32 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Suppress every predefined severity lighter than `level`
    pub fn set_severity_threshold(&self, level: Severity) {
        self.set_threshold_weight(level.weight());
    }

    /// Set the threshold to a raw weight
    ///
    /// Weights above `Severity::Fatal.weight()` suppress every predefined
    /// severity. Fatal calls still exit.
    pub fn set_threshold_weight(&self, weight: u32) {
        self.threshold.store(weight, Ordering::Relaxed);
        tracing::debug!(
            component = module_path!(),
            op = OP_SET_THRESHOLD,
            event = EVENT_CONFIG_CHANGED,
            threshold = weight,
        );
    }

    /// Start reporting `file:line` on every line. There is no way back.
    pub fn enable_call_site(&self) {
        self.show_call_site.store(true, Ordering::Relaxed);
        tracing::debug!(
            component = module_path!(),
            op = OP_ENABLE_CALL_SITE,
            event = EVENT_CONFIG_CHANGED,
            call_site = true,
        );
    }

    pub fn call_site_enabled(&self) -> bool {
        self.show_call_site.load(Ordering::Relaxed)
    }

    pub fn set_custom_tag_policy(&self, policy: CustomTagPolicy) {
        self.custom_tags.store(policy.to_u8(), Ordering::Relaxed);
        tracing::debug!(
            component = module_path!(),
            op = OP_SET_CUSTOM_TAGS,
            event = EVENT_CONFIG_CHANGED,
            custom_tags = %policy,
        );
    }

    pub fn custom_tag_policy(&self) -> CustomTagPolicy {
        CustomTagPolicy::from_u8(self.custom_tags.load(Ordering::Relaxed))
    }

    /// Whether a line under `tag` would be emitted right now
    pub fn enabled(&self, tag: &Tag<'_>) -> bool {
        passes(tag, self.threshold(), self.custom_tag_policy())
    }

    // ===== Emission =====

    /// Emit `args` under `tag`, attributing it to `site`
    ///
    /// This is the single path every other emission method funnels into.
    /// The message is only rendered when the tag passes the filter.
    pub fn log_at(&self, tag: Tag<'_>, site: Option<CallSite>, args: fmt::Arguments<'_>) {
        if !self.enabled(&tag) {
            return;
        }
        let location = if self.call_site_enabled() {
            render_location(site)
        } else {
            NO_LOCATION.to_string()
        };
        self.sink
            .write_line(&format_line(tag.name(), &location, args));
    }

    /// Emit under a predefined severity. Never exits, even for Fatal.
    #[track_caller]
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log_at(Tag::Level(severity), Some(CallSite::caller()), args);
    }

    /// Emit under a caller-chosen tag. Never exits, even for `"FATAL ERROR"`.
    #[track_caller]
    pub fn tag(&self, name: &str, args: fmt::Arguments<'_>) {
        self.log_at(Tag::Custom(name), Some(CallSite::caller()), args);
    }

    /// Emit, then hand `exit_code` to the exit strategy
    ///
    /// The exit happens even when the line itself is filtered out.
    #[track_caller]
    pub fn log_and_exit(&self, tag: Tag<'_>, exit_code: i32, args: fmt::Arguments<'_>) {
        self.log_at(tag, Some(CallSite::caller()), args);
        tracing::debug!(
            component = module_path!(),
            op = OP_LOG_AND_EXIT,
            event = EVENT_EXIT,
            tag = tag.name(),
            exit_code,
        );
        self.exit.exit(exit_code);
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Logs under `PANIC`. Does not unwind or abort; execution continues.
    #[track_caller]
    pub fn panic(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Panic, args);
    }

    /// Logs under `FATAL ERROR`, then exits with status 1
    ///
    /// With the default [`ProcessExit`] strategy this never returns.
    #[track_caller]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log_and_exit(Tag::Level(Severity::Fatal), FATAL_EXIT_CODE, args);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(StderrSink)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("show_call_site", &self.call_site_enabled())
            .field("custom_tags", &self.custom_tag_policy())
            .finish_non_exhaustive()
    }
}
