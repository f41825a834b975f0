//! Exit strategies for the Fatal severity
//!
//! Fatal logging ends by handing an exit status to an [`ExitStrategy`].
//! Production loggers use [`ProcessExit`]; embedders and tests swap in
//! [`RecordingExit`] so a Fatal call returns instead of killing the host.

use std::sync::{Arc, Mutex};

/// Exit status used by the Fatal wrappers
pub const FATAL_EXIT_CODE: i32 = 1;

pub trait ExitStrategy: Send + Sync {
    fn exit(&self, code: i32);
}

/// Terminates the process immediately. No destructors run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl ExitStrategy for ProcessExit {
    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}

/// Records requested exit codes and returns normally
#[derive(Debug, Default, Clone)]
pub struct RecordingExit {
    codes: Arc<Mutex<Vec<i32>>>,
}

impl RecordingExit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes requested so far, oldest first
    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ExitStrategy for RecordingExit {
    fn exit(&self, code: i32) {
        self.codes.lock().map(|mut c| c.push(code)).ok();
    }
}
