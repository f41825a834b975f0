#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The global logger is process-wide, so everything that touches it runs
//! inside a single test.

use sevlog_core::{
    enable_call_site, fatal, global, info, infof, init, panicf, set_severity_threshold, tag,
    warning, Logger, MemorySink, RecordingExit, Severity, SevlogError,
};

#[test]
fn test_global_logger_lifecycle() {
    let sink = MemorySink::new();
    let exit = RecordingExit::new();
    let logger = Logger::builder()
        .sink(sink.clone())
        .exit_strategy(exit.clone())
        .build();

    init(logger).expect("first init should succeed");

    let second = init(Logger::new(MemorySink::new())).unwrap_err();
    assert_eq!(second, SevlogError::AlreadyInitialized);

    info!("a", 1, "b");
    infof!("{}={}", "a", 1);
    assert_eq!(sink.lines(), vec!["[Info]  - a1b", "[Info]  - a=1"]);
    sink.clear();

    set_severity_threshold(Severity::Warning);
    assert_eq!(global().threshold(), Severity::Warning.weight());
    info!("dropped");
    warning!("kept");
    tag!("CUSTOM", "always");
    assert_eq!(sink.lines(), vec!["[Warning] - kept", "[CUSTOM] - always"]);
    sink.clear();

    enable_call_site();
    panicf!("{}", "not fatal");
    let line = line!() - 1;
    assert_eq!(
        sink.lines(),
        vec![format!("[PANIC] tests/global_logger_tests.rs:{} not fatal", line)]
    );
    assert!(exit.codes().is_empty());
    sink.clear();

    fatal!("bye");
    assert_eq!(sink.lines().len(), 1);
    assert_eq!(exit.codes(), vec![1]);
}
