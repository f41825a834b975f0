use sevlog_core::{Logger, MemorySink, RecordingExit};

/// Logger writing to memory whose Fatal calls return instead of exiting
#[allow(dead_code)]
pub fn capture_logger() -> (Logger, MemorySink, RecordingExit) {
    let sink = MemorySink::new();
    let exit = RecordingExit::new();
    let logger = Logger::builder()
        .sink(sink.clone())
        .exit_strategy(exit.clone())
        .build();
    (logger, sink, exit)
}

/// Split a line body into its tag column, location field and message
#[allow(dead_code)]
pub fn split_line(line: &str) -> (&str, &str, &str) {
    let close = line.find(']').expect("line should start with a bracketed tag");
    let tag = &line[..=close];
    let rest = line[close + 1..].trim_start();
    let (location, message) = rest.split_once(' ').unwrap_or((rest, ""));
    (tag, location, message)
}
