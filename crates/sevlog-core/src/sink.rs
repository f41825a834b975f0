//! Line sinks
//!
//! A sink receives one fully formatted line body per emitted message.
//! Sinks that write to a stream prefix the body with a timestamp; sinks
//! that hand the line to another system pass the body through untouched.
//! Write failures are never returned to the caller of a logging function.

use chrono::{DateTime, Local, TimeZone};
use sevlog_core_types::schema::{EVENT_SINK_ERROR, OP_WRITE_LINE};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Timestamp layout: `2024/01/23 01:23:23`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Destination for formatted lines
pub trait Sink: Send + Sync {
    /// Write one line body. Stream sinks add the trailing newline unless
    /// the body already ends with one.
    fn write_line(&self, line: &str);
}

/// Newline to append after `line` so the record ends with exactly one
fn line_terminator(line: &str) -> &'static str {
    if line.ends_with('\n') {
        ""
    } else {
        "\n"
    }
}

/// Timestamp prefix for a line written at `now`, including the trailing space
pub fn timestamp_prefix<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{} ", now.format(TIMESTAMP_FORMAT))
}

fn report_sink_error(err: &io::Error) {
    tracing::warn!(
        component = module_path!(),
        op = OP_WRITE_LINE,
        event = EVENT_SINK_ERROR,
        error = %err,
    );
}

/// Timestamped lines on standard error (the default sink)
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        let prefix = timestamp_prefix(&Local::now());
        if let Err(err) = write!(stderr, "{}{}{}", prefix, line, line_terminator(line)) {
            report_sink_error(&err);
        }
    }
}

/// Timestamped lines on any writer
///
/// The writer sits behind a mutex so concurrent callers never interleave
/// within a line.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect a buffer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let prefix = timestamp_prefix(&Local::now());
        let result = write!(writer, "{}{}{}", prefix, line, line_terminator(line))
            .and_then(|()| writer.flush());
        if let Err(err) = result {
            report_sink_error(&err);
        }
    }
}

/// In-memory sink that records line bodies without timestamps
///
/// Clones share the same storage, so a test can keep one handle and hand
/// the other to a logger.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, in emission order
    pub fn lines(&self) -> Vec<String> {
        self.storage().clone()
    }

    /// Clear all recorded lines
    pub fn clear(&self) {
        self.storage().clear();
    }

    fn storage(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) {
        self.storage().push(line.to_string());
    }
}

/// Forwards each line as an INFO `tracing` event with target `sevlog`
///
/// Useful when the host already runs a subscriber; the subscriber supplies
/// its own timestamp.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "sevlog", "{}", line);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_timestamp_prefix_layout() {
        let at = Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23).unwrap();
        assert_eq!(timestamp_prefix(&at), "2009/01/23 01:23:23 ");
    }

    #[test]
    fn test_memory_sink_shares_storage() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        sink.write_line("[Info]  - one");
        sink.write_line("[Info]  - two");
        assert_eq!(handle.lines(), vec!["[Info]  - one", "[Info]  - two"]);
        handle.clear();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_writer_sink_prefixes_timestamp() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("[Warning] - disk low");
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.ends_with(" [Warning] - disk low\n"));
        // "YYYY/MM/DD HH:MM:SS " is 20 columns
        assert_eq!(written.find('['), Some(20));
        assert_eq!(&written[4..5], "/");
        assert_eq!(&written[13..14], ":");
    }

    #[test]
    fn test_writer_sink_keeps_existing_newline() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("[Info]  - done\n");
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.ends_with(" [Info]  - done\n"));
        assert_eq!(written.matches('\n').count(), 1);
    }

    #[test]
    fn test_memory_sink_survives_poisoned_lock() {
        let sink = MemorySink::new();
        let handle = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = handle.lines.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        sink.write_line("[Error] - after poison");
        assert_eq!(sink.lines(), vec!["[Error] - after poison"]);
        sink.clear();
        assert!(sink.lines().is_empty());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_sink_swallows_errors() {
        let sink = WriterSink::new(FailingWriter);
        sink.write_line("[Error] - lost");
    }
}
