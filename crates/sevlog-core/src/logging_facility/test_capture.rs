//! In-memory capture of `tracing` events
//!
//! Lets tests assert on the logger's diagnostics and on lines forwarded by
//! [`crate::sink::TracingSink`]. Every field is recorded as a string.

use sevlog_core_types::schema::{FIELD_EVENT, FIELD_OP};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub target: String,
    pub op: Option<String>,
    pub event: Option<String>,
    /// Formatted message, if the event had one
    pub message: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn from_event(event: &Event<'_>) -> Self {
        let mut fields = StringFields::default();
        event.record(&mut fields);
        let mut fields = fields.0;
        Self {
            target: event.metadata().target().to_string(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            message: fields.remove("message"),
            fields,
        }
    }
}

#[derive(Default)]
struct StringFields(HashMap<String, String>);

impl Visit for StringFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    // bool and integer fields land here too; their Debug form is the plain value
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

type Events = Arc<Mutex<Vec<CapturedEvent>>>;

struct CaptureLayer(Events);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let captured = CapturedEvent::from_event(event);
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Shared handle on the captured events
#[derive(Clone, Default)]
pub struct TestCapture {
    events: Events,
}

impl TestCapture {
    fn layer(&self) -> CaptureLayer {
        CaptureLayer(Arc::clone(&self.events))
    }

    fn guard(&self) -> MutexGuard<'_, Vec<CapturedEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.guard().clone()
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.guard().iter().filter(|e| predicate(e)).count()
    }

    /// # Panics
    ///
    /// Panics when no captured event has this `op` and `event`.
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let found = self.count_events(|e| {
            e.op.as_deref() == Some(op) && e.event.as_deref() == Some(event)
        });
        assert!(found > 0, "Expected event op={} event={}", op, event);
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture as the global subscriber (first call only)
///
/// All tests in one binary share the capture, so assertions should filter
/// on something unique to the test.
///
/// ```
/// use sevlog_core::logging_facility::test_capture::init_test_capture;
/// use sevlog_core::{Logger, MemorySink, Severity};
///
/// let capture = init_test_capture();
/// let logger = Logger::new(MemorySink::new());
/// logger.set_severity_threshold(Severity::Error);
/// capture.assert_event_exists("set_severity_threshold", "config_changed");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let capture = TestCapture::default();
            tracing_subscriber::registry().with(capture.layer()).init();
            capture
        })
        .clone()
}
