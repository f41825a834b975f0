//! Canonical schema constants for the logger's own diagnostic events
//!
//! These keys are used on `tracing` events emitted when the logger is
//! reconfigured or a sink fails. They never appear in emitted log lines.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";

// Configuration fields
pub const FIELD_THRESHOLD: &str = "threshold";
pub const FIELD_CALL_SITE: &str = "call_site";
pub const FIELD_CUSTOM_TAGS: &str = "custom_tags";

// Emission fields
pub const FIELD_TAG: &str = "tag";
pub const FIELD_EXIT_CODE: &str = "exit_code";

// Canonical event names
pub const EVENT_CONFIG_CHANGED: &str = "config_changed";
pub const EVENT_SINK_ERROR: &str = "sink_error";
pub const EVENT_EXIT: &str = "exit";

// Canonical operation names
pub const OP_SET_THRESHOLD: &str = "set_severity_threshold";
pub const OP_ENABLE_CALL_SITE: &str = "enable_call_site";
pub const OP_SET_CUSTOM_TAGS: &str = "set_custom_tag_policy";
pub const OP_WRITE_LINE: &str = "write_line";
pub const OP_LOG_AND_EXIT: &str = "log_and_exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!EVENT_CONFIG_CHANGED.is_empty());
        assert!(!EVENT_SINK_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_CONFIG_CHANGED, EVENT_SINK_ERROR);
        assert_ne!(EVENT_CONFIG_CHANGED, EVENT_EXIT);
        assert_ne!(EVENT_SINK_ERROR, EVENT_EXIT);
    }
}
