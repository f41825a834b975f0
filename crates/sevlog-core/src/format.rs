//! Line formatting
//!
//! A line body is the bracketed tag padded to [`TAG_WIDTH`] columns, the
//! location field and the message, separated by single spaces. The sink
//! adds the timestamp.

use std::fmt;

/// Location field used when call-site reporting is off
pub const NO_LOCATION: &str = "-";

/// Minimum width of the bracketed tag column
pub const TAG_WIDTH: usize = 7;

/// Assemble a line body: `[Tag]<pad> <location> <message>`
pub fn format_line(tag: &str, location: &str, message: impl fmt::Display) -> String {
    let bracketed = format!("[{}]", tag);
    format!(
        "{:<width$} {} {}",
        bracketed,
        location,
        message,
        width = TAG_WIDTH
    )
}

/// Values rendered back to back with no separator
///
/// Backs the join-style macros: `info!("a", 1, "b")` renders `a1b`, and
/// `info!(1, 2)` renders `12`. No space is ever inserted, whatever the
/// value types.
pub struct Joined<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
