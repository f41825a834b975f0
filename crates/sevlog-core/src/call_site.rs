//! Call-site capture
//!
//! Locations are captured at the public entry point with `#[track_caller]`
//! and threaded down explicitly, so adding or removing wrapper layers never
//! shifts which frame gets reported.

use std::fmt;
use std::panic::Location;

/// File name rendered when no call site is available
pub const UNKNOWN_FILE: &str = "???";

/// Source file and line of a logging call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Capture the location of the caller of the enclosing `#[track_caller]` chain
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// File path reduced to its last two segments
    pub fn short_file(&self) -> &'static str {
        shorten_path(self.file)
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Renders as `<short-file>:<line>`
impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_file(), self.line)
    }
}

/// Keep at most the last two segments of `path`
///
/// Scans backwards for separators (`/` or `\`) and cuts after the second
/// one found. Paths with fewer than two separators are returned unchanged.
///
/// ```
/// use sevlog_core::call_site::shorten_path;
///
/// assert_eq!(shorten_path("dir/subdir/file.rs"), "subdir/file.rs");
/// assert_eq!(shorten_path("subdir/file.rs"), "subdir/file.rs");
/// ```
pub fn shorten_path(path: &str) -> &str {
    let mut separators = 0;
    for (i, byte) in path.bytes().enumerate().rev() {
        if byte == b'/' || byte == b'\\' {
            separators += 1;
            if separators == 2 {
                return &path[i + 1..];
            }
        }
    }
    path
}

/// Location field for an emitted line when call-site reporting is on
pub fn render_location(site: Option<CallSite>) -> String {
    match site {
        Some(site) => site.to_string(),
        None => format!("{}:0", UNKNOWN_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shorten_keeps_last_two_segments() {
        assert_eq!(shorten_path("a/b/c.go"), "b/c.go");
        assert_eq!(shorten_path("/home/me/src/crate/lib.rs"), "crate/lib.rs");
        assert_eq!(shorten_path("/b/c.rs"), "b/c.rs");
    }

    #[test]
    fn test_shorten_fewer_than_two_separators() {
        assert_eq!(shorten_path("main.rs"), "main.rs");
        assert_eq!(shorten_path("src/main.rs"), "src/main.rs");
        assert_eq!(shorten_path(""), "");
    }

    #[test]
    fn test_shorten_windows_separators() {
        assert_eq!(shorten_path(r"C:\work\src\main.rs"), r"src\main.rs");
    }

    #[test]
    fn test_render_known_site() {
        let site = CallSite::new("a/b/c.go", 42);
        assert_eq!(render_location(Some(site)), "b/c.go:42");
    }

    #[test]
    fn test_render_unknown_site() {
        assert_eq!(render_location(None), "???:0");
    }

    #[test]
    fn test_caller_captures_this_file() {
        let site = CallSite::caller();
        assert!(site.file().ends_with("call_site.rs"));
        assert_eq!(site.line(), line!() - 2);
    }

    proptest! {
        #[test]
        fn prop_shortened_is_suffix_with_at_most_one_separator(
            segments in proptest::collection::vec("[a-z]{1,6}", 1..6)
        ) {
            let path = segments.join("/");
            let short = shorten_path(&path);
            prop_assert!(path.ends_with(short));
            prop_assert!(short.matches('/').count() <= 1);
            let expected_len = segments.len().min(2);
            prop_assert_eq!(short.split('/').count(), expected_len);
        }
    }
}
