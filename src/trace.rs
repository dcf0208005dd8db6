//! Trace rendering.

use std::fmt::{self, Display};

use smallvec::SmallVec;

use crate::error::Traced;
use crate::filter::FrameFilter;

/// Borrowing renderer for a caught failure.
///
/// Produces `<kind>: <message>` followed by the stack frames that survive
/// the relevance filter, one per line, tab indented. Rendering walks the
/// frames innermost-first and discards everything below the first frame
/// the filter accepts; the survivors come out in their original
/// outermost-first order. With the default (empty) filter the innermost
/// frame matches trivially and the whole trace is kept. A filter that
/// matches no frame at all leaves only the `<kind>: <message>` line --
/// there is no fallback to the unfiltered trace.
///
/// Rendering is a pure read over the borrowed error. The output string is
/// produced fresh on every call and never cached.
///
/// # Examples
///
/// ```
/// use stacktrim::{CapturedError, Trace};
///
/// let err = CapturedError::new("QueryError", "connection reset")
///     .with_frames([
///         "bin/server.rs:12:in `main'",
///         "src/api.rs:88:in `handle'",
///         "src/db.rs:41:in `query'",
///         "vendor/pool.rs:7:in `checkout'",
///     ]);
///
/// let text = Trace::new(&err, "src/").to_string();
/// assert!(text.starts_with("QueryError: connection reset\n\t"));
/// assert!(text.contains("src/db.rs"));
/// assert!(!text.contains("vendor/pool.rs"));
/// ```
pub struct Trace<'a, E> {
    error: &'a E,
    mine: FrameFilter,
}

impl<'a, E: Traced> Trace<'a, E> {
    /// Wraps `error` with a relevance filter.
    ///
    /// Only stores the borrow and the filter; the stack trace is not read
    /// until the value is rendered.
    pub fn new<F: Into<FrameFilter>>(error: &'a E, mine: F) -> Self {
        Self {
            error,
            mine: mine.into(),
        }
    }

    /// Wraps `error` with the default (empty) filter, keeping the whole
    /// trace.
    #[inline]
    pub fn full(error: &'a E) -> Self {
        Self::new(error, FrameFilter::default())
    }

    /// Renders to an owned string; equivalent to `to_string`.
    #[inline]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<E: Traced> Display for Trace<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error.kind(), self.error.message())?;
        let kept: SmallVec<[&str; 16]> = self
            .error
            .frames()
            .iter()
            .rev()
            .map(String::as_str)
            .skip_while(|frame| !self.mine.matches(frame))
            .collect();
        for frame in kept.iter().rev() {
            write!(f, "\n\t{frame}")?;
        }
        Ok(())
    }
}
