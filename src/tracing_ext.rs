//! Tracing integration for stacktrim.
//!
//! This module provides an [`ErrorSink`] adapter that forwards formatted
//! traces to the `tracing` ecosystem at error level.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! stacktrim = { version = "0.4", features = ["tracing"] }
//! ```

use crate::guard::ErrorSink;

/// [`ErrorSink`] that emits each formatted trace via [`tracing::error!`].
///
/// # Examples
///
/// ```
/// use stacktrim::{CapturedError, Guard, TracingSink};
///
/// let outcome = Guard::new()
///     .swallow(true)
///     .log(&TracingSink)
///     .run(|| Err::<(), _>(CapturedError::new("JobError", "it is intended")));
///
/// assert_eq!(outcome, Ok(None));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl ErrorSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
