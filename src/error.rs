//! Captured failure data and the seam trait the formatters consume.

use std::fmt::{self, Display};

/// Read-only view of a caught failure: a kind identifier, a message, and
/// the stack frames that were attached when it was caught.
///
/// Frames are ordered outermost-caller-first, exactly as captured. An
/// error that was constructed synthetically and never travelled through a
/// call stack reports an empty slice, and formatting degrades to the
/// `<kind>: <message>` line alone.
///
/// [`Trace`](crate::Trace) and [`Guard`](crate::Guard) are generic over
/// this trait, so application error types can be formatted directly
/// instead of being converted into [`CapturedError`] first.
pub trait Traced {
    /// Type identifier of the failure, e.g. `"QueryError"`.
    fn kind(&self) -> &str;

    /// Human-readable description of the failure.
    fn message(&self) -> &str;

    /// Attached call-site descriptions, outermost caller first.
    ///
    /// Frame content is opaque to the formatters and passed through
    /// verbatim.
    fn frames(&self) -> &[String];
}

/// Owned snapshot of a caught failure.
///
/// # Examples
///
/// ```
/// use stacktrim::{CapturedError, Traced};
///
/// let err = CapturedError::new("QueryError", "connection reset")
///     .with_frames(["bin/server.rs:12:in `main'", "src/db.rs:41:in `query'"]);
///
/// assert_eq!(err.kind(), "QueryError");
/// assert_eq!(err.frames().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapturedError {
    kind: String,
    message: String,
    frames: Vec<String>,
}

impl CapturedError {
    /// Creates a frameless error, as if it had never been raised through a
    /// call stack.
    #[inline]
    pub fn new<K: Into<String>, M: Into<String>>(kind: K, message: M) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            frames: Vec::new(),
        }
    }

    /// Snapshots any displayable value, deriving the kind from its type
    /// name and the message from its `Display` output.
    ///
    /// # Examples
    ///
    /// ```
    /// use stacktrim::{CapturedError, Traced};
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let err = CapturedError::of(&io);
    ///
    /// assert!(err.kind().contains("io"));
    /// assert_eq!(err.message(), "gone");
    /// ```
    pub fn of<E: Display>(source: &E) -> Self {
        Self::new(std::any::type_name::<E>(), source.to_string())
    }

    /// Attaches stack frames, outermost caller first, replacing any
    /// frames attached before.
    pub fn with_frames<I>(mut self, frames: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.frames = frames.into_iter().map(Into::into).collect();
        self
    }
}

impl Traced for CapturedError {
    #[inline]
    fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CapturedError {}
