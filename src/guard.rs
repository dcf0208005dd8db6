//! Guarded execution: run a unit of work, format and route any failure,
//! then decide whether to propagate it.

use crate::error::Traced;
use crate::filter::FrameFilter;
use crate::trace::Trace;

/// Error-level sink a [`Guard`] routes formatted traces to.
///
/// Implement it on whatever front-ends your logging, or adapt a closure
/// with [`FnSink`]. When no sink is configured the guard falls back to
/// writing the trace to standard output.
pub trait ErrorSink {
    /// Consumes one formatted trace.
    fn error(&self, message: &str);
}

/// Adapts a `Fn(&str)` closure into an [`ErrorSink`].
///
/// # Examples
///
/// ```
/// use stacktrim::{ErrorSink, FnSink};
///
/// let sink = FnSink::new(|message: &str| eprintln!("{message}"));
/// sink.error("QueryError: connection reset");
/// ```
pub struct FnSink<F>(F);

impl<F: Fn(&str)> FnSink<F> {
    #[inline]
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: Fn(&str)> ErrorSink for FnSink<F> {
    #[inline]
    fn error(&self, message: &str) {
        (self.0)(message)
    }
}

/// Builder for guarded execution.
///
/// Runs a unit of work and, if it fails, renders the failure's trace and
/// routes it to the configured sink (standard output when none is set),
/// then either re-raises the original error verbatim or swallows it.
/// Panics are never intercepted; they propagate immediately, unformatted.
///
/// # Examples
///
/// ```
/// use stacktrim::{CapturedError, Guard};
///
/// fn risky() -> Result<u32, CapturedError> {
///     Err(CapturedError::new("JobError", "it is intended"))
/// }
///
/// // Swallowed: the failure is printed and suppressed.
/// let outcome = Guard::new().swallow(true).run(risky);
/// assert_eq!(outcome, Ok(None));
///
/// // Propagated: the original error comes back verbatim.
/// let outcome = Guard::new().run(risky);
/// assert!(outcome.is_err());
/// ```
#[derive(Default)]
pub struct Guard<'a> {
    swallow: bool,
    mine: FrameFilter,
    sink: Option<&'a dyn ErrorSink>,
}

impl<'a> Guard<'a> {
    /// Guard that re-raises failures, keeps the full trace, and routes to
    /// standard output.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the failure after routing instead of re-raising it.
    #[inline]
    pub fn swallow(mut self, swallow: bool) -> Self {
        self.swallow = swallow;
        self
    }

    /// Relevance filter for the rendered trace, same semantics as
    /// [`Trace`].
    #[inline]
    pub fn mine<F: Into<FrameFilter>>(mut self, mine: F) -> Self {
        self.mine = mine.into();
        self
    }

    /// Routes formatted traces to `sink` instead of standard output.
    #[inline]
    pub fn log(mut self, sink: &'a dyn ErrorSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Runs `work` under the guard.
    ///
    /// Success passes through untouched as `Ok(Some(value))`. On failure
    /// the trace is rendered and routed, then the original error is
    /// returned verbatim -- or, with [`swallow`](Guard::swallow) set,
    /// discarded and `Ok(None)` returned instead; the failed branch has
    /// no meaningful value.
    pub fn run<T, E, W>(self, work: W) -> Result<Option<T>, E>
    where
        E: Traced,
        W: FnOnce() -> Result<T, E>,
    {
        match work() {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                let text = Trace::new(&error, self.mine).render();
                match self.sink {
                    Some(sink) => sink.error(&text),
                    None => println!("{text}"),
                }
                if self.swallow {
                    Ok(None)
                } else {
                    Err(error)
                }
            }
        }
    }
}
