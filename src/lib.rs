//! Render a caught error's type, message, and stack trace as one readable
//! string, trimmed to the frames that belong to your own code. Each
//! submodule re-exports its public surface from here, so consumers can
//! depend on `stacktrim::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Formatting a trace
//!
//! ```
//! use stacktrim::{CapturedError, Trace};
//!
//! let err = CapturedError::new("QueryError", "connection reset")
//!     .with_frames([
//!         "bin/server.rs:12:in `main'",
//!         "src/api.rs:88:in `handle'",
//!         "src/db.rs:41:in `query'",
//!         "vendor/pool.rs:7:in `checkout'",
//!     ]);
//!
//! // The filter names "my" code; frames below the deepest match are noise
//! // and get dropped.
//! let text = Trace::new(&err, "src/").to_string();
//! assert!(text.starts_with("QueryError: connection reset\n\t"));
//! assert!(!text.contains("vendor/pool.rs"));
//! ```
//!
//! ## Guarded execution
//!
//! ```
//! use stacktrim::{CapturedError, Guard};
//!
//! let outcome = Guard::new()
//!     .swallow(true)
//!     .mine("src/")
//!     .run(|| Err::<(), _>(CapturedError::new("JobError", "it is intended")));
//!
//! // The trace went to standard output; the failure was suppressed.
//! assert_eq!(outcome, Ok(None));
//! ```

/// Captured failure data and the `Traced` seam trait
pub mod error;
/// Frame relevance patterns, literal or regex
pub mod filter;
/// Guarded execution and the logger-capability trait
pub mod guard;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The borrowing trace renderer
pub mod trace;

/// Tracing integration (requires the `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use error::{CapturedError, Traced};
pub use filter::FrameFilter;
pub use guard::{ErrorSink, FnSink, Guard};
pub use trace::Trace;

#[cfg(feature = "tracing")]
pub use tracing_ext::TracingSink;
