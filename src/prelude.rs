//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use stacktrim::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`CapturedError`], [`FrameFilter`], [`Trace`], [`Guard`],
//!   [`FnSink`]
//! - **Traits**: [`Traced`], [`ErrorSink`]
//!
//! # Examples
//!
//! ```
//! use stacktrim::prelude::*;
//!
//! let err = CapturedError::new("JobError", "it is intended")
//!     .with_frames(["bin/worker.rs:9:in `main'", "src/jobs.rs:33:in `sync'"]);
//!
//! let text = Trace::new(&err, FrameFilter::default()).render();
//! assert!(text.contains("jobs.rs"));
//! ```

pub use crate::error::{CapturedError, Traced};
pub use crate::filter::FrameFilter;
pub use crate::guard::{ErrorSink, FnSink, Guard};
pub use crate::trace::Trace;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TracingSink;
