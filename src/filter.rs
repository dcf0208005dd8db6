//! Frame relevance patterns.

use regex::Regex;

/// Decides which stack frames belong to the calling application.
///
/// A filter is built either from a literal string, in which case every
/// regex metacharacter is escaped and matching is plain substring
/// matching, or from a precompiled [`Regex`], which is applied as-is.
/// Immutable once constructed.
///
/// The default filter is the empty literal. It matches every frame, so
/// rendering with it keeps the whole trace.
///
/// # Examples
///
/// ```
/// use stacktrim::FrameFilter;
///
/// let mine = FrameFilter::literal("src/db.rs");
/// assert!(mine.matches("src/db.rs:41:in `query'"));
/// assert!(!mine.matches("vendor/pool.rs:7:in `checkout'"));
///
/// // Metacharacters in literals match only themselves.
/// let dot = FrameFilter::literal("a.b");
/// assert!(dot.matches("a.b"));
/// assert!(!dot.matches("aXb"));
/// ```
#[derive(Debug, Clone)]
pub struct FrameFilter {
    pattern: Regex,
}

impl FrameFilter {
    /// Literal substring filter.
    pub fn literal<S: AsRef<str>>(text: S) -> Self {
        let escaped = regex::escape(text.as_ref());
        Self {
            // escaping strips every metacharacter, so the pattern always compiles
            pattern: Regex::new(&escaped).expect("escaped literal must compile"),
        }
    }

    /// Full-pattern filter; `pattern` keeps its regex semantics.
    #[inline]
    pub fn pattern(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Whether `frame` is relevant under this filter.
    #[inline]
    pub fn matches(&self, frame: &str) -> bool {
        self.pattern.is_match(frame)
    }
}

impl Default for FrameFilter {
    #[inline]
    fn default() -> Self {
        Self::literal("")
    }
}

impl From<&str> for FrameFilter {
    #[inline]
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for FrameFilter {
    #[inline]
    fn from(text: String) -> Self {
        Self::literal(&text)
    }
}

impl From<Regex> for FrameFilter {
    #[inline]
    fn from(pattern: Regex) -> Self {
        Self::pattern(pattern)
    }
}
