//! Error types for the navcache library.
//!
//! ## Key Components
//!
//! - [`NavigationError`]: Wraps a failure raised by a caller-supplied
//!   [`Loader`](crate::traits::Loader), tagged with the index being loaded or
//!   unloaded. The cache never produces errors of its own; it only forwards
//!   loader failures.
//! - [`InvariantError`]: Returned by
//!   [`NavigationCache::check_invariants`](crate::navigation::NavigationCache::check_invariants)
//!   when the entry map disagrees with the retain window.
//!
//! ## Example Usage
//!
//! ```
//! use navcache::error::NavigationError;
//!
//! let err: NavigationError<&str> = NavigationError::Load { index: 3, source: "decode failed" };
//! assert_eq!(err.index(), 3);
//! assert_eq!(err.to_string(), "failed to load entry 3: decode failed");
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// NavigationError
// ---------------------------------------------------------------------------

/// Error raised while loading or unloading a cache entry.
///
/// `E` is the loader's own error type. Infallible loaders use
/// [`std::convert::Infallible`], which makes this type uninhabited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError<E> {
    /// `Loader::load` failed for `index`.
    Load { index: usize, source: E },
    /// `Loader::unload` failed for `index`. The entry was already removed.
    Unload { index: usize, source: E },
}

impl<E> NavigationError<E> {
    /// Returns the index the failing loader call was made for.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Self::Load { index, .. } | Self::Unload { index, .. } => *index,
        }
    }

    /// Returns a reference to the loader's error.
    #[inline]
    pub fn source_ref(&self) -> &E {
        match self {
            Self::Load { source, .. } | Self::Unload { source, .. } => source,
        }
    }

    /// Consumes the error and returns the loader's error.
    #[inline]
    pub fn into_source(self) -> E {
        match self {
            Self::Load { source, .. } | Self::Unload { source, .. } => source,
        }
    }

    /// Returns `true` if the failure happened in `Loader::unload`.
    #[inline]
    pub fn is_unload(&self) -> bool {
        matches!(self, Self::Unload { .. })
    }
}

impl<E: fmt::Display> fmt::Display for NavigationError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { index, source } => write!(f, "failed to load entry {index}: {source}"),
            Self::Unload { index, source } => {
                write!(f, "failed to unload entry {index}: {source}")
            },
        }
    }
}

impl<E> std::error::Error for NavigationError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source_ref())
    }
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
