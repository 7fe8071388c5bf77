//! Error types for the capcache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (the only error a caller can see in normal use; every runtime
//!   operation on a constructed engine is infallible).
//! - [`InvariantError`]: Returned by debug/test-only `check_invariants`
//!   methods when the entry store and the order tracker have drifted apart.
//!
//! ## Example Usage
//!
//! ```
//! use capcache::engine::CacheEngine;
//! use capcache::error::ConfigError;
//! use capcache::policy::Policy;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<CacheEngine<String, i32>, ConfigError> =
//!     CacheEngine::new(100, Policy::Lru);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = CacheEngine::<String, i32>::new(0, Policy::Lru);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`CacheEngine::new`](crate::engine::CacheEngine::new) and
/// [`CacheBuilder::try_build`](crate::builder::CacheBuilder::try_build).
/// Carries a human-readable description of which parameter failed validation.
///
/// # Example
///
/// ```
/// use capcache::engine::CacheEngine;
/// use capcache::policy::Policy;
///
/// let err = CacheEngine::<u64, u64>::new(0, Policy::Fifo).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
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

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by debug/test-only `check_invariants` methods on the engine and
/// its order trackers. A violation is always a programming defect, never a
/// recoverable runtime condition: the engine panics in debug builds rather
/// than continue making eviction decisions from corrupt ordering state.
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
