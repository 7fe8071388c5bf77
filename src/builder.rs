//! Builder for configuring a cache engine before construction.
//!
//! Thin front over [`CacheEngine::new`]: collects the capacity and policy,
//! validates once, and keys the engine's generic parameters at the final
//! `try_build` call so call sites read naturally.
//!
//! ## Example
//!
//! ```
//! use capcache::builder::CacheBuilder;
//! use capcache::policy::Policy;
//!
//! let mut cache = CacheBuilder::new(100)
//!     .policy(Policy::Lfu)
//!     .try_build::<u64, String>()
//!     .unwrap();
//!
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::engine::CacheEngine;
use crate::error::ConfigError;
use crate::policy::Policy;

/// Builder for [`CacheEngine`] instances.
///
/// Defaults to [`Policy::Lru`] when no policy is chosen.
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    capacity: usize,
    policy: Policy,
}

impl CacheBuilder {
    /// Starts a builder for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            policy: Policy::Lru,
        }
    }

    /// Sets the eviction policy.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the engine, validating the configuration.
    ///
    /// # Type Parameters
    ///
    /// - `K`: Key type, must be `Clone + Eq + Hash`
    /// - `V`: Value type
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::builder::CacheBuilder;
    /// use capcache::policy::Policy;
    ///
    /// // zero capacity is rejected, not clamped
    /// let result = CacheBuilder::new(0).try_build::<u64, String>();
    /// assert!(result.is_err());
    ///
    /// let cache = CacheBuilder::new(10)
    ///     .policy(Policy::Mru)
    ///     .try_build::<u64, String>()
    ///     .unwrap();
    /// assert_eq!(cache.policy(), Policy::Mru);
    /// ```
    pub fn try_build<K, V>(self) -> Result<CacheEngine<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        CacheEngine::new(self.capacity, self.policy)
    }
}
