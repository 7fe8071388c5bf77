//! Feature-gated operation counters for the cache engine.
//!
//! Compiled only with the `metrics` feature. Counters are observational:
//! they never influence eviction decisions, and the discard observer,
//! the engine's primary notification channel, works with or without them.
//!
//! ## Key Components
//!
//! - [`MetricsCell`]: single-threaded `Cell`-backed counter.
//! - [`EngineMetrics`]: the engine's counter set.
//! - [`EngineMetricsSnapshot`]: `Copy` view of the counters plus the
//!   `len`/`capacity` gauges captured at snapshot time.
//!
//! ## Example Usage
//!
//! ```
//! use capcache::engine::CacheEngine;
//! use capcache::policy::Policy;
//!
//! let mut cache: CacheEngine<u64, &str> = CacheEngine::new(1, Policy::Fifo).unwrap();
//! cache.put(1, "a");
//! cache.put(2, "b"); // evicts key 1
//!
//! let snap = cache.metrics_snapshot();
//! assert_eq!(snap.put_new, 2);
//! assert_eq!(snap.evictions, 1);
//! assert_eq!(snap.len, 1);
//! ```

use std::cell::Cell;

/// A metrics-only counter cell.
///
/// `Cell`-backed so recording works from any engine method without
/// threading mutability through. The engine is single-threaded; these
/// counters are too.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Counter set kept by [`CacheEngine`](crate::engine::CacheEngine).
#[derive(Debug, Default)]
pub struct EngineMetrics {
    pub(crate) get_calls: MetricsCell,
    pub(crate) get_hits: MetricsCell,
    pub(crate) get_misses: MetricsCell,

    pub(crate) put_calls: MetricsCell,
    pub(crate) put_new: MetricsCell,
    pub(crate) put_updates: MetricsCell,
    /// Calls dropped because the key or value was absent.
    pub(crate) put_rejected: MetricsCell,

    pub(crate) evictions: MetricsCell,
}

impl EngineMetrics {
    /// Captures the counters together with current size gauges.
    pub fn snapshot(&self, len: usize, capacity: usize) -> EngineMetricsSnapshot {
        EngineMetricsSnapshot {
            get_calls: self.get_calls.get(),
            get_hits: self.get_hits.get(),
            get_misses: self.get_misses.get(),
            put_calls: self.put_calls.get(),
            put_new: self.put_new.get(),
            put_updates: self.put_updates.get(),
            put_rejected: self.put_rejected.get(),
            evictions: self.evictions.get(),
            len,
            capacity,
        }
    }
}

/// Point-in-time view of an engine's counters.
#[derive(Debug, Default, Clone, Copy)]
pub struct EngineMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub put_calls: u64,
    pub put_new: u64,
    pub put_updates: u64,
    pub put_rejected: u64,

    pub evictions: u64,

    // gauges captured at snapshot time
    pub len: usize,
    pub capacity: usize,
}
