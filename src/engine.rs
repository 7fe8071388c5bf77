//! Cache engine: bounded key-value storage behind a uniform put/get contract.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────────┐
//! │                        CacheEngine<K, V>                              │
//! │                                                                       │
//! │   ┌────────────────────┐        ┌────────────────────────────────┐    │
//! │   │ EntryStore<K, V>   │        │ PolicyTracker<K>               │    │
//! │   │  key → value       │        │  one position per stored key   │    │
//! │   │  existence truth   │        │  policy-specific ordering      │    │
//! │   └─────────┬──────────┘        └──────────────┬─────────────────┘    │
//! │             │      every mutation touches both │                      │
//! │             └────────────────┬─────────────────┘                      │
//! │                              ▼                                        │
//! │   capacity check → select_victim → remove both → discard observer     │
//! └───────────────────────────────────────────────────────────────────────┘
//!
//! put(key, value):
//!   1. null key or value → no-op
//!   2. existing key      → store update + tracker update, never evicts
//!   3. new key           → store insert + tracker insert
//!   4. len > capacity    → select one victim (never the incoming key),
//!                          remove from store + tracker, notify observer
//!
//! get(key):
//!   1. null or absent    → None, no side effects
//!   2. hit               → tracker access (recency/frequency policies
//!                          only), value returned
//! ```
//!
//! ## Contract
//!
//! - After any `put` returns, `len() <= capacity()`.
//! - Updates of an existing key never change the entry count and never
//!   evict.
//! - Exactly one eviction per capacity-exceeding insert, resolved before
//!   `put` returns; the discard observer runs synchronously at that moment.
//! - Store and tracker agree key-for-key at every call boundary (verified
//!   after every mutation in debug builds; drift is a programming defect
//!   and panics rather than corrupt eviction decisions).
//!
//! ## Null inputs
//!
//! `put` and `get` take `impl Into<Option<_>>`, so callers pass plain keys
//! and values in the common case and `None` where a key or value is
//! optional upstream. A `None` key or value is a defined no-op, not an
//! error: absent input is routine, and threading it through as an `Err`
//! would force every call site to handle a non-failure.
//!
//! ## Concurrency
//!
//! Single-threaded by design: every operation takes `&mut self`, completes
//! synchronously, and leaves no intermediate state behind. Embedding in a
//! concurrent host means one engine per worker or external serialization.
//!
//! ## Example Usage
//!
//! ```
//! use capcache::engine::CacheEngine;
//! use capcache::policy::Policy;
//!
//! let mut cache: CacheEngine<&str, i32> = CacheEngine::new(2, Policy::Lru).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//!
//! // refresh "a", then overflow: "b" is the least recently used
//! assert_eq!(cache.get(&"a"), Some(&1));
//! cache.put("c", 3);
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert_eq!(cache.get(&"c"), Some(&3));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::{EngineMetrics, EngineMetricsSnapshot};
use crate::policy::{OrderTracker, Policy, PolicyTracker};
use crate::store::EntryStore;

/// Observer invoked with each evicted key.
type DiscardObserver<K> = Box<dyn FnMut(&K)>;

/// Bounded key-value cache with a construction-time eviction policy.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash`
/// - `V`: Value type, opaque to the engine
///
/// # Example
///
/// ```
/// use capcache::engine::CacheEngine;
/// use capcache::policy::Policy;
///
/// let mut cache: CacheEngine<u64, String> = CacheEngine::new(100, Policy::Fifo).unwrap();
/// cache.put(1, "one".to_string());
///
/// assert_eq!(cache.get(&1), Some(&"one".to_string()));
/// assert_eq!(cache.len(), 1);
/// ```
pub struct CacheEngine<K, V>
where
    K: Clone + Eq + Hash,
{
    store: EntryStore<K, V>,
    tracker: PolicyTracker<K>,
    capacity: usize,
    observer: Option<DiscardObserver<K>>,
    #[cfg(feature = "metrics")]
    metrics: EngineMetrics,
}

impl<K, V> CacheEngine<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails fast on `capacity == 0`: an engine that can hold nothing has
    /// no evictable candidate at its first insert, so it is never
    /// constructed in that state.
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::engine::CacheEngine;
    /// use capcache::policy::Policy;
    ///
    /// let cache = CacheEngine::<u64, i32>::new(10, Policy::Lfu).unwrap();
    /// assert_eq!(cache.capacity(), 10);
    /// assert!(cache.is_empty());
    ///
    /// assert!(CacheEngine::<u64, i32>::new(0, Policy::Lfu).is_err());
    /// ```
    pub fn new(capacity: usize, policy: Policy) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be >= 1"));
        }
        Ok(Self {
            store: EntryStore::with_capacity(capacity),
            tracker: PolicyTracker::new(policy, capacity),
            capacity,
            observer: None,
            #[cfg(feature = "metrics")]
            metrics: EngineMetrics::default(),
        })
    }

    /// Installs the discard observer, replacing any previous one.
    ///
    /// The observer runs synchronously with the evicted key, after the
    /// entry is gone from the cache and before the triggering `put`
    /// returns.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// use capcache::engine::CacheEngine;
    /// use capcache::policy::Policy;
    ///
    /// let discarded = Rc::new(RefCell::new(Vec::new()));
    /// let log = Rc::clone(&discarded);
    ///
    /// let mut cache: CacheEngine<&str, i32> = CacheEngine::new(1, Policy::Fifo).unwrap();
    /// cache.on_discard(move |key| log.borrow_mut().push(*key));
    ///
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// assert_eq!(*discarded.borrow(), vec!["a"]);
    /// ```
    pub fn on_discard<F>(&mut self, observer: F)
    where
        F: FnMut(&K) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// Inserts or updates an entry.
    ///
    /// A `None` key or value makes the call a no-op. Updating an existing
    /// key replaces its value in place and refreshes the tracker per the
    /// policy's rules; it never evicts. Inserting a new key may evict
    /// exactly one resident entry to restore the capacity bound.
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::engine::CacheEngine;
    /// use capcache::policy::Policy;
    ///
    /// let mut cache: CacheEngine<&str, i32> = CacheEngine::new(2, Policy::Fifo).unwrap();
    ///
    /// cache.put("a", 1);
    /// cache.put("a", 10); // update in place
    /// assert_eq!(cache.len(), 1);
    /// assert_eq!(cache.get(&"a"), Some(&10));
    ///
    /// cache.put(None, 2); // no key, nothing happens
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn put(&mut self, key: impl Into<Option<K>>, value: impl Into<Option<V>>) {
        #[cfg(feature = "metrics")]
        self.metrics.put_calls.incr();

        let (Some(key), Some(value)) = (key.into(), value.into()) else {
            #[cfg(feature = "metrics")]
            self.metrics.put_rejected.incr();
            return;
        };

        if self.store.contains(&key) {
            self.store.insert(key.clone(), value);
            self.tracker.record_update(&key);
            #[cfg(feature = "metrics")]
            self.metrics.put_updates.incr();
            self.debug_validate();
            return;
        }

        self.store.insert(key.clone(), value);
        self.tracker.record_insert(&key);
        #[cfg(feature = "metrics")]
        self.metrics.put_new.incr();

        if self.store.len() > self.capacity {
            self.evict_one(&key);
        }
        self.debug_validate();
    }

    /// Returns the value for `key`, or `None` for a null or absent key.
    ///
    /// A hit counts as an access for the recency/frequency policies (LRU,
    /// MRU, LFU); FIFO and LIFO ignore reads. A miss has no side effects.
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::engine::CacheEngine;
    /// use capcache::policy::Policy;
    ///
    /// let mut cache: CacheEngine<&str, i32> = CacheEngine::new(2, Policy::Lru).unwrap();
    /// cache.put("a", 1);
    ///
    /// assert_eq!(cache.get(&"a"), Some(&1));
    /// assert_eq!(cache.get(&"missing"), None);
    /// assert_eq!(cache.get(None), None);
    /// ```
    pub fn get<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Option<&V>
    where
        K: 'k,
    {
        #[cfg(feature = "metrics")]
        self.metrics.get_calls.incr();

        let Some(key) = key.into() else {
            #[cfg(feature = "metrics")]
            self.metrics.get_misses.incr();
            return None;
        };

        if !self.store.contains(key) {
            #[cfg(feature = "metrics")]
            self.metrics.get_misses.incr();
            return None;
        }

        self.tracker.record_access(key);
        #[cfg(feature = "metrics")]
        self.metrics.get_hits.incr();
        self.store.get(key)
    }

    /// Returns the value for `key` without counting an access.
    ///
    /// Unlike [`get`](Self::get), this never touches the order tracker, so
    /// it cannot change what gets evicted next.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    /// Returns `true` if `key` has an entry, without counting an access.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Returns the current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the fixed maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the eviction policy chosen at construction.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.tracker.policy()
    }

    /// Removes all entries. The observer is not notified; clearing is an
    /// explicit caller action, not an eviction.
    pub fn clear(&mut self) {
        self.store.clear();
        self.tracker.clear();
        self.debug_validate();
    }

    /// Removes the policy's victim and notifies the observer.
    fn evict_one(&mut self, incoming: &K) {
        let victim = match self.tracker.select_victim(incoming) {
            Some(victim) => victim,
            None => panic!("overflow with no eviction candidate: store and tracker out of sync"),
        };

        self.tracker.forget(&victim);
        let removed = self.store.remove(&victim);
        debug_assert!(removed.is_some(), "victim was not in the entry store");

        #[cfg(feature = "metrics")]
        self.metrics.evictions.incr();

        if let Some(observer) = self.observer.as_mut() {
            observer(&victim);
        }
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        self.tracker.debug_validate();
        if let Err(err) = self.check_invariants() {
            panic!("{err}");
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn debug_validate(&self) {}

    /// Verifies that the entry store and order tracker describe the same
    /// key set and that the capacity bound holds.
    ///
    /// Available in debug and test builds; release builds trust the
    /// per-mutation discipline instead of re-walking the key set.
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.store.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.store.len(),
                self.capacity
            )));
        }
        if self.store.len() != self.tracker.len() {
            return Err(InvariantError::new(format!(
                "store holds {} entries but tracker holds {}",
                self.store.len(),
                self.tracker.len()
            )));
        }
        for key in self.store.keys() {
            if !self.tracker.contains(key) {
                return Err(InvariantError::new("stored key missing from tracker"));
            }
        }
        Ok(())
    }

    /// Returns a snapshot of the engine's operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> EngineMetricsSnapshot {
        self.metrics.snapshot(self.store.len(), self.capacity)
    }
}

impl<K, V> fmt::Debug for CacheEngine<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEngine")
            .field("policy", &self.policy())
            .field("capacity", &self.capacity)
            .field("len", &self.store.len())
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn engine(capacity: usize, policy: Policy) -> CacheEngine<&'static str, i32> {
        CacheEngine::new(capacity, policy).unwrap()
    }

    // ==============================================
    // Construction
    // ==============================================

    mod construction {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected() {
            let err = CacheEngine::<u64, i32>::new(0, Policy::Fifo).unwrap_err();
            assert!(err.to_string().contains("capacity"));
        }

        #[test]
        fn new_cache_is_empty() {
            for policy in Policy::ALL {
                let cache = engine(3, policy);
                assert!(cache.is_empty());
                assert_eq!(cache.len(), 0);
                assert_eq!(cache.capacity(), 3);
                assert_eq!(cache.policy(), policy);
            }
        }

        #[test]
        fn debug_does_not_dump_entries() {
            let mut cache = engine(2, Policy::Lru);
            cache.put("secret", 42);

            let dbg = format!("{:?}", cache);
            assert!(dbg.contains("CacheEngine"));
            assert!(!dbg.contains("secret"));
        }
    }

    // ==============================================
    // Null Inputs
    // ==============================================

    mod null_inputs {
        use super::*;

        #[test]
        fn put_without_key_is_noop() {
            let mut cache = engine(2, Policy::Lru);
            cache.put(None, 1);

            assert!(cache.is_empty());
            cache.check_invariants().unwrap();
        }

        #[test]
        fn put_without_value_is_noop() {
            let mut cache = engine(2, Policy::Lru);
            cache.put("a", None);

            assert!(cache.is_empty());
            assert_eq!(cache.get(&"a"), None);
        }

        #[test]
        fn null_put_does_not_disturb_existing_state() {
            for policy in Policy::ALL {
                let mut cache = engine(2, policy);
                cache.put("a", 1);
                cache.put("b", 2);

                cache.put(None, 3);
                cache.put("c", None);

                assert_eq!(cache.len(), 2);
                assert_eq!(cache.peek(&"a"), Some(&1));
                assert_eq!(cache.peek(&"b"), Some(&2));
                cache.check_invariants().unwrap();
            }
        }

        #[test]
        fn get_with_null_key_returns_none() {
            let mut cache = engine(2, Policy::Lru);
            cache.put("a", 1);

            assert_eq!(cache.get(None), None);
        }

        #[test]
        fn miss_leaves_recency_untouched() {
            let mut cache = engine(2, Policy::Lru);
            cache.put("a", 1);
            cache.put("b", 2);

            // a miss must not refresh anything; "a" is still the LRU victim
            assert_eq!(cache.get(&"zzz"), None);
            cache.put("c", 3);

            assert!(!cache.contains(&"a"));
            assert!(cache.contains(&"b"));
        }
    }

    // ==============================================
    // Capacity and Updates
    // ==============================================

    mod capacity {
        use super::*;

        #[test]
        fn capacity_invariant_holds_under_churn() {
            for policy in Policy::ALL {
                let mut cache: CacheEngine<u32, u32> = CacheEngine::new(4, policy).unwrap();
                for i in 0..100 {
                    cache.put(i % 13, i);
                    assert!(cache.len() <= 4, "policy {:?} exceeded capacity", policy);
                    cache.check_invariants().unwrap();
                }
            }
        }

        #[test]
        fn update_at_capacity_does_not_evict() {
            for policy in Policy::ALL {
                let mut cache = engine(2, policy);
                cache.put("a", 1);
                cache.put("b", 2);

                cache.put("a", 10);

                assert_eq!(cache.len(), 2, "policy {:?} evicted on update", policy);
                assert_eq!(cache.peek(&"a"), Some(&10));
                assert_eq!(cache.peek(&"b"), Some(&2));
            }
        }

        #[test]
        fn single_capacity_cache_always_keeps_newest() {
            for policy in Policy::ALL {
                let mut cache = engine(1, policy);
                cache.put("a", 1);
                cache.put("b", 2);

                assert_eq!(cache.len(), 1);
                assert_eq!(cache.peek(&"b"), Some(&2), "policy {:?}", policy);
                assert!(!cache.contains(&"a"));
            }
        }
    }

    // ==============================================
    // Per-Policy Eviction Order
    // ==============================================

    mod eviction_order {
        use super::*;

        #[test]
        fn fifo_evicts_oldest_insert() {
            let mut cache = engine(2, Policy::Fifo);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3);

            assert_eq!(cache.get(&"a"), None);
            assert_eq!(cache.get(&"b"), Some(&2));
            assert_eq!(cache.get(&"c"), Some(&3));
        }

        #[test]
        fn fifo_ignores_reads() {
            let mut cache = engine(2, Policy::Fifo);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"a");
            cache.put("c", 3);

            // "a" was read but insertion order decides
            assert!(!cache.contains(&"a"));
        }

        #[test]
        fn lifo_evicts_previous_most_recent_insert() {
            let mut cache = engine(2, Policy::Lifo);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3);

            assert!(cache.contains(&"a"));
            assert!(!cache.contains(&"b"));
            assert!(cache.contains(&"c"));
        }

        #[test]
        fn lru_evicts_least_recently_accessed() {
            let mut cache = engine(2, Policy::Lru);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"a");
            cache.put("c", 3);

            assert!(!cache.contains(&"b"));
            assert!(cache.contains(&"a"));
            assert!(cache.contains(&"c"));
        }

        #[test]
        fn mru_evicts_previous_most_recent_access() {
            let mut cache = engine(2, Policy::Mru);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"a");
            cache.put("c", 3);

            assert!(!cache.contains(&"a"));
            assert!(cache.contains(&"b"));
            assert!(cache.contains(&"c"));
        }

        #[test]
        fn lfu_evicts_coldest_key() {
            let mut cache = engine(2, Policy::Lfu);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"a");
            cache.get(&"a");
            cache.put("c", 3);

            assert!(!cache.contains(&"b"));
            assert!(cache.contains(&"a"));
            assert!(cache.contains(&"c"));
        }

        #[test]
        fn lfu_breaks_ties_by_least_recent() {
            let mut cache = engine(3, Policy::Lfu);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.put("c", 3);

            // equal counts; recency order is now b, c, a
            cache.get(&"b");
            cache.get(&"c");
            cache.get(&"a");

            cache.put("d", 4);
            assert!(!cache.contains(&"b"));
        }

        #[test]
        fn lfu_keeps_incoming_key_even_when_uniquely_coldest() {
            let mut cache = engine(2, Policy::Lfu);
            cache.put("a", 1);
            cache.put("b", 2);
            cache.get(&"a");
            cache.get(&"b");

            // every resident is at count 2; the incoming key starts at 1
            cache.put("c", 3);

            assert!(cache.contains(&"c"), "incoming key must stay resident");
            assert_eq!(cache.len(), 2);
        }
    }

    // ==============================================
    // Discard Observer
    // ==============================================

    mod discard_observer {
        use super::*;

        #[test]
        fn observer_sees_each_eviction_once() {
            let discarded: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));
            let log = Rc::clone(&discarded);

            let mut cache = engine(2, Policy::Fifo);
            cache.on_discard(move |key| log.borrow_mut().push(*key));

            cache.put("a", 1);
            cache.put("b", 2);
            assert!(discarded.borrow().is_empty(), "no eviction below capacity");

            cache.put("c", 3);
            cache.put("d", 4);

            assert_eq!(*discarded.borrow(), vec!["a", "b"]);
        }

        #[test]
        fn observer_not_called_on_update() {
            let count = Rc::new(RefCell::new(0));
            let calls = Rc::clone(&count);

            let mut cache = engine(1, Policy::Lru);
            cache.on_discard(move |_| *calls.borrow_mut() += 1);

            cache.put("a", 1);
            cache.put("a", 2);
            cache.put("a", 3);

            assert_eq!(*count.borrow(), 0);
        }

        #[test]
        fn observer_runs_after_entry_is_gone() {
            // the observer fires once the cache no longer holds the victim;
            // verified by re-checking from the callback via a shared flag
            let evicted: Rc<RefCell<Option<&str>>> = Rc::new(RefCell::new(None));
            let slot = Rc::clone(&evicted);

            let mut cache = engine(1, Policy::Fifo);
            cache.on_discard(move |key| *slot.borrow_mut() = Some(*key));

            cache.put("a", 1);
            cache.put("b", 2);

            assert_eq!(*evicted.borrow(), Some("a"));
            assert!(!cache.contains(&"a"));
        }

        #[test]
        fn replacing_observer_drops_the_old_one() {
            let first = Rc::new(RefCell::new(0));
            let second = Rc::new(RefCell::new(0));

            let mut cache = engine(1, Policy::Fifo);
            let counter = Rc::clone(&first);
            cache.on_discard(move |_| *counter.borrow_mut() += 1);
            let counter = Rc::clone(&second);
            cache.on_discard(move |_| *counter.borrow_mut() += 1);

            cache.put("a", 1);
            cache.put("b", 2);

            assert_eq!(*first.borrow(), 0);
            assert_eq!(*second.borrow(), 1);
        }
    }

    // ==============================================
    // Clear and Peek
    // ==============================================

    mod clear_and_peek {
        use super::*;

        #[test]
        fn clear_resets_all_policies() {
            for policy in Policy::ALL {
                let mut cache = engine(3, policy);
                cache.put("a", 1);
                cache.put("b", 2);

                cache.clear();
                assert!(cache.is_empty());
                assert_eq!(cache.get(&"a"), None);
                cache.check_invariants().unwrap();

                // still usable after clearing
                cache.put("c", 3);
                assert_eq!(cache.get(&"c"), Some(&3));
            }
        }

        #[test]
        fn peek_does_not_refresh_recency() {
            let mut cache = engine(2, Policy::Lru);
            cache.put("a", 1);
            cache.put("b", 2);

            assert_eq!(cache.peek(&"a"), Some(&1));
            cache.put("c", 3);

            // peek must not have saved "a"
            assert!(!cache.contains(&"a"));
        }

        #[test]
        fn clear_does_not_notify_observer() {
            let count = Rc::new(RefCell::new(0));
            let calls = Rc::clone(&count);

            let mut cache = engine(2, Policy::Fifo);
            cache.on_discard(move |_| *calls.borrow_mut() += 1);

            cache.put("a", 1);
            cache.put("b", 2);
            cache.clear();

            assert_eq!(*count.borrow(), 0);
        }
    }

    // ==============================================
    // Metrics (feature-gated)
    // ==============================================

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn counters_track_operations() {
            let mut cache = engine(1, Policy::Lru);

            cache.put("a", 1);
            cache.put("a", 2);
            cache.put("b", 3); // evicts "a"
            cache.put(None, 4);
            cache.get(&"b");
            cache.get(&"a");
            cache.get(None);

            let snap = cache.metrics_snapshot();
            assert_eq!(snap.put_calls, 4);
            assert_eq!(snap.put_new, 2);
            assert_eq!(snap.put_updates, 1);
            assert_eq!(snap.put_rejected, 1);
            assert_eq!(snap.evictions, 1);
            assert_eq!(snap.get_calls, 3);
            assert_eq!(snap.get_hits, 1);
            assert_eq!(snap.get_misses, 2);
            assert_eq!(snap.len, 1);
            assert_eq!(snap.capacity, 1);
        }
    }
}
