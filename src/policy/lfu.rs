//! LFU (Least Frequently Used) order tracker with recency tie-break.
//!
//! Keeps a per-key use count alongside the same recency list LRU maintains.
//! The victim is the key with the minimum count; among equally-cold keys the
//! least recently accessed one goes first.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, SlotId>     order: OrderList<FreqEntry<K>>
//!          key → position                  recency order, counts in-node
//!
//!   ┌──────────┬────────┐          ┌─────────────────────────────────────┐
//!   │   Key    │ SlotId │          │ front                         back  │
//!   ├──────────┼────────┤          ├─────────────────────────────────────┤
//!   │  "a"     │  id_0  │          │ [b:1] ◄──► [c:3] ◄──► [a:4]         │
//!   │  "b"     │  id_1  │          │   ↑                                 │
//!   │  "c"     │  id_2  │          │  min count, least recent → EVICT    │
//!   └──────────┴────────┘          └─────────────────────────────────────┘
//! ```
//!
//! ## Counting rules
//!
//! - First insertion initializes the count to 1.
//! - Every later `put` of the key and every successful `get` adds 1 and
//!   refreshes recency.
//!
//! The first insertion does *not* additionally count as a use: a key that
//! was only ever inserted sits at count 1, tied with nothing it hasn't
//! earned. Callers relying on eviction order should not assume insert and
//! first access are distinguishable.
//!
//! ## Selection
//!
//! One pass over the recency list, front (least recent) to back. The first
//! entry seen at any count wins ties at that count, so the scan keeps the
//! earliest entry with the strictly smallest count. The incoming key is
//! skipped: every other resident key may be hotter, and the key that just
//! arrived must not be the one evicted to make room for itself.
//!
//! Maintenance is O(1) per operation; selection is O(n) once per overflow.
//!
//! ## Example Usage
//!
//! ```
//! use capcache::policy::{LfuTracker, OrderTracker};
//!
//! let mut tracker: LfuTracker<&str> = LfuTracker::with_capacity(2);
//! tracker.record_insert(&"a");
//! tracker.record_insert(&"b");
//!
//! // "a" is used twice: count 3 vs count 1
//! tracker.record_access(&"a");
//! tracker.record_access(&"a");
//!
//! tracker.record_insert(&"c");
//! assert_eq!(tracker.select_victim(&"c"), Some("b"));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{OrderList, SlotId};
use crate::policy::OrderTracker;

/// Key plus its use count, stored as one order-list node.
#[derive(Debug)]
struct FreqEntry<K> {
    key: K,
    count: u64,
}

/// Frequency tracker with least-recent tie-break.
#[derive(Debug)]
pub struct LfuTracker<K>
where
    K: Clone + Eq + Hash,
{
    /// Key → position in the order list.
    index: FxHashMap<K, SlotId>,
    /// Recency order, least recent at the front; counts ride in the nodes.
    order: OrderList<FreqEntry<K>>,
}

impl<K> LfuTracker<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a tracker pre-sized for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity + 1, Default::default()),
            order: OrderList::with_capacity(capacity + 1),
        }
    }

    /// Returns the current use count for `key`, if tracked.
    ///
    /// # Example
    ///
    /// ```
    /// use capcache::policy::{LfuTracker, OrderTracker};
    ///
    /// let mut tracker: LfuTracker<u64> = LfuTracker::with_capacity(4);
    /// tracker.record_insert(&1);
    /// assert_eq!(tracker.count(&1), Some(1));
    ///
    /// tracker.record_access(&1);
    /// assert_eq!(tracker.count(&1), Some(2));
    /// assert_eq!(tracker.count(&2), None);
    /// ```
    pub fn count(&self, key: &K) -> Option<u64> {
        let &slot = self.index.get(key)?;
        self.order.get(slot).map(|entry| entry.count)
    }

    /// Adds one use and refreshes recency.
    #[inline]
    fn bump(&mut self, key: &K) {
        if let Some(&slot) = self.index.get(key) {
            if let Some(entry) = self.order.get_mut(slot) {
                entry.count += 1;
            }
            let moved = self.order.move_to_back(slot);
            debug_assert!(moved, "indexed key missing from order list");
        } else {
            debug_assert!(false, "bump on untracked key");
        }
    }

    /// Validates index/list synchronization and count sanity.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate(&self) {
        self.order.debug_validate();
        assert_eq!(self.index.len(), self.order.len(), "index/order length drift");
        for (key, &slot) in &self.index {
            let entry = self.order.get(slot).expect("index points at freed node");
            assert!(&entry.key == key, "index points at wrong node");
            assert!(entry.count >= 1, "tracked key with zero count");
        }
    }
}

impl<K> OrderTracker<K> for LfuTracker<K>
where
    K: Clone + Eq + Hash,
{
    fn record_insert(&mut self, key: &K) {
        let slot = self.order.push_back(FreqEntry {
            key: key.clone(),
            count: 1,
        });
        let previous = self.index.insert(key.clone(), slot);
        debug_assert!(previous.is_none(), "insert recorded for tracked key");
    }

    #[inline]
    fn record_update(&mut self, key: &K) {
        self.bump(key);
    }

    #[inline]
    fn record_access(&mut self, key: &K) {
        self.bump(key);
    }

    fn select_victim(&self, incoming: &K) -> Option<K> {
        let mut coldest: Option<&FreqEntry<K>> = None;
        for entry in self.order.iter() {
            if &entry.key == incoming {
                continue;
            }
            // Strict comparison: the earliest (least recent) entry wins ties.
            if coldest.map_or(true, |best| entry.count < best.count) {
                coldest = Some(entry);
            }
        }
        coldest.map(|entry| entry.key.clone())
    }

    fn forget(&mut self, key: &K) {
        if let Some(slot) = self.index.remove(key) {
            self.order.remove(slot);
        }
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }
}
