//! MRU (Most Recently Used) order tracker.
//!
//! Records access order like LRU but evicts from the most-recent end, with
//! the same subtlety LIFO has: the access that triggered the overflow is the
//! incoming key itself, which must stay resident. The victim is therefore
//! the key that held the most-recent position *before* the incoming one.
//!
//! ```text
//!   order: OrderList<K>
//!
//!   ┌────────────────────────────────────────────────┐
//!   │ front                                    back  │
//!   ├────────────────────────────────────────────────┤
//!   │ [a] ◄──► [b] ◄──► [c] ◄──► [d]                 │
//!   │                    ↑        ↑                  │
//!   │                  EVICT    incoming (keep)      │
//!   └────────────────────────────────────────────────┘
//!
//!   select_victim(d):  prev of back, the previous most recent
//! ```
//!
//! Update and access both refresh a key to the back, exactly as LRU does;
//! only the selection end differs.
//!
//! ## Example Usage
//!
//! ```
//! use capcache::policy::{MruTracker, OrderTracker};
//!
//! let mut tracker: MruTracker<&str> = MruTracker::with_capacity(2);
//! tracker.record_insert(&"a");
//! tracker.record_insert(&"b");
//!
//! // reading "a" makes it most recent; the overflowing insert of "c"
//! // then targets "a", not "b"
//! tracker.record_access(&"a");
//! tracker.record_insert(&"c");
//! assert_eq!(tracker.select_victim(&"c"), Some("a"));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{OrderList, SlotId};
use crate::policy::OrderTracker;

/// Access-order tracker evicting the previous most-recent key.
#[derive(Debug)]
pub struct MruTracker<K>
where
    K: Clone + Eq + Hash,
{
    /// Key → position in the order list.
    index: FxHashMap<K, SlotId>,
    /// Access order, least recent at the front.
    order: OrderList<K>,
}

impl<K> MruTracker<K>
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

    /// Refreshes `key` to the most-recent position.
    #[inline]
    fn touch(&mut self, key: &K) {
        if let Some(&slot) = self.index.get(key) {
            let moved = self.order.move_to_back(slot);
            debug_assert!(moved, "indexed key missing from order list");
        } else {
            debug_assert!(false, "touch on untracked key");
        }
    }

    /// The key one position before the most-recent end.
    #[inline]
    fn previous_most_recent(&self) -> Option<&K> {
        let back = self.order.back_id()?;
        let prev = self.order.prev_id(back)?;
        self.order.get(prev)
    }

    /// Validates index/list synchronization.
    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate(&self) {
        self.order.debug_validate();
        assert_eq!(self.index.len(), self.order.len(), "index/order length drift");
        for (key, &slot) in &self.index {
            assert!(self.order.get(slot) == Some(key), "index points at wrong node");
        }
    }
}

impl<K> OrderTracker<K> for MruTracker<K>
where
    K: Clone + Eq + Hash,
{
    fn record_insert(&mut self, key: &K) {
        let slot = self.order.push_back(key.clone());
        let previous = self.index.insert(key.clone(), slot);
        debug_assert!(previous.is_none(), "insert recorded for tracked key");
    }

    #[inline]
    fn record_update(&mut self, key: &K) {
        self.touch(key);
    }

    #[inline]
    fn record_access(&mut self, key: &K) {
        self.touch(key);
    }

    fn select_victim(&self, incoming: &K) -> Option<K> {
        debug_assert!(
            self.order.back() == Some(incoming),
            "incoming key must be the most recent"
        );
        self.previous_most_recent().cloned()
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
