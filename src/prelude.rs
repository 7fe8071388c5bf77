pub use crate::builder::CacheBuilder;
pub use crate::ds::{OrderList, SlotArena, SlotId};
pub use crate::engine::CacheEngine;
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::EngineMetricsSnapshot;
pub use crate::policy::{
    FifoTracker, LfuTracker, LifoTracker, LruTracker, MruTracker, OrderTracker, Policy,
};
