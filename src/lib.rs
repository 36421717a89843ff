//! lrukit: a capacity-bounded LRU key-value cache with O(1) operations.
//!
//! The cache pairs a hash index with an arena-backed doubly-linked recency
//! list. The index stores stable slot handles rather than references, so a hit
//! relocates its entry in constant time without scanning and without aliasing
//! hazards between the two structures.
//!
//! The core type, [`policy::lru::LruCache`], is strictly sequential; the
//! `concurrency` feature (default) adds
//! [`policy::lru::ConcurrentLruCache`], a `parking_lot::RwLock` wrapper for
//! shared use. The `metrics` feature adds per-cache operation counters.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");      // "a" is now most recently used
//! cache.insert("c", 3); // evicts "b"
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! ```

pub mod ds;
pub mod error;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
