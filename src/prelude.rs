//! Convenience re-exports for common usage.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = LruCache::new(8).unwrap();
//! cache.insert("k", 1);
//! assert_eq!(cache.get(&"k"), Some(&1));
//! ```

pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::LruMetricsSnapshot;
#[cfg(feature = "concurrency")]
pub use crate::policy::lru::ConcurrentLruCache;
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};
