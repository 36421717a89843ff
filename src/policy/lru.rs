//! # Least Recently Used (LRU) Cache
//!
//! Capacity-bounded key-value cache that evicts the entry which has gone the
//! longest without a `get` or `insert` touch.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                        LruCache<K, V>                        │
//!   │                                                              │
//!   │   ┌──────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (index)                       │   │
//!   │   │                                                      │   │
//!   │   │  ┌─────────┬───────────────────────────────┐        │   │
//!   │   │  │   Key   │  SlotId ────────────────────┐ │        │   │
//!   │   │  └─────────┴─────────────────────────────┼─┘        │   │
//!   │   └────────────────────────────────────────── ┼──────────┘   │
//!   │                                              │               │
//!   │   ┌──────────────────────────────────────────▼───────────┐   │
//!   │   │  IntrusiveList<Entry<K, V>>  (recency order)         │   │
//!   │   │                                                      │   │
//!   │   │  front ─► [MRU] ◄──► [..] ◄──► [LRU] ◄─ back         │   │
//!   │   └──────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index maps each key to the `SlotId` of its list node, so a hit is one
//! hash lookup plus an O(1) detach/re-attach — no scanning. Entries (key and
//! value together) live in the list nodes; the index duplicates the key, which
//! is why `K: Clone` is required.
//!
//! ## Operations
//!
//! | Method           | Complexity | Recency effect                      |
//! |------------------|------------|-------------------------------------|
//! | `new(capacity)`  | O(1)       | -                                   |
//! | `insert(k, v)`   | O(1)*      | k becomes MRU; may evict LRU        |
//! | `get(&k)`        | O(1)*      | k becomes MRU                       |
//! | `peek(&k)`       | O(1)*      | none                                |
//! | `touch(&k)`      | O(1)*      | k becomes MRU                       |
//! | `remove(&k)`     | O(1)*      | entry dropped                       |
//! | `pop_lru()`      | O(1)       | LRU entry dropped                   |
//! | `peek_lru()`     | O(1)       | none                                |
//! | `recency_rank()` | O(n)       | none                                |
//!
//! *amortized, subject to hashing.
//!
//! ## Eviction flow
//!
//! ```text
//!   insert(D) with capacity = 3, cache full:
//!
//!   before:  front ─► [A] ◄──► [B] ◄──► [C] ◄─ back
//!   1. pop [C] from the back, drop it from the index
//!   2. push [D] at the front
//!   after:   front ─► [D] ◄──► [A] ◄──► [B] ◄─ back
//! ```
//!
//! Eviction is synchronous: it happens inside the `insert` that needs the
//! room, and the size bound `len <= capacity` holds after every operation.
//!
//! ## Thread Safety
//!
//! - `LruCache`: sequential; callers must serialize whole operations. Note
//!   that `get` mutates recency, so even reads need exclusive access.
//! - [`ConcurrentLruCache`] (feature `concurrency`): wraps the core in
//!   `parking_lot::RwLock` and shares values as `Arc<V>`.
//!
//! ## Example
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//!
//! // Touching "a" protects it from the next eviction.
//! assert_eq!(cache.get(&"a"), Some(&1));
//!
//! cache.insert("c", 3); // evicts "b"
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert_eq!(cache.get(&"c"), Some(&3));
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::{IntrusiveList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{LruMetrics, LruMetricsSnapshot};
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// One cached association, stored as a recency-list node payload.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Capacity-bounded LRU cache over a hash index and an arena-backed
/// recency list.
///
/// Construction fails for capacity zero; see [`LruCache::new`]. All other
/// operations are total: a miss is reported as `None`, never as an error,
/// and `insert` always succeeds for well-formed inputs.
pub struct LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, SlotId>,
    order: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Index and node storage are pre-allocated for `capacity`, so steady-state
    /// operation does not reallocate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero. The value is never
    /// silently clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100).unwrap();
    /// assert!(LruCache::<u32, String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: IntrusiveList::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        })
    }

    /// Read-only lookup that does not refresh recency.
    ///
    /// Unlike [`get`](CoreCache::get), the entry keeps its place in the
    /// eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::prelude::*;
    ///
    /// let mut cache = LruCache::new(2).unwrap();
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// // Peek leaves key 1 as the eviction candidate.
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    /// cache.insert(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        self.metrics.peek_calls.increment();

        let &id = self.index.get(key)?;
        let entry = self.order.get(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.peek_found.increment();

        Some(&entry.value)
    }

    /// Iterates over entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Verifies the index/order invariants, returning a description of the
    /// first violation found.
    ///
    /// Checked invariants:
    /// - `len(index) == len(order)` and both are `<= capacity`;
    /// - every indexed `SlotId` resolves to a live node holding the same key;
    /// - no two keys share a node.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index has {} keys but recency order has {} nodes",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.order.len(),
                self.capacity
            )));
        }

        let mut seen = std::collections::HashSet::with_capacity(self.index.len());
        for (key, &id) in &self.index {
            let entry = self.order.get(id).ok_or_else(|| {
                InvariantError::new(format!("indexed slot {} is not in the list", id.index()))
            })?;
            if entry.key != *key {
                return Err(InvariantError::new(format!(
                    "slot {} holds a different key than its index entry",
                    id.index()
                )));
            }
            if !seen.insert(id) {
                return Err(InvariantError::new(format!(
                    "slot {} is referenced by more than one key",
                    id.index()
                )));
            }
        }
        Ok(())
    }

    /// Evicts the back (LRU) entry. Caller has already checked occupancy.
    fn evict_lru(&mut self) {
        if let Some(entry) = self.order.pop_back() {
            self.index.remove(&entry.key);
            #[cfg(feature = "metrics")]
            {
                self.metrics.evicted_entries += 1;
            }
        }
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        debug_assert_eq!(self.index.len(), self.order.len());
        debug_assert!(self.order.len() <= self.capacity);
        self.order.debug_validate();
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts or overwrites; the key ends at the MRU position either way.
    ///
    /// A new key on a full cache first evicts the strict LRU entry, so the
    /// size never exceeds capacity, not even transiently as observed after
    /// the call.
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.insert_calls += 1;
        }

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            {
                self.metrics.insert_updates += 1;
            }

            let previous = self
                .order
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
            self.order.move_to_front(id);

            #[cfg(debug_assertions)]
            self.debug_validate();

            return previous;
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.insert_new += 1;
        }

        if self.order.len() >= self.capacity {
            self.evict_lru();
        }

        let id = self.order.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        None
    }

    /// Looks up a value and unconditionally marks the key most recently used.
    ///
    /// The relocation happens even though the value is unchanged: a read is an
    /// access, and every access resets recency. A miss mutates nothing.
    fn get(&mut self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.get_calls += 1;
        }

        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.get_misses += 1;
                }
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        {
            self.metrics.get_hits += 1;
        }

        self.order.move_to_front(id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        self.order.get(id).map(|entry| &entry.value)
    }

    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.remove_calls += 1;
        }

        let id = self.index.remove(key)?;
        let entry = self.order.remove(id)?;

        #[cfg(feature = "metrics")]
        {
            self.metrics.remove_found += 1;
        }

        #[cfg(debug_assertions)]
        self.debug_validate();

        Some(entry.value)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.pop_lru_calls += 1;
        }

        let entry = self.order.pop_back()?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        {
            self.metrics.pop_lru_found += 1;
        }

        #[cfg(debug_assertions)]
        self.debug_validate();

        Some((entry.key, entry.value))
    }

    fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order.back().map(|entry| (&entry.key, &entry.value))
    }

    fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        {
            self.metrics.touch_calls += 1;
        }

        match self.index.get(key) {
            Some(&id) => {
                self.order.move_to_front(id);

                #[cfg(feature = "metrics")]
                {
                    self.metrics.touch_found += 1;
                }

                #[cfg(debug_assertions)]
                self.debug_validate();

                true
            },
            None => false,
        }
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        let &target = self.index.get(key)?;
        self.order.iter_ids().position(|id| id == target)
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Copies the operation counters out alongside current occupancy.
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evicted_entries: self.metrics.evicted_entries,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }
}

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

// ---------------------------------------------------------------------------
// ConcurrentLruCache
// ---------------------------------------------------------------------------

#[cfg(feature = "concurrency")]
mod concurrent {
    use std::sync::Arc;

    use parking_lot::RwLock;

    use super::*;

    /// Thread-safe LRU cache wrapping [`LruCache`] in a `parking_lot::RwLock`.
    ///
    /// Values are stored as `Arc<V>` so callers can keep a reference past
    /// eviction. `get`, `insert`, `remove`, `touch`, `pop_lru`, and `clear`
    /// take the write lock — `get` included, because it reorders recency.
    /// `peek`, `peek_lru`, `contains`, `len`, and `capacity` only need the
    /// read lock, so concurrent readers never contend with each other.
    ///
    /// Cloning the handle is cheap and shares the underlying cache.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::ConcurrentLruCache;
    ///
    /// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(100).unwrap();
    /// cache.insert(1, "value".to_string());
    ///
    /// let value = cache.get(&1).unwrap();
    /// assert_eq!(*value, "value");
    /// ```
    #[derive(Clone)]
    pub struct ConcurrentLruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        inner: Arc<RwLock<LruCache<K, Arc<V>>>>,
    }

    impl<K, V> ConcurrentLruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        /// Creates a thread-safe cache holding at most `capacity` entries.
        ///
        /// # Errors
        ///
        /// Returns [`ConfigError`] if `capacity` is zero.
        pub fn new(capacity: usize) -> Result<Self, ConfigError> {
            Ok(Self {
                inner: Arc::new(RwLock::new(LruCache::new(capacity)?)),
            })
        }

        /// Inserts a value, wrapping it in `Arc<V>` internally.
        ///
        /// Returns the previous `Arc<V>` if the key existed.
        pub fn insert(&self, key: K, value: V) -> Option<Arc<V>> {
            let value = Arc::new(value);
            self.inner.write().insert(key, value)
        }

        /// Inserts a pre-wrapped `Arc<V>` without re-wrapping.
        pub fn insert_arc(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
            self.inner.write().insert(key, value)
        }

        /// Gets a value by key, marking it most recently used.
        ///
        /// Takes the write lock because the recency order changes.
        pub fn get(&self, key: &K) -> Option<Arc<V>> {
            self.inner.write().get(key).map(Arc::clone)
        }

        /// Reads a value without refreshing recency. Read lock only.
        pub fn peek(&self, key: &K) -> Option<Arc<V>> {
            self.inner.read().peek(key).map(Arc::clone)
        }

        /// Removes an entry and returns its value.
        pub fn remove(&self, key: &K) -> Option<Arc<V>> {
            self.inner.write().remove(key)
        }

        /// Marks an entry as recently used without retrieving its value.
        pub fn touch(&self, key: &K) -> bool {
            self.inner.write().touch(key)
        }

        /// Removes and returns the least recently used entry.
        pub fn pop_lru(&self) -> Option<(K, Arc<V>)> {
            self.inner.write().pop_lru()
        }

        /// Peeks at the eviction candidate without removing it.
        pub fn peek_lru(&self) -> Option<(K, Arc<V>)> {
            let cache = self.inner.read();
            cache.peek_lru().map(|(k, v)| (k.clone(), Arc::clone(v)))
        }

        /// Returns `true` if the key is cached. Does not affect recency.
        pub fn contains(&self, key: &K) -> bool {
            self.inner.read().contains(key)
        }

        /// Current number of entries.
        pub fn len(&self) -> usize {
            self.inner.read().len()
        }

        /// Returns `true` if the cache is empty.
        pub fn is_empty(&self) -> bool {
            self.inner.read().is_empty()
        }

        /// Maximum number of entries.
        pub fn capacity(&self) -> usize {
            self.inner.read().capacity()
        }

        /// Removes all entries.
        pub fn clear(&self) {
            self.inner.write().clear()
        }
    }

    #[cfg(feature = "metrics")]
    impl<K, V> ConcurrentLruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        /// Copies the operation counters out alongside current occupancy.
        pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
            self.inner.read().metrics_snapshot()
        }
    }

    impl<K, V> fmt::Debug for ConcurrentLruCache<K, V>
    where
        K: Eq + Hash + Clone + fmt::Debug,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let cache = self.inner.read();
            f.debug_struct("ConcurrentLruCache")
                .field("len", &cache.len())
                .field("capacity", &cache.capacity())
                .finish_non_exhaustive()
        }
    }
}

#[cfg(feature = "concurrency")]
pub use concurrent::ConcurrentLruCache;
