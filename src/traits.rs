//! # Cache Trait Hierarchy
//!
//! Defines the capability contract the cache core exposes to collaborators,
//! split so each layer only grants the operations its semantics allow.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   │  clear(&mut)                            │
//!   └────────────────────┬────────────────────┘
//!                        │
//!                        ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K]) → Vec<Option<V>>    │
//!   └────────────────────┬────────────────────┘
//!                        │
//!                        ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │                                         │
//!   │  pop_lru() → Option<(K, V)>             │
//!   │  peek_lru() → Option<(&K, &V)>          │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → Option<usize>       │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! | Trait            | Extends        | Purpose                            |
//! |------------------|----------------|------------------------------------|
//! | `CoreCache`      | -              | Universal cache operations         |
//! | `MutableCache`   | `CoreCache`    | Arbitrary key removal              |
//! | `LruCacheTrait`  | `MutableCache` | Recency observation and eviction   |
//!
//! A miss is signalled by `None` on every lookup path, so callers can always
//! distinguish "not cached" from a cached zero/default value — no value is
//! ever fabricated.
//!
//! ## Thread Safety
//!
//! Implementations of these traits are sequential: operations take `&mut self`
//! where they mutate recency, and callers sharing a cache across threads must
//! serialize whole operations (see
//! [`ConcurrentLruCache`](crate::policy::lru::ConcurrentLruCache) for the
//! lock-wrapped variant).

/// Core cache operations that all caches support.
///
/// # Example
///
/// ```
/// use lrukit::prelude::*;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100).unwrap();
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the key is new and the cache is full, the least recently used entry
    /// is evicted first. Insertion always leaves the key at the
    /// most-recently-used position.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::prelude::*;
    ///
    /// let mut cache = LruCache::new(10).unwrap();
    /// assert_eq!(cache.insert(1, "first"), None);
    /// assert_eq!(cache.insert(1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key, marking the key as recently used.
    ///
    /// Returns `None` on a miss without mutating any state. Use
    /// [`contains`](Self::contains) to check existence without affecting
    /// eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::prelude::*;
    ///
    /// let mut cache = LruCache::new(10).unwrap();
    /// cache.insert(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&99), None);
    /// ```
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity of the cache.
    fn capacity(&self) -> usize;

    /// Removes all entries from the cache.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use lrukit::prelude::*;
///
/// fn invalidate<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LruCache::new(100).unwrap();
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
///
/// invalidate(&mut cache, &[1]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, `None` otherwise.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys, returning results in input order.
    ///
    /// The default implementation loops over [`remove`](Self::remove).
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// LRU-specific operations that observe and drive recency order.
///
/// Entries are ordered by recency of access: both `get` and `insert` count as
/// touches, so the eviction victim is always the key that has gone the longest
/// without either.
///
/// # Example
///
/// ```
/// use lrukit::prelude::*;
///
/// let mut cache = LruCache::new(3).unwrap();
/// cache.insert(1, "first");
/// cache.insert(2, "second");
/// cache.insert(3, "third");
///
/// // Access key 1 so key 2 becomes the eviction candidate.
/// cache.get(&1);
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
///
/// // Touch refreshes recency without returning the value.
/// assert!(cache.touch(&2));
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(3));
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    ///
    /// Returns `None` if the cache is empty.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the LRU entry without removing it or updating recency.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks an entry as recently used without retrieving the value.
    ///
    /// Returns `true` if the key was found and touched, `false` otherwise.
    fn touch(&mut self, key: &K) -> bool;

    /// Gets the recency rank of a key (0 = most recent).
    ///
    /// Walks the recency order, so this is O(n); intended for diagnostics and
    /// tests rather than hot paths. Returns `None` if the key is not found.
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
