//! Operation counters for the LRU cache, enabled by the `metrics` feature.
//!
//! Counters are plain `u64` fields updated on `&mut self` paths and
//! [`MetricsCell`] (a relaxed `AtomicU64`) on `&self` paths such as `peek`.
//! The atomic keeps the cache `Sync`, so shared read paths can record under a
//! read lock. Nothing here takes a lock or emits output; callers pull a
//! point-in-time [`LruMetricsSnapshot`] and decide what to do with it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Interior-mutable counter for read-only recording paths.
///
/// Increments are relaxed: counters are independent and only ever read as a
/// snapshot, so no ordering with other memory is needed.
#[derive(Debug, Default)]
pub struct MetricsCell(AtomicU64);

impl MetricsCell {
    #[inline]
    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Per-cache operation counters.
#[derive(Debug, Default)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

/// Point-in-time copy of [`LruMetrics`] plus current occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evicted_entries: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
    pub pop_lru_calls: u64,
    pub pop_lru_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub peek_calls: u64,
    pub peek_found: u64,
    pub cache_len: usize,
    pub capacity: usize,
}

impl LruMetricsSnapshot {
    /// Hit ratio over all `get` calls, or `None` before the first `get`.
    pub fn hit_ratio(&self) -> Option<f64> {
        if self.get_calls == 0 {
            None
        } else {
            Some(self.get_hits as f64 / self.get_calls as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_cell_increments() {
        let cell = MetricsCell::default();
        assert_eq!(cell.get(), 0);
        cell.increment();
        cell.increment();
        assert_eq!(cell.get(), 2);
    }

    #[test]
    fn metrics_cell_is_shareable_across_threads() {
        let cell = MetricsCell::default();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..1_000 {
                        cell.increment();
                    }
                });
            }
        });
        // fetch_add never loses an increment, even relaxed.
        assert_eq!(cell.get(), 4_000);
    }

    #[test]
    fn hit_ratio_is_none_without_gets() {
        let snapshot = LruMetricsSnapshot {
            get_calls: 0,
            get_hits: 0,
            get_misses: 0,
            insert_calls: 0,
            insert_updates: 0,
            insert_new: 0,
            evicted_entries: 0,
            remove_calls: 0,
            remove_found: 0,
            pop_lru_calls: 0,
            pop_lru_found: 0,
            touch_calls: 0,
            touch_found: 0,
            peek_calls: 0,
            peek_found: 0,
            cache_len: 0,
            capacity: 8,
        };
        assert_eq!(snapshot.hit_ratio(), None);

        let snapshot = LruMetricsSnapshot {
            get_calls: 4,
            get_hits: 3,
            ..snapshot
        };
        assert_eq!(snapshot.hit_ratio(), Some(0.75));
    }
}
