//! Score cache keyed by (metric, unordered text pair).
//!
//! Keys are BLAKE3 digests built by [`crate::hashing::pair_key`], which
//! orders the two texts lexicographically before hashing. A score stored for
//! `(a, b)` is therefore found for `(b, a)` under the same metric.

use moka::sync::Cache;
use std::sync::Arc;

use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::hashing::pair_key;
use crate::metric::SimilarityMetric;

/// Bounded in-memory cache of computed similarity scores.
///
/// Lookups never fail; absence means "not yet computed". Inserts overwrite
/// silently, which is sound because every strategy is deterministic for a
/// given input pair.
pub struct ScoreCache {
    entries: Cache<[u8; 32], f32>,
}

impl ScoreCache {
    /// Creates a cache with the default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache with a max entry capacity (LRU eviction).
    #[inline]
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Returns the cached score for the pair, if one has been computed.
    #[inline]
    pub fn get(&self, metric: SimilarityMetric, text1: &str, text2: &str) -> Option<f32> {
        self.entries.get(&pair_key(metric.as_str(), text1, text2))
    }

    /// Stores a score for the pair, overwriting any previous value.
    #[inline]
    pub fn insert(&self, metric: SimilarityMetric, text1: &str, text2: &str, score: f32) {
        self.entries
            .insert(pair_key(metric.as_str(), text1, text2), score);
    }

    /// Returns `true` if a score is cached for the pair.
    #[inline]
    pub fn contains(&self, metric: SimilarityMetric, text1: &str, text2: &str) -> bool {
        self.entries
            .contains_key(&pair_key(metric.as_str(), text1, text2))
    }

    /// Returns the number of cached entries.
    #[inline]
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Returns `true` if the cache is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    /// Clears all entries.
    #[inline]
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Runs any pending maintenance tasks in the underlying cache.
    #[inline]
    pub fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks();
    }
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScoreCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}

#[derive(Clone)]
/// Shared handle to a [`ScoreCache`].
pub struct ScoreCacheHandle {
    inner: Arc<ScoreCache>,
}

impl ScoreCacheHandle {
    /// Creates a new handle with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ScoreCache::new()),
        }
    }

    /// Creates a new handle with a specific capacity.
    #[inline]
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            inner: Arc::new(ScoreCache::with_capacity(capacity)),
        }
    }

    /// Returns the cached score for the pair, if one has been computed.
    #[inline]
    pub fn get(&self, metric: SimilarityMetric, text1: &str, text2: &str) -> Option<f32> {
        self.inner.get(metric, text1, text2)
    }

    /// Stores a score for the pair.
    #[inline]
    pub fn insert(&self, metric: SimilarityMetric, text1: &str, text2: &str, score: f32) {
        self.inner.insert(metric, text1, text2, score)
    }

    /// Returns `true` if a score is cached for the pair.
    #[inline]
    pub fn contains(&self, metric: SimilarityMetric, text1: &str, text2: &str) -> bool {
        self.inner.contains(metric, text1, text2)
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> u64 {
        self.inner.len()
    }

    /// Returns `true` if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Clears all entries.
    #[inline]
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Runs any pending maintenance tasks.
    #[inline]
    pub fn run_pending_tasks(&self) {
        self.inner.run_pending_tasks();
    }

    /// Returns the number of strong references to the underlying cache.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl Default for ScoreCacheHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScoreCacheHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreCacheHandle")
            .field("strong_count", &self.strong_count())
            .finish()
    }
}
