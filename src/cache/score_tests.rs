use super::score::{ScoreCache, ScoreCacheHandle};
use crate::metric::SimilarityMetric;

#[test]
fn test_score_cache_new() {
    let cache = ScoreCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_score_cache_miss_is_none() {
    let cache = ScoreCache::new();
    assert!(
        cache
            .get(SimilarityMetric::Lexical, "left", "right")
            .is_none()
    );
}

#[test]
fn test_score_cache_round_trip() {
    let cache = ScoreCache::new();
    cache.insert(SimilarityMetric::Lexical, "left", "right", 0.25);

    assert_eq!(
        cache.get(SimilarityMetric::Lexical, "left", "right"),
        Some(0.25)
    );
}

#[test]
fn test_score_cache_order_independent() {
    let cache = ScoreCache::new();
    cache.insert(SimilarityMetric::VectorSpace, "alpha", "beta", 0.5);

    assert_eq!(
        cache.get(SimilarityMetric::VectorSpace, "alpha", "beta"),
        Some(0.5)
    );
    assert_eq!(
        cache.get(SimilarityMetric::VectorSpace, "beta", "alpha"),
        Some(0.5)
    );
}

#[test]
fn test_score_cache_metric_separation() {
    let cache = ScoreCache::new();
    cache.insert(SimilarityMetric::Lexical, "alpha", "beta", 0.1);
    cache.insert(SimilarityMetric::VectorSpace, "alpha", "beta", 0.9);

    assert_eq!(
        cache.get(SimilarityMetric::Lexical, "alpha", "beta"),
        Some(0.1)
    );
    assert_eq!(
        cache.get(SimilarityMetric::VectorSpace, "alpha", "beta"),
        Some(0.9)
    );
    assert!(
        cache
            .get(SimilarityMetric::EmbeddingSpace, "alpha", "beta")
            .is_none()
    );
}

#[test]
fn test_score_cache_insert_overwrites() {
    let cache = ScoreCache::new();
    cache.insert(SimilarityMetric::Lexical, "alpha", "beta", 0.3);
    cache.insert(SimilarityMetric::Lexical, "beta", "alpha", 0.7);

    cache.run_pending_tasks();
    assert_eq!(cache.len(), 1);
    assert_eq!(
        cache.get(SimilarityMetric::Lexical, "alpha", "beta"),
        Some(0.7)
    );
}

#[test]
fn test_score_cache_contains_and_clear() {
    let cache = ScoreCache::new();
    cache.insert(SimilarityMetric::Lexical, "alpha", "beta", 0.3);

    assert!(cache.contains(SimilarityMetric::Lexical, "beta", "alpha"));

    cache.clear();
    cache.run_pending_tasks();
    assert!(cache.is_empty());
    assert!(!cache.contains(SimilarityMetric::Lexical, "alpha", "beta"));
}

#[test]
fn test_score_cache_capacity_bound() {
    let cache = ScoreCache::with_capacity(4);
    for i in 0..64 {
        let text = format!("prompt {i}");
        cache.insert(SimilarityMetric::Lexical, &text, "other", 0.5);
    }

    cache.run_pending_tasks();
    assert!(cache.len() <= 4);
}

#[test]
fn test_handle_shares_underlying_cache() {
    let handle = ScoreCacheHandle::new();
    let clone = handle.clone();

    handle.insert(SimilarityMetric::EmbeddingSpace, "alpha", "beta", 0.8);

    assert_eq!(
        clone.get(SimilarityMetric::EmbeddingSpace, "beta", "alpha"),
        Some(0.8)
    );
    assert!(handle.strong_count() >= 2);
}

#[test]
fn test_handle_debug_does_not_panic() {
    let handle = ScoreCacheHandle::with_capacity(16);
    let _ = format!("{:?}", handle);
}
