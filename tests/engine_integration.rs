//! Integration tests for the similarity engine and its cache contract.

use std::sync::Arc;

use kindred::cache::ScoreCacheHandle;
use kindred::embedding::{EncoderConfig, PromptEncoder};
use kindred::metric::SimilarityMetric;
use kindred::similarity::lexical::jaccard;
use kindred::similarity::vector::tfidf_cosine;
use kindred::similarity::{DegradeReason, SemanticScorer, SimilarityEngine};

fn engine_without_encoder() -> SimilarityEngine {
    SimilarityEngine::new(ScoreCacheHandle::new(), SemanticScorer::absent())
}

fn engine_with_stub_encoder() -> SimilarityEngine {
    let encoder = PromptEncoder::load(EncoderConfig::stub()).expect("stub encoder loads");
    SimilarityEngine::new(
        ScoreCacheHandle::new(),
        SemanticScorer::new(Some(Arc::new(encoder))),
    )
}

/// Deterministic printable-ASCII text generator for property sweeps.
struct TextGen {
    state: u64,
}

impl TextGen {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_text(&mut self, max_len: usize) -> String {
        let mut text = String::new();
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        let len = (self.state >> 48) as usize % (max_len + 1);

        for _ in 0..len {
            self.state = self
                .state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1);
            let byte = 0x20 + ((self.state >> 33) % 0x5F) as u8;
            text.push(byte as char);
        }
        text
    }
}

#[test]
fn identity_scores_one_for_nonempty_texts() {
    let texts = [
        "hello",
        "This is a test sentence.",
        "many words repeated words many times",
    ];

    for text in texts {
        assert_eq!(jaccard(text, text), 1.0, "jaccard identity for {text:?}");
        assert_eq!(
            tfidf_cosine(text, text).score(),
            1.0,
            "tfidf identity for {text:?}"
        );
    }
}

#[test]
fn disjoint_token_sets_score_zero() {
    assert_eq!(jaccard("alpha beta", "gamma delta"), 0.0);
    assert_eq!(tfidf_cosine("alpha beta", "gamma delta").score(), 0.0);
}

#[test]
fn jaccard_partial_overlap_is_one_fifth() {
    assert!((jaccard("cat dog bird", "cat fish horse") - 0.2).abs() < f32::EPSILON);
}

#[test]
fn degenerate_inputs_score_zero() {
    assert_eq!(jaccard("", ""), 0.0);
    assert_eq!(jaccard("   ", "   "), 0.0);
    assert_eq!(tfidf_cosine("", "").score(), 0.0);
}

#[test]
fn cache_round_trip_is_order_independent() {
    let cache = ScoreCacheHandle::new();
    cache.insert(SimilarityMetric::Lexical, "first", "second", 0.42);

    assert_eq!(
        cache.get(SimilarityMetric::Lexical, "first", "second"),
        Some(0.42)
    );
    assert_eq!(
        cache.get(SimilarityMetric::Lexical, "second", "first"),
        Some(0.42)
    );
}

#[test]
fn semantic_fallback_equals_vector_space() {
    let engine = engine_without_encoder();

    let pairs = [
        ("the quick brown fox", "a quick red fox"),
        ("completely different", "utterly distinct phrasing"),
        ("same text", "same text"),
    ];

    for (a, b) in pairs {
        let semantic = engine.calculate(a, b, SimilarityMetric::EmbeddingSpace);
        assert_eq!(
            semantic.outcome.reason(),
            Some(DegradeReason::ModelUnavailable)
        );
        assert_eq!(semantic.score(), tfidf_cosine(a, b).score());
    }
}

#[test]
fn all_strategies_bounded_on_random_printable_ascii() {
    let engine = engine_with_stub_encoder();
    let mut generator = TextGen::new(0x9E3779B97F4A7C15);

    for round in 0..100 {
        let text1 = generator.next_text(96);
        let text2 = generator.next_text(96);

        for metric in SimilarityMetric::ALL {
            let score = engine.calculate(&text1, &text2, metric).score();
            assert!(
                (0.0..=1.0).contains(&score),
                "round {round}: metric {metric} out of range for {text1:?} / {text2:?}: {score}"
            );
            assert!(score.is_finite());
        }
    }
}

#[test]
fn symmetry_holds_across_strategies() {
    let engine = engine_with_stub_encoder();
    let mut generator = TextGen::new(0xD1B54A32D192ED03);

    for _ in 0..25 {
        let text1 = generator.next_text(48);
        let text2 = generator.next_text(48);

        for metric in SimilarityMetric::ALL {
            // Fresh engines per direction so the cache cannot mask asymmetry.
            let forward = engine_with_stub_encoder()
                .calculate(&text1, &text2, metric)
                .score();
            let backward = engine_with_stub_encoder()
                .calculate(&text2, &text1, metric)
                .score();
            assert_eq!(forward, backward, "metric {metric} asymmetric");
        }
    }

    // The shared engine still sees every pair through its cache.
    let warm = engine.calculate("alpha", "beta", SimilarityMetric::Lexical);
    assert!(!warm.cache_hit);
}

#[test]
fn cached_score_survives_many_lookups() {
    let engine = engine_without_encoder();

    let first = engine.calculate(
        "repeated lookup text",
        "other repeated text",
        SimilarityMetric::VectorSpace,
    );

    for _ in 0..10 {
        let repeat = engine.calculate(
            "other repeated text",
            "repeated lookup text",
            SimilarityMetric::VectorSpace,
        );
        assert!(repeat.cache_hit);
        assert_eq!(repeat.score(), first.score());
    }
}
