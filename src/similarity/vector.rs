//! Vector-space similarity: TF-IDF cosine over the two-document corpus.

use std::collections::{BTreeMap, HashMap};

use super::tokens;
use super::types::{DegradeReason, ScoreOutcome};

/// Cosine similarity between the TF-IDF vectors of two texts.
///
/// The vector space is built over just the two input documents: raw term
/// frequencies weighted by smoothed idf (`ln((1 + n) / (1 + df)) + 1` with
/// `n = 2`), then L2-normalized. Identical token sequences short-circuit to
/// exactly 1.0 so the identity contract does not depend on float
/// round-trips. Both texts tokenizing to nothing degrades to 0.0.
pub fn tfidf_cosine(text1: &str, text2: &str) -> ScoreOutcome {
    let tokens1: Vec<String> = tokens(text1).collect();
    let tokens2: Vec<String> = tokens(text2).collect();

    if tokens1.is_empty() && tokens2.is_empty() {
        return ScoreOutcome::Degraded {
            score: 0.0,
            reason: DegradeReason::EmptyVocabulary,
        };
    }

    if tokens1 == tokens2 {
        return ScoreOutcome::Scored(1.0);
    }

    let counts1 = term_counts(&tokens1);
    let counts2 = term_counts(&tokens2);

    // Deterministic vocabulary order keeps the two vectors aligned.
    let mut vocabulary: BTreeMap<&str, ()> = BTreeMap::new();
    for term in counts1.keys().chain(counts2.keys()) {
        vocabulary.insert(term, ());
    }

    let mut vector1 = Vec::with_capacity(vocabulary.len());
    let mut vector2 = Vec::with_capacity(vocabulary.len());

    for term in vocabulary.keys() {
        let tf1 = counts1.get(*term).copied().unwrap_or(0) as f32;
        let tf2 = counts2.get(*term).copied().unwrap_or(0) as f32;

        let df = (tf1 > 0.0) as u32 + (tf2 > 0.0) as u32;
        let idf = ((1.0 + 2.0) / (1.0 + df as f32)).ln() + 1.0;

        vector1.push(tf1 * idf);
        vector2.push(tf2 * idf);
    }

    let score = cosine_similarity(&vector1, &vector2).clamp(0.0, 1.0);
    ScoreOutcome::Scored(score)
}

fn term_counts(tokens: &[String]) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity between two dense vectors of equal length.
///
/// Returns 0.0 on a length mismatch or when either norm is zero.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
