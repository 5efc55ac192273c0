use blake3::Hasher;

/// Computes the 32-byte BLAKE3 digest of a single text.
#[inline]
pub fn hash_text(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}

/// Computes the cache key for a metric and an unordered pair of texts.
///
/// The two texts are ordered lexicographically before hashing, so
/// `pair_key(m, a, b) == pair_key(m, b, a)`. Ordering compares the literal
/// strings rather than their hashes: two distinct unordered pairs can only
/// share a key if BLAKE3 itself collides. The first text is length-prefixed
/// so that pair boundaries stay unambiguous for arbitrary input.
#[inline]
pub fn pair_key(metric: &str, text1: &str, text2: &str) -> [u8; 32] {
    let (first, second) = if text1 <= text2 {
        (text1, text2)
    } else {
        (text2, text1)
    };

    let mut hasher = Hasher::new();
    hasher.update(metric.as_bytes());
    hasher.update(b"|");
    hasher.update(&(first.len() as u64).to_le_bytes());
    hasher.update(first.as_bytes());
    hasher.update(second.as_bytes());
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hash_text_determinism() {
        let text = "What is the capital of France?";

        let hash1 = hash_text(text);
        let hash2 = hash_text(text);

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 32);
    }

    #[test]
    fn test_hash_text_uniqueness() {
        let texts = [
            "What is the capital of France?",
            "What is the capital of Germany?",
            "what is the capital of france?",
            "What is the capital of France? ",
        ];

        let hashes: Vec<_> = texts.iter().map(|t| hash_text(t)).collect();
        let unique_hashes: HashSet<_> = hashes.iter().collect();

        assert_eq!(unique_hashes.len(), texts.len());
    }

    #[test]
    fn test_pair_key_order_independence() {
        let key_ab = pair_key("lexical", "alpha", "beta");
        let key_ba = pair_key("lexical", "beta", "alpha");

        assert_eq!(key_ab, key_ba);
    }

    #[test]
    fn test_pair_key_metric_sensitivity() {
        let lexical = pair_key("lexical", "alpha", "beta");
        let vector = pair_key("vector-space", "alpha", "beta");
        let semantic = pair_key("embedding-space", "alpha", "beta");

        assert_ne!(lexical, vector);
        assert_ne!(vector, semantic);
        assert_ne!(lexical, semantic);
    }

    #[test]
    fn test_pair_key_text_sensitivity() {
        let base = pair_key("lexical", "alpha", "beta");

        assert_ne!(base, pair_key("lexical", "alpha", "gamma"));
        assert_ne!(base, pair_key("lexical", "Alpha", "beta"));
    }

    #[test]
    fn test_pair_key_boundary_unambiguous() {
        // Without the length prefix ("ab", "cd") and ("abc", "d") would
        // hash the same byte stream.
        let key1 = pair_key("lexical", "ab", "cd");
        let key2 = pair_key("lexical", "abc", "d");
        let key3 = pair_key("lexical", "a", "bcd");

        assert_ne!(key1, key2);
        assert_ne!(key1, key3);
        assert_ne!(key2, key3);
    }

    #[test]
    fn test_pair_key_identical_texts() {
        let key = pair_key("lexical", "same", "same");
        let again = pair_key("lexical", "same", "same");

        assert_eq!(key, again);
    }

    #[test]
    fn test_pair_key_empty_texts() {
        let key = pair_key("lexical", "", "");
        assert_eq!(key, pair_key("lexical", "", ""));
        assert_ne!(key, pair_key("vector-space", "", ""));
    }
}
