//! Lexical-overlap similarity (Jaccard index over word sets).

use std::collections::HashSet;

use super::tokens;

/// Jaccard similarity between the lowercased word sets of two texts.
///
/// An empty union (both texts tokenize to no words) scores 0.0 by policy,
/// not as an error. The result is always in `[0, 1]`.
pub fn jaccard(text1: &str, text2: &str) -> f32 {
    let words1: HashSet<String> = tokens(text1).collect();
    let words2: HashSet<String> = tokens(text2).collect();

    let union = words1.union(&words2).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = words1.intersection(&words2).count();
    intersection as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        assert_eq!(jaccard("the quick brown fox", "the quick brown fox"), 1.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(jaccard("alpha beta gamma", "delta epsilon"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // 1 shared word, 5 in the union.
        let score = jaccard("cat dog bird", "cat fish horse");
        assert!((score - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("cat dog bird", "cat fish horse"),
            ("one", "one two three"),
            ("", "nonempty"),
        ];

        for (a, b) in pairs {
            assert_eq!(jaccard(a, b), jaccard(b, a));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(jaccard("Hello World", "hello world"), 1.0);
    }

    #[test]
    fn test_duplicate_words_collapse() {
        assert_eq!(jaccard("spam spam spam", "spam"), 1.0);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(jaccard("", ""), 0.0);
        assert_eq!(jaccard("   ", "   "), 0.0);
        assert_eq!(jaccard("\t\n", " "), 0.0);
    }

    #[test]
    fn test_one_empty_input() {
        assert_eq!(jaccard("", "something"), 0.0);
    }

    #[test]
    fn test_bounded() {
        let score = jaccard("a b c d e f", "d e f g h");
        assert!((0.0..=1.0).contains(&score));
    }
}
