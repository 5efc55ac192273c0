//! Input scrubbing for prompts and generated text.
//!
//! Patterns are compiled once at construction; the sanitizer is injected
//! into the gateway state and shared across requests.

use regex::Regex;
use thiserror::Error;

/// Replacement marker for censored vocabulary.
pub const CENSORED_MARKER: &str = "****";
/// Replacement marker for disallowed phrases.
pub const FORBIDDEN_MARKER: &str = "[*FORBIDDEN*]";
/// Replacement marker for harmful markup.
pub const HARMFUL_MARKER: &str = "[*HARMFUL*]";
/// Replacement marker for sensitive data.
pub const SENSITIVE_MARKER: &str = "[*SENSITIVE*]";

// Seed lists; extend per deployment requirements.
const CENSOR_WORDS: &[&str] = &["damn", "hell", "crap"];

const DISALLOWED_PHRASES: &[&str] = &[
    "hack into systems",
    "how to make bombs",
    "illegal activities",
];

const HARMFUL_PATTERNS: &[&str] = &[
    r"(?is)<script\b.*?</script>",
    r"(?i)javascript:",
    r"(?is)<iframe\b.*?</iframe>",
];

const SENSITIVE_PATTERNS: &[&str] = &[
    // SSN format (France)
    r"\b\d\s\d{2}\s\d{2}\s\d{2}\s\d{3}\s\d{3}\s\d{2}\b",
    // Email address
    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
];

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("failed to compile sanitizer pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Scrubs profanity, disallowed phrases, harmful markup and sensitive data
/// from text.
pub struct TextSanitizer {
    censor: Regex,
    harmful: Vec<Regex>,
    sensitive: Vec<Regex>,
}

impl std::fmt::Debug for TextSanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextSanitizer")
            .field("harmful_patterns", &self.harmful.len())
            .field("sensitive_patterns", &self.sensitive.len())
            .finish()
    }
}

impl TextSanitizer {
    /// Compiles the pattern sets.
    pub fn new() -> Result<Self, SanitizeError> {
        let censor = Regex::new(&format!(r"(?i)\b(?:{})\b", CENSOR_WORDS.join("|")))?;

        let harmful = HARMFUL_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let sensitive = SENSITIVE_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            censor,
            harmful,
            sensitive,
        })
    }

    /// Returns the text with all flagged content replaced by markers, then
    /// trimmed.
    pub fn sanitize(&self, text: &str) -> String {
        let mut text = self.censor.replace_all(text, CENSORED_MARKER).into_owned();

        for phrase in DISALLOWED_PHRASES {
            text = text.replace(phrase, FORBIDDEN_MARKER);
        }

        for pattern in &self.harmful {
            text = pattern.replace_all(&text, HARMFUL_MARKER).into_owned();
        }

        for pattern in &self.sensitive {
            text = pattern.replace_all(&text, SENSITIVE_MARKER).into_owned();
        }

        text.trim().to_string()
    }

    /// Returns `true` if sanitization would leave the trimmed text
    /// unchanged.
    pub fn is_clean(&self, text: &str) -> bool {
        self.sanitize(text) == text.trim()
    }
}
