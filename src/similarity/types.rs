/// Why a score came from a degraded path instead of the requested strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegradeReason {
    /// The embedding model never loaded; vector-space stood in.
    ModelUnavailable,
    /// Encoding failed at call time; vector-space stood in.
    EncodeFailed,
    /// Both texts tokenized to nothing; the score is 0.0 by policy.
    EmptyVocabulary,
}

impl DegradeReason {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            DegradeReason::ModelUnavailable => "model_unavailable",
            DegradeReason::EncodeFailed => "encode_failed",
            DegradeReason::EmptyVocabulary => "empty_vocabulary",
        }
    }

    /// Returns `true` if a simpler strategy produced the score.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            DegradeReason::ModelUnavailable | DegradeReason::EncodeFailed
        )
    }
}

impl std::fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a similarity computation.
///
/// Degradation is part of the signature rather than an exception: a strategy
/// that cannot run its preferred path reports the substitute score together
/// with the reason.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreOutcome {
    /// The requested strategy ran to completion.
    Scored(f32),
    /// A fallback or zero-default policy produced the score.
    Degraded { score: f32, reason: DegradeReason },
}

impl ScoreOutcome {
    /// The similarity score, regardless of how it was produced.
    #[inline]
    pub fn score(&self) -> f32 {
        match self {
            ScoreOutcome::Scored(score) => *score,
            ScoreOutcome::Degraded { score, .. } => *score,
        }
    }

    /// Returns `true` if a degraded path produced the score.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        matches!(self, ScoreOutcome::Degraded { .. })
    }

    /// The degradation reason, if any.
    #[inline]
    pub fn reason(&self) -> Option<DegradeReason> {
        match self {
            ScoreOutcome::Scored(_) => None,
            ScoreOutcome::Degraded { reason, .. } => Some(*reason),
        }
    }
}

/// Result of a dispatch through [`super::SimilarityEngine`], including
/// whether the score came from the cache.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub outcome: ScoreOutcome,
    pub cache_hit: bool,
}

impl Calculation {
    /// The similarity score.
    #[inline]
    pub fn score(&self) -> f32 {
        self.outcome.score()
    }
}
