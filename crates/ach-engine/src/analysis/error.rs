use super::domain::{EvidenceId, HypothesisId, ScaleType};

/// Validation errors raised synchronously by the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("score value {value} is not a point on the {scale} scale")]
    InvalidScoreValue { scale: ScaleType, value: i32 },
    #[error("at least two hypotheses are required for comparison (found {found})")]
    InsufficientHypotheses { found: usize },
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    #[error("hypothesis '{hypothesis_id}' already has a score for evidence '{evidence_id}'")]
    DuplicateScore {
        hypothesis_id: HypothesisId,
        evidence_id: EvidenceId,
    },
    #[error("duplicate {kind} identifier '{id}'")]
    DuplicateIdentifier { kind: &'static str, id: String },
    #[error("weight {weight} for evidence '{evidence_id}' must be finite and non-negative")]
    InvalidEvidenceWeight { evidence_id: EvidenceId, weight: f64 },
    #[error("credibility rating {0} is outside 1..=6")]
    InvalidCredibilityRating(u8),
    #[error("unknown scale type '{0}'")]
    UnknownScale(String),
    #[error("unknown categorical assessment '{0}'")]
    UnknownAssessment(String),
}
