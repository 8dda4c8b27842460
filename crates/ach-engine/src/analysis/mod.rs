//! Analysis of Competing Hypotheses scoring.
//!
//! Everything here is a pure computation over an immutable snapshot: hypotheses, evidence,
//! and a sparse score matrix go in, rankings and summary statistics come out. Loading and
//! saving analyses belongs to the caller.

pub mod domain;
pub mod error;
pub mod import;
pub mod matrix;
pub mod report;
pub mod router;
pub mod scale;
pub mod scoring;
pub mod weighting;

#[cfg(test)]
mod tests;

pub use domain::{
    AnalysisSnapshot, CredibilityRating, EvidenceId, EvidenceItem, Hypothesis, HypothesisId,
    LegacyAssessment, QualityInputs, ScaleType, Score, SourceClassification,
};
pub use error::ScoringError;
pub use import::{import_scores, import_scores_from_path, ImportError};
pub use matrix::ScoreMatrix;
pub use report::{AnalysisReport, EvaluationOptions, MatrixCoverage};
pub use router::{
    ach_router, ConvertScoresRequest, ConvertScoresResponse, ScaleTableResponse,
    ScoreAnalysisRequest, ScoreAnalysisResponse,
};
pub use scale::{
    convert_scale, get_score_option, is_valid_score, legacy_score_value, max_magnitude,
    score_options, snap_to_scale, ScoreOption,
};
pub use scoring::{
    classify_confidence, most_diagnostic_evidence, rank_diagnostic_evidence, rank_hypotheses,
    ConfidenceAssessment, ConfidenceLevel, ConfidenceSchedule, ConfidenceThresholds,
    EvidenceDiagnosticity, RankedHypothesis, Ranking, ScoringConfig, ScoringEngine,
};
pub use weighting::{
    calculate_evidence_weight, uniform_weight, weight_breakdown, EvidenceWeighting,
    WeightBreakdown, WeightComponent, MAX_EVIDENCE_WEIGHT, MIN_EVIDENCE_WEIGHT,
};
