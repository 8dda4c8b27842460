use axum::response::Response;
use serde_json::Value;

use crate::analysis::domain::{
    AnalysisSnapshot, CredibilityRating, EvidenceItem, Hypothesis, QualityInputs, ScaleType,
    Score, SourceClassification,
};
use crate::analysis::matrix::ScoreMatrix;
use crate::analysis::scoring::{ScoringConfig, ScoringEngine};

pub(super) fn hypotheses() -> Vec<Hypothesis> {
    vec![
        Hypothesis::new("H1", "State actor"),
        Hypothesis::new("H2", "Non-state actor"),
    ]
}

pub(super) fn evidence() -> Vec<EvidenceItem> {
    vec![
        EvidenceItem::new("E1", "Malware shares infrastructure with prior campaign"),
        EvidenceItem::new("E2", "Ransom demand posted on public forum"),
        EvidenceItem::new("E3", "Operators active during Moscow business hours"),
    ]
}

pub(super) fn example_scores() -> Vec<Score> {
    vec![
        Score::new("H1", "E1", 8),
        Score::new("H1", "E2", -3),
        Score::new("H1", "E3", 5),
        Score::new("H2", "E1", -2),
        Score::new("H2", "E2", 5),
        Score::new("H2", "E3", 0),
    ]
}

pub(super) fn example_matrix() -> ScoreMatrix {
    ScoreMatrix::new(example_scores()).expect("example scores are unique")
}

pub(super) fn example_snapshot() -> AnalysisSnapshot {
    AnalysisSnapshot {
        scale_type: ScaleType::Logarithmic,
        hypotheses: hypotheses(),
        evidence: evidence(),
        scores: example_scores(),
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default())
}

pub(super) fn quality(
    source: Option<SourceClassification>,
    credibility: Option<CredibilityRating>,
    corroborated: bool,
) -> QualityInputs {
    QualityInputs {
        credibility,
        source,
        corroborated,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
