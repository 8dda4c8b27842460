mod aggregate;
mod confidence;
mod config;
mod diagnostic;
mod ranking;

pub use confidence::{classify_confidence, ConfidenceAssessment, ConfidenceLevel};
pub use config::{
    ConfidenceSchedule, ConfidenceThresholds, ScoringConfig, DEFAULT_DIAGNOSTIC_LIMIT,
};
pub use diagnostic::{
    distinct_value_count, most_diagnostic_evidence, rank_diagnostic_evidence,
    EvidenceDiagnosticity,
};
pub use ranking::{rank_hypotheses, RankedHypothesis, Ranking};

use super::domain::{AnalysisSnapshot, EvidenceItem, Hypothesis, ScaleType};
use super::error::ScoringError;
use super::matrix::ScoreMatrix;
use super::report::{AnalysisReport, EvaluationOptions, MatrixCoverage};

/// Stateless engine applying the configured confidence schedule to analysis snapshots.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn rank_hypotheses<W>(
        &self,
        hypotheses: &[Hypothesis],
        evidence: &[EvidenceItem],
        matrix: &ScoreMatrix,
        scale: ScaleType,
        weight_fn: W,
    ) -> Result<Ranking, ScoringError>
    where
        W: Fn(&EvidenceItem) -> f64,
    {
        rank_hypotheses(hypotheses, evidence, matrix, scale, weight_fn)
    }

    pub fn classify_confidence(
        &self,
        ranking: &Ranking,
    ) -> Result<ConfidenceAssessment, ScoringError> {
        classify_confidence(ranking, &self.config.confidence)
    }

    /// Rank, classify, and summarize one snapshot.
    pub fn evaluate(
        &self,
        snapshot: &AnalysisSnapshot,
        options: EvaluationOptions,
    ) -> Result<AnalysisReport, ScoringError> {
        let matrix = ScoreMatrix::new(snapshot.scores.clone())?;
        let weighting = options.weighting;

        let ranking = self.rank_hypotheses(
            &snapshot.hypotheses,
            &snapshot.evidence,
            &matrix,
            snapshot.scale_type,
            |item| weighting.weight(item),
        )?;
        let confidence = self.classify_confidence(&ranking)?;

        let limit = options
            .diagnostic_limit
            .unwrap_or(self.config.diagnostic_limit);
        let diagnostic_evidence = rank_diagnostic_evidence(&snapshot.evidence, &matrix, limit);

        let scored_cells = ranking
            .hypotheses()
            .iter()
            .map(RankedHypothesis::scored_count)
            .sum();
        let coverage = MatrixCoverage::new(
            scored_cells,
            snapshot.hypotheses.len() * snapshot.evidence.len(),
        );

        Ok(AnalysisReport {
            scale_type: snapshot.scale_type,
            weighting,
            leading_hypothesis: confidence.leader.clone(),
            confidence,
            ranking: ranking.into_hypotheses(),
            diagnostic_evidence,
            coverage,
        })
    }
}
