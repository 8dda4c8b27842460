use serde::Serialize;

use super::domain::{HypothesisId, ScaleType};
use super::scoring::{ConfidenceAssessment, EvidenceDiagnosticity, RankedHypothesis};
use super::weighting::EvidenceWeighting;

/// Per-call knobs for `ScoringEngine::evaluate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationOptions {
    pub weighting: EvidenceWeighting,
    /// Falls back to the engine's configured limit when unset.
    pub diagnostic_limit: Option<usize>,
}

/// Share of the hypothesis x evidence matrix that has been evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixCoverage {
    pub scored_cells: usize,
    pub total_cells: usize,
    pub ratio: f64,
}

impl MatrixCoverage {
    pub fn new(scored_cells: usize, total_cells: usize) -> Self {
        let ratio = if total_cells == 0 {
            0.0
        } else {
            scored_cells as f64 / total_cells as f64
        };

        Self {
            scored_cells,
            total_cells,
            ratio,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.total_cells > 0 && self.scored_cells == self.total_cells
    }
}

/// Ranked results and summary statistics for one analysis snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub scale_type: ScaleType,
    pub weighting: EvidenceWeighting,
    pub leading_hypothesis: HypothesisId,
    pub confidence: ConfidenceAssessment,
    pub ranking: Vec<RankedHypothesis>,
    pub diagnostic_evidence: Vec<EvidenceDiagnosticity>,
    pub coverage: MatrixCoverage,
}

impl AnalysisReport {
    pub fn summary(&self) -> String {
        let mut summary = self.confidence.summary();
        if !self.coverage.is_complete() {
            summary.push_str(&format!(
                " ({} of {} cells scored)",
                self.coverage.scored_cells, self.coverage.total_cells
            ));
        }
        summary
    }
}
