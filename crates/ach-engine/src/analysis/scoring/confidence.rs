use serde::{Deserialize, Serialize};

use super::super::domain::HypothesisId;
use super::super::error::ScoringError;
use super::aggregate::settle_weighted;
use super::config::{ConfidenceSchedule, ConfidenceThresholds};
use super::ranking::Ranking;

/// Confidence in the overall ranking, not in any single hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// Classification result with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceAssessment {
    pub level: ConfidenceLevel,
    pub gap: f64,
    pub leader: HypothesisId,
    pub runner_up: HypothesisId,
    pub thresholds: ConfidenceThresholds,
}

impl ConfidenceAssessment {
    pub fn summary(&self) -> String {
        format!(
            "{} confidence: '{}' leads '{}' by {:.2}",
            self.level.label(),
            self.leader,
            self.runner_up,
            self.gap
        )
    }
}

/// Compare the top two weighted totals against the schedule for the ranking's scale.
pub fn classify_confidence(
    ranking: &Ranking,
    schedule: &ConfidenceSchedule,
) -> Result<ConfidenceAssessment, ScoringError> {
    let [leader, runner_up, ..] = ranking.hypotheses() else {
        return Err(ScoringError::InsufficientHypotheses {
            found: ranking.len(),
        });
    };

    let gap = settle_weighted(leader.weighted_total - runner_up.weighted_total);
    let thresholds = schedule.for_scale(ranking.scale_type());

    Ok(ConfidenceAssessment {
        level: thresholds.classify(gap),
        gap,
        leader: leader.hypothesis_id.clone(),
        runner_up: runner_up.hypothesis_id.clone(),
        thresholds,
    })
}
