use serde::{Deserialize, Serialize};

use super::super::domain::ScaleType;
use super::aggregate::settle_weighted;
use super::confidence::ConfidenceLevel;

pub const DEFAULT_DIAGNOSTIC_LIMIT: usize = 3;

/// Exclusive lower bounds on the leader's weighted-total gap for each confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    pub high: f64,
    pub medium: f64,
}

impl ConfidenceThresholds {
    pub const fn new(high: f64, medium: f64) -> Self {
        Self { high, medium }
    }

    /// `gap > high` is High, `gap > medium` is Medium, anything else Low. A gap within float
    /// noise of a threshold counts as equal to it.
    pub fn classify(&self, gap: f64) -> ConfidenceLevel {
        let gap = settle_weighted(gap);
        if gap > self.high {
            ConfidenceLevel::High
        } else if gap > self.medium {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.medium.is_finite()
            && self.high.is_finite()
            && self.medium >= 0.0
            && self.high >= self.medium
    }
}

/// Threshold schedule keyed by scale type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSchedule {
    pub logarithmic: ConfidenceThresholds,
    pub linear: ConfidenceThresholds,
}

impl ConfidenceSchedule {
    pub fn for_scale(&self, scale: ScaleType) -> ConfidenceThresholds {
        match scale {
            ScaleType::Logarithmic => self.logarithmic,
            ScaleType::Linear => self.linear,
        }
    }
}

impl Default for ConfidenceSchedule {
    fn default() -> Self {
        Self {
            logarithmic: ConfidenceThresholds::new(5.0, 2.0),
            linear: ConfidenceThresholds::new(2.0, 1.0),
        }
    }
}

/// Engine settings loaded from the environment by `AppConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub confidence: ConfidenceSchedule,
    pub diagnostic_limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence: ConfidenceSchedule::default(),
            diagnostic_limit: DEFAULT_DIAGNOSTIC_LIMIT,
        }
    }
}
