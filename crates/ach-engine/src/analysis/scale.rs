//! Scale tables, lookups, and proportional conversion between scales.
//!
//! The logarithmic scale follows a Fibonacci-like progression: small differences near zero
//! are cheap to express while extreme values need disproportionately stronger evidence.
//! Converting between the two scales rescales by maximum magnitude and snaps to the nearest
//! point of the destination table. Repeated conversions between the two tables can drift
//! (`2 -> 1 -> 3` on the logarithmic side, `4 -> 8 -> 3` on the linear side); scale changes
//! are rare analyst actions, so the drift is accepted as long as it is deterministic.

use serde::Serialize;

use super::domain::{LegacyAssessment, ScaleType};
use super::error::ScoringError;

/// A selectable point on a scoring scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreOption {
    pub value: i32,
    pub label: &'static str,
    pub description: &'static str,
}

const fn option(value: i32, label: &'static str, description: &'static str) -> ScoreOption {
    ScoreOption {
        value,
        label,
        description,
    }
}

const LOGARITHMIC_OPTIONS: [ScoreOption; 13] = [
    option(
        -13,
        "Extremely inconsistent",
        "Evidence all but rules the hypothesis out",
    ),
    option(
        -8,
        "Highly inconsistent",
        "Evidence is very hard to reconcile with the hypothesis",
    ),
    option(-5, "Inconsistent", "Evidence clearly argues against the hypothesis"),
    option(
        -3,
        "Moderately inconsistent",
        "Evidence leans against the hypothesis",
    ),
    option(-2, "Slightly inconsistent", "Evidence weakly argues against the hypothesis"),
    option(-1, "Marginally inconsistent", "Evidence barely argues against the hypothesis"),
    option(0, "Neutral", "Evidence neither supports nor undermines the hypothesis"),
    option(1, "Marginally consistent", "Evidence barely supports the hypothesis"),
    option(2, "Slightly consistent", "Evidence weakly supports the hypothesis"),
    option(3, "Moderately consistent", "Evidence leans toward the hypothesis"),
    option(5, "Consistent", "Evidence clearly supports the hypothesis"),
    option(8, "Highly consistent", "Evidence is hard to explain unless the hypothesis holds"),
    option(
        13,
        "Extremely consistent",
        "Evidence is nearly impossible to explain unless the hypothesis holds",
    ),
];

const LINEAR_OPTIONS: [ScoreOption; 11] = [
    option(-5, "Strongly contradicts", "Evidence decisively contradicts the hypothesis"),
    option(-4, "Contradicts", "Evidence contradicts the hypothesis"),
    option(-3, "Moderately contradicts", "Evidence leans against the hypothesis"),
    option(-2, "Slightly contradicts", "Evidence weakly contradicts the hypothesis"),
    option(-1, "Marginally contradicts", "Evidence barely contradicts the hypothesis"),
    option(0, "Neutral", "Evidence neither supports nor undermines the hypothesis"),
    option(1, "Marginally supports", "Evidence barely supports the hypothesis"),
    option(2, "Slightly supports", "Evidence weakly supports the hypothesis"),
    option(3, "Moderately supports", "Evidence leans toward the hypothesis"),
    option(4, "Supports", "Evidence supports the hypothesis"),
    option(5, "Strongly supports", "Evidence decisively supports the hypothesis"),
];

/// Ordered table of points for a scale, most negative first.
pub fn score_options(scale: ScaleType) -> &'static [ScoreOption] {
    match scale {
        ScaleType::Logarithmic => &LOGARITHMIC_OPTIONS,
        ScaleType::Linear => &LINEAR_OPTIONS,
    }
}

pub const fn max_magnitude(scale: ScaleType) -> i32 {
    match scale {
        ScaleType::Logarithmic => 13,
        ScaleType::Linear => 5,
    }
}

pub fn is_valid_score(scale: ScaleType, value: i32) -> bool {
    score_options(scale)
        .iter()
        .any(|option| option.value == value)
}

/// Look up the label and description for a point, rejecting values off the scale.
pub fn get_score_option(scale: ScaleType, value: i32) -> Result<&'static ScoreOption, ScoringError> {
    score_options(scale)
        .iter()
        .find(|option| option.value == value)
        .ok_or(ScoringError::InvalidScoreValue { scale, value })
}

/// Nearest point on `scale`; equidistant candidates resolve toward zero.
pub fn snap_to_scale(scale: ScaleType, value: i32) -> Option<i32> {
    score_options(scale)
        .iter()
        .map(|option| option.value)
        .min_by_key(|candidate| ((candidate - value).abs(), candidate.abs()))
}

/// Rescale a point proportionally to the destination scale's magnitude and snap it.
pub fn convert_scale(value: i32, from: ScaleType, to: ScaleType) -> Result<i32, ScoringError> {
    get_score_option(from, value)?;
    if from == to {
        return Ok(value);
    }

    let ratio = f64::from(value) / f64::from(max_magnitude(from));
    let rescaled = (ratio * f64::from(max_magnitude(to))).round();
    if !rescaled.is_finite() {
        return Err(ScoringError::InvalidScoreValue { scale: to, value });
    }

    snap_to_scale(to, rescaled as i32).ok_or(ScoringError::InvalidScoreValue { scale: to, value })
}

impl LegacyAssessment {
    /// Signed value on either scale; `+1`, `-1`, and `0` exist on both.
    pub const fn score_value(self) -> i32 {
        match self {
            LegacyAssessment::Supports => 1,
            LegacyAssessment::Contradicts => -1,
            LegacyAssessment::Neutral | LegacyAssessment::NotApplicable => 0,
        }
    }
}

/// Explicit mapping from categorical assessments onto the numeric scales.
pub fn legacy_score_value(assessment: LegacyAssessment) -> i32 {
    assessment.score_value()
}
