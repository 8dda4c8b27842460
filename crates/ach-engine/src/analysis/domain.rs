use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ScoringError;

/// Identifier wrapper for hypotheses, unique within one analysis.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HypothesisId(pub String);

impl fmt::Display for HypothesisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for evidence items.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvidenceId(pub String);

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Competing explanation under evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub text: String,
}

impl Hypothesis {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: HypothesisId(id.into()),
            text: text.into(),
        }
    }
}

/// Reduced view of an evidence record. Descriptive fields are carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: EvidenceId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityInputs>,
}

impl EvidenceItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: EvidenceId(id.into()),
            title: title.into(),
            description: None,
            quality: None,
        }
    }

    pub fn with_quality(mut self, quality: QualityInputs) -> Self {
        self.quality = Some(quality);
        self
    }
}

/// Signals consumed by the evidence-quality weighting step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility: Option<CredibilityRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceClassification>,
    #[serde(default)]
    pub corroborated: bool,
}

/// Provenance category of the source that produced an evidence item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceClassification {
    Primary,
    Secondary,
    Anecdotal,
    Forged,
}

impl SourceClassification {
    pub const fn label(self) -> &'static str {
        match self {
            SourceClassification::Primary => "primary",
            SourceClassification::Secondary => "secondary",
            SourceClassification::Anecdotal => "anecdotal",
            SourceClassification::Forged => "forged",
        }
    }
}

/// Ordinal information-credibility rating, 1 (confirmed) through 6 (improbable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CredibilityRating {
    Confirmed = 1,
    ProbablyTrue = 2,
    PossiblyTrue = 3,
    CannotBeJudged = 4,
    Doubtful = 5,
    Improbable = 6,
}

impl CredibilityRating {
    pub const fn label(self) -> &'static str {
        match self {
            CredibilityRating::Confirmed => "confirmed",
            CredibilityRating::ProbablyTrue => "probably true",
            CredibilityRating::PossiblyTrue => "possibly true",
            CredibilityRating::CannotBeJudged => "cannot be judged",
            CredibilityRating::Doubtful => "doubtful",
            CredibilityRating::Improbable => "improbable",
        }
    }
}

impl TryFrom<u8> for CredibilityRating {
    type Error = ScoringError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CredibilityRating::Confirmed),
            2 => Ok(CredibilityRating::ProbablyTrue),
            3 => Ok(CredibilityRating::PossiblyTrue),
            4 => Ok(CredibilityRating::CannotBeJudged),
            5 => Ok(CredibilityRating::Doubtful),
            6 => Ok(CredibilityRating::Improbable),
            other => Err(ScoringError::InvalidCredibilityRating(other)),
        }
    }
}

impl From<CredibilityRating> for u8 {
    fn from(rating: CredibilityRating) -> Self {
        rating as u8
    }
}

/// One cell of the evidence x hypothesis matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub hypothesis_id: HypothesisId,
    pub evidence_id: EvidenceId,
    pub value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Score {
    pub fn new(hypothesis_id: impl Into<String>, evidence_id: impl Into<String>, value: i32) -> Self {
        Self {
            hypothesis_id: HypothesisId(hypothesis_id.into()),
            evidence_id: EvidenceId(evidence_id.into()),
            value,
            notes: None,
        }
    }

    /// Build a cell from the categorical assessments used by older analyses.
    pub fn from_legacy(
        hypothesis_id: impl Into<String>,
        evidence_id: impl Into<String>,
        assessment: LegacyAssessment,
    ) -> Self {
        Self::new(hypothesis_id, evidence_id, assessment.score_value())
    }
}

/// Scale used by every cell of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Logarithmic,
    Linear,
}

impl ScaleType {
    pub const fn label(self) -> &'static str {
        match self {
            ScaleType::Logarithmic => "logarithmic",
            ScaleType::Linear => "linear",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScaleType {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "logarithmic" | "log" | "fibonacci" => Ok(ScaleType::Logarithmic),
            "linear" => Ok(ScaleType::Linear),
            other => Err(ScoringError::UnknownScale(other.to_string())),
        }
    }
}

/// Categorical scoring from analyses created before numeric scales existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyAssessment {
    Supports,
    Contradicts,
    Neutral,
    NotApplicable,
}

impl FromStr for LegacyAssessment {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "supports" => Ok(LegacyAssessment::Supports),
            "contradicts" => Ok(LegacyAssessment::Contradicts),
            "neutral" => Ok(LegacyAssessment::Neutral),
            "not_applicable" | "n/a" | "na" => Ok(LegacyAssessment::NotApplicable),
            other => Err(ScoringError::UnknownAssessment(other.to_string())),
        }
    }
}

/// Snapshot of an analysis as loaded from persistence. The engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub scale_type: ScaleType,
    pub hypotheses: Vec<Hypothesis>,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub scores: Vec<Score>,
}
