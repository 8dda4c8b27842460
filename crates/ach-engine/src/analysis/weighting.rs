use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{
    CredibilityRating, EvidenceId, EvidenceItem, QualityInputs, SourceClassification,
};

pub const MIN_EVIDENCE_WEIGHT: f64 = 0.5;
pub const MAX_EVIDENCE_WEIGHT: f64 = 2.0;
pub const UNIFORM_WEIGHT: f64 = 1.0;

const CORROBORATION_FACTOR: f64 = 1.2;

impl SourceClassification {
    pub const fn weight_factor(self) -> f64 {
        match self {
            SourceClassification::Primary => 1.3,
            SourceClassification::Secondary => 1.0,
            SourceClassification::Anecdotal => 0.8,
            SourceClassification::Forged => 0.5,
        }
    }
}

impl CredibilityRating {
    pub const fn weight_factor(self) -> f64 {
        match self {
            CredibilityRating::Confirmed => 1.25,
            CredibilityRating::ProbablyTrue => 1.1,
            CredibilityRating::PossiblyTrue => 1.0,
            CredibilityRating::CannotBeJudged => 0.9,
            CredibilityRating::Doubtful | CredibilityRating::Improbable => 0.5,
        }
    }
}

/// Axis contributing to an evidence weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightAxis {
    Source,
    Credibility,
    Corroboration,
}

/// Discrete contribution to an evidence weight, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightComponent {
    pub axis: WeightAxis,
    pub factor: f64,
    pub notes: String,
}

/// Full weight derivation for one evidence item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightBreakdown {
    pub evidence_id: EvidenceId,
    pub weight: f64,
    pub components: Vec<WeightComponent>,
}

/// Multiplier in `[MIN_EVIDENCE_WEIGHT, MAX_EVIDENCE_WEIGHT]` derived from quality inputs.
///
/// Evidence without quality inputs weighs `1.0`.
pub fn calculate_evidence_weight(evidence: &EvidenceItem) -> f64 {
    evidence
        .quality
        .as_ref()
        .map(quality_weight)
        .unwrap_or(UNIFORM_WEIGHT)
}

pub fn quality_weight(quality: &QualityInputs) -> f64 {
    let product: f64 = quality_components(quality)
        .iter()
        .map(|component| component.factor)
        .product();
    product.clamp(MIN_EVIDENCE_WEIGHT, MAX_EVIDENCE_WEIGHT)
}

pub fn weight_breakdown(evidence: &EvidenceItem) -> WeightBreakdown {
    let components = evidence
        .quality
        .as_ref()
        .map(quality_components)
        .unwrap_or_default();

    WeightBreakdown {
        evidence_id: evidence.id.clone(),
        weight: calculate_evidence_weight(evidence),
        components,
    }
}

fn quality_components(quality: &QualityInputs) -> Vec<WeightComponent> {
    let mut components = Vec::new();

    if let Some(source) = quality.source {
        components.push(WeightComponent {
            axis: WeightAxis::Source,
            factor: source.weight_factor(),
            notes: format!("{} source", source.label()),
        });
    }

    if let Some(credibility) = quality.credibility {
        components.push(WeightComponent {
            axis: WeightAxis::Credibility,
            factor: credibility.weight_factor(),
            notes: format!(
                "credibility {} ({})",
                u8::from(credibility),
                credibility.label()
            ),
        });
    }

    if quality.corroborated {
        components.push(WeightComponent {
            axis: WeightAxis::Corroboration,
            factor: CORROBORATION_FACTOR,
            notes: "corroborated by independent reporting".to_string(),
        });
    }

    components
}

pub fn uniform_weight(_evidence: &EvidenceItem) -> f64 {
    UNIFORM_WEIGHT
}

/// Named weight functions for callers that cannot pass a closure (HTTP, CLI).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceWeighting {
    #[default]
    Uniform,
    Quality,
}

impl EvidenceWeighting {
    pub fn weight(self, evidence: &EvidenceItem) -> f64 {
        match self {
            EvidenceWeighting::Uniform => uniform_weight(evidence),
            EvidenceWeighting::Quality => calculate_evidence_weight(evidence),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EvidenceWeighting::Uniform => "uniform",
            EvidenceWeighting::Quality => "quality",
        }
    }
}

impl FromStr for EvidenceWeighting {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "uniform" | "none" => Ok(EvidenceWeighting::Uniform),
            "quality" => Ok(EvidenceWeighting::Quality),
            other => Err(format!(
                "unknown weighting '{other}' (expected 'uniform' or 'quality')"
            )),
        }
    }
}
