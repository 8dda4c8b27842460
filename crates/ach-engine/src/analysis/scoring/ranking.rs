use std::collections::HashSet;

use serde::Serialize;

use super::super::domain::{EvidenceItem, Hypothesis, HypothesisId, ScaleType};
use super::super::error::ScoringError;
use super::super::matrix::ScoreMatrix;
use super::aggregate::{evidence_weights, tally_hypothesis, HypothesisTally};

/// Aggregate scores and position of one hypothesis.
///
/// `raw_total` and the per-sign counts travel with the rank so consumers can show why a
/// hypothesis sits where it does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHypothesis {
    pub hypothesis_id: HypothesisId,
    pub text: String,
    pub raw_total: i64,
    pub weighted_total: f64,
    pub supporting_count: usize,
    pub contradicting_count: usize,
    pub neutral_count: usize,
    pub rank: usize,
}

impl RankedHypothesis {
    /// Number of cells actually evaluated for this hypothesis.
    pub fn scored_count(&self) -> usize {
        self.supporting_count + self.contradicting_count + self.neutral_count
    }
}

/// Hypotheses in rank order for one scale. Only `rank_hypotheses` builds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    scale_type: ScaleType,
    hypotheses: Vec<RankedHypothesis>,
}

impl Ranking {
    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    pub fn hypotheses(&self) -> &[RankedHypothesis] {
        &self.hypotheses
    }

    pub fn into_hypotheses(self) -> Vec<RankedHypothesis> {
        self.hypotheses
    }

    pub fn leader(&self) -> Option<&RankedHypothesis> {
        self.hypotheses.first()
    }

    pub fn get(&self, hypothesis_id: &HypothesisId) -> Option<&RankedHypothesis> {
        self.hypotheses
            .iter()
            .find(|entry| &entry.hypothesis_id == hypothesis_id)
    }

    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }
}

/// Rank hypotheses by weighted total, then raw total, then input order.
///
/// Every stored cell must be a point on `scale`. Cells referencing hypotheses or evidence
/// outside the supplied lists do not contribute.
pub fn rank_hypotheses<W>(
    hypotheses: &[Hypothesis],
    evidence: &[EvidenceItem],
    matrix: &ScoreMatrix,
    scale: ScaleType,
    weight_fn: W,
) -> Result<Ranking, ScoringError>
where
    W: Fn(&EvidenceItem) -> f64,
{
    validate_identifiers(hypotheses, evidence)?;
    matrix.validate_scale(scale)?;
    let weights = evidence_weights(evidence, weight_fn)?;

    let mut tallies: Vec<(usize, &Hypothesis, HypothesisTally)> = hypotheses
        .iter()
        .enumerate()
        .map(|(position, hypothesis)| {
            let tally = tally_hypothesis(hypothesis, evidence, &weights, matrix);
            (position, hypothesis, tally)
        })
        .collect();

    tallies.sort_by(|(left_pos, _, left), (right_pos, _, right)| {
        right
            .weighted_total
            .total_cmp(&left.weighted_total)
            .then_with(|| right.raw_total.cmp(&left.raw_total))
            .then_with(|| left_pos.cmp(right_pos))
    });

    let hypotheses = tallies
        .into_iter()
        .enumerate()
        .map(|(index, (_, hypothesis, tally))| RankedHypothesis {
            hypothesis_id: hypothesis.id.clone(),
            text: hypothesis.text.clone(),
            raw_total: tally.raw_total,
            weighted_total: tally.weighted_total,
            supporting_count: tally.supporting,
            contradicting_count: tally.contradicting,
            neutral_count: tally.neutral,
            rank: index + 1,
        })
        .collect();

    Ok(Ranking {
        scale_type: scale,
        hypotheses,
    })
}

fn validate_identifiers(
    hypotheses: &[Hypothesis],
    evidence: &[EvidenceItem],
) -> Result<(), ScoringError> {
    let mut seen = HashSet::new();
    for hypothesis in hypotheses {
        if hypothesis.id.0.trim().is_empty() {
            return Err(ScoringError::MissingRequiredField("hypothesis.id"));
        }
        if !seen.insert(hypothesis.id.0.as_str()) {
            return Err(ScoringError::DuplicateIdentifier {
                kind: "hypothesis",
                id: hypothesis.id.0.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for item in evidence {
        if item.id.0.trim().is_empty() {
            return Err(ScoringError::MissingRequiredField("evidence.id"));
        }
        if !seen.insert(item.id.0.as_str()) {
            return Err(ScoringError::DuplicateIdentifier {
                kind: "evidence",
                id: item.id.0.clone(),
            });
        }
    }

    Ok(())
}
