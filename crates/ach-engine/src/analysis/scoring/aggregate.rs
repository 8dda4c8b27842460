use super::super::domain::{EvidenceItem, Hypothesis};
use super::super::error::ScoringError;
use super::super::matrix::ScoreMatrix;

/// Weighted sums are snapped to a 1e-9 grid so that accumulation drift cannot split totals
/// that agree arithmetically.
const WEIGHTED_STEPS_PER_UNIT: f64 = 1e9;

pub(crate) fn settle_weighted(value: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0 for `total_cmp`
    (value * WEIGHTED_STEPS_PER_UNIT).round() / WEIGHTED_STEPS_PER_UNIT + 0.0
}

/// Running totals for one hypothesis across the evidence list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct HypothesisTally {
    pub raw_total: i64,
    pub weighted_total: f64,
    pub supporting: usize,
    pub contradicting: usize,
    pub neutral: usize,
}

impl HypothesisTally {
    fn record(&mut self, value: i32, weight: f64) {
        self.raw_total += i64::from(value);
        self.weighted_total += f64::from(value) * weight;
        match value {
            v if v > 0 => self.supporting += 1,
            v if v < 0 => self.contradicting += 1,
            _ => self.neutral += 1,
        }
    }
}

/// Resolve the weight of every evidence item once, rejecting unusable multipliers.
pub(crate) fn evidence_weights<W>(
    evidence: &[EvidenceItem],
    weight_fn: W,
) -> Result<Vec<f64>, ScoringError>
where
    W: Fn(&EvidenceItem) -> f64,
{
    evidence
        .iter()
        .map(|item| {
            let weight = weight_fn(item);
            if weight.is_finite() && weight >= 0.0 {
                Ok(weight)
            } else {
                Err(ScoringError::InvalidEvidenceWeight {
                    evidence_id: item.id.clone(),
                    weight,
                })
            }
        })
        .collect()
}

/// Sum the present cells of one hypothesis; missing cells are skipped, not zero-filled.
pub(crate) fn tally_hypothesis(
    hypothesis: &Hypothesis,
    evidence: &[EvidenceItem],
    weights: &[f64],
    matrix: &ScoreMatrix,
) -> HypothesisTally {
    let mut tally = HypothesisTally::default();

    for (item, weight) in evidence.iter().zip(weights) {
        if let Some(score) = matrix.get(&hypothesis.id, &item.id) {
            tally.record(score.value, *weight);
        }
    }

    tally.weighted_total = settle_weighted(tally.weighted_total);
    tally
}
