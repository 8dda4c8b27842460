use std::collections::HashMap;

use super::domain::{EvidenceId, HypothesisId, ScaleType, Score};
use super::error::ScoringError;
use super::scale::{convert_scale, get_score_option};

/// Immutable sparse matrix of scores keyed by `(hypothesis, evidence)`.
///
/// A missing cell means "not yet evaluated" and is distinct from a stored `0` ("neutral").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMatrix {
    scores: Vec<Score>,
    index: HashMap<EvidenceId, HashMap<HypothesisId, usize>>,
}

impl ScoreMatrix {
    /// Validate identifiers and pair uniqueness. Scale validation happens at scoring time.
    pub fn new(scores: Vec<Score>) -> Result<Self, ScoringError> {
        let mut index: HashMap<EvidenceId, HashMap<HypothesisId, usize>> = HashMap::new();

        for (position, score) in scores.iter().enumerate() {
            if score.hypothesis_id.0.trim().is_empty() {
                return Err(ScoringError::MissingRequiredField("hypothesis_id"));
            }
            if score.evidence_id.0.trim().is_empty() {
                return Err(ScoringError::MissingRequiredField("evidence_id"));
            }

            let row = index.entry(score.evidence_id.clone()).or_default();
            if row.insert(score.hypothesis_id.clone(), position).is_some() {
                return Err(ScoringError::DuplicateScore {
                    hypothesis_id: score.hypothesis_id.clone(),
                    evidence_id: score.evidence_id.clone(),
                });
            }
        }

        Ok(Self { scores, index })
    }

    pub fn get(&self, hypothesis_id: &HypothesisId, evidence_id: &EvidenceId) -> Option<&Score> {
        self.index
            .get(evidence_id)
            .and_then(|row| row.get(hypothesis_id))
            .map(|position| &self.scores[*position])
    }

    /// Cells recorded against one evidence item, in insertion order.
    pub fn scores_for_evidence<'a>(
        &'a self,
        evidence_id: &'a EvidenceId,
    ) -> impl Iterator<Item = &'a Score> + 'a {
        let mut positions: Vec<usize> = self
            .index
            .get(evidence_id)
            .map(|row| row.values().copied().collect())
            .unwrap_or_default();
        positions.sort_unstable();

        positions
            .into_iter()
            .map(move |position| &self.scores[position])
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn into_scores(self) -> Vec<Score> {
        self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Fail on the first cell whose value is not a point on `scale`.
    pub fn validate_scale(&self, scale: ScaleType) -> Result<(), ScoringError> {
        for score in &self.scores {
            get_score_option(scale, score.value)?;
        }
        Ok(())
    }

    /// Convert every cell when an analysis switches scale.
    pub fn rescale(&self, from: ScaleType, to: ScaleType) -> Result<Self, ScoringError> {
        let scores = self
            .scores
            .iter()
            .map(|score| {
                convert_scale(score.value, from, to).map(|value| Score {
                    value,
                    ..score.clone()
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            scores,
            index: self.index.clone(),
        })
    }

    /// Copy of the matrix with every cell for `hypothesis_id` removed.
    pub fn without_hypothesis(&self, hypothesis_id: &HypothesisId) -> Self {
        self.retain(|score| &score.hypothesis_id != hypothesis_id)
    }

    /// Copy of the matrix with every cell for `evidence_id` removed.
    pub fn without_evidence(&self, evidence_id: &EvidenceId) -> Self {
        self.retain(|score| &score.evidence_id != evidence_id)
    }

    fn retain<F>(&self, keep: F) -> Self
    where
        F: Fn(&Score) -> bool,
    {
        let scores: Vec<Score> = self
            .scores
            .iter()
            .filter(|score| keep(*score))
            .cloned()
            .collect();
        let mut index: HashMap<EvidenceId, HashMap<HypothesisId, usize>> = HashMap::new();
        for (position, score) in scores.iter().enumerate() {
            index
                .entry(score.evidence_id.clone())
                .or_default()
                .insert(score.hypothesis_id.clone(), position);
        }
        Self { scores, index }
    }
}

impl TryFrom<Vec<Score>> for ScoreMatrix {
    type Error = ScoringError;

    fn try_from(scores: Vec<Score>) -> Result<Self, Self::Error> {
        Self::new(scores)
    }
}
