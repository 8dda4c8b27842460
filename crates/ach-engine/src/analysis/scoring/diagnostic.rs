use std::collections::BTreeSet;

use serde::Serialize;

use super::super::domain::{EvidenceId, EvidenceItem};
use super::super::matrix::ScoreMatrix;

/// How strongly one evidence item discriminates between hypotheses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceDiagnosticity {
    pub evidence_id: EvidenceId,
    pub title: String,
    pub distinct_values: usize,
    pub scored_count: usize,
}

/// Number of distinct values an item received across hypotheses.
pub fn distinct_value_count(item: &EvidenceItem, matrix: &ScoreMatrix) -> usize {
    matrix
        .scores_for_evidence(&item.id)
        .map(|score| score.value)
        .collect::<BTreeSet<_>>()
        .len()
}

/// Top `n` evidence items by distinct score values, ties in evidence order.
pub fn most_diagnostic_evidence<'a>(
    evidence: &'a [EvidenceItem],
    matrix: &ScoreMatrix,
    n: usize,
) -> Vec<&'a EvidenceItem> {
    ordered_by_diagnosticity(evidence, matrix)
        .into_iter()
        .take(n)
        .map(|(_, item)| item)
        .collect()
}

/// Same ordering as `most_diagnostic_evidence`, with the measure attached.
pub fn rank_diagnostic_evidence(
    evidence: &[EvidenceItem],
    matrix: &ScoreMatrix,
    n: usize,
) -> Vec<EvidenceDiagnosticity> {
    ordered_by_diagnosticity(evidence, matrix)
        .into_iter()
        .take(n)
        .map(|(distinct_values, item)| EvidenceDiagnosticity {
            evidence_id: item.id.clone(),
            title: item.title.clone(),
            distinct_values,
            scored_count: matrix.scores_for_evidence(&item.id).count(),
        })
        .collect()
}

fn ordered_by_diagnosticity<'a>(
    evidence: &'a [EvidenceItem],
    matrix: &ScoreMatrix,
) -> Vec<(usize, &'a EvidenceItem)> {
    let mut ranked: Vec<(usize, &EvidenceItem)> = evidence
        .iter()
        .map(|item| (distinct_value_count(item, matrix), item))
        .collect();
    // stable: equal counts keep evidence order
    ranked.sort_by(|left, right| right.0.cmp(&left.0));
    ranked
}
