use super::common::*;
use crate::analysis::domain::{EvidenceItem, Hypothesis, HypothesisId, ScaleType, Score};
use crate::analysis::error::ScoringError;
use crate::analysis::matrix::ScoreMatrix;
use crate::analysis::scoring::rank_hypotheses;
use crate::analysis::weighting::{calculate_evidence_weight, uniform_weight};
use crate::analysis::{CredibilityRating, SourceClassification};

#[test]
fn ranks_example_by_weighted_total() {
    let ranking = rank_hypotheses(
        &hypotheses(),
        &evidence(),
        &example_matrix(),
        ScaleType::Logarithmic,
        uniform_weight,
    )
    .expect("example ranks");

    let leader = ranking.leader().expect("two hypotheses ranked");
    assert_eq!(leader.hypothesis_id, HypothesisId("H1".into()));
    assert_eq!(leader.rank, 1);
    assert_eq!(leader.raw_total, 10);
    assert_close(leader.weighted_total, 10.0);
    assert_eq!(
        (
            leader.supporting_count,
            leader.contradicting_count,
            leader.neutral_count
        ),
        (2, 1, 0)
    );

    let runner_up = ranking
        .get(&HypothesisId("H2".into()))
        .expect("H2 ranked");
    assert_eq!(runner_up.rank, 2);
    assert_eq!(runner_up.raw_total, 3);
    assert_eq!(
        (
            runner_up.supporting_count,
            runner_up.contradicting_count,
            runner_up.neutral_count
        ),
        (1, 1, 1)
    );
    assert_eq!(ranking.scale_type(), ScaleType::Logarithmic);
}

#[test]
fn ranks_are_consecutive_and_totals_non_increasing() {
    let hypotheses = vec![
        Hypothesis::new("H1", "Insider"),
        Hypothesis::new("H2", "Contractor"),
        Hypothesis::new("H3", "External intrusion"),
        Hypothesis::new("H4", "Accidental exposure"),
    ];
    let matrix = ScoreMatrix::new(vec![
        Score::new("H1", "E1", -5),
        Score::new("H2", "E1", 3),
        Score::new("H3", "E1", 13),
        Score::new("H4", "E2", 1),
        Score::new("H3", "E2", -8),
    ])
    .expect("unique cells");

    let ranking = rank_hypotheses(
        &hypotheses,
        &evidence(),
        &matrix,
        ScaleType::Logarithmic,
        uniform_weight,
    )
    .expect("ranks");

    let ranks: Vec<usize> = ranking.hypotheses().iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
    assert!(ranking
        .hypotheses()
        .windows(2)
        .all(|pair| pair[0].weighted_total >= pair[1].weighted_total));
}

#[test]
fn weighted_tie_falls_back_to_raw_total() {
    let hypotheses = vec![
        Hypothesis::new("HA", "Single strong item"),
        Hypothesis::new("HB", "Two modest items"),
    ];
    let evidence = vec![EvidenceItem::new("E1", "Heavy"), EvidenceItem::new("E2", "Light")];
    let matrix = ScoreMatrix::new(vec![Score::new("HA", "E1", 1), Score::new("HB", "E2", 2)])
        .expect("unique cells");

    let ranking = rank_hypotheses(
        &hypotheses,
        &evidence,
        &matrix,
        ScaleType::Logarithmic,
        |item: &EvidenceItem| if item.id.0 == "E1" { 2.0 } else { 1.0 },
    )
    .expect("ranks");

    let order: Vec<&str> = ranking
        .hypotheses()
        .iter()
        .map(|entry| entry.hypothesis_id.0.as_str())
        .collect();
    assert_eq!(order, vec!["HB", "HA"]);
    assert_close(ranking.hypotheses()[0].weighted_total, 2.0);
    assert_close(ranking.hypotheses()[1].weighted_total, 2.0);
}

#[test]
fn full_tie_keeps_input_order() {
    let hypotheses = vec![
        Hypothesis::new("H3", "Third listed first"),
        Hypothesis::new("H1", "First listed second"),
        Hypothesis::new("H2", "Second listed third"),
    ];

    let ranking = rank_hypotheses(
        &hypotheses,
        &evidence(),
        &ScoreMatrix::default(),
        ScaleType::Linear,
        uniform_weight,
    )
    .expect("ranks");

    let order: Vec<&str> = ranking
        .hypotheses()
        .iter()
        .map(|entry| entry.hypothesis_id.0.as_str())
        .collect();
    assert_eq!(order, vec!["H3", "H1", "H2"]);
    assert!(ranking
        .hypotheses()
        .iter()
        .all(|entry| entry.scored_count() == 0 && entry.raw_total == 0));
}

#[test]
fn unscored_cells_do_not_count_as_neutral() {
    let matrix = ScoreMatrix::new(vec![Score::new("H1", "E1", 0)]).expect("unique cells");

    let ranking = rank_hypotheses(
        &hypotheses(),
        &evidence(),
        &matrix,
        ScaleType::Logarithmic,
        uniform_weight,
    )
    .expect("ranks");

    let h1 = ranking.get(&HypothesisId("H1".into())).expect("H1 ranked");
    let h2 = ranking.get(&HypothesisId("H2".into())).expect("H2 ranked");
    assert_eq!(h1.neutral_count, 1);
    assert_eq!(h2.scored_count(), 0);
}

#[test]
fn quality_weights_scale_contributions() {
    let evidence = vec![
        EvidenceItem::new("E1", "Signals intercept").with_quality(quality(
            Some(SourceClassification::Primary),
            Some(CredibilityRating::Confirmed),
            true,
        )),
        EvidenceItem::new("E2", "Forum rumor").with_quality(quality(
            Some(SourceClassification::Forged),
            Some(CredibilityRating::Improbable),
            false,
        )),
        EvidenceItem::new("E3", "Working hours"),
    ];

    let ranking = rank_hypotheses(
        &hypotheses(),
        &evidence,
        &example_matrix(),
        ScaleType::Logarithmic,
        calculate_evidence_weight,
    )
    .expect("ranks");

    let h1 = ranking.get(&HypothesisId("H1".into())).expect("H1 ranked");
    let h2 = ranking.get(&HypothesisId("H2".into())).expect("H2 ranked");
    // E1 weighs 1.3 * 1.25 * 1.2, E2 clamps to the floor
    assert_close(h1.weighted_total, 8.0 * 1.95 - 3.0 * 0.5 + 5.0);
    assert_close(h2.weighted_total, -2.0 * 1.95 + 5.0 * 0.5);
    assert_eq!(h1.raw_total, 10);
    assert_eq!(h1.rank, 1);
}

#[test]
fn off_scale_cells_fail_even_for_unknown_hypotheses() {
    let mut scores = example_scores();
    scores.push(Score::new("H9", "E1", 4));
    let matrix = ScoreMatrix::new(scores).expect("unique cells");

    let error = rank_hypotheses(
        &hypotheses(),
        &evidence(),
        &matrix,
        ScaleType::Logarithmic,
        uniform_weight,
    )
    .expect_err("4 is not logarithmic");
    assert_eq!(
        error,
        ScoringError::InvalidScoreValue {
            scale: ScaleType::Logarithmic,
            value: 4,
        }
    );
}

#[test]
fn cells_for_unlisted_hypotheses_are_ignored() {
    let mut scores = example_scores();
    scores.push(Score::new("H9", "E1", 13));
    let matrix = ScoreMatrix::new(scores).expect("unique cells");

    let ranking = rank_hypotheses(
        &hypotheses(),
        &evidence(),
        &matrix,
        ScaleType::Logarithmic,
        uniform_weight,
    )
    .expect("ranks");

    assert_eq!(ranking.len(), 2);
    assert!(ranking.get(&HypothesisId("H9".into())).is_none());
}

#[test]
fn rejects_non_finite_or_negative_weights() {
    for bad_weight in [f64::NAN, f64::INFINITY, -0.5] {
        let error = rank_hypotheses(
            &hypotheses(),
            &evidence(),
            &example_matrix(),
            ScaleType::Logarithmic,
            |_: &EvidenceItem| bad_weight,
        )
        .expect_err("weight must be rejected");
        assert!(matches!(error, ScoringError::InvalidEvidenceWeight { .. }));
    }
}

#[test]
fn rejects_duplicate_or_blank_identifiers() {
    let duplicated = vec![Hypothesis::new("H1", "One"), Hypothesis::new("H1", "Again")];
    assert_eq!(
        rank_hypotheses(
            &duplicated,
            &evidence(),
            &ScoreMatrix::default(),
            ScaleType::Linear,
            uniform_weight,
        ),
        Err(ScoringError::DuplicateIdentifier {
            kind: "hypothesis",
            id: "H1".into(),
        })
    );

    let blank_evidence = vec![EvidenceItem::new(" ", "Untitled")];
    assert_eq!(
        rank_hypotheses(
            &hypotheses(),
            &blank_evidence,
            &ScoreMatrix::default(),
            ScaleType::Linear,
            uniform_weight,
        ),
        Err(ScoringError::MissingRequiredField("evidence.id"))
    );
}

#[test]
fn single_hypothesis_still_ranks() {
    let ranking = rank_hypotheses(
        &hypotheses()[..1],
        &evidence(),
        &example_matrix(),
        ScaleType::Logarithmic,
        uniform_weight,
    )
    .expect("ranking alone does not require a comparison");

    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking.hypotheses()[0].raw_total, 10);
}

#[test]
fn uniform_weights_reproduce_raw_totals_on_every_call() {
    let engine = engine();
    let matrix = example_matrix();

    let first = engine
        .rank_hypotheses(
            &hypotheses(),
            &evidence(),
            &matrix,
            ScaleType::Logarithmic,
            uniform_weight,
        )
        .expect("ranks");
    let second = engine
        .rank_hypotheses(
            &hypotheses(),
            &evidence(),
            &matrix,
            ScaleType::Logarithmic,
            |_: &EvidenceItem| 1.0,
        )
        .expect("ranks");

    assert_eq!(first, second);
    for entry in first.hypotheses() {
        assert_close(entry.weighted_total, entry.raw_total as f64);
    }
}

#[test]
fn weighted_totals_equal_in_exact_arithmetic_tie_despite_summation_order() {
    let hypotheses = vec![
        Hypothesis::new("HB", "Insider"),
        Hypothesis::new("HA", "Contractor"),
    ];
    let evidence = vec![
        EvidenceItem::new("E1", "Badge logs").with_quality(quality(None, None, true)),
        EvidenceItem::new("E2", "Server image").with_quality(quality(
            Some(SourceClassification::Primary),
            None,
            false,
        )),
        EvidenceItem::new("E3", "Vendor report").with_quality(quality(
            None,
            Some(CredibilityRating::ProbablyTrue),
            false,
        )),
        EvidenceItem::new("E4", "Chat export").with_quality(quality(None, None, true)),
    ];
    // HB: 3 * 1.2; HA: 1.3 + 1.1 + 1.2
    let matrix = ScoreMatrix::new(vec![
        Score::new("HB", "E1", 3),
        Score::new("HA", "E2", 1),
        Score::new("HA", "E3", 1),
        Score::new("HA", "E4", 1),
    ])
    .expect("unique cells");

    let ranking = rank_hypotheses(
        &hypotheses,
        &evidence,
        &matrix,
        ScaleType::Logarithmic,
        calculate_evidence_weight,
    )
    .expect("ranks");

    let order: Vec<&str> = ranking
        .hypotheses()
        .iter()
        .map(|entry| entry.hypothesis_id.0.as_str())
        .collect();
    assert_eq!(order, vec!["HB", "HA"]);
    assert_eq!(
        ranking.hypotheses()[0].weighted_total,
        ranking.hypotheses()[1].weighted_total
    );
}
