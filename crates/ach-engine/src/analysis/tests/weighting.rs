use super::common::*;
use crate::analysis::domain::{CredibilityRating, EvidenceItem, QualityInputs, SourceClassification};
use crate::analysis::error::ScoringError;
use crate::analysis::weighting::{
    calculate_evidence_weight, weight_breakdown, EvidenceWeighting, WeightAxis,
    MAX_EVIDENCE_WEIGHT, MIN_EVIDENCE_WEIGHT,
};

#[test]
fn evidence_without_quality_weighs_one() {
    assert_close(calculate_evidence_weight(&EvidenceItem::new("E1", "Bare")), 1.0);

    let empty = EvidenceItem::new("E2", "Empty quality").with_quality(QualityInputs::default());
    assert_close(calculate_evidence_weight(&empty), 1.0);
}

#[test]
fn factors_multiply_across_axes() {
    let item = EvidenceItem::new("E1", "Field report").with_quality(quality(
        Some(SourceClassification::Secondary),
        Some(CredibilityRating::ProbablyTrue),
        true,
    ));
    assert_close(calculate_evidence_weight(&item), 1.0 * 1.1 * 1.2);

    let anecdotal = EvidenceItem::new("E2", "Hearsay").with_quality(quality(
        Some(SourceClassification::Anecdotal),
        Some(CredibilityRating::CannotBeJudged),
        false,
    ));
    assert_close(calculate_evidence_weight(&anecdotal), 0.8 * 0.9);
}

#[test]
fn weights_stay_within_bounds() {
    let sources = [
        None,
        Some(SourceClassification::Primary),
        Some(SourceClassification::Secondary),
        Some(SourceClassification::Anecdotal),
        Some(SourceClassification::Forged),
    ];
    let ratings = [None, Some(1u8), Some(2), Some(3), Some(4), Some(5), Some(6)];

    for source in sources {
        for rating in ratings {
            for corroborated in [false, true] {
                let credibility = rating
                    .map(|value| CredibilityRating::try_from(value).expect("rating in range"));
                let item = EvidenceItem::new("E", "Matrix")
                    .with_quality(quality(source, credibility, corroborated));
                let weight = calculate_evidence_weight(&item);
                assert!(
                    (MIN_EVIDENCE_WEIGHT..=MAX_EVIDENCE_WEIGHT).contains(&weight),
                    "{source:?}/{rating:?}/{corroborated} produced {weight}"
                );
            }
        }
    }
}

#[test]
fn low_quality_evidence_clamps_to_floor() {
    let item = EvidenceItem::new("E1", "Doctored image").with_quality(quality(
        Some(SourceClassification::Forged),
        Some(CredibilityRating::Doubtful),
        false,
    ));
    assert_close(calculate_evidence_weight(&item), MIN_EVIDENCE_WEIGHT);
}

#[test]
fn breakdown_lists_each_contributing_axis() {
    let item = EvidenceItem::new("E1", "Signals intercept").with_quality(quality(
        Some(SourceClassification::Primary),
        Some(CredibilityRating::Confirmed),
        true,
    ));

    let breakdown = weight_breakdown(&item);
    let axes: Vec<WeightAxis> = breakdown
        .components
        .iter()
        .map(|component| component.axis)
        .collect();
    assert_eq!(
        axes,
        vec![
            WeightAxis::Source,
            WeightAxis::Credibility,
            WeightAxis::Corroboration
        ]
    );
    assert_close(breakdown.weight, 1.95);
    assert_eq!(breakdown.components[1].notes, "credibility 1 (confirmed)");
    assert!(weight_breakdown(&EvidenceItem::new("E2", "Bare"))
        .components
        .is_empty());
}

#[test]
fn credibility_ratings_outside_one_to_six_are_rejected() {
    assert_eq!(
        CredibilityRating::try_from(7u8),
        Err(ScoringError::InvalidCredibilityRating(7))
    );
    assert!(serde_json::from_str::<QualityInputs>(r#"{"credibility": 0}"#).is_err());

    let parsed: QualityInputs =
        serde_json::from_str(r#"{"credibility": 2, "source": "primary"}"#).expect("valid quality");
    assert_eq!(parsed.credibility, Some(CredibilityRating::ProbablyTrue));
    assert_eq!(parsed.source, Some(SourceClassification::Primary));
    assert!(!parsed.corroborated);
}

#[test]
fn weighting_modes_parse_and_dispatch() {
    let item = EvidenceItem::new("E1", "Forged").with_quality(quality(
        Some(SourceClassification::Forged),
        None,
        false,
    ));

    assert_eq!(
        "quality".parse::<EvidenceWeighting>(),
        Ok(EvidenceWeighting::Quality)
    );
    assert_eq!(
        " Uniform ".parse::<EvidenceWeighting>(),
        Ok(EvidenceWeighting::Uniform)
    );
    assert!("heavy".parse::<EvidenceWeighting>().is_err());
    assert_close(EvidenceWeighting::Uniform.weight(&item), 1.0);
    assert_close(EvidenceWeighting::Quality.weight(&item), 0.5);
}
