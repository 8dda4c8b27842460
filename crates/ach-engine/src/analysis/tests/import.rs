use crate::analysis::domain::{EvidenceId, HypothesisId};
use crate::analysis::import::{import_scores, ImportError};
use crate::analysis::matrix::ScoreMatrix;

#[test]
fn reads_numeric_and_categorical_cells() {
    let sheet = "\
hypothesis_id,evidence_id,value,notes
H1,E1,8,shared infrastructure
H2, E1 ,-2,
H1,E2,contradicts,
H2,E2,Not Applicable,analyst unsure
";

    let scores = import_scores(sheet.as_bytes()).expect("sheet parses");
    assert_eq!(scores.len(), 4);
    assert_eq!(scores[0].value, 8);
    assert_eq!(scores[0].notes.as_deref(), Some("shared infrastructure"));
    assert_eq!(scores[1].evidence_id, EvidenceId("E1".into()));
    assert_eq!(scores[1].notes, None);
    assert_eq!(scores[2].value, -1);
    assert_eq!(scores[3].value, 0);
    assert_eq!(scores[3].hypothesis_id, HypothesisId("H2".into()));
}

#[test]
fn notes_column_is_optional() {
    let sheet = "hypothesis_id,evidence_id,value\nH1,E1,+3\n";
    let scores = import_scores(sheet.as_bytes()).expect("sheet parses");
    assert_eq!(scores[0].value, 3);
    assert_eq!(scores[0].notes, None);
}

#[test]
fn reports_line_of_unreadable_value() {
    let sheet = "hypothesis_id,evidence_id,value\nH1,E1,5\nH1,E2,probably\n";

    match import_scores(sheet.as_bytes()) {
        Err(ImportError::InvalidValue { line, raw }) => {
            assert_eq!(line, 3);
            assert_eq!(raw, "probably");
        }
        other => panic!("expected invalid value, got {other:?}"),
    }
}

#[test]
fn reported_line_accounts_for_multiline_notes_and_blank_lines() {
    let sheet = "\
hypothesis_id,evidence_id,value,notes
H1,E1,5,\"seen in two
separate campaigns\"

H1,E2,probably,
";

    match import_scores(sheet.as_bytes()) {
        Err(ImportError::InvalidValue { line, raw }) => {
            assert_eq!(line, 5);
            assert_eq!(raw, "probably");
        }
        other => panic!("expected invalid value, got {other:?}"),
    }
}

#[test]
fn reported_line_survives_crlf_terminators() {
    let sheet = "hypothesis_id,evidence_id,value\r\nH1,E1,5\r\n\r\nH1,E2,probably\r\n";

    match import_scores(sheet.as_bytes()) {
        Err(ImportError::InvalidValue { line, .. }) => assert_eq!(line, 4),
        other => panic!("expected invalid value, got {other:?}"),
    }
}

#[test]
fn missing_column_is_a_csv_error() {
    let sheet = "hypothesis_id,value\nH1,5\n";
    assert!(matches!(
        import_scores(sheet.as_bytes()),
        Err(ImportError::Csv(_))
    ));
}

#[test]
fn imported_duplicates_surface_when_building_matrix() {
    let sheet = "hypothesis_id,evidence_id,value\nH1,E1,5\nH1,E1,3\n";
    let scores = import_scores(sheet.as_bytes()).expect("sheet parses");
    assert!(ScoreMatrix::new(scores).is_err());
}
