use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};

use super::domain::{EvidenceId, HypothesisId, LegacyAssessment, Score};

/// Errors raised while reading a score sheet.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unable to open score sheet {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed score sheet: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: '{raw}' is neither a signed score nor a categorical assessment")]
    InvalidValue { line: u64, raw: String },
}

/// Read `hypothesis_id,evidence_id,value[,notes]` rows into score cells.
///
/// `value` accepts a signed integer or a categorical assessment (`supports`, `contradicts`,
/// `neutral`, `not_applicable`) which maps through `LegacyAssessment::score_value`. Scale
/// validation is left to the engine.
pub fn import_scores<R: Read>(mut reader: R) -> Result<Vec<Score>, ImportError> {
    let mut sheet = Vec::new();
    reader.read_to_end(&mut sheet).map_err(csv::Error::from)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(sheet.as_slice());
    let headers = csv_reader.headers()?.clone();

    let mut scores = Vec::new();
    let mut record = csv::StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let line = record
            .position()
            .map_or(0, |position| record_start_line(&sheet, position));
        let row: ScoreRow = record.deserialize(Some(&headers))?;
        let value = parse_cell_value(&row.value).ok_or_else(|| ImportError::InvalidValue {
            line,
            raw: row.value.clone(),
        })?;

        scores.push(Score {
            hypothesis_id: HypothesisId(row.hypothesis_id),
            evidence_id: EvidenceId(row.evidence_id),
            value,
            notes: row.notes,
        });
    }

    Ok(scores)
}

pub fn import_scores_from_path(path: impl AsRef<Path>) -> Result<Vec<Score>, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    import_scores(file)
}

/// Line on which the record read from `position` starts. The reader stamps the position
/// before it skips blank lines and the pending `\n` of a CRLF terminator.
fn record_start_line(sheet: &[u8], position: &csv::Position) -> u64 {
    let offset = usize::try_from(position.byte())
        .map_or(sheet.len(), |offset| offset.min(sheet.len()));
    let skipped_newlines = sheet[offset..]
        .iter()
        .copied()
        .take_while(|byte| matches!(byte, b'\r' | b'\n'))
        .filter(|byte| *byte == b'\n')
        .count();
    position.line() + skipped_newlines as u64
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    hypothesis_id: String,
    evidence_id: String,
    value: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
}

fn parse_cell_value(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i32>() {
        return Some(value);
    }

    trimmed
        .parse::<LegacyAssessment>()
        .ok()
        .map(LegacyAssessment::score_value)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
