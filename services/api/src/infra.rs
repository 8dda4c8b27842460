use ach_engine::analysis::{
    import_scores_from_path, AnalysisSnapshot, CredibilityRating, EvidenceWeighting, ScaleType,
    SourceClassification,
};
use ach_engine::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_scale(raw: &str) -> Result<ScaleType, String> {
    raw.parse::<ScaleType>().map_err(|err| err.to_string())
}

pub(crate) fn parse_weighting(raw: &str) -> Result<EvidenceWeighting, String> {
    raw.parse::<EvidenceWeighting>()
}

pub(crate) fn parse_source(raw: &str) -> Result<SourceClassification, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "primary" => Ok(SourceClassification::Primary),
        "secondary" => Ok(SourceClassification::Secondary),
        "anecdotal" => Ok(SourceClassification::Anecdotal),
        "forged" => Ok(SourceClassification::Forged),
        other => Err(format!(
            "unknown source '{other}' (expected primary, secondary, anecdotal, or forged)"
        )),
    }
}

pub(crate) fn parse_credibility(raw: &str) -> Result<CredibilityRating, String> {
    let value = raw
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("failed to parse '{raw}' as a rating from 1 to 6 ({err})"))?;
    CredibilityRating::try_from(value).map_err(|err| err.to_string())
}

/// Read a JSON analysis snapshot, optionally replacing its cells with a CSV score sheet.
pub(crate) fn load_snapshot(
    path: &Path,
    scores_csv: Option<&Path>,
) -> Result<AnalysisSnapshot, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let mut snapshot: AnalysisSnapshot = serde_json::from_str(&raw)?;

    if let Some(sheet) = scores_csv {
        snapshot.scores = import_scores_from_path(sheet)?;
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scale_aliases() {
        assert_eq!(parse_scale("fibonacci"), Ok(ScaleType::Logarithmic));
        assert_eq!(parse_scale("LINEAR"), Ok(ScaleType::Linear));
        assert!(parse_scale("quadratic")
            .expect_err("unknown scale")
            .contains("quadratic"));
    }

    #[test]
    fn parses_quality_inputs() {
        assert_eq!(parse_source(" Forged "), Ok(SourceClassification::Forged));
        assert!(parse_source("rumor").is_err());
        assert_eq!(parse_credibility("3"), Ok(CredibilityRating::PossiblyTrue));
        assert!(parse_credibility("9").is_err());
        assert!(parse_credibility("high").is_err());
    }

    #[test]
    fn missing_snapshot_is_an_io_error() {
        let result = load_snapshot(Path::new("/nonexistent/analysis.json"), None);
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
