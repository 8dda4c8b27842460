use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

use super::domain::{AnalysisSnapshot, EvidenceItem, Hypothesis, ScaleType, Score};
use super::error::ScoringError;
use super::matrix::ScoreMatrix;
use super::report::{AnalysisReport, EvaluationOptions};
use super::scale::{max_magnitude, score_options, ScoreOption};
use super::scoring::ScoringEngine;
use super::weighting::{weight_breakdown, EvidenceWeighting, WeightBreakdown};

/// Body of `POST /api/v1/ach/score`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreAnalysisRequest {
    #[serde(default)]
    pub scale_type: Option<ScaleType>,
    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub scores: Vec<Score>,
    #[serde(default)]
    pub weighting: EvidenceWeighting,
    #[serde(default)]
    pub diagnostic_limit: Option<usize>,
}

impl ScoreAnalysisRequest {
    pub fn into_snapshot(self) -> Result<(AnalysisSnapshot, EvaluationOptions), ScoringError> {
        let scale_type = self
            .scale_type
            .ok_or(ScoringError::MissingRequiredField("scale_type"))?;

        let snapshot = AnalysisSnapshot {
            scale_type,
            hypotheses: self.hypotheses,
            evidence: self.evidence,
            scores: self.scores,
        };
        let options = EvaluationOptions {
            weighting: self.weighting,
            diagnostic_limit: self.diagnostic_limit,
        };

        Ok((snapshot, options))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreAnalysisResponse {
    pub generated_at: DateTime<Utc>,
    pub summary: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// Body of `POST /api/v1/ach/convert`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertScoresRequest {
    #[serde(default)]
    pub from_scale: Option<ScaleType>,
    #[serde(default)]
    pub to_scale: Option<ScaleType>,
    #[serde(default)]
    pub scores: Vec<Score>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertScoresResponse {
    pub scale_type: ScaleType,
    pub scores: Vec<Score>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleTableResponse {
    pub scale_type: ScaleType,
    pub max_magnitude: i32,
    pub options: &'static [ScoreOption],
}

/// Router builder exposing the stateless scoring endpoints.
pub fn ach_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/ach/score", post(score_handler))
        .route("/api/v1/ach/convert", post(convert_handler))
        .route("/api/v1/ach/scales/:scale", get(scale_handler))
        .route("/api/v1/ach/evidence/weight", post(weight_handler))
        .with_state(engine)
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    Json(request): Json<ScoreAnalysisRequest>,
) -> Result<Json<ScoreAnalysisResponse>, AppError> {
    let (snapshot, options) = request.into_snapshot()?;

    debug!(
        scale = %snapshot.scale_type,
        hypotheses = snapshot.hypotheses.len(),
        evidence = snapshot.evidence.len(),
        scores = snapshot.scores.len(),
        weighting = options.weighting.label(),
        "scoring analysis snapshot"
    );

    let report = engine.evaluate(&snapshot, options)?;
    Ok(Json(ScoreAnalysisResponse {
        generated_at: Utc::now(),
        summary: report.summary(),
        report,
    }))
}

pub(crate) async fn convert_handler(
    Json(request): Json<ConvertScoresRequest>,
) -> Result<Json<ConvertScoresResponse>, AppError> {
    Ok(Json(convert_scores(request)?))
}

fn convert_scores(request: ConvertScoresRequest) -> Result<ConvertScoresResponse, ScoringError> {
    let from = request
        .from_scale
        .ok_or(ScoringError::MissingRequiredField("from_scale"))?;
    let to = request
        .to_scale
        .ok_or(ScoringError::MissingRequiredField("to_scale"))?;

    let matrix = ScoreMatrix::new(request.scores)?.rescale(from, to)?;
    Ok(ConvertScoresResponse {
        scale_type: to,
        scores: matrix.into_scores(),
    })
}

pub(crate) async fn scale_handler(
    Path(scale): Path<String>,
) -> Result<Json<ScaleTableResponse>, AppError> {
    let scale_type = scale.parse::<ScaleType>()?;
    Ok(Json(ScaleTableResponse {
        scale_type,
        max_magnitude: max_magnitude(scale_type),
        options: score_options(scale_type),
    }))
}

pub(crate) async fn weight_handler(
    Json(evidence): Json<EvidenceItem>,
) -> Result<Json<WeightBreakdown>, AppError> {
    if evidence.id.0.trim().is_empty() {
        return Err(ScoringError::MissingRequiredField("id").into());
    }

    Ok(Json(weight_breakdown(&evidence)))
}
