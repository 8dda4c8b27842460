use crate::infra::{
    load_snapshot, parse_credibility, parse_scale, parse_source, parse_weighting,
};
use ach_engine::analysis::{
    convert_scale, get_score_option, max_magnitude, score_options, weight_breakdown,
    AnalysisReport, CredibilityRating, EvaluationOptions, EvidenceItem, EvidenceWeighting,
    QualityInputs, ScaleType, ScoreAnalysisResponse, ScoringEngine, SourceClassification,
};
use ach_engine::config::AppConfig;
use ach_engine::error::AppError;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Analysis snapshot (JSON with scale_type, hypotheses, evidence, scores)
    #[arg(long)]
    pub(crate) analysis: PathBuf,
    /// Replace the snapshot's scores with a hypothesis_id,evidence_id,value CSV sheet
    #[arg(long)]
    pub(crate) scores_csv: Option<PathBuf>,
    /// Evidence weighting: uniform or quality
    #[arg(long, default_value = "uniform", value_parser = parse_weighting)]
    pub(crate) weighting: EvidenceWeighting,
    /// Number of diagnostic evidence items to list (defaults to ACH_DIAGNOSTIC_LIMIT)
    #[arg(long)]
    pub(crate) diagnostic_limit: Option<usize>,
    /// Emit the report as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ConvertArgs {
    /// Scale the values are currently on
    #[arg(long, value_parser = parse_scale)]
    pub(crate) from: ScaleType,
    /// Scale to convert into
    #[arg(long, value_parser = parse_scale)]
    pub(crate) to: ScaleType,
    /// Values to convert
    #[arg(required = true, allow_hyphen_values = true)]
    pub(crate) values: Vec<i32>,
}

#[derive(Args, Debug)]
pub(crate) struct ScaleArgs {
    /// Only print one scale
    #[arg(long, value_parser = parse_scale)]
    pub(crate) scale: Option<ScaleType>,
}

#[derive(Args, Debug)]
pub(crate) struct WeightArgs {
    /// Source classification: primary, secondary, anecdotal, or forged
    #[arg(long, value_parser = parse_source)]
    pub(crate) source: Option<SourceClassification>,
    /// Information credibility from 1 (confirmed) to 6 (improbable)
    #[arg(long, value_parser = parse_credibility)]
    pub(crate) credibility: Option<CredibilityRating>,
    /// Evidence is corroborated by independent reporting
    #[arg(long)]
    pub(crate) corroborated: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        analysis,
        scores_csv,
        weighting,
        diagnostic_limit,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = ScoringEngine::new(config.scoring);
    let snapshot = load_snapshot(&analysis, scores_csv.as_deref())?;
    let report = engine.evaluate(
        &snapshot,
        EvaluationOptions {
            weighting,
            diagnostic_limit,
        },
    )?;

    if json {
        let response = ScoreAnalysisResponse {
            generated_at: Utc::now(),
            summary: report.summary(),
            report,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render_report(&report);
    }

    Ok(())
}

pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), AppError> {
    println!("{} -> {}", args.from, args.to);
    for value in args.values {
        let converted = convert_scale(value, args.from, args.to)?;
        let label = get_score_option(args.to, converted)?.label;
        println!("{value:>4} -> {converted:>4}  {label}");
    }
    Ok(())
}

pub(crate) fn run_scales(args: ScaleArgs) -> Result<(), AppError> {
    let scales = match args.scale {
        Some(scale) => vec![scale],
        None => vec![ScaleType::Logarithmic, ScaleType::Linear],
    };

    for (index, scale) in scales.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        render_scale(scale);
    }
    Ok(())
}

pub(crate) fn run_weight(args: WeightArgs) -> Result<(), AppError> {
    let item = EvidenceItem::new("cli", "Command line evidence").with_quality(QualityInputs {
        credibility: args.credibility,
        source: args.source,
        corroborated: args.corroborated,
    });
    let breakdown = weight_breakdown(&item);

    if breakdown.components.is_empty() {
        println!("No quality inputs supplied; weight {:.2}", breakdown.weight);
        return Ok(());
    }

    for component in &breakdown.components {
        println!("  x{:.2}  {}", component.factor, component.notes);
    }
    println!("Evidence weight: {:.2}", breakdown.weight);
    Ok(())
}

pub(crate) fn render_scale(scale: ScaleType) {
    println!("{} scale (max magnitude {})", scale, max_magnitude(scale));
    for option in score_options(scale) {
        println!(
            "  {:>4}  {:<24} {}",
            option.value, option.label, option.description
        );
    }
}

pub(crate) fn render_report(report: &AnalysisReport) {
    println!(
        "ACH analysis ({} scale, {} weighting)",
        report.scale_type,
        report.weighting.label()
    );
    println!(
        "Confidence: {} (gap {:.2}; high > {:.2}, medium > {:.2})",
        report.confidence.level.label(),
        report.confidence.gap,
        report.confidence.thresholds.high,
        report.confidence.thresholds.medium
    );

    println!("Ranking:");
    for entry in &report.ranking {
        println!(
            "  {}. {} {} | weighted {:.2} | raw {} | {} for / {} against / {} neutral",
            entry.rank,
            entry.hypothesis_id,
            entry.text,
            entry.weighted_total,
            entry.raw_total,
            entry.supporting_count,
            entry.contradicting_count,
            entry.neutral_count
        );
    }

    if report.diagnostic_evidence.is_empty() {
        println!("Most diagnostic evidence: none");
    } else {
        println!("Most diagnostic evidence:");
        for entry in &report.diagnostic_evidence {
            println!(
                "  - {} {}: {} distinct values across {} scores",
                entry.evidence_id, entry.title, entry.distinct_values, entry.scored_count
            );
        }
    }

    println!(
        "Coverage: {}/{} cells ({:.0}%)",
        report.coverage.scored_cells,
        report.coverage.total_cells,
        report.coverage.ratio * 100.0
    );
}
