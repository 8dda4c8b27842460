use crate::commands::{render_report, render_scale};
use crate::infra::parse_scale;
use ach_engine::analysis::{
    convert_scale, AnalysisSnapshot, CredibilityRating, EvaluationOptions, EvidenceItem,
    EvidenceWeighting, Hypothesis, QualityInputs, ScaleType, Score, ScoreMatrix, ScoringEngine,
    SourceClassification,
};
use ach_engine::config::AppConfig;
use ach_engine::error::AppError;
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Also re-score the analysis after converting it to this scale
    #[arg(long, value_parser = parse_scale)]
    pub(crate) convert_to: Option<ScaleType>,
    /// Print the scale tables before the analysis
    #[arg(long)]
    pub(crate) show_scales: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        convert_to,
        show_scales,
    } = args;

    let config = AppConfig::load()?;
    let engine = ScoringEngine::new(config.scoring);
    let snapshot = attribution_snapshot();

    println!("ACH scoring demo: attributing a ransomware intrusion");
    if show_scales {
        println!();
        render_scale(ScaleType::Logarithmic);
        println!();
        render_scale(ScaleType::Linear);
    }

    println!("\nUniform evidence weights");
    let uniform = engine.evaluate(&snapshot, EvaluationOptions::default())?;
    render_report(&uniform);

    println!("\nQuality-weighted evidence");
    let weighted = engine.evaluate(
        &snapshot,
        EvaluationOptions {
            weighting: EvidenceWeighting::Quality,
            diagnostic_limit: None,
        },
    )?;
    render_report(&weighted);
    println!("{}", weighted.summary());

    if let Some(target) = convert_to.filter(|target| *target != snapshot.scale_type) {
        let scores = ScoreMatrix::new(snapshot.scores.clone())?
            .rescale(snapshot.scale_type, target)?
            .into_scores();
        let converted = AnalysisSnapshot {
            scale_type: target,
            scores,
            ..snapshot.clone()
        };

        println!("\nAfter switching to the {target} scale");
        let report = engine.evaluate(&converted, EvaluationOptions::default())?;
        render_report(&report);

        println!(
            "\nRound-trip drift ({} -> {target} -> {})",
            snapshot.scale_type, snapshot.scale_type
        );
        for score in &snapshot.scores {
            let there = convert_scale(score.value, snapshot.scale_type, target)?;
            let back = convert_scale(there, target, snapshot.scale_type)?;
            if back != score.value {
                println!(
                    "  {}/{}: {} -> {} -> {}",
                    score.hypothesis_id, score.evidence_id, score.value, there, back
                );
            }
        }
    }

    Ok(())
}

fn attribution_snapshot() -> AnalysisSnapshot {
    AnalysisSnapshot {
        scale_type: ScaleType::Logarithmic,
        hypotheses: vec![
            Hypothesis::new("H1", "State-sponsored espionage group"),
            Hypothesis::new("H2", "Financially motivated ransomware crew"),
            Hypothesis::new("H3", "Disgruntled insider"),
        ],
        evidence: vec![
            EvidenceItem::new("E1", "Command servers reused from a prior state campaign")
                .with_quality(QualityInputs {
                    credibility: Some(CredibilityRating::ProbablyTrue),
                    source: Some(SourceClassification::Primary),
                    corroborated: true,
                }),
            EvidenceItem::new("E2", "Ransom note posted to a public leak site"),
            EvidenceItem::new("E3", "Badge logs show late-night access"),
            EvidenceItem::new("E4", "Activity aligned with a foreign working day").with_quality(
                QualityInputs {
                    credibility: Some(CredibilityRating::Doubtful),
                    source: Some(SourceClassification::Anecdotal),
                    corroborated: false,
                },
            ),
        ],
        scores: vec![
            Score::new("H1", "E1", 8),
            Score::new("H2", "E1", -2),
            Score::new("H3", "E1", -5),
            Score::new("H1", "E2", -3),
            Score::new("H2", "E2", 5),
            Score::new("H3", "E2", 0),
            Score::new("H1", "E3", 5),
            Score::new("H2", "E3", 0),
            Score::new("H3", "E3", 2),
            Score::new("H1", "E4", 2),
            Score::new("H2", "E4", -1),
        ],
    }
}
