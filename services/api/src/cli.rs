use crate::commands::{
    run_convert, run_scales, run_score, run_weight, ConvertArgs, ScaleArgs, ScoreArgs, WeightArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use ach_engine::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ACH Scoring Engine",
    about = "Score, rank, and convert Analysis of Competing Hypotheses matrices",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank hypotheses for an analysis snapshot stored as JSON
    Score(ScoreArgs),
    /// Convert score values between the logarithmic and linear scales
    Convert(ConvertArgs),
    /// Print the points, labels, and descriptions of a scoring scale
    Scales(ScaleArgs),
    /// Explain the quality weight of a single evidence item
    Weight(WeightArgs),
    /// Walk through a complete attribution analysis
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Convert(args) => run_convert(args),
        Command::Scales(args) => run_scales(args),
        Command::Weight(args) => run_weight(args),
        Command::Demo(args) => run_demo(args),
    }
}
