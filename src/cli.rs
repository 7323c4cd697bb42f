use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "datescore",
    version,
    about = "Score publication-date guesses by how close they land"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./datescore.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one guess against the actual publication date
    Score(ScoreCommand),
    /// Answer a JSON scoring request read from a file or stdin
    Request(RequestCommand),
    /// Score the reference guesses under the active policy
    Calibrate(CalibrateCommand),
    /// Print the effective scoring policy as TOML
    Policy,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Actual date, YYYY-MM-DD or YYYY-MM
    pub actual: String,
    /// Guessed date, YYYY-MM-DD
    pub guess: String,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ScoreFormat,
}

#[derive(Args)]
pub struct RequestCommand {
    /// Read the request body from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct CalibrateCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: CalibrationFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ScoreFormat {
    Text,
    Json,
    Md,
}

#[derive(Clone, ValueEnum)]
pub enum CalibrationFormat {
    Json,
    Md,
}
