//! Command-line parsing for the price estimator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the pipeline code.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "homeval",
    version,
    about = "Washington D.C. residential property price estimator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one property record and print its price range.
    Predict(PredictArgs),
    /// Score a CSV of property records; bad rows are reported, good rows scored.
    Batch(BatchArgs),
    /// Print the 23 input fields and their valid domains.
    Schema,
}

/// Output rendering for `predict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable message with the display policy applied.
    Text,
    /// The raw (lower, point, upper) triple as JSON.
    Json,
}

#[derive(Debug, Parser, Clone)]
pub struct PredictArgs {
    /// Path to a property record JSON file (wire field names, see `schema`).
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Score the built-in sample record instead of reading a file.
    #[arg(long, default_value_t = false)]
    pub sample: bool,

    /// Write the record being scored as JSON (a template for --input).
    #[arg(long)]
    pub emit: Option<PathBuf>,

    /// Path to the model artifact.
    #[arg(short, long, default_value = "model/dc-residential-v1.json")]
    pub model: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override the artifact's prediction-interval half-width (dollars).
    #[arg(long)]
    pub interval: Option<f64>,
}

#[derive(Debug, Parser, Clone)]
pub struct BatchArgs {
    /// Path to a CSV of property records (one row per property).
    pub input: PathBuf,

    /// Path to the model artifact.
    #[arg(short, long, default_value = "model/dc-residential-v1.json")]
    pub model: PathBuf,

    /// Write scored results to this CSV path.
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Override the artifact's prediction-interval half-width (dollars).
    #[arg(long)]
    pub interval: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_defaults() {
        let cli = Cli::parse_from(["homeval", "predict", "--sample"]);
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert!(args.sample);
        assert!(args.input.is_none());
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.model, PathBuf::from("model/dc-residential-v1.json"));
    }

    #[test]
    fn batch_takes_positional_input() {
        let cli = Cli::parse_from(["homeval", "batch", "listings.csv", "--export", "out.csv"]);
        let Command::Batch(args) = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(args.input, PathBuf::from("listings.csv"));
        assert_eq!(args.export, Some(PathBuf::from("out.csv")));
    }
}
