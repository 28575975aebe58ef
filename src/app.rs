//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the model artifact (once, at startup)
//! - assembles records from JSON/CSV input
//! - runs the prediction pipeline
//! - prints reports and writes optional exports

use clap::Parser;

use crate::cli::{BatchArgs, Cli, Command, OutputFormat, PredictArgs};
use crate::domain::RawPropertyRecord;
use crate::error::AppError;
use crate::estimator::ScoringArtifact;
use crate::interval::IntervalCalculator;
use crate::io::batch::{RowError, ScoredRow};

pub mod pipeline;

use pipeline::PredictionPipeline;

/// Entry point for the `homeval` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Predict(args) => handle_predict(args),
        Command::Batch(args) => handle_batch(args),
        Command::Schema => handle_schema(),
    }
}

/// Load the artifact and build the pipeline around it.
///
/// Artifact problems are fatal here, before any record is read: a pipeline
/// that cannot estimate serves no request.
fn build_pipeline(
    model: &std::path::Path,
    interval_override: Option<f64>,
) -> Result<PredictionPipeline<ScoringArtifact>, AppError> {
    let artifact = ScoringArtifact::load(model)?;
    let half_width = interval_override.unwrap_or(artifact.interval_half_width);
    Ok(PredictionPipeline::new(artifact, IntervalCalculator::new(half_width)))
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let pipeline = build_pipeline(&args.model, args.interval)?;

    let record = match (&args.input, args.sample) {
        (Some(path), false) => crate::io::record::read_record_json(path)?,
        (None, true) => RawPropertyRecord::sample(),
        (Some(_), true) => {
            return Err(AppError::new(2, "Pass either --input or --sample, not both."));
        }
        (None, false) => {
            return Err(AppError::new(
                2,
                "No record to score: pass --input <record.json> or --sample.",
            ));
        }
    };

    if let Some(path) = &args.emit {
        crate::io::record::write_record_json(path, &record)?;
    }

    let result = pipeline.run(&record)?;

    match args.format {
        OutputFormat::Text => {
            println!("{}", crate::report::format_record(&record));
            println!("{}", crate::report::format_prediction(&result));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| AppError::internal(format!("Failed to serialize result: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let pipeline = build_pipeline(&args.model, args.interval)?;
    let batch = crate::io::batch::load_records(&args.input)?;

    let mut scored: Vec<ScoredRow> = Vec::with_capacity(batch.rows.len());
    let mut row_errors = batch.row_errors;

    for row in batch.rows {
        match pipeline.run(&row.record) {
            Ok(result) => scored.push(ScoredRow {
                line: row.line,
                record: row.record,
                result,
            }),
            Err(e) => row_errors.push(RowError {
                line: row.line,
                message: e.to_string(),
            }),
        }
    }

    // Keep error listings deterministic: parse and validation failures are
    // collected in separate passes, so merge back into line order.
    row_errors.sort_by_key(|e| e.line);

    println!(
        "{}",
        crate::report::format_batch_summary(&scored, &row_errors, batch.rows_read)
    );

    if scored.is_empty() {
        return Err(AppError::new(2, "No valid records remain after validation."));
    }

    if let Some(path) = &args.export {
        crate::io::export::write_results_csv(path, &scored)?;
    }

    Ok(())
}

fn handle_schema() -> Result<(), AppError> {
    println!("{}", crate::report::format_schema(&crate::schema::describe()));
    Ok(())
}
