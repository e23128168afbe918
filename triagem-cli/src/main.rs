//! Command-line collaborator for `triagem-detect`. Exercises the engine
//! over a single piece of text or a CSV batch; the engine itself has no
//! knowledge of files, argv, or process exit codes — all of that lives here.

use std::path::PathBuf;
use std::sync::Once;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use triagem_detect::{analyze, analyze_table, Policy};

static INIT: Once = Once::new();

/// Idempotent: safe to call more than once, only the first call takes effect.
fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TRIAGEM_LOG").unwrap_or_else(|_| EnvFilter::new("triagem=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse policy file {path} as TOML: {source}")]
    PolicyToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to read CSV row {row}: {source}")]
    Csv { row: usize, source: csv::Error },
    #[error("text column '{0}' not found in CSV header")]
    MissingColumn(String),
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "triagem")]
#[command(about = "Brazilian-context PII detection and anonymization")]
struct Cli {
    /// Path to a TOML policy file; defaults to the built-in policy.
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single piece of text, printed on the command line.
    Text {
        /// The text to analyze.
        text: String,
    },
    /// Analyze every row of a CSV file's text column.
    Batch {
        /// Path to the input CSV file.
        input: PathBuf,
        /// Name of the column containing the text to analyze.
        #[arg(long, default_value = "texto")]
        column: String,
    },
}

fn load_policy(path: Option<&PathBuf>) -> Result<Policy, CliError> {
    let Some(path) = path else {
        return Ok(Policy::default());
    };
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::PolicyToml {
        path: path.clone(),
        source,
    })
}

fn run_text(text: &str, policy: &Policy) -> Result<(), CliError> {
    let result = analyze(text, policy);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn run_batch(input: &PathBuf, column: &str, policy: &Policy) -> Result<(), CliError> {
    let mut reader = csv::Reader::from_path(input).map_err(|source| CliError::Csv { row: 0, source })?;

    let headers = reader
        .headers()
        .map_err(|source| CliError::Csv { row: 0, source })?
        .clone();
    let column_index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| CliError::MissingColumn(column.to_string()))?;

    let mut rows = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| CliError::Csv { row: row_index + 1, source })?;
        rows.push(record.get(column_index).unwrap_or("").to_string());
    }

    let results = analyze_table(rows.iter().map(String::as_str), policy);
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let policy = load_policy(cli.policy.as_ref())?;

    match &cli.command {
        Commands::Text { text } => run_text(text, &policy),
        Commands::Batch { input, column } => run_batch(input, column, &policy),
    }
}

fn main() -> std::process::ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "triagem run failed");
            eprintln!("Error: {err:?}");
            std::process::ExitCode::FAILURE
        }
    }
}
