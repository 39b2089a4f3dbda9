use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use mpulog_core::{Decoder, Outcome, Record};

#[derive(Parser, Debug)]
#[command(name = "mpulog")]
#[command(version)]
#[command(
    about = "Decode MPU telemetry log files into tab-separated records.",
    long_about = None,
    after_help = "Examples:\n  mpulog session.log\n  mpulog session.log --json\n  mpulog session.log --quiet > records.tsv"
)]
struct Cli {
    /// Path to an MPU log file
    input: PathBuf,

    /// Emit one JSON object per record instead of tab-separated text
    #[arg(long)]
    json: bool,

    /// Suppress corrupted-entry warnings
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cmd_decode(cli.input, cli.json, cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(input: PathBuf, json: bool, quiet: bool) -> Result<(), CliError> {
    validate_input_file(&input)?;

    let mut decoder = Decoder::open(&input)
        .with_context(|| format!("Failed to open log file: {}", input.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    loop {
        let outcome = decoder
            .next_outcome()
            .with_context(|| format!("Failed to read log file: {}", input.display()))?;
        match outcome {
            Some(Outcome::Record(record)) => write_record(&mut out, &record, json)?,
            Some(Outcome::Corrupted) => {
                // Corruption never aborts the run; the rest of the log is
                // still decoded and the exit status stays zero.
                if !quiet {
                    eprintln!("warning: corrupted entry found");
                }
            }
            None => break,
        }
    }
    out.flush().context("Failed to write output")?;
    Ok(())
}

fn write_record(out: &mut impl Write, record: &Record, json: bool) -> Result<(), CliError> {
    if json {
        let line = serde_json::to_string(record).context("JSON serialization failed")?;
        writeln!(out, "{}", line).context("Failed to write output")?;
        return Ok(());
    }

    let mut line = record.timestamp.to_string();
    for channel in record.channels {
        line.push('\t');
        line.push_str(&channel.to_string());
    }
    writeln!(out, "{}", line).context("Failed to write output")?;
    Ok(())
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass the path to an MPU log file".to_string()),
        ));
    }
    let meta = fs::metadata(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass the path to an MPU log file".to_string()),
        ));
    }
    Ok(())
}
