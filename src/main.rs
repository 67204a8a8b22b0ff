use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tpe_schema_sheet::common::{Error, Result};
use tpe_schema_sheet::report::{self, DEFAULT_OUTPUT_FILE};

/// Generate the TPE matching-entities database schema workbook.
#[derive(Debug, Parser)]
#[command(name = "tpe-schema-sheet", version, about)]
struct Args {
    /// Output path for the workbook
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("tpe-schema-sheet error: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    init_tracing(args.verbose)?;

    let path = report::generate(&args.output)?;
    println!("Spreadsheet created successfully: {}", path.display());
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TPE_SCHEMA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // stdout carries only the success line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| {
            Error::Other(format!("failed to initialize tracing subscriber: {error}"))
        })?;

    Ok(())
}
