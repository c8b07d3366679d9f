// Rust guideline compliant 2026-10-18

//! Envelope CLI Application
//!
//! Command-line interface for building response envelopes and API
//! documentation examples.

use anyhow::Context;
use clap::Parser;
use envelope_cli::commands::{self, build::BuildArgs};
use envelope_cli::create_formatter;
use envelope_core::{EnvelopeConfig, ResponseBuilder};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt;

#[derive(Parser, Debug)]
#[command(
    name = "envl",
    version,
    about = "Build standardized API response envelopes",
    long_about = "envl builds the standard response envelope for a status and derives API documentation examples from envelope fragments.",
    after_help = "Examples:\n  envl build ok --found 10 --time-ms 20\n  envl build redirect --time-ms 30\n  envl build bad_request --error '{\"field\": \"email\"}'\n  envl docs examples.json --format json\n  envl statuses\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Build an envelope for a status
    Build {
        /// Status name or alias (ok, not_found, unauth, server_err, ...)
        status: String,

        /// Message override
        #[arg(long)]
        message: Option<String>,

        /// Elapsed time in milliseconds
        #[arg(long)]
        time_ms: Option<f64>,

        /// Explicit result count
        #[arg(long)]
        found: Option<u64>,

        /// Payload (JSON)
        #[arg(long)]
        payload: Option<String>,

        /// Error description (JSON)
        #[arg(long)]
        error: Option<String>,
    },

    /// Generate documentation examples from a JSON mapping
    Docs {
        /// Path to the examples file ('-' for stdin)
        input: String,
    },

    /// List known statuses
    Statuses,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = EnvelopeConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    init_tracing(&config.log_level)?;

    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    let formatter = create_formatter(format);

    let result = match cli.command {
        Commands::Build {
            status,
            message,
            time_ms,
            found,
            payload,
            error,
        } => {
            let builder = ResponseBuilder::new(&config);
            let args = BuildArgs {
                status,
                message,
                time_ms,
                found,
                payload,
                error,
            };
            commands::build::execute(&builder, args, formatter.as_ref())
        }
        Commands::Docs { input } => commands::docs::execute(&input, formatter.as_ref()),
        Commands::Statuses => commands::statuses::execute(formatter.as_ref()),
    };

    if let Err(err) = result {
        eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}
