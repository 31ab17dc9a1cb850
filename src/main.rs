//! ADK docs crawler entry point
//!
//! Command-line interface for the crawl, extract, chunk and upload pipeline.

use adk_docs_crawler::config::{env_template, load_config, Config, LoggingConfig};
use adk_docs_crawler::pipeline::run_pipeline;
use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// ADK docs crawler: crawl, extract, chunk and upload documentation
///
/// Walks a documentation site within the configured scope, segments each
/// page into heading sections, splits them into retrieval chunks and pushes
/// the artifacts to object storage.
#[derive(Parser, Debug)]
#[command(name = "adk-docs-crawler")]
#[command(version)]
#[command(about = "Documentation crawl-and-index pipeline", long_about = None)]
struct Cli {
    /// Pipeline command to execute
    #[arg(value_enum)]
    command: Command,

    /// Run the pipeline but keep artifacts local
    #[arg(long)]
    skip_upload: bool,

    /// Path to YAML configuration file
    #[arg(long, value_name = "PATH", default_value = "config.yaml")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// Full pipeline
    Run,
    Crawl,
    Extract,
    Chunk,
    Upload,
    /// Print a .env template for the config's placeholders
    EnvTemplate,
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Command::Run => "run",
            Command::Crawl => "crawl",
            Command::Extract => "extract",
            Command::Chunk => "chunk",
            Command::Upload => "upload",
            Command::EnvTemplate => "env-template",
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.command == Command::EnvTemplate {
        return match handle_env_template(&cli.config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            setup_logging(&LoggingConfig::default(), cli.verbose, cli.quiet);
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    setup_logging(&config.logging, cli.verbose, cli.quiet);
    tracing::info!("Configuration loaded from {}", cli.config.display());

    match cli.command {
        Command::Run => match handle_run(&config, cli.skip_upload).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Pipeline failed: {:?}", e);
                ExitCode::FAILURE
            }
        },
        other => {
            tracing::error!("Command '{}' not yet implemented", other.name());
            tracing::info!("Use 'run' for full pipeline");
            ExitCode::FAILURE
        }
    }
}

/// Maps a configured level name to a tracing directive
fn level_directive(level: &str) -> &'static str {
    match level.trim().to_ascii_uppercase().as_str() {
        "DEBUG" => "debug",
        "WARNING" | "WARN" => "warn",
        "ERROR" | "CRITICAL" => "error",
        "TRACE" => "trace",
        _ => "info",
    }
}

/// Sets up the tracing subscriber from the logging config and CLI verbosity
fn setup_logging(logging: &LoggingConfig, verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => level_directive(&logging.level),
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::new(format!("adk_docs_crawler={},warn", level));

    let file_layer = if logging.log_to_file {
        match open_log_file(Path::new(&logging.log_file)) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false),
            ),
            Err(e) => {
                eprintln!("Could not open log file {}: {}", logging.log_file, e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false),
        )
        .with(file_layer)
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    File::options().create(true).append(true).open(path)
}

/// Handles the `run` command
async fn handle_run(config: &Config, skip_upload: bool) -> anyhow::Result<()> {
    tracing::info!("Crawling {}", config.crawler.base_url);
    if skip_upload {
        tracing::info!("Upload disabled; artifacts stay in {}", config.output.tmp_dir);
    }

    run_pipeline(config, skip_upload)
        .await
        .context("docs crawler pipeline aborted")?;
    Ok(())
}

/// Handles the `env-template` command: prints a .env template without validating
fn handle_env_template(path: &Path) -> anyhow::Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    print!("{}", env_template(&content));
    Ok(())
}
