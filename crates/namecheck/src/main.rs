//! namecheck - generate a target name and fuzzy-verify candidates against it
//!
//! CHANGELOG:
//! - 10/14/2026 - Added check and show commands, --threshold flag
//! - 10/14/2026 - Initial CLI with generate and verify

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use namecheck::commands;
use namecheck::generator::PoolGenerator;
use namecheck::output::{self, OutputControls};
use namecheck::store::FileStore;
use namecheck_core::{DecisionPolicy, Verifier};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate a target name and verify candidate names against it.
#[derive(Parser, Debug)]
#[command(name = "namecheck")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Target store file (default: $NAMECHECK_STORE_PATH or the platform data dir)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Match threshold between 0 and 1
    #[arg(long, global = true)]
    threshold: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new target name and store it as the latest
    Generate {
        /// Free-form prompt describing the desired name
        #[arg(required = true)]
        prompt: Vec<String>,
    },

    /// Verify a candidate name against the latest target name
    Verify {
        /// Candidate name
        #[arg(required = true)]
        candidate: Vec<String>,
    },

    /// Verify a candidate against an explicit target (no stored state)
    Check {
        /// Target name
        target: String,

        /// Candidate name
        candidate: String,
    },

    /// Print the latest target name
    Show,
}

fn build_verifier(threshold: Option<f64>) -> Result<Verifier> {
    let policy = match threshold {
        Some(value) => DecisionPolicy::with_threshold(value)
            .ok_or_else(|| anyhow!("Threshold must be between 0 and 1, got {}", value))?,
        None => DecisionPolicy::default(),
    };
    Ok(Verifier::new(policy))
}

fn run(cli: Cli, output: &OutputControls) -> Result<()> {
    let mut store = match cli.store {
        Some(path) => FileStore::new(path),
        None => FileStore::open_default(),
    };
    tracing::debug!(path = ?store.path(), "using target store");

    match cli.command {
        Command::Generate { prompt } => {
            commands::generate::run(&PoolGenerator, &mut store, &prompt.join(" "), output)
        }
        Command::Verify { candidate } => {
            let verifier = build_verifier(cli.threshold)?;
            commands::verify::run_latest(&store, &verifier, &candidate.join(" "), output)
        }
        Command::Check { target, candidate } => {
            let verifier = build_verifier(cli.threshold)?;
            commands::verify::run_pair(&verifier, &target, &candidate, output)
        }
        Command::Show => commands::show::run(&store, output),
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Build output controls from global flags
    let output_controls = OutputControls {
        json: cli.json || cli.compact,
        compact: cli.compact,
    };

    match run(cli, &output_controls) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if output_controls.json {
                println!("{}", output::format_error(&e.to_string(), commands::error_code(&e)));
            } else {
                eprintln!("Error: {}", e);
                if let Some(hint) = commands::hint(&e) {
                    eprintln!("{}", hint);
                }
            }
            ExitCode::from(commands::exit_code(&e))
        }
    }
}
