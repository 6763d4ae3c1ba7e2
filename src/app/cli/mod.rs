//! CLI Adapter.

mod secret;
mod seed;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{AppError, DeploymentTarget, ExitStatus};

#[derive(Parser)]
#[command(name = "authseed")]
#[command(version)]
#[command(
    about = "Generate and inject secrets for Hydra, Kratos and PostgreSQL",
    long_about = None
)]
struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate secrets and write them into every managed file
    #[clap(visible_alias = "s")]
    Seed {
        /// Repository root containing the managed files
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Deployment target (local, kubernetes); overrides the config file
        #[arg(short, long)]
        target: Option<DeploymentTarget>,
        /// Config file to use instead of <root>/authseed.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Replace unusable files with their default template without asking
        #[arg(short, long, conflicts_with = "no_input")]
        yes: bool,
        /// Never prompt; decline every replacement of an unusable file
        #[arg(long)]
        no_input: bool,
        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one random hex secret
    Secret {
        /// Number of random bytes (the hex output is twice as long)
        #[arg(short, long, default_value_t = crate::app::api::DEFAULT_SECRET_BYTES)]
        bytes: usize,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(ExitStatus::Fatal.code());
    }

    let result: Result<i32, AppError> = match cli.command {
        Commands::Seed { root, target, config, yes, no_input, json } => {
            seed::run_seed(seed::SeedArgs { root, target, config, yes, no_input, json })
        }
        Commands::Secret { bytes } => secret::run_secret(bytes).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(ExitStatus::Fatal.code());
        }
    }
}

fn init_logging(verbose: u8) -> Result<(), AppError> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .map_err(|e| AppError::Internal(format!("Failed to create log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
}
