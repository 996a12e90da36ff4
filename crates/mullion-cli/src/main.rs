mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{columns, config, defaults, phone, Context};
use crate::error::{exit_code_for, report_error};

#[derive(Debug, Parser)]
#[command(name = "mullion", version, about = "mullion CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Phone(phone::PhoneArgs),
    Columns(columns::ColumnsArgs),
    Defaults(defaults::DefaultsArgs),
    Config(config::ConfigArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = mullion_config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match mullion_config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let ctx = Context {
        json,
        config: &app_config,
    };

    match command {
        Command::Phone(args) => phone::normalize(&ctx, args),
        Command::Columns(args) => columns::preview(&ctx, args),
        Command::Defaults(args) => defaults::show(&ctx, args),
        Command::Config(args) => config::show(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
