//! filetree CLI
//!
//! Lists, filters, deletes and sanitizes files from the command line.

mod cli;
mod commands;
mod error;
mod logging;

use std::io::Write;

use clap::Parser;
use colored::Colorize;
use filetree_fs::{ConfigStore, ErrorCode, Settings};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.code());
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    let settings = ConfigStore::new().load_settings(cli.config.as_deref())?;
    let mut stdout = std::io::stdout().lock();
    execute_command(cli.command, &settings, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn execute_command(cmd: Commands, settings: &Settings, out: &mut impl Write) -> Result<()> {
    match cmd {
        Commands::List {
            path,
            file_type,
            canonical,
            json,
        } => commands::run_list(out, &path, file_type.as_deref(), canonical, json),
        Commands::Type { path } => commands::run_type(out, &path),
        Commands::Delete {
            path,
            policy,
            dry_run,
            json,
        } => commands::run_delete(
            out,
            &path,
            policy.into(),
            dry_run || settings.delete.dry_run,
            json,
        ),
        Commands::Sanitize { name, replacement } => {
            let replacement = replacement
                .as_deref()
                .unwrap_or(&settings.sanitize.replacement);
            commands::run_sanitize(out, &name, replacement)
        }
    }
}
