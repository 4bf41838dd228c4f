mod commands;
mod logging;
mod progress;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use colored::*;
use commands::{AuditArgs, Cli, Commands};
use dotenv::dotenv;
use pdf_sweep_core::{remover, validate_document, AuditConfig, Auditor, LopdfPageCounter, Validity};
use progress::ConsoleReporter;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let config = pdf_sweep_core::config::load_configuration()
        .context("Error loading configuration")?;

    match args.command {
        None => run_audit(config, AuditArgs::default())?,
        Some(Commands::Audit(audit_args)) => run_audit(config, audit_args)?,
        Some(Commands::Check { files }) => run_check(&files)?,
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
    }

    Ok(())
}

fn run_audit(mut config: AuditConfig, args: AuditArgs) -> anyhow::Result<()> {
    if let Some(root) = args.root {
        config.root = root;
    }
    if let Some(extension) = args.extension {
        config.extension = extension;
    }
    config.delete_invalid |= args.delete_invalid;

    if config.delete_invalid && !args.yes {
        let prompt = format!(
            "Invalid files under {} will be PERMANENTLY deleted. Continue?",
            config.root.display()
        );
        if !prompt_confirm(&prompt, Some(false))? {
            warn!("Deletion not confirmed, auditing without deleting");
            config.delete_invalid = false;
        }
    }

    let reporter = ConsoleReporter::new();
    let result = Auditor::new(config).run(&reporter)?;

    info!(
        "{} files audited, {} invalid, {} deleted, {} with uppercase names",
        format!("{}", result.files_scanned).green(),
        format!("{}", result.invalid_files.len()).red(),
        format!("{}", result.deleted_files.len()).red(),
        format!("{}", result.uppercase_files.len()).yellow(),
    );

    Ok(())
}

fn run_check(files: &[PathBuf]) -> anyhow::Result<()> {
    let mut missing = 0;

    for path in files {
        if !remover::file_exists(path) {
            error!("{} is not a file", path.display());
            missing += 1;
            continue;
        }

        match validate_document(&LopdfPageCounter, path) {
            Validity::Valid { pages } => {
                println!("'{}' is valid ({} pages)", path.display(), pages);
            }
            Validity::Invalid(reason) => progress::print_invalid(path, &reason),
        }
    }

    if missing > 0 {
        bail!("{} of {} paths could not be checked", missing, files.len());
    }

    Ok(())
}

/// Asks on stderr so stdout carries only audit diagnostics.
fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => eprint!("{} (Y/n): ", prompt),
            Some(false) | None => eprint!("{} (y/N): ", prompt),
        }
        io::stderr().flush()?;

        if io::stdin().read_line(&mut input)? == 0 {
            // Closed stdin cannot answer; fall back to the default or refuse.
            eprintln!();
            return Ok(default.unwrap_or(false));
        }

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
