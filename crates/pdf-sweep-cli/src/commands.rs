use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pdf-sweep")]
#[command(about = "Find broken PDFs and badly named files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a directory, validate every matching file and check file names
    Audit(AuditArgs),
    /// Validate individual files
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Default, Args)]
pub struct AuditArgs {
    /// Directory to scan (overrides configuration)
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// File name suffix to audit (overrides configuration)
    #[arg(long)]
    pub extension: Option<String>,
    /// Delete files that fail validation
    #[arg(long)]
    pub delete_invalid: bool,
    /// Skip the deletion confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
