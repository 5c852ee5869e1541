//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::detect::{self, DetectOptions};
use super::output::{Output, OutputFormat};
use crate::util::{init_logging, LoggingConfig};

#[derive(Parser, Debug)]
#[command(name = "detect-solutions")]
#[command(author, version, about = "Detect modified backend/frontend solutions in a monorepo")]
pub struct Cli {
    /// Base commit SHA (optional)
    #[arg(long, env = "INPUT_BASE_SHA")]
    pub base: Option<String>,

    /// Head commit SHA (optional)
    #[arg(long, env = "INPUT_HEAD_SHA")]
    pub head: Option<String>,

    /// Repository directory to inspect
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Governance inventory JSON (relative to the repository)
    #[arg(long, env = "DETECT_SOLUTIONS_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Config file (defaults to detect-solutions.toml in the repository)
    #[arg(long, env = "DETECT_SOLUTIONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Remote to fetch before diffing
    #[arg(long)]
    pub remote: Option<String>,

    /// Skip fetching remote history
    #[arg(long)]
    pub no_fetch: bool,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    fn options(&self) -> DetectOptions {
        DetectOptions {
            base: self.base.clone(),
            head: self.head.clone(),
            repo: self.repo.clone(),
            inventory: self.inventory.clone(),
            config: self.config.clone(),
            remote: self.remote.clone(),
            no_fetch: self.no_fetch,
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(if cli.verbose {
        LoggingConfig::verbose()
    } else {
        LoggingConfig::default()
    });

    let output = Output::new(cli.format);
    detect::run(&cli.options(), &output)?;

    tracing::debug!("Detection completed");
    Ok(())
}
