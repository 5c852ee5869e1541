//! The detection pipeline
//!
//! resolve range -> fetch -> diff -> classify -> enrich -> emit

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::output::Output;
use crate::ci::{resolve_range, CiEnv, StepOutput};
use crate::domain::{roots_from_changed_files, ChangeRange, Detection, Inventory};
use crate::git::{ChangeSource, Git};
use crate::storage::{load_inventory, Config};

/// Inputs of a detection run, as given on the command line
#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
    pub base: Option<String>,
    pub head: Option<String>,
    pub repo: PathBuf,
    pub inventory: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub remote: Option<String>,
    pub no_fetch: bool,
}

impl DetectOptions {
    /// Loads the config file and applies command-line overrides
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load(&self.repo, self.config.as_deref())?;

        if let Some(inventory) = &self.inventory {
            config.inventory_path = config.resolve(inventory);
        }
        if let Some(remote) = self.remote.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            config.remote = remote.to_string();
        }
        if self.no_fetch {
            config.fetch = false;
        }

        Ok(config)
    }
}

/// Finds the solutions touched by `range` and attaches inventory metadata
pub fn detect(range: &ChangeRange, source: &impl ChangeSource, inventory: &Inventory) -> Detection {
    source.refresh();

    let changed = source.changed_files(range);
    let roots = roots_from_changed_files(&changed);
    tracing::debug!(files = changed.len(), roots = roots.len(), "Classified changed files");

    Detection::from_roots(&roots).enrich(inventory)
}

/// Runs detection against the process environment and reports the result
pub fn run(options: &DetectOptions, output: &Output) -> Result<Detection> {
    let config = options.config().context("Failed to load configuration")?;
    let env = CiEnv::from_env();

    let range = resolve_range(options.base.as_deref(), options.head.as_deref(), &env)?;
    output.range(&range);

    let git = Git::new(&config.repo_root)
        .with_remote(config.remote.clone())
        .with_fetch(config.fetch);
    let inventory = load_inventory(&config.inventory_path);

    let detection = detect(&range, &git, &inventory);
    if detection.is_empty() {
        tracing::info!("No solutions touched by this range");
    }

    let step_output = StepOutput::new(env.output_path.clone());
    match step_output.write_detection(&detection) {
        Ok(true) => tracing::debug!("Wrote step outputs"),
        Ok(false) => tracing::debug!("No step output file configured"),
        Err(e) => tracing::warn!(error = %e, "Failed to write step outputs"),
    }

    output.detection(&range, &detection);
    Ok(detection)
}
