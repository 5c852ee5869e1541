//! Step outputs for the CI runner
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT` as
//! `key=value` lines. When no file is configured nothing is written.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::domain::Detection;

/// Appends `key=value` lines to the runner's output file
#[derive(Debug, Clone)]
pub struct StepOutput {
    path: Option<PathBuf>,
}

impl StepOutput {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Appends all entries in one write; returns false when no file is configured
    pub fn append(&self, entries: &[(&str, &str)]) -> io::Result<bool> {
        let Some(path) = &self.path else {
            return Ok(false);
        };

        let mut content = String::new();
        for (key, value) in entries {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(content.as_bytes())?;
        Ok(true)
    }

    /// Writes the `solutions` and `paths` outputs
    pub fn write_detection(&self, detection: &Detection) -> io::Result<bool> {
        let solutions = detection.solutions_json()?;
        let paths = detection.paths_json()?;
        self.append(&[("solutions", solutions.as_str()), ("paths", paths.as_str())])
    }
}
