//! Snapshot of the CI runner environment

use std::path::PathBuf;

pub const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";
pub const SHA_VAR: &str = "GITHUB_SHA";
pub const OUTPUT_VAR: &str = "GITHUB_OUTPUT";

/// CI variables read once at startup
///
/// Empty variables are treated the same as unset ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnv {
    pub event_name: String,
    pub event_path: Option<PathBuf>,
    pub sha: String,
    pub output_path: Option<PathBuf>,
}

impl CiEnv {
    /// Reads the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the snapshot from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str| lookup(key).map(|v| v.trim().to_string()).unwrap_or_default();
        let path = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            event_name: text(EVENT_NAME_VAR),
            event_path: path(EVENT_PATH_VAR),
            sha: text(SHA_VAR),
            output_path: path(OUTPUT_VAR),
        }
    }
}
