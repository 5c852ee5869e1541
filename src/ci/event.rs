//! Event payload of the triggering CI run
//!
//! Only a handful of fields are read, so the payload stays untyped JSON.
//! Lookups on a missing or malformed payload simply find nothing.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Failed to read event payload {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse event payload {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Parsed event JSON
#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload(Value);

impl Default for EventPayload {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl EventPayload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Reads and parses a payload file
    pub fn read(path: &Path) -> Result<Self, EventError> {
        let content =
            fs::read_to_string(path).map_err(|e| EventError::Read(path.to_path_buf(), e))?;
        let value =
            serde_json::from_str(&content).map_err(|e| EventError::Parse(path.to_path_buf(), e))?;
        Ok(Self(value))
    }

    /// Loads the payload, falling back to an empty object on any problem
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Event payload not found");
            return Self::default();
        }

        Self::read(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring unreadable event payload");
            Self::default()
        })
    }

    /// Looks up a string at a chain of object keys, trimmed
    ///
    /// Returns an empty string when any step is missing, null, or not a string.
    pub fn text_at(&self, keys: &[&str]) -> String {
        keys.iter()
            .try_fold(&self.0, |value, key| value.get(*key))
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    /// `pull_request.base.sha`
    pub fn pull_request_base(&self) -> String {
        self.text_at(&["pull_request", "base", "sha"])
    }

    /// `pull_request.head.sha`
    pub fn pull_request_head(&self) -> String {
        self.text_at(&["pull_request", "head", "sha"])
    }

    /// `before`, the revision a push started from
    pub fn before(&self) -> String {
        self.text_at(&["before"])
    }
}
