//! Configuration handling for solution detection
//!
//! Configuration is read from `detect-solutions.toml` at the repository
//! root, or from an explicitly named file. Command-line flags override
//! anything set here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name, looked up in the repository root
pub const CONFIG_FILE_NAME: &str = "detect-solutions.toml";

/// Default inventory location, relative to the repository root
pub const DEFAULT_INVENTORY_PATH: &str = "architecture/governance/config/manager-solutions.json";

pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Values as written in the config file; all optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Inventory JSON path, relative to the repository root
    pub inventory: Option<PathBuf>,

    /// Remote fetched before diffing
    pub remote: Option<String>,

    /// Whether to fetch before diffing
    pub fetch: Option<bool>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        if let Some(remote) = &file.remote {
            if remote.trim().is_empty() {
                return Err(ConfigError::Invalid("remote must not be empty".to_string()));
            }
        }

        Ok(file)
    }
}

/// Effective configuration for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub repo_root: PathBuf,
    pub inventory_path: PathBuf,
    pub remote: String,
    pub fetch: bool,
}

impl Config {
    /// Built-in defaults for a repository
    pub fn defaults(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
            inventory_path: repo_root.join(DEFAULT_INVENTORY_PATH),
            remote: DEFAULT_REMOTE.to_string(),
            fetch: true,
        }
    }

    /// Loads configuration for a repository
    ///
    /// An explicit file must exist and parse. The implicit
    /// `detect-solutions.toml` is optional; if it cannot be read or parsed
    /// the defaults are used.
    pub fn load(repo_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::read_file(path)?
            }
            None => {
                let path = repo_root.join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::read_file(&path).unwrap_or_else(|e| {
                        let error = format!("{:#}", e);
                        tracing::warn!(%error, "Ignoring unusable config file");
                        ConfigFile::default()
                    })
                } else {
                    ConfigFile::default()
                }
            }
        };

        Ok(Self::defaults(repo_root).apply(file))
    }

    fn read_file(path: &Path) -> Result<ConfigFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        ConfigFile::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Layers file values over the current ones
    pub fn apply(mut self, file: ConfigFile) -> Self {
        if let Some(inventory) = file.inventory {
            self.inventory_path = self.resolve(&inventory);
        }
        if let Some(remote) = file.remote {
            self.remote = remote.trim().to_string();
        }
        if let Some(fetch) = file.fetch {
            self.fetch = fetch;
        }
        self
    }

    /// Resolves a path against the repository root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.repo_root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::defaults(Path::new("/repo"));

        assert_eq!(
            config.inventory_path,
            PathBuf::from("/repo/architecture/governance/config/manager-solutions.json")
        );
        assert_eq!(config.remote, "origin");
        assert!(config.fetch);
    }

    #[test]
    fn parse_config_file() {
        let toml = r#"
inventory = "governance/inventory.json"
remote = "upstream"
fetch = false
"#;

        let file = ConfigFile::parse(toml).unwrap();
        let config = Config::defaults(Path::new("/repo")).apply(file);

        assert_eq!(config.inventory_path, PathBuf::from("/repo/governance/inventory.json"));
        assert_eq!(config.remote, "upstream");
        assert!(!config.fetch);
    }

    #[test]
    fn absolute_inventory_kept() {
        let file = ConfigFile::parse(r#"inventory = "/etc/inventory.json""#).unwrap();
        let config = Config::defaults(Path::new("/repo")).apply(file);

        assert_eq!(config.inventory_path, PathBuf::from("/etc/inventory.json"));
    }

    #[test]
    fn reject_bad_config() {
        assert!(matches!(ConfigFile::parse("fetch = \"yes\""), Err(ConfigError::Parse(_))));
        assert!(matches!(ConfigFile::parse("colour = 1"), Err(ConfigError::Parse(_))));
        assert!(matches!(ConfigFile::parse("remote = \" \""), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn implicit_file_is_optional() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path(), None).unwrap();

        assert_eq!(config, Config::defaults(dir.path()));
    }

    #[test]
    fn implicit_file_is_read() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "fetch = false\n").unwrap();

        let config = Config::load(dir.path(), None).unwrap();
        assert!(!config.fetch);
    }

    #[test]
    fn malformed_implicit_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "remotes = \"upstream\"\n").unwrap();

        let config = Config::load(dir.path(), None).unwrap();
        assert_eq!(config, Config::defaults(dir.path()));
    }

    #[test]
    fn malformed_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "remote = \" \"\n").unwrap();

        assert!(Config::load(dir.path(), Some(&path)).is_err());
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(Config::load(dir.path(), Some(&missing)).is_err());
    }
}
