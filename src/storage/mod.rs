//! # Storage Layer
//!
//! Files read from the repository being inspected.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | `detect-solutions.toml` |
//! | Inventory | JSON | `architecture/governance/config/manager-solutions.json` |
//!
//! Both are optional. Only an explicitly requested config file that is
//! missing or malformed is an error.

mod config;
mod inventory_file;

pub use config::{Config, ConfigError, ConfigFile, CONFIG_FILE_NAME, DEFAULT_INVENTORY_PATH, DEFAULT_REMOTE};
pub use inventory_file::{load_inventory, read_inventory, InventoryError};
