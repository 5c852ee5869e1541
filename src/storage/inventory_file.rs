//! Inventory file loading
//!
//! A missing or unreadable inventory never fails a run; it only means no
//! solution gets governance metadata.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Inventory, InventoryDocument};

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Failed to read inventory {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse inventory {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Reads and indexes an inventory file
pub fn read_inventory(path: &Path) -> Result<Inventory, InventoryError> {
    let content =
        fs::read_to_string(path).map_err(|e| InventoryError::Read(path.to_path_buf(), e))?;
    let doc: InventoryDocument =
        serde_json::from_str(&content).map_err(|e| InventoryError::Parse(path.to_path_buf(), e))?;
    Ok(doc.into())
}

/// Loads the inventory, or an empty one if the file is absent or malformed
pub fn load_inventory(path: &Path) -> Inventory {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No inventory file, skipping enrichment");
        return Inventory::empty();
    }

    match read_inventory(path) {
        Ok(inventory) => {
            tracing::debug!(entries = inventory.len(), "Loaded inventory");
            inventory
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unusable inventory");
            Inventory::empty()
        }
    }
}
