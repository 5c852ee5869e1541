//! Domain models for solution detection
//!
//! Contains the path classification and enrichment rules without any I/O concerns.

mod inventory;
mod range;
mod report;
mod solution;

pub use inventory::{Inventory, InventoryDocument, InventoryItem};
pub use range::{is_zero_sha, ChangeRange, GIT_EMPTY_TREE};
pub use report::Detection;
pub use solution::{roots_from_changed_files, root_of, Solution, SolutionError, SolutionRoot, Stack};
