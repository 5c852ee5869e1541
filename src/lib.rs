//! Solution Detect - finds the monorepo solutions touched by a commit range
//!
//! Changed files are mapped to solution roots by path shape
//! (`backend/{platform}/{framework}/{type}/{name}` and
//! `frontend/{platform}/{type}/{name}`), enriched from a governance
//! inventory and emitted as CI step outputs.

pub mod ci;
pub mod cli;
pub mod domain;
pub mod git;
pub mod storage;
pub mod util;

pub use domain::{ChangeRange, Detection, Inventory, Solution, SolutionRoot, Stack};
