//! Detection results in their emitted form

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::{Inventory, Solution, SolutionRoot};

/// Solutions and paths touched by a commit range
///
/// Both lists are sorted by path and hold each path once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Detection {
    pub solutions: Vec<Solution>,
    pub paths: Vec<String>,
}

impl Detection {
    /// Builds the result from a set of root strings
    ///
    /// Roots that do not parse as a solution shape are dropped.
    pub fn from_roots<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_path: BTreeMap<String, Solution> = BTreeMap::new();

        for root in roots {
            match root.as_ref().parse::<SolutionRoot>() {
                Ok(parsed) => {
                    by_path.insert(parsed.path.clone(), parsed.into());
                }
                Err(e) => tracing::debug!(error = %e, "Skipping root"),
            }
        }

        let paths: BTreeSet<String> = by_path.keys().cloned().collect();

        Self {
            solutions: by_path.into_values().collect(),
            paths: paths.into_iter().collect(),
        }
    }

    /// Applies inventory metadata to every solution
    pub fn enrich(self, inventory: &Inventory) -> Self {
        Self {
            solutions: inventory.enrich(self.solutions),
            paths: self.paths,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Compact JSON of the solutions array
    pub fn solutions_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.solutions)
    }

    /// Compact JSON of the paths array
    pub fn paths_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.paths)
    }
}
