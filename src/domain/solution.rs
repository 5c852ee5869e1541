//! Solution roots and the records built from them
//!
//! Root shapes:
//! - Backend: `backend/{platform}/{framework}/{type}/{name}`
//! - Frontend: `frontend/{platform}/{type}/{name}` (framework mirrors platform)
//!
//! A changed file belongs to a root when it sits strictly below one of
//! these shapes. Files directly at a shape's level, or in shallower
//! directories, belong to no solution.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SolutionError {
    #[error("Not a solution root: '{0}'")]
    NotARoot(String),
}

fn backend_changed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^backend/[^/]+/[^/]+/[^/]+/[^/]+/").expect("valid regex"))
}

fn frontend_changed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^frontend/[^/]+/[^/]+/[^/]+/").expect("valid regex"))
}

fn backend_root_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^backend/([^/]+)/([^/]+)/([^/]+)/([^/]+)$").expect("valid regex")
    })
}

fn frontend_root_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^frontend/([^/]+)/([^/]+)/([^/]+)$").expect("valid regex"))
}

/// Top-level tree a solution lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stack {
    Backend,
    Frontend,
}

impl Stack {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::Backend => "backend",
            Stack::Frontend => "frontend",
        }
    }

    /// Number of leading path segments that make up a root of this stack
    pub fn root_depth(&self) -> usize {
        match self {
            Stack::Backend => 5,
            Stack::Frontend => 4,
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the solution root a changed file belongs to, if any
///
/// Backend is tested first; a path matching it is never tested against
/// the frontend shape.
pub fn root_of(changed_file: &str) -> Option<String> {
    let stack = if backend_changed_re().is_match(changed_file) {
        Stack::Backend
    } else if frontend_changed_re().is_match(changed_file) {
        Stack::Frontend
    } else {
        return None;
    };

    let root = changed_file
        .split('/')
        .take(stack.root_depth())
        .collect::<Vec<_>>()
        .join("/");
    Some(root)
}

/// Collects the distinct solution roots touched by a set of changed files
pub fn roots_from_changed_files<I, S>(changed: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    changed
        .into_iter()
        .filter_map(|file| root_of(file.as_ref()))
        .collect()
}

/// A root path broken into its naming parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionRoot {
    pub stack: Stack,
    pub platform: String,
    pub framework: String,
    pub kind: String,
    pub name: String,
    pub path: String,
}

impl FromStr for SolutionRoot {
    type Err = SolutionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim_end_matches('/');

        if let Some(caps) = backend_root_re().captures(path) {
            return Ok(Self {
                stack: Stack::Backend,
                platform: caps[1].to_string(),
                framework: caps[2].to_string(),
                kind: caps[3].to_string(),
                name: caps[4].to_string(),
                path: path.to_string(),
            });
        }

        if let Some(caps) = frontend_root_re().captures(path) {
            let platform = caps[1].to_string();
            return Ok(Self {
                stack: Stack::Frontend,
                framework: platform.clone(),
                platform,
                kind: caps[2].to_string(),
                name: caps[3].to_string(),
                path: path.to_string(),
            });
        }

        Err(SolutionError::NotARoot(s.to_string()))
    }
}

/// A discovered solution as emitted to CI
///
/// The naming fields come from the root path. Governance fields are
/// filled in later from the inventory and are omitted from JSON when
/// unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub stack: String,
    pub platform: String,
    pub framework: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_distributor: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<Value>,
}

impl From<SolutionRoot> for Solution {
    fn from(root: SolutionRoot) -> Self {
        Self {
            stack: root.stack.as_str().to_string(),
            platform: root.platform,
            framework: root.framework,
            kind: root.kind,
            name: root.name,
            path: root.path,
            platform_version: None,
            platform_distributor: None,
            status: None,
            docker: None,
        }
    }
}
