//! Commit range between two revisions
//!
//! A push that creates a branch reports its `before` revision as a string
//! of zeros. Git has no object for that, so diffs against it are rewritten
//! to use the well-known empty tree instead.

use std::fmt;

/// Object id of git's empty tree
pub const GIT_EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

/// Minimum length of the all-zero "no parent" marker
const ZERO_SHA_MIN_LEN: usize = 40;

/// Returns true if `sha` is the all-zero placeholder git reports for a missing parent
pub fn is_zero_sha(sha: &str) -> bool {
    sha.len() >= ZERO_SHA_MIN_LEN && sha.bytes().all(|b| b == b'0')
}

/// Base and head revisions of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRange {
    base: String,
    head: String,
}

impl ChangeRange {
    /// Creates a new range from already-resolved revisions
    pub fn new(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            head: head.into(),
        }
    }

    /// The base revision as resolved
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The head revision as resolved
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Base revision to hand to `git diff`
    ///
    /// Substitutes [`GIT_EMPTY_TREE`] for the zero placeholder so the diff
    /// lists every path present at head.
    pub fn diff_base(&self) -> &str {
        if is_zero_sha(&self.base) {
            GIT_EMPTY_TREE
        } else {
            &self.base
        }
    }

    /// Returns true if the base is the zero placeholder
    pub fn is_initial_push(&self) -> bool {
        is_zero_sha(&self.base)
    }
}

impl fmt::Display for ChangeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.base, self.head)
    }
}
