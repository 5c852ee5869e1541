//! Base/head resolution
//!
//! Explicit values win when both are given. Otherwise the missing side is
//! filled from the triggering event: pull requests use the PR's base and
//! head commits, everything else uses the push's `before` revision and
//! the run's commit.

use thiserror::Error;

use super::{CiEnv, EventPayload};
use crate::domain::ChangeRange;

pub const PULL_REQUEST_EVENT: &str = "pull_request";

#[derive(Debug, Error, PartialEq)]
pub enum ResolveError {
    #[error("Could not resolve BASE/HEAD. base='{base}' head='{head}' event_name='{event_name}'")]
    Unresolved {
        base: String,
        head: String,
        event_name: String,
    },
}

/// Resolves the commit range for this run
///
/// Blank explicit values count as missing. The event payload is only read
/// when a fallback is needed.
pub fn resolve_range(
    base: Option<&str>,
    head: Option<&str>,
    env: &CiEnv,
) -> Result<ChangeRange, ResolveError> {
    let mut base = base.map(str::trim).unwrap_or_default().to_string();
    let mut head = head.map(str::trim).unwrap_or_default().to_string();

    if !base.is_empty() && !head.is_empty() {
        return Ok(ChangeRange::new(base, head));
    }

    let event = EventPayload::load_or_empty(env.event_path.as_deref());

    if env.event_name == PULL_REQUEST_EVENT {
        if base.is_empty() {
            base = event.pull_request_base();
        }
        if head.is_empty() {
            head = event.pull_request_head();
        }
    } else {
        if base.is_empty() {
            base = event.before();
        }
        if head.is_empty() {
            head = env.sha.clone();
        }
    }

    if base.is_empty() || head.is_empty() {
        return Err(ResolveError::Unresolved {
            base,
            head,
            event_name: env.event_name.clone(),
        });
    }

    tracing::debug!(%base, %head, event = %env.event_name, "Resolved range from event");
    Ok(ChangeRange::new(base, head))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn env_with_event(dir: &Path, name: &str, payload: &str, sha: &str) -> CiEnv {
        let path = dir.join("event.json");
        fs::write(&path, payload).unwrap();
        CiEnv {
            event_name: name.to_string(),
            event_path: Some(path),
            sha: sha.to_string(),
            output_path: None,
        }
    }

    const PR_PAYLOAD: &str =
        r#"{"pull_request": {"base": {"sha": "pr-base"}, "head": {"sha": "pr-head"}}, "before": "push-before"}"#;

    #[test]
    fn explicit_values_override_event() {
        let dir = TempDir::new().unwrap();
        let env = env_with_event(dir.path(), "pull_request", PR_PAYLOAD, "run-sha");

        let range = resolve_range(Some("b"), Some("h"), &env).unwrap();
        assert_eq!(range, ChangeRange::new("b", "h"));
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let range = resolve_range(Some(" b\n"), Some("\th "), &CiEnv::default()).unwrap();
        assert_eq!(range, ChangeRange::new("b", "h"));
    }

    #[test]
    fn pull_request_uses_payload_commits() {
        let dir = TempDir::new().unwrap();
        let env = env_with_event(dir.path(), "pull_request", PR_PAYLOAD, "run-sha");

        let range = resolve_range(None, None, &env).unwrap();
        assert_eq!(range, ChangeRange::new("pr-base", "pr-head"));
    }

    #[test]
    fn pull_request_fills_only_missing_side() {
        let dir = TempDir::new().unwrap();
        let env = env_with_event(dir.path(), "pull_request", PR_PAYLOAD, "run-sha");

        let range = resolve_range(Some("mine"), Some("  "), &env).unwrap();
        assert_eq!(range, ChangeRange::new("mine", "pr-head"));
    }

    #[test]
    fn push_uses_before_and_run_sha() {
        let dir = TempDir::new().unwrap();
        let env = env_with_event(dir.path(), "push", PR_PAYLOAD, "run-sha");

        let range = resolve_range(None, None, &env).unwrap();
        assert_eq!(range, ChangeRange::new("push-before", "run-sha"));
    }

    #[test]
    fn unresolved_names_values_and_event() {
        let dir = TempDir::new().unwrap();
        let env = env_with_event(dir.path(), "workflow_dispatch", "{}", "run-sha");

        let err = resolve_range(None, None, &env).unwrap_err();
        assert_eq!(
            err,
            ResolveError::Unresolved {
                base: String::new(),
                head: "run-sha".to_string(),
                event_name: "workflow_dispatch".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Could not resolve BASE/HEAD. base='' head='run-sha' event_name='workflow_dispatch'"
        );
    }

    #[test]
    fn malformed_payload_falls_through_to_error() {
        let dir = TempDir::new().unwrap();
        let env = env_with_event(dir.path(), "pull_request", "not json", "run-sha");

        assert!(resolve_range(None, None, &env).is_err());
    }
}
