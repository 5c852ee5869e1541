//! # CI Integration
//!
//! Everything that touches the CI runner's contract.
//!
//! | Variable | Purpose |
//! |----------|---------|
//! | `GITHUB_EVENT_NAME` | Selects where base/head come from |
//! | `GITHUB_EVENT_PATH` | JSON payload of the triggering event |
//! | `GITHUB_SHA` | Head revision for non pull-request events |
//! | `GITHUB_OUTPUT` | File that step outputs are appended to |
//!
//! ## Key Types
//!
//! - [`CiEnv`] - Snapshot of the runner environment
//! - [`EventPayload`] - Event JSON, empty when unreadable
//! - [`StepOutput`] - Writer for `key=value` step outputs
//! - [`resolve_range`] - Picks the base/head pair for a run

mod env;
mod event;
mod output;
mod resolve;

pub use env::CiEnv;
pub use event::{EventError, EventPayload};
pub use output::StepOutput;
pub use resolve::{resolve_range, ResolveError, PULL_REQUEST_EVENT};
