//! Output formatting for the detection report

use serde::Serialize;

use crate::domain::{ChangeRange, Detection};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Machine-readable summary printed in JSON mode
#[derive(Debug, Serialize)]
struct Report<'a> {
    base: &'a str,
    head: &'a str,
    #[serde(flatten)]
    detection: &'a Detection,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Announces the resolved range (text only)
    pub fn range(&self, range: &ChangeRange) {
        if self.format == OutputFormat::Text {
            println!("Using BASE={}", range.base());
            println!("Using HEAD={}", range.head());
        }
    }

    /// Prints the discovered solutions
    pub fn detection(&self, range: &ChangeRange, detection: &Detection) {
        match self.format {
            OutputFormat::Text => {
                println!("Discovered solutions:");
                self.data(&detection.solutions);
            }
            OutputFormat::Json => self.data(&Report {
                base: range.base(),
                head: range.head(),
                detection,
            }),
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        let rendered = match self.format {
            OutputFormat::Text => serde_json::to_string_pretty(data),
            OutputFormat::Json => serde_json::to_string(data),
        };

        match rendered {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "Failed to render output"),
        }
    }
}
