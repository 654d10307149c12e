//! Connectivity probe display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::client::probe::{ProbeOutcome, ProbeResult};
use crate::output::formatters::{format_elapsed, truncate_string};

/// Probe result for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProbeDisplay {
    #[tabled(rename = "ENDPOINT")]
    pub name: String,

    #[tabled(rename = "PATH")]
    pub path: String,

    #[tabled(rename = "RESULT")]
    pub result: String,

    #[tabled(rename = "ITEMS")]
    pub items: String,

    #[tabled(rename = "TIME")]
    pub time: String,
}

impl From<&ProbeResult> for ProbeDisplay {
    fn from(probe: &ProbeResult) -> Self {
        let (result, items) = match &probe.outcome {
            ProbeOutcome::Ok { items } => (
                "✓ ok".green().to_string(),
                items.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
            ),
            ProbeOutcome::Http { status } => (
                format!("✗ HTTP {}", status).red().to_string(),
                "-".to_string(),
            ),
            ProbeOutcome::Failed { error } => (
                format!("✗ {}", truncate_string(error, 40)).red().to_string(),
                "-".to_string(),
            ),
        };

        Self {
            name: probe.name.clone(),
            path: probe.path.clone(),
            result,
            items,
            time: format_elapsed(probe.elapsed),
        }
    }
}
