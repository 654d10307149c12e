//! CORS command implementation
//!
//! Sends the browser preflight for the login endpoint (or another target)
//! from each front-end origin and reports what the backend allowed.

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::CondoClient;
use crate::client::cors::{DEFAULT_ORIGINS, PreflightResult};
use crate::client::endpoints::resolve_target;
use crate::error::{Error, Result};
use crate::models::CorsDisplay;
use crate::output::{json::format_json, table::format_table};

/// Everything `cors` learned, in the shape printed by `--format json`
#[derive(Debug, Serialize)]
pub struct CorsReport {
    pub api_url: String,
    pub path: String,
    pub results: Vec<PreflightResult>,
}

impl CorsReport {
    pub fn blocked(&self) -> usize {
        self.results.iter().filter(|r| !r.is_ok()).count()
    }
}

/// Origins to test: the given ones, or the usual dev-server origins
pub fn origins_or_default(origins: &[String]) -> Vec<String> {
    if origins.is_empty() {
        DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect()
    } else {
        origins.to_vec()
    }
}

/// Preflight `path` once per origin, in order
pub async fn build_report(
    client: &CondoClient,
    path: &str,
    origins: &[String],
) -> Result<CorsReport> {
    let mut results = Vec::with_capacity(origins.len());
    for origin in origins {
        results.push(client.preflight(path, origin).await?);
    }

    Ok(CorsReport {
        api_url: client.base_url().to_string(),
        path: path.to_string(),
        results,
    })
}

/// Run the cors command
pub async fn run(ctx: &CommandContext, origins: &[String], endpoint: &str) -> Result<()> {
    let path = resolve_target(endpoint);
    let origins = origins_or_default(origins);

    let report = build_report(&ctx.client, &path, &origins).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&report)?),
        OutputFormat::Table => print_report(&report),
    }

    match report.blocked() {
        0 => Ok(()),
        n => Err(Error::Other(format!(
            "{} of {} origins failed the CORS preflight",
            n,
            report.results.len()
        ))),
    }
}

fn print_report(report: &CorsReport) {
    println!(
        "Preflight: OPTIONS {}{}",
        report.api_url.cyan(),
        report.path.cyan()
    );
    println!();

    let rows: Vec<CorsDisplay> = report.results.iter().map(CorsDisplay::from).collect();
    println!("{}", format_table(&rows));

    for result in &report.results {
        if result.headers.is_empty() {
            continue;
        }
        println!("\n{}", result.origin.bold());
        for (name, value) in &result.headers {
            println!("  {}: {}", name, value);
        }
    }
}
