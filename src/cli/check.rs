//! Check command implementation
//!
//! Confirms the API root answers, then probes the readable catalog endpoints
//! with the stored token and reports what each one returned.

use std::time::{Duration, Instant};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::endpoints::{catalog, resolve_target};
use crate::client::probe::{ProbeResult, probe_all};
use crate::client::{ApiWelcome, CondoApi, Endpoint};
use crate::error::{Error, Result};
use crate::models::ProbeDisplay;
use crate::output::{formatters::format_elapsed, json::format_json, table::format_table};

/// Everything `check` learned, in the shape printed by `--format json`
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub api_url: String,
    pub welcome: ApiWelcome,
    pub token_stored: bool,
    pub probes: Vec<ProbeResult>,
}

impl CheckReport {
    pub fn failed(&self) -> usize {
        self.probes.iter().filter(|p| !p.is_ok()).count()
    }
}

/// Build the `(name, path)` list to probe.
///
/// Readable catalog endpoints first (unless `only`), then extra paths in the
/// order given. Extra paths that name a catalog entry already listed are
/// skipped.
pub fn probe_targets(paths: &[String], only: bool) -> Vec<(String, String)> {
    let mut targets: Vec<(String, String)> = if only {
        Vec::new()
    } else {
        Endpoint::ALL
            .into_iter()
            .filter(|e| e.is_readable())
            .map(|e| (e.name().to_string(), e.path().to_string()))
            .collect()
    };

    for raw in paths {
        let path = resolve_target(raw);
        if targets.iter().any(|(_, p)| *p == path) {
            continue;
        }
        let name = catalog()
            .into_iter()
            .find(|(_, p)| *p == path)
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| path.clone());
        targets.push((name, path));
    }

    targets
}

/// Query the API root, then probe `targets`.
///
/// An unreachable root ends the check early; probe failures are recorded in
/// the report.
pub async fn build_report<C: CondoApi + ?Sized>(
    client: &C,
    api_url: &str,
    token_stored: bool,
    targets: &[(String, String)],
    max_concurrent: usize,
) -> Result<CheckReport> {
    let root = client
        .api_root()
        .await
        .map_err(|e| Error::Other(format!("API root {} is not reachable: {}", api_url, e)))?;

    let probes = probe_all(client, targets, max_concurrent.max(1)).await;

    Ok(CheckReport {
        api_url: api_url.to_string(),
        welcome: ApiWelcome::from_value(&root),
        token_stored,
        probes,
    })
}

/// Run the check command
pub async fn run(
    ctx: &CommandContext,
    paths: &[String],
    only: bool,
    concurrency: usize,
) -> Result<()> {
    let targets = probe_targets(paths, only);
    let token_stored = ctx.has_token()?;

    let spinner = match ctx.format {
        OutputFormat::Table => Some(spinner(targets.len())),
        OutputFormat::Json => None,
    };

    let started = Instant::now();
    let report = build_report(
        &ctx.client,
        ctx.config.api_url(),
        token_stored,
        &targets,
        concurrency,
    )
    .await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = report?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&report)?),
        OutputFormat::Table => print_report(&report, started.elapsed()),
    }

    match report.failed() {
        0 => Ok(()),
        n => Err(Error::Other(format!(
            "{} of {} endpoints failed",
            n,
            report.probes.len()
        ))),
    }
}

fn spinner(count: usize) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    bar.set_message(format!("Probing {} endpoints...", count));
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

fn print_report(report: &CheckReport, elapsed: Duration) {
    println!("API: {}", report.api_url.cyan());
    if let Some(ref mensaje) = report.welcome.mensaje {
        println!("  {}", mensaje);
    }
    if let Some(ref version) = report.welcome.version {
        let estado = report.welcome.estado.as_deref().unwrap_or("-");
        println!("  version {} ({})", version, estado);
    }

    if report.token_stored {
        println!("{} Token stored", "✓".green());
    } else {
        println!(
            "{} No token stored (run 'condoctl login')",
            "○".dimmed()
        );
    }
    println!();

    let rows: Vec<ProbeDisplay> = report.probes.iter().map(ProbeDisplay::from).collect();
    println!("{}", format_table(&rows));

    let ok = report.probes.len() - report.failed();
    println!(
        "\n{}/{} endpoints OK in {}",
        ok,
        report.probes.len(),
        format_elapsed(elapsed)
    );
}
