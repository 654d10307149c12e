//! Concurrent connectivity probes.
//!
//! Issues one authorized GET per endpoint, at most `max_concurrent` at a
//! time, and reports what each one returned. Probes only read the token
//! store; a failed probe never stops the others.

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;
use serde::Serialize;

use super::ResourceApi;
use super::models::item_count;
use crate::error::Error;

/// Probes in flight at once
pub const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Outcome of a single probe
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// 2xx with a JSON body
    Ok { items: Option<usize> },
    /// The server answered with a failure status
    Http { status: u16 },
    /// No usable answer (network failure or unparseable body)
    Failed { error: String },
}

/// Result of probing one endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    /// Catalog name, or the raw path when probing an ad-hoc path
    pub name: String,
    pub path: String,
    pub outcome: ProbeOutcome,
    #[serde(with = "millis")]
    pub elapsed: Duration,
}

impl ProbeResult {
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Ok { .. })
    }
}

type ProbeFuture<'a> = Pin<Box<dyn Future<Output = (usize, ProbeResult)> + Send + 'a>>;

/// Probe every `(name, path)` target, returning results in target order.
pub async fn probe_all<'a, C>(
    client: &'a C,
    targets: &'a [(String, String)],
    max_concurrent: usize,
) -> Vec<ProbeResult>
where
    C: ResourceApi + ?Sized,
{
    debug!(
        "Probing {} endpoints with max {} concurrent",
        targets.len(),
        max_concurrent
    );

    let make_future = |index: usize| -> ProbeFuture<'a> {
        let (name, path) = &targets[index];
        Box::pin(async move { (index, probe_one(client, name, path).await) })
    };

    let mut results: Vec<Option<ProbeResult>> = vec![None; targets.len()];
    let mut pending = 0..targets.len();
    let mut in_flight: FuturesUnordered<ProbeFuture<'a>> = FuturesUnordered::new();

    for index in pending.by_ref().take(max_concurrent.max(1)) {
        in_flight.push(make_future(index));
    }

    while let Some((index, result)) = in_flight.next().await {
        results[index] = Some(result);
        if let Some(next) = pending.next() {
            in_flight.push(make_future(next));
        }
    }

    results.into_iter().flatten().collect()
}

async fn probe_one<C>(client: &C, name: &str, path: &str) -> ProbeResult
where
    C: ResourceApi + ?Sized,
{
    let started = Instant::now();
    let outcome = match client.fetch_with_auth(path).await {
        Ok(body) => ProbeOutcome::Ok {
            items: item_count(&body),
        },
        Err(Error::Api(e)) => match e.status() {
            Some(status) => ProbeOutcome::Http { status },
            None => ProbeOutcome::Failed {
                error: e.to_string(),
            },
        },
        Err(e) => ProbeOutcome::Failed {
            error: e.to_string(),
        },
    };

    ProbeResult {
        name: name.to_string(),
        path: path.to_string(),
        outcome,
        elapsed: started.elapsed(),
    }
}

mod millis {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}
