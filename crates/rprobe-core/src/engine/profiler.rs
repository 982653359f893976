use std::io::Write;

use chrono::Utc;
use url::Url;
use uuid::Uuid;

use crate::config::{ProfilerConfig, RunMode};
use crate::engine::aggregator::aggregate;
use crate::engine::recorder::record;
use crate::error::ProbeError;
use crate::http::HttpClient;
use crate::results::{ProfileRun, SampleSet};

/// Samples gathered by [`collect_samples`], plus how many responses were left
/// out because their body could not be read.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    pub samples: SampleSet,
    pub dropped: u32,
}

/// Run the configured mode against the configured URL.
///
/// Single mode writes the response body to `out` and returns `None`; profile
/// mode returns the finished run without printing it.
pub async fn run<W: Write>(
    config: &ProfilerConfig,
    client: &HttpClient,
    out: &mut W,
) -> Result<Option<ProfileRun>, ProbeError> {
    match config.mode {
        RunMode::Single => {
            single_fetch_and_print_body(client, &config.url, out).await?;
            Ok(None)
        }
        RunMode::Profile { count } => {
            let run = profile_and_summarize(client, &config.url, count).await?;
            Ok(Some(run))
        }
    }
}

/// Fetch `url` once and write the raw body to `out`. No statistics.
pub async fn single_fetch_and_print_body<W: Write>(
    client: &HttpClient,
    url: &Url,
    out: &mut W,
) -> Result<(), ProbeError> {
    let body = client.fetch_body(url).await?;
    writeln!(out, "{body}")?;
    out.flush()?;
    Ok(())
}

/// Fetch `url` `count` times in sequence and summarize the results.
///
/// The first transport error, including a timeout while a body is read,
/// aborts the run; samples gathered up to that point are discarded.
pub async fn profile_and_summarize(
    client: &HttpClient,
    url: &Url,
    count: u32,
) -> Result<ProfileRun, ProbeError> {
    if count == 0 {
        return Err(ProbeError::Validation(
            "profile count must be at least 1".to_string(),
        ));
    }

    tracing::info!(%url, count, "profiling");
    let started_at = Utc::now();

    let collected = collect_samples(client, url, count).await?;
    let summary = aggregate(&collected.samples)?;

    let finished_at = Utc::now();
    tracing::info!(
        %url,
        samples = summary.request_count,
        dropped = collected.dropped,
        "profiling complete"
    );

    Ok(ProfileRun {
        run_id: Uuid::new_v4(),
        url: url.clone(),
        requested: count,
        dropped: collected.dropped,
        started_at,
        finished_at,
        summary,
    })
}

/// Issue `count` requests one after another, keeping every response whose
/// body could be read.
pub async fn collect_samples(
    client: &HttpClient,
    url: &Url,
    count: u32,
) -> Result<Collected, ProbeError> {
    let mut collected = Collected {
        samples: SampleSet::with_capacity(count as usize),
        dropped: 0,
    };

    for i in 1..=count {
        let dispatched = client.fetch(url).await?;
        let recording = record(dispatched).await?;

        match recording.into_sample() {
            Some(sample) => {
                tracing::debug!(
                    request = i,
                    status = sample.status_code,
                    latency_ms = sample.latency.as_secs_f64() * 1000.0,
                    bytes = sample.byte_size,
                    "sample recorded"
                );
                collected.samples.push(sample);
            }
            None => {
                tracing::warn!(request = i, "sample dropped");
                collected.dropped += 1;
            }
        }
    }

    Ok(collected)
}
