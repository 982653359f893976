use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ProbeError;

/// Target used when no URL is supplied on the command line.
pub const DEFAULT_URL: &str =
    "https://www.alphavantage.co/query?function=TIME_SERIES_DAILY_ADJUSTED&symbol=IBM&apikey=demo";

/// What a run does with its target URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RunMode {
    /// Fetch once and print the body; no statistics.
    Single,
    /// Fetch `count` times and summarize. `count` is always at least 1.
    Profile { count: u32 },
}

impl RunMode {
    /// Map a raw `--profile` value onto a mode. Zero selects the single-fetch
    /// path.
    pub fn from_profile_count(count: u32) -> Self {
        if count == 0 {
            RunMode::Single
        } else {
            RunMode::Profile { count }
        }
    }
}

/// Validated configuration for one run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProfilerConfig {
    pub url: Url,
    pub mode: RunMode,
}

impl ProfilerConfig {
    pub fn new(url: &str, profile_count: u32) -> Result<Self, ProbeError> {
        Ok(Self {
            url: parse_target_url(url)?,
            mode: RunMode::from_profile_count(profile_count),
        })
    }
}

/// Parse `raw` as an absolute `http` or `https` URL.
pub fn parse_target_url(raw: &str) -> Result<Url, ProbeError> {
    let url = Url::parse(raw.trim()).map_err(|e| ProbeError::InvalidUrl(format!("{raw}: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ProbeError::InvalidUrl(format!(
                "{raw}: unsupported scheme '{other}'"
            )))
        }
    }

    if url.host_str().is_none() {
        return Err(ProbeError::InvalidUrl(format!("{raw}: missing host")));
    }

    Ok(url)
}
