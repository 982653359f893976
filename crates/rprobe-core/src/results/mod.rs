pub mod report;

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// The HTTP status counted as a successful request.
pub const SUCCESS_STATUS: u16 = 200;

// ---------------------------------------------------------------------------
// Sample — one measured request
// ---------------------------------------------------------------------------

/// One completed request whose body was read successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Sample {
    /// Time from dispatch until the body was fully read.
    pub latency: Duration,
    /// HTTP response status code (e.g. 200, 404).
    pub status_code: u16,
    /// Length of the dumped response: status line, headers and body.
    pub byte_size: u64,
}

impl Sample {
    pub fn new(latency: Duration, status_code: u16, byte_size: u64) -> Self {
        Self {
            latency,
            status_code,
            byte_size,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_STATUS
    }
}

// ---------------------------------------------------------------------------
// SampleSet — samples of one run, in request order
// ---------------------------------------------------------------------------

/// Samples collected during one profiling run, in the order the requests were
/// issued. Append-only while the run is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl From<Vec<Sample>> for SampleSet {
    fn from(samples: Vec<Sample>) -> Self {
        Self { samples }
    }
}

impl FromIterator<Sample> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

// ---------------------------------------------------------------------------
// Summary — aggregate statistics
// ---------------------------------------------------------------------------

/// Aggregate statistics computed from a [`SampleSet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    /// Number of samples the statistics were computed from.
    pub request_count: usize,
    pub min_latency: Duration,
    pub max_latency: Duration,
    pub mean_latency: Duration,
    pub median_latency: Duration,
    /// Share of samples with status 200, in percent (0.0 to 100.0).
    pub success_percentage: f64,
    /// Distinct non-200 status codes in the order they were first seen.
    pub error_codes: Vec<u16>,
    pub min_byte_size: u64,
    pub max_byte_size: u64,
}

// ---------------------------------------------------------------------------
// ProfileRun — a summary plus run metadata
// ---------------------------------------------------------------------------

/// Complete record of a finished profiling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProfileRun {
    pub run_id: Uuid,
    pub url: Url,
    /// Number of requests the run was configured to send.
    pub requested: u32,
    /// Requests whose body could not be read and were left out of the summary.
    pub dropped: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub summary: Summary,
}

impl ProfileRun {
    /// Wall-clock duration of the whole run.
    pub fn wall_time(&self) -> Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }
}
