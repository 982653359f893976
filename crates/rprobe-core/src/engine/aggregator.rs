use std::collections::HashSet;
use std::time::Duration;

use crate::error::ProbeError;
use crate::results::{Sample, SampleSet, Summary, SUCCESS_STATUS};

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

/// Compute the [`Summary`] of a sample set.
///
/// Pure: the same set always yields the same summary and is never modified.
/// Returns [`ProbeError::EmptySampleSet`] when there is nothing to aggregate,
/// which happens when every response of a run was dropped.
pub fn aggregate(samples: &SampleSet) -> Result<Summary, ProbeError> {
    if samples.is_empty() {
        return Err(ProbeError::EmptySampleSet);
    }

    let latencies: Vec<Duration> = samples.iter().map(|s| s.latency).collect();
    let sizes: Vec<u64> = samples.iter().map(|s| s.byte_size).collect();
    let codes: Vec<u16> = samples.iter().map(|s| s.status_code).collect();

    let (min_latency, max_latency) = min_max(&latencies).ok_or(ProbeError::EmptySampleSet)?;
    let (min_byte_size, max_byte_size) = min_max(&sizes).ok_or(ProbeError::EmptySampleSet)?;

    Ok(Summary {
        request_count: samples.len(),
        min_latency,
        max_latency,
        mean_latency: mean_latency(&latencies),
        median_latency: median_latency(&latencies),
        success_percentage: success_percentage(samples.as_slice()),
        error_codes: distinct_error_codes(&codes),
        min_byte_size,
        max_byte_size,
    })
}

// ---------------------------------------------------------------------------
// Building blocks
// ---------------------------------------------------------------------------

/// Smallest and largest value, seeded with the first element. `None` for an
/// empty slice.
pub fn min_max<T: Ord + Copy>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(min, max), &v| {
        (min.min(v), max.max(v))
    }))
}

/// Arithmetic mean, computed over nanoseconds in `f64` and truncated back to
/// whole nanoseconds. Zero for an empty slice.
pub fn mean_latency(latencies: &[Duration]) -> Duration {
    if latencies.is_empty() {
        return Duration::ZERO;
    }
    let total: f64 = latencies.iter().map(|d| d.as_nanos() as f64).sum();
    Duration::from_nanos((total / latencies.len() as f64) as u64)
}

/// Median: the middle value for an odd count, the mean of the two central
/// values for an even count. Zero for an empty slice.
pub fn median_latency(latencies: &[Duration]) -> Duration {
    if latencies.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted = latencies.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        let (lo, hi) = (sorted[mid - 1], sorted[mid]);
        lo + (hi - lo) / 2
    }
}

/// Share of samples with status 200, as a percentage. Zero for an empty
/// slice.
pub fn success_percentage(samples: &[Sample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let successes = samples.iter().filter(|s| s.is_success()).count();
    successes as f64 / samples.len() as f64 * 100.0
}

/// Non-200 status codes with duplicates removed, kept in first-seen order.
pub fn distinct_error_codes(codes: &[u16]) -> Vec<u16> {
    let mut seen = HashSet::new();
    codes
        .iter()
        .copied()
        .filter(|&c| c != SUCCESS_STATUS)
        .filter(|&c| seen.insert(c))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
