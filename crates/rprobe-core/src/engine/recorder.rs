use std::time::Duration;

use crate::error::ProbeError;
use crate::http::response::{dump_size, DispatchedResponse};
use crate::results::Sample;

/// Measurement of one response, before deciding whether it becomes a
/// [`Sample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recording {
    pub latency: Duration,
    pub status_code: u16,
    /// `false` when the body could not be read. Such recordings are dropped.
    pub valid: bool,
    /// Dumped response size; 0 when `valid` is false.
    pub byte_size: u64,
}

impl Recording {
    pub fn into_sample(self) -> Option<Sample> {
        self.valid
            .then(|| Sample::new(self.latency, self.status_code, self.byte_size))
    }
}

/// Read the whole body of `dispatched` and measure it.
///
/// Latency is taken after the body has been read, so a slow body counts
/// towards it. The body is released before returning. A timeout while the
/// body is read is a transport error and is returned; any other body failure
/// yields an invalid recording.
pub async fn record(dispatched: DispatchedResponse) -> Result<Recording, ProbeError> {
    let started = dispatched.started();
    let response = dispatched.into_response();

    let status = response.status();
    let version = response.version();
    let headers = response.headers().clone();
    let url = response.url().clone();

    match response.bytes().await {
        Ok(body) => Ok(Recording {
            latency: started.elapsed(),
            status_code: status.as_u16(),
            valid: true,
            byte_size: dump_size(version, status, &headers, body.len()),
        }),
        Err(e) if e.is_timeout() => {
            tracing::debug!(%url, error = %e, "timed out reading response body");
            Err(ProbeError::Http(e))
        }
        Err(e) => {
            tracing::warn!(%url, status = status.as_u16(), error = %e, "response body unavailable");
            Ok(Recording {
                latency: started.elapsed(),
                status_code: status.as_u16(),
                valid: false,
                byte_size: 0,
            })
        }
    }
}
