use std::time::{Duration, Instant};

use url::Url;

use crate::error::ProbeError;
use crate::http::response::DispatchedResponse;

/// Per-request timeout. Not configurable from the command line.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Wrapper around a reqwest Client that issues the timed GET requests of a
/// profiling run.
pub struct HttpClient {
    inner: reqwest::Client,
}

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: String,
    no_proxy: bool,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
            user_agent: format!("rprobe/{}", env!("CARGO_PKG_VERSION")),
            no_proxy: false,
        }
    }
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Ignore system proxy settings and always connect directly.
    pub fn no_proxy(mut self, no_proxy: bool) -> Self {
        self.no_proxy = no_proxy;
        self
    }

    pub fn build(self) -> Result<HttpClient, ProbeError> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .gzip(true)
            .brotli(true);

        if self.no_proxy {
            builder = builder.no_proxy();
        }

        Ok(HttpClient {
            inner: builder.build()?,
        })
    }
}

impl HttpClient {
    /// Create a client with the fixed request timeout and default user agent.
    pub fn new() -> Result<Self, ProbeError> {
        HttpClientBuilder::default().build()
    }

    /// Returns a builder for customising the client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    /// Send exactly one GET request.
    ///
    /// The dispatch instant is captured immediately before the request goes
    /// out and travels with the response so the caller can measure latency
    /// once the body has been read. Any transport failure (DNS, connect,
    /// timeout) is returned as [`ProbeError::Http`]; there is no retry.
    pub async fn fetch(&self, url: &Url) -> Result<DispatchedResponse, ProbeError> {
        tracing::debug!(%url, "dispatching GET");

        let started = Instant::now();
        let response = self.inner.get(url.clone()).send().await.map_err(|e| {
            tracing::debug!(%url, error = %e, "request failed");
            ProbeError::Http(e)
        })?;

        tracing::debug!(%url, status = response.status().as_u16(), "response headers received");

        Ok(DispatchedResponse::new(response, started))
    }

    /// Send one GET request and return the body decoded as UTF-8 (replacement
    /// characters for invalid sequences). A body that fails to arrive is an
    /// error here, unlike in a profiling run.
    pub async fn fetch_body(&self, url: &Url) -> Result<String, ProbeError> {
        let dispatched = self.fetch(url).await?;
        let bytes = dispatched.into_response().bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
