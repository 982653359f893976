use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No samples were recorded")]
    EmptySampleSet,
}

impl ProbeError {
    /// Whether this error was caused by bad input rather than by the run
    /// itself. Configuration errors are raised before any request is sent.
    pub fn is_config_error(&self) -> bool {
        matches!(self, ProbeError::InvalidUrl(_) | ProbeError::Validation(_))
    }
}

impl Serialize for ProbeError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
