pub mod config;
pub mod engine;
pub mod error;
pub mod http;
pub mod results;

pub use config::{ProfilerConfig, RunMode, DEFAULT_URL};
pub use error::ProbeError;
