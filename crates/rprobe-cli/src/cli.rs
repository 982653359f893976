use clap::Parser;
use rprobe_core::{ProbeError, ProfilerConfig, DEFAULT_URL};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "rprobe",
    version,
    about = "Fetch a URL repeatedly and report latency, status and size statistics."
)]
pub struct Cli {
    /// The URL to fetch
    #[arg(long, short, env = "RPROBE_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Number of fetches to profile; 0 fetches once and prints the body
    #[arg(long, short, env = "RPROBE_PROFILE", default_value_t = 0)]
    pub profile: u32,

    /// Log at debug level unless RPROBE_LOG or RUST_LOG say otherwise
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<ProfilerConfig, ProbeError> {
        ProfilerConfig::new(&self.url, self.profile)
    }
}
