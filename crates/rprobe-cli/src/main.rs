mod cli;
mod logging;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use rprobe_core::engine;
use rprobe_core::http::HttpClient;
use rprobe_core::results::report::{render_header, render_run};
use rprobe_core::ProbeError;

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_config_error() {
                eprintln!("rprobe: configuration error: {err}");
            } else {
                eprintln!("rprobe: run aborted: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ProbeError> {
    let config = cli.into_config()?;
    let client = HttpClient::new()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render_header(&config))?;
    out.flush()?;

    if let Some(run) = engine::run(&config, &client, &mut out).await? {
        writeln!(out)?;
        write!(out, "{}", render_run(&run))?;
        out.flush()?;
    }

    Ok(())
}
