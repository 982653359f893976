use std::fmt::Write;

use crate::config::{ProfilerConfig, RunMode};
use crate::results::{ProfileRun, Summary};

/// Banner printed before any request is sent.
pub fn render_header(config: &ProfilerConfig) -> String {
    match config.mode {
        RunMode::Single => format!("URL: {}\nNumber Of Requests: 1\n", config.url),
        RunMode::Profile { count } => {
            format!("URL: {}\nRequests To Send: {count}\n", config.url)
        }
    }
}

/// Render a finished run as plain text.
pub fn render_run(run: &ProfileRun) -> String {
    let mut out = String::new();
    out.push_str(&render_summary(&run.summary));

    if run.dropped > 0 {
        let _ = writeln!(
            out,
            "Dropped Responses (body unavailable): {} of {}",
            run.dropped, run.requested
        );
    }
    let _ = writeln!(out, "Total Run Time: {:?}", run.wall_time());
    out
}

/// Render the statistics block of a summary.
pub fn render_summary(s: &Summary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Number Of Requests: {}", s.request_count);
    let _ = writeln!(out, "Fastest Time: {:?}", s.min_latency);
    let _ = writeln!(out, "Slowest Time: {:?}", s.max_latency);
    let _ = writeln!(out, "Mean Time: {:?}", s.mean_latency);
    let _ = writeln!(out, "Median Time: {:?}", s.median_latency);
    let _ = writeln!(out, "Percent Success Requests: {:.2}", s.success_percentage);

    if s.error_codes.is_empty() {
        let _ = writeln!(out, "Unique Error Codes: none (only 200 responses)");
    } else {
        let codes: Vec<String> = s.error_codes.iter().map(u16::to_string).collect();
        let _ = writeln!(out, "Unique Error Codes: {}", codes.join(", "));
    }

    let _ = writeln!(out, "Smallest Response Size in bytes: {}", s.min_byte_size);
    let _ = writeln!(out, "Largest Response Size in bytes: {}", s.max_byte_size);
    out
}
