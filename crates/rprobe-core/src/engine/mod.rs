pub mod aggregator;
pub mod profiler;
pub mod recorder;

pub use aggregator::aggregate;
pub use profiler::{
    collect_samples, profile_and_summarize, run, single_fetch_and_print_body, Collected,
};
pub use recorder::{record, Recording};
