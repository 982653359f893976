pub mod client;
pub mod response;

pub use client::{HttpClient, HttpClientBuilder, REQUEST_TIMEOUT};
pub use response::{dump_size, DispatchedResponse};
