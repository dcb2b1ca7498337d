//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound calls to Google (token endpoint and Sheets API) share one client
//! built here rather than constructing `reqwest::Client` directly.

use reqwest::Client;
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .user_agent(concat!("circlefolk-waitlist/", env!("CARGO_PKG_VERSION")))
        .build()
}
