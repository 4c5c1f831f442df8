//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates an HTTP client with a request timeout and connection pooling.
///
/// # Arguments
/// * `timeout_seconds` - Whole-request timeout
/// * `user_agent` - Value of the User-Agent header
pub fn create_http_client(timeout_seconds: u64, user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(user_agent)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(
        crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        crate::constants::DEFAULT_USER_AGENT,
    )
    .expect("Failed to create test HTTP client")
}
