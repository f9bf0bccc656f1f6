// Transport configuration for building reqwest::Client instances.
//
// The registry is public and read-only, so there is no auth or cookie
// handling here -- just timeout and user-agent settings. Proxy settings
// are inherited from the ambient reqwest environment behavior.

use std::time::Duration;

use crate::error::Error;

/// Configuration for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout, including the response body read.
    pub timeout: Duration,
    /// Value sent in the `User-Agent` header.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("deims-client/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;
        Ok(client)
    }
}
