//! Blocking HTTP transport used by the provider adapters.
//!
//! The adapters only need "GET this URL with these query parameters and give
//! me the body", so that is all `HttpTransport` offers. Keeping it a trait lets
//! tests script provider answers without a network.
use log::debug;
use reqwest::blocking::Client;

use crate::error::ProviderError;

/// Query parameters whose values must never be logged.
const SECRET_PARAMS: &[&str] = &["token", "apikey"];

/// Minimal blocking GET interface.
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request and returns the body of a 2xx response.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ProviderError>;
}

/// `reqwest::blocking` implementation of [`HttpTransport`].
///
/// No timeout is configured beyond the client defaults.
pub struct BlockingTransport {
    client: Client,
}

impl BlockingTransport {
    /// Builds a transport with a default blocking client.
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for BlockingTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ProviderError> {
        debug!("GET {} {}", url, redact(query));

        let response = self.client.get(url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.text()?)
    }
}

/// Renders query parameters for logging with secrets masked.
pub fn redact(query: &[(&str, &str)]) -> String {
    query
        .iter()
        .map(|(key, value)| {
            if SECRET_PARAMS.contains(key) {
                format!("{}=***", key)
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
