//! reqwest client used for TCP engine hosts.
//!
//! ```rust
//! use pullbar::source::{create_http_client, EngineConfig};
//!
//! let config = EngineConfig { host: "tcp://127.0.0.1:2375".into(), ..EngineConfig::default() };
//! assert!(create_http_client(&config).is_ok());
//! ```

use super::config::EngineConfig;
use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;

/// User agent sent to the engine unless the configured headers carry one.
pub const DEFAULT_USER_AGENT: &str = concat!("pullbar/", env!("CARGO_PKG_VERSION"));

/// Build the engine HTTP client.
///
/// Requests are always traced. Transient failures of the pull request are
/// retried with exponential backoff only when `config.retries` is non-zero.
pub fn create_http_client(config: &EngineConfig) -> Result<ClientWithMiddleware, reqwest::Error> {
    let mut headers = config.headers.clone().unwrap_or_default();
    headers
        .entry(USER_AGENT)
        .or_insert(HeaderValue::from_static(DEFAULT_USER_AGENT));

    let engine_client = reqwest::Client::builder().default_headers(headers).build()?;

    let mut client = ClientBuilder::new(engine_client).with(TracingMiddleware::default());
    if config.retries > 0 {
        let backoff = ExponentialBackoff::builder().build_with_max_retries(config.retries);
        client = client.with(RetryTransientMiddleware::new_with_policy(backoff));
    }
    Ok(client.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;

    #[test]
    fn test_user_agent_value_is_valid() {
        assert!(DEFAULT_USER_AGENT.starts_with("pullbar/"));
        assert!(HeaderValue::from_str(DEFAULT_USER_AGENT).is_ok());
    }

    #[test]
    fn test_client_with_auth_header_and_retries() {
        let mut headers = HeaderMap::new();
        headers.insert("x-registry-auth", HeaderValue::from_static("e30="));
        headers.insert(USER_AGENT, HeaderValue::from_static("custom/1.0"));

        let config = EngineConfig {
            host: "tcp://127.0.0.1:2375".into(),
            retries: 3,
            headers: Some(headers),
            ..EngineConfig::default()
        };
        assert!(create_http_client(&config).is_ok());
    }
}
