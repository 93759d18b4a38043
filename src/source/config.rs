//! Engine connection settings.

use reqwest::header::HeaderMap;
use std::env;

/// Engine socket used when `DOCKER_HOST` is unset.
pub const DEFAULT_ENGINE_HOST: &str = "unix:///var/run/docker.sock";

/// Configuration for reaching the container engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Engine address: `unix://<path>`, `tcp://<host>:<port>` or an http(s) URL.
    pub host: String,
    /// API version to prefix request paths with, e.g. `1.43`.
    pub api_version: Option<String>,
    /// Number of retries for the pull request. 0 disables retries.
    pub retries: u32,
    /// Extra headers sent with the pull request.
    pub headers: Option<HeaderMap>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ENGINE_HOST.into(),
            api_version: None,
            retries: 0,
            headers: None,
        }
    }
}

impl EngineConfig {
    /// Read `DOCKER_HOST` and `DOCKER_API_VERSION`, falling back to defaults.
    pub fn from_env() -> Self {
        let non_blank = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            host: non_blank("DOCKER_HOST").unwrap_or_else(|| DEFAULT_ENGINE_HOST.into()),
            api_version: non_blank("DOCKER_API_VERSION"),
            ..Self::default()
        }
    }
}
