//! Container engine client.
//!
//! Starts an image pull with `POST /images/create` and hands back the raw
//! response body, which the engine streams as line-delimited JSON records.
//! Unix socket hosts are spoken to with a bare HTTP/1.0 exchange so the body
//! is close-delimited; TCP hosts go through reqwest.
//!
//! # Examples
//!
//! ```rust,no_run
//! use pullbar::record::RecordReader;
//! use pullbar::source::{EngineClient, EngineConfig};
//!
//! # async fn example() -> Result<(), pullbar::Error> {
//! let client = EngineClient::new(EngineConfig::from_env())?;
//! let mut records = RecordReader::new(client.pull("alpine:3.20").await?);
//! while let Some(record) = records.next_record().await? {
//!     println!("{}", record);
//! }
//! # Ok(())
//! # }
//! ```

use super::client::create_http_client;
use super::config::EngineConfig;
use super::RecordSource;
use crate::error::{Error, Result};

use futures::TryStreamExt;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use std::io;
use std::path::PathBuf;
use tokio_util::io::StreamReader;
use tracing::debug;

#[cfg(unix)]
use super::client::DEFAULT_USER_AGENT;
#[cfg(unix)]
use reqwest::header::{HeaderValue, USER_AGENT};
#[cfg(unix)]
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
#[cfg(unix)]
use tokio::net::UnixStream;

/// Where the engine listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineHost {
    /// A unix stream socket.
    Unix(PathBuf),
    /// An HTTP endpoint.
    Http(Url),
}

impl EngineHost {
    /// Parse a `DOCKER_HOST` style address.
    pub fn parse(host: &str) -> Result<Self> {
        let host = host.trim();
        if let Some(path) = host.strip_prefix("unix://") {
            if path.is_empty() {
                return Err(Error::source_construction("unix engine host has no socket path"));
            }
            return Ok(EngineHost::Unix(PathBuf::from(path)));
        }

        let url = match host.strip_prefix("tcp://") {
            Some(rest) => format!("http://{}", rest),
            None => host.to_owned(),
        };
        let url = Url::parse(&url)
            .map_err(|e| Error::source_construction(format!("invalid engine host {:?}: {}", host, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(EngineHost::Http(url)),
            scheme => Err(Error::source_construction(format!(
                "unsupported engine host scheme {:?}",
                scheme
            ))),
        }
    }
}

/// Split an image reference into the repository and the tag or digest to pull.
///
/// A reference without either pulls `latest`.
pub fn split_image_ref(image: &str) -> (String, String) {
    let image = image.trim();
    if let Some((repository, digest)) = image.split_once('@') {
        return (repository.to_owned(), digest.to_owned());
    }

    let name_start = image.rfind('/').map(|i| i + 1).unwrap_or(0);
    match image[name_start..].rfind(':') {
        Some(i) => {
            let colon = name_start + i;
            (image[..colon].to_owned(), image[colon + 1..].to_owned())
        }
        None => (image.to_owned(), "latest".to_owned()),
    }
}

/// Build the request target for pulling `image`.
pub fn pull_path(image: &str, api_version: Option<&str>) -> String {
    let (repository, tag) = split_image_ref(image);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("fromImage", &repository)
        .append_pair("tag", &tag)
        .finish();

    match api_version {
        Some(version) => format!("/v{}/images/create?{}", version.trim_start_matches('v'), query),
        None => format!("/images/create?{}", query),
    }
}

/// Describe a failed engine response, preferring the engine's own message.
fn engine_message(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("message")
            .and_then(Value::as_str)
            .map(str::to_owned)
    });
    match message {
        Some(message) => message,
        None if body.trim().is_empty() => format!("engine responded with status {}", status),
        None => format!("engine responded with status {}: {}", status, body.trim()),
    }
}

/// Client able to start pulls on one engine.
pub struct EngineClient {
    host: EngineHost,
    config: EngineConfig,
    http: Option<ClientWithMiddleware>,
}

impl EngineClient {
    /// Create a client for the configured host.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let host = EngineHost::parse(&config.host)?;
        let http = match host {
            EngineHost::Http(_) => Some(create_http_client(&config).map_err(Error::source_construction)?),
            EngineHost::Unix(_) => None,
        };
        Ok(Self { host, config, http })
    }

    /// Start pulling `image` and return the progress stream.
    pub async fn pull(&self, image: &str) -> Result<RecordSource> {
        let target = pull_path(image, self.config.api_version.as_deref());
        debug!(host = ?self.host, %target, "starting pull");

        match (&self.host, &self.http) {
            (EngineHost::Http(base), Some(client)) => self.pull_http(client, base, &target).await,
            (EngineHost::Unix(path), _) => self.pull_unix(path, &target).await,
            (EngineHost::Http(_), None) => Err(Error::Internal("http engine client missing".into())),
        }
    }

    async fn pull_http(
        &self,
        client: &ClientWithMiddleware,
        base: &Url,
        target: &str,
    ) -> Result<RecordSource> {
        let url = base
            .join(target)
            .map_err(|e| Error::source_construction(format!("invalid pull url: {}", e)))?;
        let res = client
            .post(url)
            .send()
            .await
            .map_err(|e| Error::source_construction(format!("cannot reach engine: {}", e)))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(Error::SourceConstruction(engine_message(status.as_u16(), &body)));
        }

        let body = Box::pin(res.bytes_stream().map_err(io::Error::other));
        Ok(Box::new(StreamReader::new(body)))
    }

    #[cfg(unix)]
    async fn pull_unix(&self, path: &std::path::Path, target: &str) -> Result<RecordSource> {
        let mut stream = UnixStream::connect(path).await.map_err(|e| {
            Error::source_construction(format!("cannot connect to engine at {}: {}", path.display(), e))
        })?;

        let mut headers = self.config.headers.clone().unwrap_or_default();
        headers
            .entry(USER_AGENT)
            .or_insert(HeaderValue::from_static(DEFAULT_USER_AGENT));

        let mut request = format!("POST {} HTTP/1.0\r\nHost: docker\r\nContent-Length: 0\r\n", target);
        for (name, value) in &headers {
            match value.to_str() {
                Ok(value) => request.push_str(&format!("{}: {}\r\n", name, value)),
                Err(_) => debug!(%name, "skipping non-text header"),
            }
        }
        request.push_str("\r\n");
        stream.write_all(request.as_bytes()).await.map_err(Error::source_construction)?;

        let mut reader = BufReader::new(stream);
        let mut status_line = String::new();
        reader.read_line(&mut status_line).await.map_err(Error::source_construction)?;
        let status = parse_status_line(&status_line)?;

        // Skip the response headers.
        loop {
            let mut line = String::new();
            let n = reader.read_line(&mut line).await.map_err(Error::source_construction)?;
            if n == 0 || line.trim().is_empty() {
                break;
            }
        }

        if !(200..300).contains(&status) {
            let mut body = String::new();
            reader.read_to_string(&mut body).await.map_err(Error::source_construction)?;
            return Err(Error::SourceConstruction(engine_message(status, &body)));
        }

        Ok(Box::new(reader))
    }

    #[cfg(not(unix))]
    async fn pull_unix(&self, path: &std::path::Path, _target: &str) -> Result<RecordSource> {
        Err(Error::source_construction(format!(
            "unix engine host {} is not supported on this platform",
            path.display()
        )))
    }
}

fn parse_status_line(line: &str) -> Result<u16> {
    line.split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .ok_or_else(|| Error::source_construction(format!("malformed engine response {:?}", line.trim())))
}
