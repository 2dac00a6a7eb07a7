//! HTTP transport and vendor clients.

pub mod google;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod slack;
pub mod telegram;

use std::time::Duration;

use async_trait::async_trait;
use herald_core::{Body, FormBody, FormPart, HttpRequest, Method};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};

use crate::error::Result;

pub use google::GoogleClient;
pub use slack::SlackClient;
pub use telegram::TelegramClient;

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings shared by every vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpOptions {
    pub timeout: Duration,
    /// Skip TLS certificate verification.
    pub insecure: bool,
}

impl HttpOptions {
    pub fn new(timeout_secs: u64, insecure: bool) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
            insecure,
        }
    }
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_SECS, false)
    }
}

/// Executes one request and returns the full response body.
///
/// The status code is not inspected: vendor error bodies come back as
/// regular payloads. Only network-level failures are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<Vec<u8>>;
}

/// reqwest-backed transport. One per vendor instantiation.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport honouring the timeout and TLS policy.
    pub fn new(options: &HttpOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.insecure)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<Vec<u8>> {
        let method = request.method;
        let host = host_of(&request.url);
        let body_len = request.body.len();

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(authorization) = request.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        builder = match request.body {
            Body::Empty => builder,
            Body::Json(bytes) => builder
                .header(CONTENT_TYPE, herald_core::http::JSON_CONTENT_TYPE)
                .body(bytes),
            Body::Multipart(form) => builder.multipart(into_multipart(form)?),
        };

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(
            method = method.as_str(),
            host = %host,
            status = status.as_u16(),
            sent = body_len,
            received = bytes.len(),
            "HTTP round trip finished"
        );

        Ok(bytes.to_vec())
    }
}

fn into_multipart(form: FormBody) -> Result<Form> {
    let mut multipart = Form::new();
    for part in form.into_parts() {
        multipart = match part {
            FormPart::Text { name, value } => multipart.text(name, value),
            FormPart::Bytes { name, value } => multipart.part(name, Part::bytes(value)),
            FormPart::File {
                name,
                file_name,
                content,
            } => {
                let part = Part::bytes(content)
                    .file_name(file_name)
                    .mime_str("application/octet-stream")?;
                multipart.part(name, part)
            }
        };
    }
    Ok(multipart)
}

// Only the host is logged; Telegram URLs carry the bot token in the path.
fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}
