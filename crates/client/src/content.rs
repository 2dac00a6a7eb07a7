//! Resolution of option values that may name a file or a URL.

use std::path::Path;

use herald_core::HttpRequest;

use crate::client::Transport;
use crate::error::{ClientError, Result};

/// Resolve `value` to bytes.
///
/// Empty stays empty, an existing file is read, an `http(s)://` URL is
/// fetched and anything else is taken literally.
pub async fn resolve(transport: &dyn Transport, value: &str) -> Result<Vec<u8>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    let path = Path::new(value);
    if path.is_file() {
        return tokio::fs::read(path)
            .await
            .map_err(|e| resolution_error(value, e));
    }

    if is_url(value) {
        tracing::debug!("Fetching content from URL");
        return transport
            .send(HttpRequest::get(value))
            .await
            .map_err(|e| resolution_error(value, e));
    }

    Ok(value.as_bytes().to_vec())
}

/// Like [`resolve`], decoded as UTF-8 text.
pub async fn resolve_text(transport: &dyn Transport, value: &str) -> Result<String> {
    let bytes = resolve(transport, value).await?;
    String::from_utf8(bytes).map_err(|e| resolution_error(value, e))
}

/// The explicit file name, or the base name of `value` when it is a file.
pub fn file_name_for(value: &str, file_name: &str) -> String {
    if !file_name.is_empty() {
        return file_name.to_string();
    }

    let path = Path::new(value);
    if !path.is_file() {
        return String::new();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_url(value: &str) -> bool {
    matches!(
        url::Url::parse(value).map(|u| u.scheme().to_string()).as_deref(),
        Ok("http") | Ok("https")
    )
}

fn resolution_error(value: &str, reason: impl std::fmt::Display) -> ClientError {
    ClientError::ContentResolution {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
