//! Telegram Bot API request building.
//!
//! The configured URL is a complete method URL such as
//! `https://api.telegram.org/bot<token>/sendMessage?chat_id=<id>`. The token
//! travels in the path, so no `Authorization` header is sent.

use url::Url;

use crate::error::{CoreError, Result};
use crate::http::{Body, FormBody, HttpRequest};

pub const SEND_MESSAGE: &str = "sendMessage";
pub const SEND_PHOTO: &str = "sendPhoto";
pub const SEND_DOCUMENT: &str = "sendDocument";

/// Telegram settings for one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelegramOptions {
    pub url: String,
    pub message: String,
    pub file_name: String,
    /// Resolved file content.
    pub content: Vec<u8>,
    pub disable_notification: bool,
}

const METHODS: [&str; 3] = [SEND_MESSAGE, SEND_PHOTO, SEND_DOCUMENT];

/// Rewrite the last path segment of `url` to `method`, keeping the query.
///
/// The last segment must already name one of the supported methods.
pub fn method_url(url: &str, method: &str) -> Result<String> {
    let mut parsed = Url::parse(url)?;

    let last = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();
    if !METHODS.contains(&last) {
        return Err(CoreError::InvalidUrl(format!(
            "telegram url must end with one of {}",
            METHODS.join(", ")
        )));
    }

    parsed
        .path_segments_mut()
        .map_err(|_| CoreError::InvalidUrl("telegram url cannot be a base".to_string()))?
        .pop()
        .push(method);
    Ok(parsed.into())
}

/// `sendMessage` with HTML parse mode.
pub fn send_message(options: &TelegramOptions) -> Result<HttpRequest> {
    let form = FormBody::new()
        .text("text", options.message.clone())
        .text("parse_mode", "HTML")
        .text(
            "disable_notification",
            options.disable_notification.to_string(),
        );

    Ok(HttpRequest::post(
        method_url(&options.url, SEND_MESSAGE)?,
        Body::Multipart(form),
    ))
}

/// `sendPhoto` with the message as caption.
pub fn send_photo(options: &TelegramOptions) -> Result<HttpRequest> {
    send_attachment(options, SEND_PHOTO, "photo")
}

/// `sendDocument` with the message as caption.
pub fn send_document(options: &TelegramOptions) -> Result<HttpRequest> {
    send_attachment(options, SEND_DOCUMENT, "document")
}

fn send_attachment(options: &TelegramOptions, method: &str, part: &str) -> Result<HttpRequest> {
    let form = FormBody::new()
        .text_if_present("caption", &options.message)
        .text(
            "disable_notification",
            options.disable_notification.to_string(),
        )
        .file(part, options.file_name.clone(), options.content.clone());

    Ok(HttpRequest::post(
        method_url(&options.url, method)?,
        Body::Multipart(form),
    ))
}
