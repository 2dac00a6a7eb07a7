//! Telegram Bot API operations.

use std::sync::Arc;

use herald_core::telegram::{self, TelegramOptions};
use herald_core::HttpRequest;

use super::Transport;
use crate::error::{ClientError, Result};

#[derive(Clone)]
pub struct TelegramClient {
    transport: Arc<dyn Transport>,
    options: TelegramOptions,
}

impl TelegramClient {
    /// Fails when no bot URL is configured or it does not end with a
    /// Bot API method.
    pub fn new(transport: Arc<dyn Transport>, options: TelegramOptions) -> Result<Self> {
        if options.url.is_empty() {
            return Err(ClientError::Config("telegram url is not set".to_string()));
        }
        telegram::method_url(&options.url, telegram::SEND_MESSAGE)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { transport, options })
    }

    pub async fn send_message(&self) -> Result<Vec<u8>> {
        let request = telegram::send_message(&self.options)?;
        self.dispatch(telegram::SEND_MESSAGE, request).await
    }

    pub async fn send_photo(&self) -> Result<Vec<u8>> {
        let request = telegram::send_photo(&self.options)?;
        self.dispatch(telegram::SEND_PHOTO, request).await
    }

    pub async fn send_document(&self) -> Result<Vec<u8>> {
        let request = telegram::send_document(&self.options)?;
        self.dispatch(telegram::SEND_DOCUMENT, request).await
    }

    async fn dispatch(&self, operation: &str, request: HttpRequest) -> Result<Vec<u8>> {
        tracing::debug!(operation, size = request.body.len(), "Calling Telegram");
        self.transport.send(request).await
    }
}
