//! In-memory transport for tests.
//!
//! Records every request and answers from a queue of canned responses.
//! An empty queue answers `{"ok":true}`.

use std::collections::VecDeque;

use async_trait::async_trait;
use herald_core::HttpRequest;
use tokio::sync::Mutex;

use super::Transport;
use crate::error::{ClientError, Result};

#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<std::result::Result<Vec<u8>, String>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body.
    pub async fn push_response(&self, body: impl Into<Vec<u8>>) {
        self.responses.lock().await.push_back(Ok(body.into()));
    }

    /// Queue a connection failure.
    pub async fn push_failure(&self, reason: impl Into<String>) {
        self.responses.lock().await.push_back(Err(reason.into()));
    }

    /// Requests sent so far, in order.
    pub async fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<Vec<u8>> {
        self.requests.lock().await.push(request);
        match self.responses.lock().await.pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(reason)) => Err(ClientError::Connection(reason)),
            None => Ok(br#"{"ok":true}"#.to_vec()),
        }
    }
}
