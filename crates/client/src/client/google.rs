//! Google Calendar operations.
//!
//! Every call runs the refresh-token grant first; access tokens are never
//! cached.

use std::sync::Arc;

use herald_core::google::{
    self, CalendarOptions, GetEventsOptions, GoogleOptions, InsertEventOptions, TokenResponse,
};
use herald_core::AuthError;

use super::Transport;
use crate::error::{ClientError, Result};

#[derive(Clone)]
pub struct GoogleClient {
    transport: Arc<dyn Transport>,
    options: GoogleOptions,
}

impl GoogleClient {
    pub fn new(transport: Arc<dyn Transport>, options: GoogleOptions) -> Self {
        Self { transport, options }
    }

    /// Exchange the configured refresh token for an access token.
    pub async fn refresh_access_token(&self) -> Result<TokenResponse> {
        self.custom_refresh_access_token(&self.options).await
    }

    /// Exchange the refresh token in `options` for an access token.
    pub async fn custom_refresh_access_token(
        &self,
        options: &GoogleOptions,
    ) -> Result<TokenResponse> {
        let request = google::refresh_token(options);
        let body = self.transport.send(request).await.map_err(|e| match e {
            ClientError::Auth(auth) => auth,
            other => AuthError::Transport(other.to_string()),
        })?;

        let token = google::parse_token_response(&body)?;
        tracing::debug!(
            expires_in = token.expires_in,
            token_type = %token.token_type,
            "Refreshed Google access token"
        );
        Ok(token)
    }

    pub async fn get_events(
        &self,
        calendar: &CalendarOptions,
        options: &GetEventsOptions,
    ) -> Result<Vec<u8>> {
        self.custom_get_events(&self.options, calendar, options)
            .await
    }

    /// List events with per-call credentials. Filters are validated before
    /// any request is issued.
    pub async fn custom_get_events(
        &self,
        credentials: &GoogleOptions,
        calendar: &CalendarOptions,
        options: &GetEventsOptions,
    ) -> Result<Vec<u8>> {
        google::validate_get_events(options)?;

        let token = self.custom_refresh_access_token(credentials).await?;
        let request = google::get_events(calendar, options, &token.access_token)?;
        tracing::debug!(operation = "events.list", "Listing calendar events");
        self.transport.send(request).await
    }

    pub async fn insert_event(
        &self,
        calendar: &CalendarOptions,
        options: &InsertEventOptions,
    ) -> Result<Vec<u8>> {
        self.custom_insert_event(&self.options, calendar, options)
            .await
    }

    /// Insert an event with per-call credentials.
    pub async fn custom_insert_event(
        &self,
        credentials: &GoogleOptions,
        calendar: &CalendarOptions,
        options: &InsertEventOptions,
    ) -> Result<Vec<u8>> {
        let token = self.custom_refresh_access_token(credentials).await?;
        let request = google::insert_event(calendar, options, &token.access_token)?;
        tracing::debug!(
            operation = "events.insert",
            size = request.body.len(),
            "Inserting calendar event"
        );
        self.transport.send(request).await
    }
}
