use serde::Deserialize;
use url::Url;

use crate::error::{AuthError, CoreError, Result, ValidationError};
use crate::http::{Body, FormBody, HttpRequest};

use super::types::{
    CalendarEvent, CalendarOptions, EventDateTime, EventSource, GetEventsOptions, GoogleOptions,
    InsertEventOptions, TokenResponse,
};

pub const OAUTH_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const CALENDAR_URL: &str = "https://www.googleapis.com/calendar/v3";

pub const ORDER_BY_START_TIME: &str = "startTime";
pub const DEFAULT_EVENT_TYPE: &str = "default";
pub const DEFAULT_TRANSPARENCY: &str = "transparent";

/// Refresh-token grant. Credential fields are sent only when set,
/// `grant_type` always.
pub fn refresh_token(options: &GoogleOptions) -> HttpRequest {
    let form = FormBody::new()
        .text_if_present("client_id", &options.oauth_client_id)
        .text_if_present("client_secret", &options.oauth_client_secret)
        .text_if_present("refresh_token", &options.refresh_token)
        .text("grant_type", "refresh_token");

    HttpRequest::post(OAUTH_TOKEN_URL, Body::Multipart(form))
}

#[derive(Deserialize)]
struct RawTokenResponse {
    #[serde(flatten)]
    token: TokenResponse,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Decode the token endpoint answer.
pub fn parse_token_response(bytes: &[u8]) -> std::result::Result<TokenResponse, AuthError> {
    let raw: RawTokenResponse =
        serde_json::from_slice(bytes).map_err(|e| AuthError::Malformed(e.to_string()))?;

    if let Some(error) = raw.error {
        let reason = match raw.error_description {
            Some(description) => format!("{}: {}", error, description),
            None => error,
        };
        return Err(AuthError::Rejected(reason));
    }

    if raw.token.access_token.is_empty() {
        return Err(AuthError::Malformed("missing access_token".to_string()));
    }

    Ok(raw.token)
}

/// `https://www.googleapis.com/calendar/v3/calendars/{id}/events`.
pub fn events_url(calendar: &CalendarOptions) -> Result<String> {
    let mut url = Url::parse(CALENDAR_URL)?;
    url.path_segments_mut()
        .map_err(|_| CoreError::InvalidUrl(CALENDAR_URL.to_string()))?
        .extend(["calendars", calendar.id.as_str(), "events"]);
    Ok(url.into())
}

/// `orderBy=startTime` is only accepted together with `singleEvents=true`.
pub fn validate_get_events(options: &GetEventsOptions) -> std::result::Result<(), ValidationError> {
    if options.order_by == ORDER_BY_START_TIME && !options.single_events {
        return Err(ValidationError::OrderByRequiresSingleEvents);
    }
    Ok(())
}

/// Query parameters for `events.list`.
pub fn events_query(options: &GetEventsOptions) -> Result<Vec<(String, String)>> {
    validate_get_events(options)?;

    let mut query = Vec::new();
    push_if_present(&mut query, "timeMin", &options.time_min);
    push_if_present(&mut query, "timeMax", &options.time_max);
    query.push(("singleEvents".to_string(), options.single_events.to_string()));
    push_if_present(&mut query, "orderBy", &options.order_by);
    push_if_present(&mut query, "q", &options.q);
    query.push((
        "alwaysIncludeEmail".to_string(),
        options.always_include_email.to_string(),
    ));
    Ok(query)
}

/// `events.list` authorized with a fresh access token.
pub fn get_events(
    calendar: &CalendarOptions,
    options: &GetEventsOptions,
    access_token: &str,
) -> Result<HttpRequest> {
    let query = events_query(options)?;
    Ok(HttpRequest::get(events_url(calendar)?)
        .with_query_pairs(query)
        .with_authorization(format!("Bearer {}", access_token)))
}

/// Event resource with herald's fixed guest and visibility defaults.
pub fn event_from_options(options: &InsertEventOptions) -> CalendarEvent {
    let source = if options.source_title.is_empty() && options.source_url.is_empty() {
        None
    } else {
        Some(EventSource {
            title: options.source_title.clone(),
            url: options.source_url.clone(),
        })
    };

    CalendarEvent {
        summary: options.summary.clone(),
        description: options.description.clone(),
        event_type: DEFAULT_EVENT_TYPE.to_string(),
        location: String::new(),
        transparency: DEFAULT_TRANSPARENCY.to_string(),
        visibility: options.visibility.clone(),
        start: EventDateTime {
            date_time: options.start.clone(),
            time_zone: options.time_zone.clone(),
            ..Default::default()
        },
        end: EventDateTime {
            date_time: options.end.clone(),
            time_zone: options.time_zone.clone(),
            ..Default::default()
        },
        attendees: Vec::new(),
        guests_can_invite_others: true,
        guests_can_modify: false,
        guests_can_see_other_guests: true,
        source,
    }
}

/// `events.insert` authorized with a fresh access token.
pub fn insert_event(
    calendar: &CalendarOptions,
    options: &InsertEventOptions,
    access_token: &str,
) -> Result<HttpRequest> {
    let event = event_from_options(options);

    let mut query = Vec::new();
    push_if_present(&mut query, "sendUpdates", &options.send_updates);
    query.push((
        "supportsAttachments".to_string(),
        options.supports_attachments.to_string(),
    ));

    Ok(
        HttpRequest::post(events_url(calendar)?, Body::json(&event)?)
            .with_query_pairs(query)
            .with_authorization(format!("Bearer {}", access_token)),
    )
}

fn push_if_present(query: &mut Vec<(String, String)>, key: &str, value: &str) {
    if !value.is_empty() {
        query.push((key.to_string(), value.to_string()));
    }
}
