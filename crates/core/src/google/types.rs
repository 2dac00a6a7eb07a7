use serde::{Deserialize, Serialize};

/// OAuth credentials used for the refresh-token grant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoogleOptions {
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub refresh_token: String,
}

/// Successful answer of the token endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub token_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarOptions {
    pub id: String,
}

/// Filters for `events.list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetEventsOptions {
    pub time_min: String,
    pub time_max: String,
    pub always_include_email: bool,
    pub order_by: String,
    pub q: String,
    pub single_events: bool,
}

/// Fields for `events.insert`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertEventOptions {
    pub summary: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub time_zone: String,
    pub visibility: String,
    pub send_updates: String,
    pub supports_attachments: bool,
    pub source_title: String,
    pub source_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time_zone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttendee {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSource {
    pub title: String,
    pub url: String,
}

/// Calendar event resource as sent to `events.insert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub event_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transparency: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub visibility: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    #[serde(default)]
    pub attendees: Vec<EventAttendee>,
    pub guests_can_invite_others: bool,
    pub guests_can_modify: bool,
    pub guests_can_see_other_guests: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EventSource>,
}
