//! Google OAuth and Calendar v3 request building.

mod requests;
mod types;

pub use requests::{
    event_from_options, events_query, events_url, get_events, insert_event,
    parse_token_response, refresh_token, validate_get_events, CALENDAR_URL, DEFAULT_EVENT_TYPE,
    DEFAULT_TRANSPARENCY, OAUTH_TOKEN_URL, ORDER_BY_START_TIME,
};
pub use types::{
    CalendarEvent, CalendarOptions, EventAttendee, EventDateTime, EventSource, GetEventsOptions,
    GoogleOptions, InsertEventOptions, TokenResponse,
};
