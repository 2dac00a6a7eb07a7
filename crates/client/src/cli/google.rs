//! Google CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use herald_core::google::{CalendarOptions, GetEventsOptions, GoogleOptions, InsertEventOptions};

use crate::client::{GoogleClient, HttpOptions, HttpTransport, Transport, DEFAULT_TIMEOUT_SECS};
use crate::content;
use crate::error::Result;
use crate::output::{self, OutputOptions};

const VENDOR: &str = "google";

/// Google tools.
#[derive(Debug, Parser)]
pub struct GoogleCommand {
    #[command(flatten)]
    pub args: GoogleArgs,

    #[command(subcommand)]
    pub action: GoogleAction,
}

#[derive(Debug, Clone, Args)]
pub struct GoogleArgs {
    #[arg(long = "google-timeout", env = "GOOGLE_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,
    #[arg(long = "google-insecure", env = "GOOGLE_INSECURE", global = true)]
    pub insecure: bool,
    #[arg(long = "google-oauth-client-id", env = "GOOGLE_OAUTH_CLIENT_ID", default_value = "", global = true)]
    pub oauth_client_id: String,
    #[arg(long = "google-oauth-client-secret", env = "GOOGLE_OAUTH_CLIENT_SECRET", default_value = "", hide_env_values = true, global = true)]
    pub oauth_client_secret: String,
    #[arg(long = "google-refresh-token", env = "GOOGLE_REFRESH_TOKEN", default_value = "", hide_env_values = true, global = true)]
    pub refresh_token: String,
    /// Calendar ID, e.g. primary or an address.
    #[arg(long = "google-calendar-id", env = "GOOGLE_CALENDAR_ID", default_value = "", global = true)]
    pub calendar_id: String,
    #[arg(long = "google-output", env = "GOOGLE_OUTPUT", global = true)]
    pub output: Option<PathBuf>,
    #[arg(long = "google-output-query", env = "GOOGLE_OUTPUT_QUERY", global = true)]
    pub output_query: Option<String>,
}

impl GoogleArgs {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions::new(self.timeout, self.insecure)
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions::new(self.output.clone(), self.output_query.clone())
    }

    pub fn google_options(&self) -> GoogleOptions {
        GoogleOptions {
            oauth_client_id: self.oauth_client_id.clone(),
            oauth_client_secret: self.oauth_client_secret.clone(),
            refresh_token: self.refresh_token.clone(),
        }
    }

    pub fn calendar_options(&self) -> CalendarOptions {
        CalendarOptions {
            id: self.calendar_id.clone(),
        }
    }
}

/// `events.list` filters.
#[derive(Debug, Clone, Args)]
pub struct GetEventsArgs {
    /// Lower bound (RFC 3339) for an event's end time.
    #[arg(long = "google-calendar-time-min", env = "GOOGLE_CALENDAR_TIME_MIN", default_value = "")]
    pub time_min: String,
    /// Upper bound (RFC 3339) for an event's start time.
    #[arg(long = "google-calendar-time-max", env = "GOOGLE_CALENDAR_TIME_MAX", default_value = "")]
    pub time_max: String,
    #[arg(long = "google-calendar-always-include-email", env = "GOOGLE_CALENDAR_ALWAYS_INCLUDE_EMAIL")]
    pub always_include_email: bool,
    /// startTime (requires single events) or updated.
    #[arg(long = "google-calendar-order-by", env = "GOOGLE_CALENDAR_ORDER_BY", default_value = "")]
    pub order_by: String,
    /// Free text search.
    #[arg(long = "google-calendar-q", env = "GOOGLE_CALENDAR_Q", default_value = "")]
    pub q: String,
    /// Expand recurring events into instances.
    #[arg(long = "google-calendar-single-events", env = "GOOGLE_CALENDAR_SINGLE_EVENTS")]
    pub single_events: bool,
}

impl From<&GetEventsArgs> for GetEventsOptions {
    fn from(args: &GetEventsArgs) -> Self {
        Self {
            time_min: args.time_min.clone(),
            time_max: args.time_max.clone(),
            always_include_email: args.always_include_email,
            order_by: args.order_by.clone(),
            q: args.q.clone(),
            single_events: args.single_events,
        }
    }
}

/// `events.insert` fields.
#[derive(Debug, Clone, Args)]
pub struct InsertEventArgs {
    #[arg(long = "google-calendar-summary", env = "GOOGLE_CALENDAR_SUMMARY", default_value = "")]
    pub summary: String,
    /// Description text, file path or URL.
    #[arg(long = "google-calendar-description", env = "GOOGLE_CALENDAR_DESCRIPTION", default_value = "")]
    pub description: String,
    /// Start date-time, e.g. 2024-01-02T09:00:00.
    #[arg(long = "google-calendar-start", env = "GOOGLE_CALENDAR_START", default_value = "")]
    pub start: String,
    #[arg(long = "google-calendar-end", env = "GOOGLE_CALENDAR_END", default_value = "")]
    pub end: String,
    #[arg(long = "google-calendar-time-zone", env = "GOOGLE_CALENDAR_TIME_ZONE", default_value = "")]
    pub time_zone: String,
    /// default, public, private or confidential.
    #[arg(long = "google-calendar-visibility", env = "GOOGLE_CALENDAR_VISIBILITY", default_value = "")]
    pub visibility: String,
    /// all, externalOnly or none.
    #[arg(long = "google-calendar-send-updates", env = "GOOGLE_CALENDAR_SEND_UPDATES", default_value = "")]
    pub send_updates: String,
    #[arg(long = "google-calendar-supports-attachments", env = "GOOGLE_CALENDAR_SUPPORTS_ATTACHMENTS")]
    pub supports_attachments: bool,
    #[arg(long = "google-calendar-source-title", env = "GOOGLE_CALENDAR_SOURCE_TITLE", default_value = "")]
    pub source_title: String,
    #[arg(long = "google-calendar-source-url", env = "GOOGLE_CALENDAR_SOURCE_URL", default_value = "")]
    pub source_url: String,
}

impl InsertEventArgs {
    /// Build the event options, resolving the description.
    pub async fn resolve(&self, transport: &dyn Transport) -> Result<InsertEventOptions> {
        Ok(InsertEventOptions {
            summary: self.summary.clone(),
            description: content::resolve_text(transport, &self.description).await?,
            start: self.start.clone(),
            end: self.end.clone(),
            time_zone: self.time_zone.clone(),
            visibility: self.visibility.clone(),
            send_updates: self.send_updates.clone(),
            supports_attachments: self.supports_attachments,
            source_title: self.source_title.clone(),
            source_url: self.source_url.clone(),
        })
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum GoogleAction {
    /// List calendar events.
    CalendarGetEvents(GetEventsArgs),
    /// Insert a calendar event.
    CalendarInsertEvent(InsertEventArgs),
}

impl GoogleAction {
    pub fn name(&self) -> &'static str {
        match self {
            GoogleAction::CalendarGetEvents(_) => "calendar-get-events",
            GoogleAction::CalendarInsertEvent(_) => "calendar-insert-event",
        }
    }
}

pub async fn run(cmd: GoogleCommand) -> Result<()> {
    let transport = Arc::new(HttpTransport::new(&cmd.args.http_options())?);
    execute(cmd, transport).await
}

pub async fn execute(cmd: GoogleCommand, transport: Arc<dyn Transport>) -> Result<()> {
    let output = cmd.args.output_options();
    let calendar = cmd.args.calendar_options();

    let result = match &cmd.action {
        GoogleAction::CalendarGetEvents(args) => {
            let client = GoogleClient::new(transport, cmd.args.google_options());
            client
                .get_events(&calendar, &GetEventsOptions::from(args))
                .await
        }
        GoogleAction::CalendarInsertEvent(args) => {
            let options = args.resolve(transport.as_ref()).await?;
            let client = GoogleClient::new(transport, cmd.args.google_options());
            client.insert_event(&calendar, &options).await
        }
    };

    output::emit(VENDOR, cmd.action.name(), result, &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::client::mock::RecordingTransport;
    use clap::Parser;

    fn parse(args: &[&str]) -> GoogleCommand {
        let mut argv = vec!["herald", "google"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Google(cmd) => cmd,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_get_events() {
        let cmd = parse(&[
            "calendar-get-events",
            "--google-calendar-id",
            "primary",
            "--google-calendar-time-min",
            "2024-01-01T00:00:00Z",
            "--google-calendar-order-by",
            "startTime",
            "--google-calendar-single-events",
        ]);
        assert_eq!(cmd.args.calendar_id, "primary");
        match &cmd.action {
            GoogleAction::CalendarGetEvents(args) => {
                let options = GetEventsOptions::from(args);
                assert_eq!(options.time_min, "2024-01-01T00:00:00Z");
                assert_eq!(options.order_by, "startTime");
                assert!(options.single_events);
                assert!(!options.always_include_email);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_invalid_filters_sends_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("events.json");
        let out_arg = out.to_string_lossy().into_owned();
        let cmd = parse(&[
            "calendar-get-events",
            "--google-calendar-order-by",
            "startTime",
            "--google-output",
            &out_arg,
        ]);

        let transport = Arc::new(RecordingTransport::new());
        execute(cmd, transport.clone()).await.unwrap();

        assert_eq!(transport.request_count().await, 0);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_execute_insert_event() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("event.txt");
        let out_arg = out.to_string_lossy().into_owned();
        let cmd = parse(&[
            "calendar-insert-event",
            "--google-refresh-token",
            "1//r",
            "--google-calendar-id",
            "primary",
            "--google-calendar-summary",
            "Release",
            "--google-calendar-description",
            "v1.2 goes out",
            "--google-output",
            &out_arg,
            "--google-output-query",
            ".id",
        ]);

        let transport = Arc::new(RecordingTransport::new());
        transport
            .push_response(r#"{"access_token":"ya29.t","expires_in":3599}"#)
            .await;
        transport.push_response(r#"{"id":"evt1","status":"confirmed"}"#).await;
        execute(cmd, transport.clone()).await.unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 2);
        let event: serde_json::Value =
            serde_json::from_slice(requests[1].body.as_json().unwrap()).unwrap();
        assert_eq!(event["description"], "v1.2 goes out");
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "evt1\n");
    }
}
