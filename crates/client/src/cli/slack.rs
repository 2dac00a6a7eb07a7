//! Slack CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use herald_core::slack::{SlackOptions, SlackReactionOptions, SlackUserEmail, SlackUsergroupUsers};

use crate::client::{HttpOptions, HttpTransport, SlackClient, Transport, DEFAULT_TIMEOUT_SECS};
use crate::content;
use crate::error::Result;
use crate::output::{self, OutputOptions};

const VENDOR: &str = "slack";

/// Slack tools.
#[derive(Debug, Parser)]
pub struct SlackCommand {
    #[command(flatten)]
    pub args: SlackArgs,

    #[command(subcommand)]
    pub action: SlackAction,
}

/// Connection and message settings, each with a `SLACK_*` fallback.
#[derive(Debug, Clone, Args)]
pub struct SlackArgs {
    /// Request timeout in seconds.
    #[arg(long = "slack-timeout", env = "SLACK_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,
    /// Skip TLS certificate verification.
    #[arg(long = "slack-insecure", env = "SLACK_INSECURE", global = true)]
    pub insecure: bool,
    /// Bot or user token.
    #[arg(long = "slack-token", env = "SLACK_TOKEN", default_value = "", hide_env_values = true, global = true)]
    pub token: String,
    #[arg(long = "slack-channel", env = "SLACK_CHANNEL", default_value = "", global = true)]
    pub channel: String,
    #[arg(long = "slack-title", env = "SLACK_TITLE", default_value = "", global = true)]
    pub title: String,
    /// Message text, file path or URL.
    #[arg(long = "slack-message", env = "SLACK_MESSAGE", default_value = "", global = true)]
    pub message: String,
    #[arg(long = "slack-filename", env = "SLACK_FILENAME", default_value = "", global = true)]
    pub file_name: String,
    /// File content, file path or URL.
    #[arg(long = "slack-file", env = "SLACK_FILE", default_value = "", global = true)]
    pub file: String,
    #[arg(long = "slack-image-url", env = "SLACK_IMAGE_URL", default_value = "", global = true)]
    pub image_url: String,
    /// Timestamp of the parent message, for threads and reactions.
    #[arg(long = "slack-parent-ts", env = "SLACK_PARENT_TS", default_value = "", global = true)]
    pub parent_ts: String,
    #[arg(long = "slack-quote-color", env = "SLACK_QUOTE_COLOR", default_value = "", global = true)]
    pub quote_color: String,
    /// Write the response to this file instead of stdout.
    #[arg(long = "slack-output", env = "SLACK_OUTPUT", global = true)]
    pub output: Option<PathBuf>,
    /// jq expression applied to the response.
    #[arg(long = "slack-output-query", env = "SLACK_OUTPUT_QUERY", global = true)]
    pub output_query: Option<String>,
}

impl SlackArgs {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions::new(self.timeout, self.insecure)
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions::new(self.output.clone(), self.output_query.clone())
    }

    /// Build the invocation options, resolving message and file content.
    pub async fn resolve(&self, transport: &dyn Transport) -> Result<SlackOptions> {
        Ok(SlackOptions {
            token: self.token.clone(),
            channel: self.channel.clone(),
            title: self.title.clone(),
            message: content::resolve_text(transport, &self.message).await?,
            file_name: content::file_name_for(&self.file, &self.file_name),
            file: content::resolve(transport, &self.file).await?,
            image_url: self.image_url.clone(),
            parent_ts: self.parent_ts.clone(),
            quote_color: self.quote_color.clone(),
        })
    }
}

/// Available Slack actions.
#[derive(Debug, Clone, Subcommand)]
pub enum SlackAction {
    /// Upload the message as a snippet.
    Send,
    /// Post a formatted message.
    SendMessage,
    /// Upload a file.
    SendFile,
    /// Add a reaction to the parent message.
    AddReaction {
        /// Reaction name without colons.
        #[arg(long = "slack-reaction-name", env = "SLACK_REACTION_NAME")]
        name: String,
    },
    /// Look up a user by email.
    LookupUser {
        #[arg(long = "slack-user-email", env = "SLACK_USER_EMAIL")]
        email: String,
    },
    /// Replace the members of a usergroup.
    UpdateUsergroup {
        #[arg(long = "slack-usergroup", env = "SLACK_USERGROUP")]
        usergroup: String,
        /// Comma-separated user IDs.
        #[arg(
            long = "slack-usergroup-users",
            env = "SLACK_USERGROUP_USERS",
            value_delimiter = ','
        )]
        users: Vec<String>,
    },
}

impl SlackAction {
    pub fn name(&self) -> &'static str {
        match self {
            SlackAction::Send => "send",
            SlackAction::SendMessage => "send-message",
            SlackAction::SendFile => "send-file",
            SlackAction::AddReaction { .. } => "add-reaction",
            SlackAction::LookupUser { .. } => "lookup-user",
            SlackAction::UpdateUsergroup { .. } => "update-usergroup",
        }
    }
}

pub async fn run(cmd: SlackCommand) -> Result<()> {
    let transport = Arc::new(HttpTransport::new(&cmd.args.http_options())?);
    execute(cmd, transport).await
}

/// Resolve settings, call Slack and print the response.
pub async fn execute(cmd: SlackCommand, transport: Arc<dyn Transport>) -> Result<()> {
    let options = cmd.args.resolve(transport.as_ref()).await?;
    let output = cmd.args.output_options();
    let client = SlackClient::new(transport, options);

    tracing::debug!(operation = cmd.action.name(), "Running Slack command");
    let result = match &cmd.action {
        SlackAction::Send => client.send().await,
        SlackAction::SendMessage => client.send_message().await,
        SlackAction::SendFile => client.send_file().await,
        SlackAction::AddReaction { name } => {
            client
                .add_reaction(&SlackReactionOptions { name: name.clone() })
                .await
        }
        SlackAction::LookupUser { email } => {
            client
                .lookup_user_by_email(&SlackUserEmail {
                    email: email.clone(),
                })
                .await
        }
        SlackAction::UpdateUsergroup { usergroup, users } => {
            client
                .update_usergroup(&SlackUsergroupUsers {
                    usergroup: usergroup.clone(),
                    users: users.clone(),
                })
                .await
        }
    };

    output::emit(VENDOR, cmd.action.name(), result, &output)
}
