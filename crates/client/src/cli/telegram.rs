//! Telegram CLI commands.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use herald_core::telegram::TelegramOptions;

use crate::client::{HttpOptions, HttpTransport, TelegramClient, Transport, DEFAULT_TIMEOUT_SECS};
use crate::content;
use crate::error::Result;
use crate::output::{self, OutputOptions};

const VENDOR: &str = "telegram";

/// Telegram tools.
#[derive(Debug, Parser)]
pub struct TelegramCommand {
    #[command(flatten)]
    pub args: TelegramArgs,

    #[command(subcommand)]
    pub action: TelegramAction,
}

#[derive(Debug, Clone, Args)]
pub struct TelegramArgs {
    /// Bot API URL, e.g. https://api.telegram.org/bot<token>/sendMessage?chat_id=<id>.
    #[arg(long = "telegram-url", env = "TELEGRAM_URL", default_value = "", hide_env_values = true, global = true)]
    pub url: String,
    /// Request timeout in seconds.
    #[arg(long = "telegram-timeout", env = "TELEGRAM_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,
    #[arg(long = "telegram-insecure", env = "TELEGRAM_INSECURE", global = true)]
    pub insecure: bool,
    #[arg(long = "telegram-disable-notification", env = "TELEGRAM_DISABLE_NOTIFICATION", global = true)]
    pub disable_notification: bool,
    /// Message text, file path or URL.
    #[arg(long = "telegram-message", env = "TELEGRAM_MESSAGE", default_value = "", global = true)]
    pub message: String,
    #[arg(long = "telegram-filename", env = "TELEGRAM_FILENAME", default_value = "", global = true)]
    pub file_name: String,
    /// Attachment content, file path or URL.
    #[arg(long = "telegram-content", env = "TELEGRAM_CONTENT", default_value = "", global = true)]
    pub content: String,
    #[arg(long = "telegram-output", env = "TELEGRAM_OUTPUT", global = true)]
    pub output: Option<PathBuf>,
    #[arg(long = "telegram-output-query", env = "TELEGRAM_OUTPUT_QUERY", global = true)]
    pub output_query: Option<String>,
}

impl TelegramArgs {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions::new(self.timeout, self.insecure)
    }

    pub fn output_options(&self) -> OutputOptions {
        OutputOptions::new(self.output.clone(), self.output_query.clone())
    }

    pub async fn resolve(&self, transport: &dyn Transport) -> Result<TelegramOptions> {
        Ok(TelegramOptions {
            url: self.url.clone(),
            message: content::resolve_text(transport, &self.message).await?,
            file_name: content::file_name_for(&self.content, &self.file_name),
            content: content::resolve(transport, &self.content).await?,
            disable_notification: self.disable_notification,
        })
    }
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum TelegramAction {
    /// Send text message.
    SendMessage,
    /// Send photo.
    SendPhoto,
    /// Send document.
    SendDocument,
}

impl TelegramAction {
    pub fn name(&self) -> &'static str {
        match self {
            TelegramAction::SendMessage => "send-message",
            TelegramAction::SendPhoto => "send-photo",
            TelegramAction::SendDocument => "send-document",
        }
    }
}

pub async fn run(cmd: TelegramCommand) -> Result<()> {
    let transport = Arc::new(HttpTransport::new(&cmd.args.http_options())?);
    execute(cmd, transport).await
}

pub async fn execute(cmd: TelegramCommand, transport: Arc<dyn Transport>) -> Result<()> {
    let options = cmd.args.resolve(transport.as_ref()).await?;
    let output = cmd.args.output_options();
    let client = TelegramClient::new(transport, options)?;

    tracing::debug!(operation = cmd.action.name(), "Running Telegram command");
    let result = match cmd.action {
        TelegramAction::SendMessage => client.send_message().await,
        TelegramAction::SendPhoto => client.send_photo().await,
        TelegramAction::SendDocument => client.send_document().await,
    };

    output::emit(VENDOR, cmd.action.name(), result, &output)
}
