//! herald_client - HTTP transport, vendor clients and the `herald` CLI.

pub mod cli;
pub mod client;
pub mod content;
pub mod error;
pub mod logging;
pub mod output;

pub use client::{
    GoogleClient, HttpOptions, HttpTransport, SlackClient, TelegramClient, Transport,
};
pub use error::{ClientError, Result};
