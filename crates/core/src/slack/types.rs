//! Slack option and payload types.

use serde::{Deserialize, Serialize};

/// Slack settings for one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackOptions {
    pub token: String,
    pub channel: String,
    pub title: String,
    pub message: String,
    pub file_name: String,
    /// Resolved file content.
    pub file: Vec<u8>,
    pub image_url: String,
    pub parent_ts: String,
    pub quote_color: String,
}

/// A single message, usually built from [`SlackOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackMessage {
    pub token: String,
    pub channel: String,
    pub parent_ts: String,
    pub title: String,
    pub message: String,
    pub image_url: String,
    pub file_name: String,
    pub file_content: Vec<u8>,
    pub quote_color: String,
}

impl From<&SlackOptions> for SlackMessage {
    fn from(options: &SlackOptions) -> Self {
        Self {
            token: options.token.clone(),
            channel: options.channel.clone(),
            parent_ts: options.parent_ts.clone(),
            title: options.title.clone(),
            message: options.message.clone(),
            image_url: options.image_url.clone(),
            file_name: options.file_name.clone(),
            file_content: options.file.clone(),
            quote_color: options.quote_color.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackReactionOptions {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackUserEmail {
    pub email: String,
}

/// Body of `usergroups.users.update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackUsergroupUsers {
    pub usergroup: String,
    pub users: Vec<String>,
}

/// Body of `chat.postMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMessagePayload {
    pub channel: String,
    /// Notification fallback text. Holds the message title.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub blocks: Vec<Block>,
}

/// Block Kit blocks used by herald.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
    Image { image_url: String, alt_text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: "mrkdwn".to_string(),
            text: text.into(),
        }
    }
}
