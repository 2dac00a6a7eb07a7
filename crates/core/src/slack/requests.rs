//! Builders for every Slack call herald makes.

use crate::error::{Result, ValidationError};
use crate::http::{bearer, Body, FormBody, HttpRequest};

use super::functions::derive_title;
use super::types::{
    Attachment, Block, PostMessagePayload, SlackMessage, SlackOptions, SlackReactionOptions,
    SlackUserEmail, SlackUsergroupUsers, TextObject,
};

pub const BASE_URL: &str = "https://slack.com/api/";

pub const FILES_UPLOAD: &str = "files.upload";
pub const CHAT_POST_MESSAGE: &str = "chat.postMessage";
pub const REACTIONS_ADD: &str = "reactions.add";
pub const USERS_LOOKUP_BY_EMAIL: &str = "users.lookupByEmail";
pub const USERGROUPS_USERS_UPDATE: &str = "usergroups.users.update";

/// Full URL of a Slack API method.
pub fn api_url(method: &str) -> String {
    format!("{}{}", BASE_URL, method)
}

/// Build the `chat.postMessage` payload, deriving the title when absent.
pub fn post_message_payload(message: &SlackMessage) -> Result<PostMessagePayload> {
    if message.message.is_empty() {
        return Err(ValidationError::EmptyMessage.into());
    }

    let title = if message.title.is_empty() {
        derive_title(&message.message)
    } else {
        message.title.clone()
    };

    let mut blocks = vec![Block::Section {
        text: TextObject::mrkdwn(message.message.clone()),
    }];
    if !message.image_url.is_empty() {
        blocks.push(Block::Image {
            image_url: message.image_url.clone(),
            alt_text: title.clone(),
        });
    }

    Ok(PostMessagePayload {
        channel: message.channel.clone(),
        text: title,
        thread_ts: non_empty(&message.parent_ts),
        attachments: vec![Attachment {
            color: non_empty(&message.quote_color),
            blocks,
        }],
    })
}

/// `chat.postMessage` with a JSON body.
pub fn post_message(message: &SlackMessage, default_token: &str) -> Result<HttpRequest> {
    let payload = post_message_payload(message)?;
    Ok(
        HttpRequest::post(api_url(CHAT_POST_MESSAGE), Body::json(&payload)?)
            .with_authorization(bearer(&message.token, default_token)),
    )
}

/// `files.upload` of the message text as a snippet. All three fields are
/// always sent; `content` carries the file bytes unchanged.
pub fn upload_snippet(message: &SlackMessage, default_token: &str) -> HttpRequest {
    let form = FormBody::new()
        .text("initial_comment", message.message.clone())
        .text("title", message.title.clone())
        .bytes("content", message.file_content.clone());

    HttpRequest::post(api_url(FILES_UPLOAD), Body::Multipart(form))
        .with_query("channels", message.channel.clone())
        .with_authorization(bearer(&message.token, default_token))
}

/// `files.upload` with a file attachment. Optional text fields are omitted
/// when empty; the `file` part is always present.
pub fn upload_file(message: &SlackMessage, default_token: &str) -> HttpRequest {
    let form = FormBody::new()
        .text_if_present("initial_comment", &message.message)
        .text_if_present("title", &message.title)
        .text_if_present("thread_ts", &message.parent_ts)
        .file(
            "file",
            message.file_name.clone(),
            message.file_content.clone(),
        );

    HttpRequest::post(api_url(FILES_UPLOAD), Body::Multipart(form))
        .with_query("channels", message.channel.clone())
        .with_authorization(bearer(&message.token, default_token))
}

/// `reactions.add` on the message identified by `options.parent_ts`.
pub fn add_reaction(
    options: &SlackOptions,
    reaction: &SlackReactionOptions,
    default_token: &str,
) -> HttpRequest {
    let form = FormBody::new()
        .text("channel", options.channel.clone())
        .text("name", reaction.name.clone())
        .text("timestamp", options.parent_ts.clone());

    HttpRequest::post(api_url(REACTIONS_ADD), Body::Multipart(form))
        .with_authorization(bearer(&options.token, default_token))
}

/// `users.lookupByEmail`.
pub fn lookup_user_by_email(
    options: &SlackOptions,
    user: &SlackUserEmail,
    default_token: &str,
) -> HttpRequest {
    HttpRequest::get(api_url(USERS_LOOKUP_BY_EMAIL))
        .with_query("email", user.email.clone())
        .with_authorization(bearer(&options.token, default_token))
}

/// `usergroups.users.update` with a JSON body.
pub fn update_usergroup(
    options: &SlackOptions,
    usergroup: &SlackUsergroupUsers,
    default_token: &str,
) -> Result<HttpRequest> {
    Ok(
        HttpRequest::post(api_url(USERGROUPS_USERS_UPDATE), Body::json(usergroup)?)
            .with_authorization(bearer(&options.token, default_token)),
    )
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
