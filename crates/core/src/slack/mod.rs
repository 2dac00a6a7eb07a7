//! Slack Web API request building.

mod functions;
mod requests;
mod types;

pub use functions::{derive_title, truncate, MAX_TITLE_CHARS, NO_TITLE};
pub use requests::{
    add_reaction, api_url, lookup_user_by_email, post_message, post_message_payload,
    update_usergroup, upload_file, upload_snippet, BASE_URL, CHAT_POST_MESSAGE, FILES_UPLOAD,
    REACTIONS_ADD, USERGROUPS_USERS_UPDATE, USERS_LOOKUP_BY_EMAIL,
};
pub use types::{
    Attachment, Block, PostMessagePayload, SlackMessage, SlackOptions, SlackReactionOptions,
    SlackUserEmail, SlackUsergroupUsers, TextObject,
};
