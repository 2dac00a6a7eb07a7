//! Slack Web API operations.

use std::sync::Arc;

use herald_core::slack::{
    self, SlackMessage, SlackOptions, SlackReactionOptions, SlackUserEmail, SlackUsergroupUsers,
};

use super::Transport;
use crate::error::Result;

/// Slack client bound to one set of invocation options.
///
/// `options.token` is the default token; per-call values win when set.
#[derive(Clone)]
pub struct SlackClient {
    transport: Arc<dyn Transport>,
    options: SlackOptions,
}

impl SlackClient {
    pub fn new(transport: Arc<dyn Transport>, options: SlackOptions) -> Self {
        Self { transport, options }
    }

    pub fn options(&self) -> &SlackOptions {
        &self.options
    }

    /// Upload the configured message as a snippet.
    pub async fn send(&self) -> Result<Vec<u8>> {
        self.send_custom(&SlackMessage::from(&self.options)).await
    }

    pub async fn send_custom(&self, message: &SlackMessage) -> Result<Vec<u8>> {
        let request = slack::upload_snippet(message, &self.options.token);
        tracing::debug!(
            operation = slack::FILES_UPLOAD,
            size = request.body.len(),
            "Uploading Slack snippet"
        );
        self.transport.send(request).await
    }

    /// Post the configured message with `chat.postMessage`.
    pub async fn send_message(&self) -> Result<Vec<u8>> {
        self.send_custom_message(&SlackMessage::from(&self.options))
            .await
    }

    pub async fn send_custom_message(&self, message: &SlackMessage) -> Result<Vec<u8>> {
        let request = slack::post_message(message, &self.options.token)?;
        tracing::debug!(
            operation = slack::CHAT_POST_MESSAGE,
            size = request.body.len(),
            "Posting Slack message"
        );
        self.transport.send(request).await
    }

    /// Upload the configured file.
    pub async fn send_file(&self) -> Result<Vec<u8>> {
        self.send_custom_file(&SlackMessage::from(&self.options))
            .await
    }

    pub async fn send_custom_file(&self, message: &SlackMessage) -> Result<Vec<u8>> {
        let request = slack::upload_file(message, &self.options.token);
        tracing::debug!(
            operation = slack::FILES_UPLOAD,
            file_name = %message.file_name,
            size = request.body.len(),
            "Uploading Slack file"
        );
        self.transport.send(request).await
    }

    /// React to the message at `parent_ts` in the configured channel.
    pub async fn add_reaction(&self, reaction: &SlackReactionOptions) -> Result<Vec<u8>> {
        self.custom_add_reaction(&self.options, reaction).await
    }

    pub async fn custom_add_reaction(
        &self,
        options: &SlackOptions,
        reaction: &SlackReactionOptions,
    ) -> Result<Vec<u8>> {
        let request = slack::add_reaction(options, reaction, &self.options.token);
        tracing::debug!(operation = slack::REACTIONS_ADD, "Adding Slack reaction");
        self.transport.send(request).await
    }

    pub async fn lookup_user_by_email(&self, user: &SlackUserEmail) -> Result<Vec<u8>> {
        self.custom_lookup_user_by_email(&self.options, user).await
    }

    pub async fn custom_lookup_user_by_email(
        &self,
        options: &SlackOptions,
        user: &SlackUserEmail,
    ) -> Result<Vec<u8>> {
        let request = slack::lookup_user_by_email(options, user, &self.options.token);
        tracing::debug!(
            operation = slack::USERS_LOOKUP_BY_EMAIL,
            "Looking up Slack user"
        );
        self.transport.send(request).await
    }

    /// Replace the members of a usergroup.
    pub async fn update_usergroup(&self, usergroup: &SlackUsergroupUsers) -> Result<Vec<u8>> {
        self.custom_update_usergroup(&self.options, usergroup).await
    }

    pub async fn custom_update_usergroup(
        &self,
        options: &SlackOptions,
        usergroup: &SlackUsergroupUsers,
    ) -> Result<Vec<u8>> {
        let request = slack::update_usergroup(options, usergroup, &self.options.token)?;
        tracing::debug!(
            operation = slack::USERGROUPS_USERS_UPDATE,
            users = usergroup.users.len(),
            "Updating Slack usergroup"
        );
        self.transport.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::RecordingTransport;
    use herald_core::Method;

    fn client_with(options: SlackOptions) -> (Arc<RecordingTransport>, SlackClient) {
        let transport = Arc::new(RecordingTransport::new());
        let client = SlackClient::new(transport.clone(), options);
        (transport, client)
    }

    fn options() -> SlackOptions {
        SlackOptions {
            token: "xoxb-default".to_string(),
            channel: "C1".to_string(),
            message: "Hello\n\nWorld".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_send_message_derives_title() {
        let (transport, client) = client_with(options());

        let body = client.send_message().await.unwrap();
        assert_eq!(body, br#"{"ok":true}"#);

        let requests = transport.requests().await;
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://slack.com/api/chat.postMessage");
        assert_eq!(request.authorization.as_deref(), Some("Bearer xoxb-default"));

        let payload: serde_json::Value =
            serde_json::from_slice(request.body.as_json().unwrap()).unwrap();
        assert_eq!(payload["text"], "Hello");
        assert_eq!(payload["channel"], "C1");
    }

    #[tokio::test]
    async fn test_send_message_empty_issues_no_request() {
        let (transport, client) = client_with(SlackOptions {
            message: String::new(),
            ..options()
        });

        let err = client.send_message().await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(transport.request_count().await, 0);
    }

    #[tokio::test]
    async fn test_per_call_token_wins() {
        let (transport, client) = client_with(options());
        let message = SlackMessage {
            token: "xoxb-call".to_string(),
            ..SlackMessage::from(client.options())
        };

        client.send_custom_message(&message).await.unwrap();

        let requests = transport.requests().await;
        assert_eq!(
            requests[0].authorization.as_deref(),
            Some("Bearer xoxb-call")
        );
    }

    #[tokio::test]
    async fn test_missing_token_sends_empty_authorization() {
        let (transport, client) = client_with(SlackOptions {
            token: String::new(),
            ..options()
        });

        client.send_message().await.unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests[0].authorization.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_send_uploads_snippet() {
        let (transport, client) = client_with(SlackOptions {
            file: b"snippet body".to_vec(),
            ..options()
        });

        client.send().await.unwrap();

        let requests = transport.requests().await;
        let request = &requests[0];
        assert_eq!(request.url, "https://slack.com/api/files.upload");
        assert_eq!(request.query_value("channels"), Some("C1"));
        let form = request.body.as_form().unwrap();
        assert_eq!(form.field_names(), vec!["initial_comment", "title", "content"]);
        assert_eq!(form.bytes_field("content"), Some(b"snippet body".as_slice()));
    }

    #[tokio::test]
    async fn test_send_uploads_binary_snippet_unchanged() {
        let (transport, client) = client_with(SlackOptions {
            file: vec![0xff, 0x00, 0xfe, b'a'],
            ..options()
        });

        client.send().await.unwrap();

        let requests = transport.requests().await;
        let form = requests[0].body.as_form().unwrap();
        assert_eq!(
            form.bytes_field("content"),
            Some([0xffu8, 0x00, 0xfe, b'a'].as_slice())
        );
    }

    #[tokio::test]
    async fn test_send_file_omits_empty_fields() {
        let (transport, client) = client_with(SlackOptions {
            message: String::new(),
            file_name: "report.csv".to_string(),
            file: b"a,b".to_vec(),
            ..options()
        });

        client.send_file().await.unwrap();

        let requests = transport.requests().await;
        let form = requests[0].body.as_form().unwrap();
        assert_eq!(form.field_names(), vec!["file"]);
        assert_eq!(
            form.file_part("file"),
            Some(("report.csv", b"a,b".as_slice()))
        );
    }

    #[tokio::test]
    async fn test_add_reaction_form() {
        let (transport, client) = client_with(SlackOptions {
            parent_ts: "123.456".to_string(),
            ..options()
        });

        client
            .add_reaction(&SlackReactionOptions {
                name: "thumbsup".to_string(),
            })
            .await
            .unwrap();

        let requests = transport.requests().await;
        let form = requests[0].body.as_form().unwrap();
        assert_eq!(form.field_names(), vec!["channel", "name", "timestamp"]);
        assert_eq!(form.field("channel"), Some("C1"));
        assert_eq!(form.field("name"), Some("thumbsup"));
        assert_eq!(form.field("timestamp"), Some("123.456"));
    }

    #[tokio::test]
    async fn test_lookup_user_by_email() {
        let (transport, client) = client_with(options());

        client
            .lookup_user_by_email(&SlackUserEmail {
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        let requests = transport.requests().await;
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].query_value("email"), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_update_usergroup_json() {
        let (transport, client) = client_with(options());

        client
            .update_usergroup(&SlackUsergroupUsers {
                usergroup: "S1".to_string(),
                users: vec!["U1".to_string(), "U2".to_string()],
            })
            .await
            .unwrap();

        let requests = transport.requests().await;
        let payload: serde_json::Value =
            serde_json::from_slice(requests[0].body.as_json().unwrap()).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({"usergroup": "S1", "users": ["U1", "U2"]})
        );
    }

    #[tokio::test]
    async fn test_vendor_error_body_is_returned() {
        let (transport, client) = client_with(options());
        transport
            .push_response(r#"{"ok":false,"error":"channel_not_found"}"#)
            .await;

        let body = client.send_message().await.unwrap();
        assert_eq!(body, br#"{"ok":false,"error":"channel_not_found"}"#);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let (transport, client) = client_with(options());
        transport.push_failure("connection refused").await;

        let err = client.send_message().await.unwrap_err();
        assert!(err.is_transport());
    }
}
