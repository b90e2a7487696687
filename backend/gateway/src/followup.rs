//! Deferred completion client.
//!
//! Issues the follow-up edit that replaces the "thinking" placeholder once a
//! command resolves. Delivery is best-effort and at-most-once: a failed PATCH
//! is logged and the update is lost, leaving the placeholder unresolved. The
//! platform's own token validity window (~15 minutes) bounds how long the
//! edit can usefully be attempted; no retry happens here.

use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

#[derive(Clone)]
pub struct FollowupClient {
    http: Client,
    api_base: String,
    application_id: String,
}

impl FollowupClient {
    pub fn new(api_base: String, application_id: String) -> Self {
        Self {
            http: Client::new(),
            api_base,
            application_id,
        }
    }

    /// URL of the webhook-message-edit endpoint for one interaction.
    pub fn edit_url(&self, token: &str, message_id: &str) -> String {
        format!(
            "{}/webhooks/{}/{}/messages/{}",
            self.api_base, self.application_id, token, message_id
        )
    }

    /// PATCH the final payload over the placeholder.
    ///
    /// The interaction token is part of the URL and deliberately kept out of
    /// the logs.
    pub async fn complete(&self, token: &str, message_id: &str, payload: &Value) {
        let url = self.edit_url(token, message_id);
        match self.http.patch(&url).json(payload).send().await {
            Ok(res) if res.status().is_success() => {
                info!(message_id, "Follow-up delivered");
            }
            Ok(res) => {
                let status = res.status();
                let body = res.text().await.unwrap_or_default();
                warn!(%status, body = %body, message_id, "Follow-up rejected, update lost");
            }
            Err(err) => {
                warn!(error = %err, message_id, "Follow-up request failed, update lost");
            }
        }
    }
}
