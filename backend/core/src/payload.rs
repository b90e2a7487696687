//! Outbound response payloads.
//!
//! The synchronous side of the protocol uses [`InteractionCallback`]; the
//! follow-up edit carries a plain `serde_json::Value` because command handler
//! output passes through verbatim. The embed builders here exist for the
//! payloads the gateway synthesizes itself (diagnostics, placeholders,
//! handler failures).

use serde::Serialize;
use serde_json::Value;

/// Callback type for an immediate pong reply to a ping.
pub const CALLBACK_PONG: u8 = 1;
/// Callback type for an immediate message with content.
pub const CALLBACK_MESSAGE: u8 = 4;
/// Callback type for a deferred "thinking" placeholder.
pub const CALLBACK_DEFERRED: u8 = 5;

/// Synchronous response body for an interaction callback.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionCallback {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl InteractionCallback {
    /// Terminal `{type:1}` reply to a ping.
    pub fn pong() -> Self {
        Self { kind: CALLBACK_PONG, data: None }
    }

    /// Non-terminal `{type:5}` placeholder; the real payload arrives later
    /// via the follow-up edit.
    pub fn deferred() -> Self {
        Self { kind: CALLBACK_DEFERRED, data: None }
    }

    /// Terminal `{type:4}` message response.
    pub fn message(data: Value) -> Self {
        Self { kind: CALLBACK_MESSAGE, data: Some(data) }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A single rich embed, limited to the fields the gateway produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    /// ISO-8601 timestamp shown in the embed footer area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter { text: text.into() });
        self
    }

    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// Message payload accepted by the platform's message-edit endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    pub embeds: Vec<Embed>,
}

impl MessagePayload {
    pub fn from_embed(embed: Embed) -> Self {
        Self { embeds: vec![embed] }
    }

    /// Serialize into the raw JSON form used across the dispatch boundary.
    pub fn into_value(self) -> Value {
        // Serialization of these builder types cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pong_serializes_to_bare_type() {
        let v = serde_json::to_value(InteractionCallback::pong()).unwrap();
        assert_eq!(v, json!({"type": 1}));
    }

    #[test]
    fn deferred_serializes_to_bare_type() {
        let v = serde_json::to_value(InteractionCallback::deferred()).unwrap();
        assert_eq!(v, json!({"type": 5}));
    }

    #[test]
    fn message_carries_data() {
        let cb = InteractionCallback::message(json!({"embeds": []}));
        let v = serde_json::to_value(cb).unwrap();
        assert_eq!(v["type"], 4);
        assert_eq!(v["data"], json!({"embeds": []}));
    }

    #[test]
    fn embed_builder_skips_unset_fields() {
        let embed = Embed::new().title("Hello").footer("from 10.0.0.1");
        let v = serde_json::to_value(embed).unwrap();
        assert_eq!(v["title"], "Hello");
        assert_eq!(v["footer"]["text"], "from 10.0.0.1");
        assert!(v.get("description").is_none());
        assert!(v.get("fields").is_none());
    }
}
