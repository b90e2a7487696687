//! Wire types for inbound interaction callbacks.

use serde::Deserialize;
use serde_json::Value;

/// Sentinel message id addressing the original interaction response.
pub const ORIGINAL_MESSAGE: &str = "@original";

/// Classified interaction type.
///
/// The raw integer is preserved in [`Interaction::kind`] so out-of-range
/// values survive for the diagnostic response. The wire field is a plain
/// integer, so the full value range must parse; anything unrecognized is
/// `Unknown`, never a deserialization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Ping,
    ApplicationCommand,
    MessageComponent,
    Unknown(u64),
}

impl From<u64> for InteractionKind {
    fn from(raw: u64) -> Self {
        match raw {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            other => Self::Unknown(other),
        }
    }
}

/// Reference to the message an interaction originated from.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRef {
    pub id: String,
}

/// One authenticated interaction callback from the platform.
///
/// Immutable once parsed; lives for the duration of a single request. By the
/// time an `Interaction` exists, signature verification has already passed —
/// nothing downstream re-checks authenticity.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    /// Raw interaction type as sent on the wire.
    #[serde(rename = "type")]
    pub kind: u64,
    /// Command name + options, or component custom id. The shape varies by
    /// type, so the raw value is kept.
    #[serde(default)]
    pub data: Option<Value>,
    /// Opaque credential used to address follow-up calls.
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub message: Option<MessageRef>,
}

impl Interaction {
    pub fn classify(&self) -> InteractionKind {
        InteractionKind::from(self.kind)
    }

    /// Command name, when this interaction carries one.
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref()?.get("name")?.as_str()
    }

    /// Message id to address in the follow-up edit. Falls back to the
    /// [`ORIGINAL_MESSAGE`] sentinel when the interaction did not originate
    /// from an existing message.
    pub fn followup_message_id(&self) -> &str {
        self.message
            .as_ref()
            .map(|m| m.id.as_str())
            .unwrap_or(ORIGINAL_MESSAGE)
    }
}

/// Request metadata extracted from trusted proxy headers, carried alongside
/// the interaction for diagnostics and command handlers.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    pub client_ip: Option<String>,
    pub edge: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_application_command() {
        let v = json!({
            "type": 2,
            "data": { "name": "stats", "options": [{"name": "user", "value": "42"}] },
            "token": "tok-abc"
        });
        let interaction: Interaction = serde_json::from_value(v).unwrap();
        assert_eq!(interaction.classify(), InteractionKind::ApplicationCommand);
        assert_eq!(interaction.command_name(), Some("stats"));
        assert_eq!(interaction.token, "tok-abc");
        assert_eq!(interaction.followup_message_id(), "@original");
    }

    #[test]
    fn parses_ping_without_data() {
        let interaction: Interaction = serde_json::from_value(json!({"type": 1})).unwrap();
        assert_eq!(interaction.classify(), InteractionKind::Ping);
        assert!(interaction.data.is_none());
        assert!(interaction.command_name().is_none());
    }

    #[test]
    fn unknown_type_is_preserved() {
        let interaction: Interaction = serde_json::from_value(json!({"type": 9})).unwrap();
        assert_eq!(interaction.classify(), InteractionKind::Unknown(9));
        assert_eq!(interaction.kind, 9);
    }

    #[test]
    fn type_values_above_a_byte_still_parse() {
        let interaction: Interaction = serde_json::from_value(json!({"type": 300})).unwrap();
        assert_eq!(interaction.classify(), InteractionKind::Unknown(300));
        assert_eq!(interaction.kind, 300);
    }

    #[test]
    fn message_id_overrides_original_sentinel() {
        let v = json!({
            "type": 3,
            "data": { "custom_id": "confirm" },
            "token": "tok",
            "message": { "id": "123456" }
        });
        let interaction: Interaction = serde_json::from_value(v).unwrap();
        assert_eq!(interaction.followup_message_id(), "123456");
    }
}
