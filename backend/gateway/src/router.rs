//! Interaction-type routing.
//!
//! Pure classification of an authenticated interaction into the immediate
//! response shape. The transport adapter acts on the outcome; nothing here
//! performs IO.

use base64::Engine;
use slashforge_core::{
    Embed, Interaction, InteractionCallback, InteractionKind, MessagePayload, RequestMeta,
};

const COLOR_DIAGNOSTIC: u32 = 0x5865_F2;

/// What the transport should do with an authenticated interaction.
#[derive(Debug)]
pub enum RouterOutcome {
    /// Terminal response, nothing else to do.
    Ack(InteractionCallback),
    /// Respond with the deferred placeholder and run the command in the
    /// background; the follow-up edit carries the real payload.
    DeferAndDispatch(InteractionCallback),
    /// Terminal diagnostic response for interaction types the gateway does
    /// not handle.
    NotImplemented(InteractionCallback),
}

/// Decide the immediate response for an interaction.
///
/// Unrecognized type values take the same branch as message components: a
/// visible diagnostic rather than a silent 200 or a 500.
pub fn route(interaction: &Interaction, meta: &RequestMeta) -> RouterOutcome {
    match interaction.classify() {
        InteractionKind::Ping => RouterOutcome::Ack(InteractionCallback::pong()),
        InteractionKind::ApplicationCommand => {
            RouterOutcome::DeferAndDispatch(InteractionCallback::deferred())
        }
        InteractionKind::MessageComponent | InteractionKind::Unknown(_) => {
            RouterOutcome::NotImplemented(InteractionCallback::message(diagnostic(
                interaction,
                meta,
            )))
        }
    }
}

/// Operator-facing embed describing the unhandled interaction: the literal
/// type value, the edge that served the request, and the raw `data` value
/// base64-encoded for inspection.
fn diagnostic(interaction: &Interaction, meta: &RequestMeta) -> serde_json::Value {
    let raw_data = interaction
        .data
        .as_ref()
        .map(|d| d.to_string())
        .unwrap_or_default();
    let encoded = base64::engine::general_purpose::STANDARD.encode(raw_data.as_bytes());

    MessagePayload::from_embed(
        Embed::new()
            .title("Interaction not implemented")
            .description("This interaction type has no handler in the gateway.")
            .color(COLOR_DIAGNOSTIC)
            .field("type", interaction.kind.to_string())
            .field("edge", meta.edge.clone().unwrap_or_else(|| "unknown".into()))
            .field("data", encoded),
    )
    .into_value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn interaction(v: serde_json::Value) -> Interaction {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn ping_is_acked_with_pong() {
        let outcome = route(&interaction(json!({"type": 1})), &RequestMeta::default());
        match outcome {
            RouterOutcome::Ack(cb) => assert_eq!(cb.kind, 1),
            other => panic!("expected Ack, got {other:?}"),
        }
    }

    #[test]
    fn application_command_defers() {
        let outcome = route(
            &interaction(json!({"type": 2, "data": {"name": "rate"}, "token": "t"})),
            &RequestMeta::default(),
        );
        match outcome {
            RouterOutcome::DeferAndDispatch(cb) => {
                assert_eq!(cb.kind, 5);
                assert!(cb.data.is_none());
            }
            other => panic!("expected DeferAndDispatch, got {other:?}"),
        }
    }

    #[test]
    fn message_component_gets_diagnostic() {
        let meta = RequestMeta {
            client_ip: None,
            edge: Some("IAD".into()),
        };
        let outcome = route(
            &interaction(json!({"type": 3, "data": {"custom_id": "btn"}, "token": "t"})),
            &meta,
        );
        let RouterOutcome::NotImplemented(cb) = outcome else {
            panic!("expected NotImplemented");
        };
        assert_eq!(cb.kind, 4);
        let data = cb.data.unwrap();
        let fields = data["embeds"][0]["fields"].as_array().unwrap().clone();
        assert_eq!(fields[0]["value"], "3");
        assert_eq!(fields[1]["value"], "IAD");

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(fields[2]["value"].as_str().unwrap())
            .unwrap();
        let data: serde_json::Value = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(data["custom_id"], "btn");
    }

    #[test]
    fn unknown_type_takes_the_diagnostic_branch() {
        let outcome = route(&interaction(json!({"type": 42})), &RequestMeta::default());
        let RouterOutcome::NotImplemented(cb) = outcome else {
            panic!("expected NotImplemented");
        };
        let data = cb.data.unwrap();
        assert_eq!(data["embeds"][0]["fields"][0]["value"], "42");
        assert_eq!(data["embeds"][0]["fields"][1]["value"], "unknown");
    }
}
