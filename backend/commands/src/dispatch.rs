//! Command lookup and payload normalization.
//!
//! Every interaction that reaches this module has already passed signature
//! verification and has already been acked with a deferred placeholder. The
//! value produced here is what the follow-up edit delivers, so the public
//! [`dispatch`] entry point always returns *some* payload — a handler error
//! becomes an error embed rather than a stalled "thinking" message.

use serde_json::Value;
use slashforge_core::{Embed, Interaction, MessagePayload, RequestMeta};
use tracing::{info, warn};

use crate::registry::CommandRegistry;

const COLOR_PLACEHOLDER: u32 = 0xFEE7_5C;
const COLOR_FAILURE: u32 = 0xED42_45;

/// Resolve and run the named command.
///
/// Handler errors propagate untouched; callers that must always produce a
/// payload go through [`dispatch`] instead.
pub async fn run_command(
    registry: &CommandRegistry,
    meta: &RequestMeta,
    interaction: &Interaction,
) -> anyhow::Result<Value> {
    let name = interaction.command_name().unwrap_or_default();
    let Some(handler) = registry.get(name) else {
        info!(command = name, "No handler registered, returning placeholder");
        return Ok(not_implemented(meta));
    };
    handler.execute(meta, interaction).await
}

/// Run the named command, converting handler failures into an error embed.
pub async fn dispatch(
    registry: &CommandRegistry,
    meta: &RequestMeta,
    interaction: &Interaction,
) -> Value {
    match run_command(registry, meta, interaction).await {
        Ok(payload) => payload,
        Err(err) => {
            warn!(
                command = interaction.command_name().unwrap_or_default(),
                error = %err,
                "Command handler failed"
            );
            handler_failure(&err)
        }
    }
}

fn not_implemented(meta: &RequestMeta) -> Value {
    let ip = meta.client_ip.as_deref().unwrap_or("unknown");
    MessagePayload::from_embed(
        Embed::new()
            .title("Not yet implemented")
            .description("This command is registered with the platform but has no handler here yet.")
            .color(COLOR_PLACEHOLDER)
            .footer(format!("requested from {ip}"))
            .timestamp(chrono::Utc::now().to_rfc3339()),
    )
    .into_value()
}

fn handler_failure(err: &anyhow::Error) -> Value {
    MessagePayload::from_embed(
        Embed::new()
            .title("Command failed")
            .description(format!("{err:#}"))
            .color(COLOR_FAILURE)
            .timestamp(chrono::Utc::now().to_rfc3339()),
    )
    .into_value()
}
