//! Inbound webhook endpoint.
//!
//! The transport adapter: extracts headers and raw body, verifies the
//! request signature, parses the interaction, and acts on the router's
//! outcome. For application commands the synchronous response is the
//! deferred placeholder; the command itself runs as a tracked background
//! task whose result is delivered through the follow-up client.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slashforge_commands::dispatch;
use slashforge_core::{GatewayError, Interaction, RequestMeta};
use tracing::{info, warn};

use crate::router::{self, RouterOutcome};
use crate::state::AppState;

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Trusted proxy headers. The deployment sits behind the platform CDN, so
/// these are authoritative for the original client.
pub const CLIENT_IP_HEADER: &str = "cf-connecting-ip";
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";
pub const EDGE_HEADER: &str = "cf-ray";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Render a terminating error as the structured JSON body the platform's
/// operators expect.
fn error_response(err: GatewayError) -> Response {
    let (status, code, reason) = match &err {
        GatewayError::MethodNotAllowed(method) => (
            StatusCode::BAD_REQUEST,
            "400 - BAD REQUEST",
            format!("The {method} method is not allowed."),
        ),
        GatewayError::MissingCredentials => (
            StatusCode::UNAUTHORIZED,
            "401 - UNAUTHORIZED",
            "No signature or timestamp provided.".to_string(),
        ),
        GatewayError::InvalidSignature => (
            StatusCode::UNAUTHORIZED,
            "401 - UNAUTHORIZED",
            "Invalid request signature.".to_string(),
        ),
        GatewayError::BadPayload(_) => (
            StatusCode::BAD_REQUEST,
            "400 - BAD REQUEST",
            "Malformed JSON body.".to_string(),
        ),
        GatewayError::InvalidEncoding(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "500 - INTERNAL SERVER ERROR",
            err.to_string(),
        ),
    };
    (status, Json(json!({ "error": code, "reason": reason }))).into_response()
}

fn request_meta(headers: &HeaderMap) -> RequestMeta {
    let client_ip = header_str(headers, CLIENT_IP_HEADER)
        .or_else(|| {
            header_str(headers, FORWARDED_FOR_HEADER)
                .and_then(|v| v.split(',').next())
                .map(str::trim)
        })
        .map(str::to_string);
    let edge = header_str(headers, EDGE_HEADER).map(str::to_string);
    RequestMeta { client_ip, edge }
}

/// Handle one interaction callback from the platform.
pub async fn handle_interaction(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    if method != Method::POST {
        return error_response(GatewayError::MethodNotAllowed(method.to_string()));
    }

    let signature = header_str(&headers, SIGNATURE_HEADER);
    let timestamp = header_str(&headers, TIMESTAMP_HEADER);
    let (Some(signature), Some(timestamp)) = (signature, timestamp) else {
        warn!("Rejecting interaction without signature headers");
        return error_response(GatewayError::MissingCredentials);
    };

    let Ok(body_str) = std::str::from_utf8(&body) else {
        return error_response(GatewayError::BadPayload("body is not UTF-8".into()));
    };

    if !state.verifier().verify(signature, timestamp, body_str) {
        warn!("Rejecting interaction with invalid signature");
        return error_response(GatewayError::InvalidSignature);
    }

    let interaction: Interaction = match serde_json::from_str(body_str) {
        Ok(i) => i,
        Err(err) => {
            warn!(error = %err, "Verified request carried an unparseable body");
            return error_response(GatewayError::BadPayload(err.to_string()));
        }
    };

    let meta = request_meta(&headers);

    match router::route(&interaction, &meta) {
        RouterOutcome::Ack(cb) => {
            info!("Ping acknowledged");
            Json(cb).into_response()
        }
        RouterOutcome::NotImplemented(cb) => {
            info!(kind = interaction.kind, "Unhandled interaction type, returning diagnostic");
            Json(cb).into_response()
        }
        RouterOutcome::DeferAndDispatch(cb) => {
            info!(
                command = interaction.command_name().unwrap_or_default(),
                "Acked with placeholder, dispatching in background"
            );
            let task_state = state.clone();
            state
                .spawn_tracked(async move {
                    let payload =
                        dispatch(task_state.registry(), &meta, &interaction).await;
                    let message_id = interaction.followup_message_id();
                    task_state
                        .followup()
                        .complete(&interaction.token, message_id, &payload)
                        .await;
                })
                .await;
            Json(cb).into_response()
        }
    }
}
