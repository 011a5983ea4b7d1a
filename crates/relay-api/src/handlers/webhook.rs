//! Webhook control and inbound relay handlers

use axum::{body::Bytes, extract::State, Json};
use relay_service::{RelayService, TelegramUpdate, UpdateKind, WebhookService, WebhookStatus};
use tracing::{debug, warn};

use crate::response::ApiResult;
use crate::state::AppState;

/// Register the provider webhook against this service
///
/// GET|POST /telegram
pub async fn register(State(state): State<AppState>) -> ApiResult<Json<WebhookStatus>> {
    let service = WebhookService::new(state.service_context());
    let status = service
        .register(&state.config().telegram.public_base_url)
        .await?;
    Ok(Json(status))
}

/// Unregister the provider webhook
///
/// GET|POST /stop_telegram
pub async fn unregister(State(state): State<AppState>) -> ApiResult<Json<WebhookStatus>> {
    let service = WebhookService::new(state.service_context());
    let status = service
        .unregister(&state.config().telegram.public_base_url)
        .await?;
    Ok(Json(status))
}

/// Inbound provider delivery
///
/// POST /webhook
///
/// The provider is always acknowledged with `200 ok`, whatever the
/// payload looks like, so it never retries a delivery indefinitely.
/// Relayable messages are processed in a background task after the
/// acknowledgment; cancellation or failure of that task cannot affect
/// the response.
pub async fn receive_update(State(state): State<AppState>, body: Bytes) -> &'static str {
    let update: TelegramUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            warn!(error = %e, "Discarding undecodable webhook delivery");
            return "ok";
        }
    };

    match update.classify() {
        UpdateKind::Message { chat_id, text } => {
            let ctx = state.service_context_handle();
            tokio::spawn(async move {
                RelayService::new(&ctx).process(chat_id, &text).await;
            });
        }
        kind => {
            debug!(?kind, "Acknowledging non-relayable update");
        }
    }

    "ok"
}
