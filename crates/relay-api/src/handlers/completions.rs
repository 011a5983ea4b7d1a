//! Direct completion handlers
//!
//! One endpoint per supported backend model; each runs a single-turn
//! completion and returns the reply text.

use axum::{extract::State, Json};
use relay_service::{CompletionService, PromptRequest, ReplyResponse};

use crate::extractors::ValidatedForm;
use crate::response::ApiResult;
use crate::state::AppState;

/// Model identifier behind POST /llama_reply
pub const LLAMA_MODEL: &str = "llama-3.1-8b-instant";

/// Model identifier behind POST /deepseek_reply
pub const DEEPSEEK_MODEL: &str = "deepseek-r1-distill-llama-70b";

/// Single-turn completion against the llama model
///
/// POST /llama_reply
pub async fn llama_reply(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<PromptRequest>,
) -> ApiResult<Json<ReplyResponse>> {
    reply(&state, LLAMA_MODEL, request).await
}

/// Single-turn completion against the deepseek model
///
/// POST /deepseek_reply
pub async fn deepseek_reply(
    State(state): State<AppState>,
    ValidatedForm(request): ValidatedForm<PromptRequest>,
) -> ApiResult<Json<ReplyResponse>> {
    reply(&state, DEEPSEEK_MODEL, request).await
}

async fn reply(
    state: &AppState,
    model: &str,
    request: PromptRequest,
) -> ApiResult<Json<ReplyResponse>> {
    let service = CompletionService::new(state.service_context());
    let response = service.reply(model, request).await?;
    Ok(Json(response))
}
