use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header},
    response::IntoResponse,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    message::{ChatRequest, ChatResponse},
    services::{completion::build_request, metrics::MetricsData},
    state::SharedState,
};

pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// `POST /`: forwards one user message upstream and relays the completion.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<ChatResponse>> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        match forward(&state, body).await {
            Ok(message) => {
                state.metrics.record_success().await;
                tracing::debug!(chars = message.len(), "completion relayed");
                Ok(Json(ChatResponse { message }))
            }
            Err(e) => {
                state.metrics.record_failure(e.kind()).await;
                tracing::warn!(error = %e, status = %e.status(), "chat request failed");
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

// The message is forwarded exactly as received.
async fn forward(state: &SharedState, body: Result<Bytes, BytesRejection>) -> AppResult<String> {
    let body = body?;
    let payload: ChatRequest = serde_json::from_slice(&body)?;

    let request = build_request(&state.chat, &payload.message);
    tracing::debug!(model = %request.model, "calling upstream");
    let text = state.client.complete(&request).await?;
    Ok(text)
}

/// `OPTIONS /`: CORS preflight.
pub async fn preflight_handler() -> impl IntoResponse {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        Json(serde_json::json!({})),
    )
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// `GET /admin/metrics`: outcome counters, guarded by the admin key.
pub async fn get_metrics_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> AppResult<Json<MetricsData>> {
    let provided = headers.get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok());
    match (state.admin_key.as_deref(), provided) {
        (Some(expected), Some(given)) if expected == given => {
            Ok(Json(state.metrics.snapshot().await))
        }
        _ => Err(AppError::Unauthorized),
    }
}
