use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use http::HeaderMap;
use readit_core::services::payu_service::PayuService;
use readit_core::AppState;
use readit_primitives::error::ApiError;
use readit_primitives::models::NotifyAck;
use std::sync::Arc;
use tracing::error;

/// PayU order-status webhook. The signature check happens on the raw body
/// before anything is parsed; after that, processing failures are logged
/// and acknowledged anyway so the gateway never enters a retry storm.
#[utoipa::path(
    post,
    path = "/transactions/notify",
    responses(
        (status = 200, description = "Notification acknowledged", body = NotifyAck),
        (status = 400, description = "Missing or invalid signature")
    ),
    tag = "Transactions"
)]
pub async fn payu_notify(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<NotifyAck>, ApiError> {
    PayuService::verify_notification(&state, &headers, &body)?;

    if let Err(e) = PayuService::process_notification(&state, &body) {
        error!("PayU notification processing failed, acknowledging anyway: {}", e);
    }

    Ok(Json(NotifyAck::ok()))
}
