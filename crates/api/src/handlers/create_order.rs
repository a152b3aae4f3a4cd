use axum::extract::{Json, State};
use axum::Extension;
use readit_core::services::checkout_service::CheckoutService;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::{CreateOrderRequest, CreateOrderResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/transactions/create-order",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Checkout opened", body = CreateOrderResponse),
        (status = 400, description = "Empty or malformed cart"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Article in cart not found"),
        (status = 502, description = "Payment gateway unavailable")
    ),
    security(("bearerAuth" = [])),
    tag = "Transactions"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = claims.user_id()?;

    let response = CheckoutService::open_checkout(&state, user_id, &req).await?;

    Ok(Json(response))
}
