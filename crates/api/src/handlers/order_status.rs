use axum::extract::{Path, State};
use axum::{Extension, Json};
use readit_core::services::transaction_service::TransactionService;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::OrderStatusResponse;
use std::sync::Arc;

/// Polled by the client after the gateway redirect; keeps answering PENDING
/// until a notification lands.
#[utoipa::path(
    get,
    path = "/transactions/order-status/{order_id}",
    params(("order_id" = String, Path, description = "Checkout order id")),
    responses(
        (status = 200, description = "Current order status", body = OrderStatusResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No such order for this user")
    ),
    security(("bearerAuth" = [])),
    tag = "Transactions"
)]
pub async fn order_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderStatusResponse>, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    let status = TransactionService::order_status(&mut conn, user_id, &order_id)?;

    Ok(Json(OrderStatusResponse { status }))
}
