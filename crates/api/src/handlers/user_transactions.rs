use axum::extract::{Query, State};
use axum::{Extension, Json};
use readit_core::services::transaction_service::TransactionService;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::dtos::transaction_dto::PageQuery;
use readit_primitives::models::UserTransactionsPage;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/transactions/user-transactions",
    params(
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("per_page" = Option<i64>, Query, description = "Page size, capped at 100")
    ),
    responses(
        (status = 200, description = "Order history", body = UserTransactionsPage),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Transactions"
)]
pub async fn user_transactions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Query(page): Query<PageQuery>,
) -> Result<Json<UserTransactionsPage>, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    let history = TransactionService::user_transactions(&mut conn, user_id, &page)?;

    Ok(Json(history))
}
