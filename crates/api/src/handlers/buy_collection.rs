use axum::extract::{Path, State};
use axum::{Extension, Json};
use readit_core::services::purchase_service::PurchaseService;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::CollectionBuyResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/articles/collection/buy/{collection_id}",
    params(("collection_id" = i64, Path, description = "Collection to buy")),
    responses(
        (status = 200, description = "Unowned member articles granted", body = CollectionBuyResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Owners cannot buy their own collections"),
        (status = 404, description = "Collection not found"),
        (status = 409, description = "All member articles already owned")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn buy_collection(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(collection_id): Path<i64>,
) -> Result<Json<CollectionBuyResponse>, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    let response = PurchaseService::buy_collection(&mut conn, user_id, collection_id)?;

    Ok(Json(response))
}
