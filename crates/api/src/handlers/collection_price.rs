use axum::extract::{Path, State};
use axum::{Extension, Json};
use readit_core::services::pricing_service::PricingService;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::CollectionPriceResponse;
use std::sync::Arc;

/// Public with optional identity: authenticated viewers get already-owned
/// member articles priced out of the bundle, anonymous viewers the full
/// undiscounted-by-ownership price.
#[utoipa::path(
    get,
    path = "/articles/collection/price/{collection_id}",
    params(("collection_id" = i64, Path, description = "Collection to price")),
    responses(
        (status = 200, description = "Viewer-specific price", body = CollectionPriceResponse),
        (status = 400, description = "Collection below the 2-article minimum"),
        (status = 404, description = "Collection not found")
    ),
    tag = "Articles"
)]
pub async fn collection_price(
    State(state): State<Arc<AppState>>,
    claims: Option<Extension<Claims>>,
    Path(collection_id): Path<i64>,
) -> Result<Json<CollectionPriceResponse>, ApiError> {
    let viewer = match claims {
        Some(Extension(claims)) => Some(claims.user_id()?),
        None => None,
    };

    let mut conn = state.db.get()?;

    let response = PricingService::price_for_collection(&mut conn, collection_id, viewer)?;

    Ok(Json(response))
}
