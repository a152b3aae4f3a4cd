use axum::extract::{Path, State};
use axum::Extension;
use http::StatusCode;
use readit_core::services::purchase_service::PurchaseService;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/articles/buy/{article_id}",
    params(("article_id" = i64, Path, description = "Article to buy")),
    responses(
        (status = 200, description = "Entitlement granted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Authors cannot buy their own articles"),
        (status = 404, description = "Article not found"),
        (status = 409, description = "Article already bought")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn buy_article(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(article_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    PurchaseService::buy_article(&mut conn, user_id, article_id)?;

    Ok(StatusCode::OK)
}
