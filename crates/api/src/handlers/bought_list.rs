use axum::extract::State;
use axum::{Extension, Json};
use readit_core::repositories::purchase_repository::PurchaseRepository;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::ArticleView;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/articles/bought-list",
    responses(
        (status = 200, description = "Articles the caller owns", body = [ArticleView]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn bought_list(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<ArticleView>>, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    let articles = PurchaseRepository::bought_articles(&mut conn, user_id)?
        .into_iter()
        .map(ArticleView::from)
        .collect();

    Ok(Json(articles))
}
