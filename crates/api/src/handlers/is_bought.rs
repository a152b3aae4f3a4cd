use axum::extract::{Path, State};
use axum::{Extension, Json};
use readit_core::repositories::article_repository::ArticleRepository;
use readit_core::repositories::purchase_repository::PurchaseRepository;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/articles/is-bought/{article_id}",
    params(("article_id" = i64, Path, description = "Article to check")),
    responses(
        (status = 200, description = "Whether the caller owns the article", body = bool),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Article not found")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn is_bought(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(article_id): Path<i64>,
) -> Result<Json<bool>, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    ArticleRepository::find_by_id(&mut conn, article_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Article {} not found", article_id)))?;

    let owned = PurchaseRepository::owns(&mut conn, user_id, article_id)?;

    Ok(Json(owned))
}
