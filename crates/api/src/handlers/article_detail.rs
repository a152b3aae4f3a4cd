use axum::extract::{Path, State};
use axum::{Extension, Json};
use readit_core::repositories::article_repository::ArticleRepository;
use readit_core::repositories::purchase_repository::PurchaseRepository;
use readit_core::services::access_service::AccessService;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::{ArticleDetailResponse, ArticleView};
use std::sync::Arc;

/// Full article view, behind the access gate. 403 (not 404) when the
/// article exists but the caller holds no entitlement.
#[utoipa::path(
    get,
    path = "/articles/detail/{article_id}",
    params(("article_id" = i64, Path, description = "Article to read")),
    responses(
        (status = 200, description = "Article detail", body = ArticleDetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Article exists but access is denied"),
        (status = 404, description = "Article not found")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn article_detail(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(article_id): Path<i64>,
) -> Result<Json<ArticleDetailResponse>, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    let article = ArticleRepository::find_by_id(&mut conn, article_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Article {} not found", article_id)))?;

    AccessService::ensure_can_access(&mut conn, user_id, &article)?;

    let is_bought = PurchaseRepository::owns(&mut conn, user_id, article_id)?;

    Ok(Json(ArticleDetailResponse {
        article: ArticleView::from(article),
        is_bought,
    }))
}
