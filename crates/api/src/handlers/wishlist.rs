use axum::extract::{Path, State};
use axum::{Extension, Json};
use http::StatusCode;
use readit_core::repositories::article_repository::ArticleRepository;
use readit_core::repositories::wishlist_repository::WishlistRepository;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::{ArticleView, WishListEntry};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/articles/wish-list/add/{article_id}",
    params(("article_id" = i64, Path, description = "Article to wishlist")),
    responses(
        (status = 200, description = "Added to wish list"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Article not found"),
        (status = 409, description = "Already on the wish list")
    ),
    security(("bearerAuth" = [])),
    tag = "Wish list"
)]
pub async fn add_to_wishlist(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(article_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    ArticleRepository::find_by_id(&mut conn, article_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Article {} not found", article_id)))?;

    WishlistRepository::add(&mut conn, user_id, article_id)?
        .ok_or_else(|| ApiError::Conflict("Article already on the wish list".into()))?;

    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/articles/wish-list/me",
    responses(
        (status = 200, description = "The caller's wish list", body = [WishListEntry]),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Wish list"
)]
pub async fn my_wishlist(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<WishListEntry>>, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    let entries = WishlistRepository::list_for_user(&mut conn, user_id)?
        .into_iter()
        .map(|(entry, article)| WishListEntry {
            id: entry.id,
            article: ArticleView::from(article),
            added_at: entry.created_at,
        })
        .collect();

    Ok(Json(entries))
}

#[utoipa::path(
    delete,
    path = "/articles/wish-list/{article_id}",
    params(("article_id" = i64, Path, description = "Article to remove")),
    responses(
        (status = 200, description = "Removed from wish list"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Article was not on the wish list")
    ),
    security(("bearerAuth" = [])),
    tag = "Wish list"
)]
pub async fn remove_from_wishlist(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(article_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    if !WishlistRepository::remove(&mut conn, user_id, article_id)? {
        return Err(ApiError::NotFound(
            "Article is not on the wish list".into(),
        ));
    }

    Ok(StatusCode::OK)
}
