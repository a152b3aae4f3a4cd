use axum::extract::{Json, Path, State};
use axum::Extension;
use http::StatusCode;
use readit_core::repositories::article_repository::ArticleRepository;
use readit_core::repositories::comment_repository::CommentRepository;
use readit_core::services::access_service::AccessService;
use readit_core::{AppState, Claims};
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::comment::NewArticleComment;
use readit_primitives::models::{CommentRequest, CommentResponse};
use std::sync::Arc;
use validator::Validate;

/// Commenting is reserved for readers the access gate admits.
#[utoipa::path(
    post,
    path = "/articles/comment/{article_id}",
    params(("article_id" = i64, Path, description = "Article to comment on")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Bad content or rating"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "No access to the article"),
        (status = 404, description = "Article not found"),
        (status = 409, description = "Caller already commented on this article")
    ),
    security(("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn post_comment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(article_id): Path<i64>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let user_id = claims.user_id()?;
    let mut conn = state.db.get()?;

    let article = ArticleRepository::find_by_id(&mut conn, article_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Article {} not found", article_id)))?;

    AccessService::ensure_can_access(&mut conn, user_id, &article)?;

    if CommentRepository::exists_for(&mut conn, user_id, article_id)? {
        return Err(ApiError::Conflict(
            "Article already commented by this user".into(),
        ));
    }

    let comment = CommentRepository::create(
        &mut conn,
        NewArticleComment {
            author_id: user_id,
            article_id,
            content: &req.content,
            rating: req.rating,
        },
    )?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            id: comment.id,
            article_id: comment.article_id,
            author_id: comment.author_id,
            content: comment.content,
            rating: comment.rating,
            created_at: comment.created_at,
        }),
    ))
}
