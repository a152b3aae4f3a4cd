use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::entities::article::Article;

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleView {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub is_free: bool,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleView {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            author_id: a.author_id,
            title: a.title,
            slug: a.slug,
            summary: a.summary,
            is_free: a.is_free,
            price: a.price,
            created_at: a.created_at,
        }
    }
}

/// Detail view for a caller the access gate admitted.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleDetailResponse {
    #[serde(flatten)]
    pub article: ArticleView,
    pub is_bought: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CommentRequest {
    #[validate(length(min = 1, max = 1000))]
    pub content: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentResponse {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishListEntry {
    pub id: i64,
    pub article: ArticleView,
    pub added_at: DateTime<Utc>,
}
