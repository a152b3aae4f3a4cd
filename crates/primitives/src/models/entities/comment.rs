use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::article_comments)]
#[diesel(belongs_to(crate::models::entities::article::Article))]
pub struct ArticleComment {
    pub id: i64,
    pub author_id: i64,
    pub article_id: i64,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::article_comments)]
pub struct NewArticleComment<'a> {
    pub author_id: i64,
    pub article_id: i64,
    pub content: &'a str,
    pub rating: i32,
}
