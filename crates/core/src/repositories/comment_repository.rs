use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::comment::{ArticleComment, NewArticleComment};
use readit_primitives::schema::article_comments;

pub struct CommentRepository;

impl CommentRepository {
    pub fn exists_for(
        conn: &mut PgConnection,
        author_id: i64,
        article_id: i64,
    ) -> Result<bool, ApiError> {
        article_comments::table
            .filter(article_comments::author_id.eq(author_id))
            .filter(article_comments::article_id.eq(article_id))
            .select(article_comments::id)
            .first::<i64>(conn)
            .optional()
            .map(|row| row.is_some())
            .map_err(ApiError::Database)
    }

    pub fn create(
        conn: &mut PgConnection,
        new_comment: NewArticleComment<'_>,
    ) -> Result<ArticleComment, ApiError> {
        diesel::insert_into(article_comments::table)
            .values(&new_comment)
            .get_result::<ArticleComment>(conn)
            .map_err(ApiError::Database)
    }
}
