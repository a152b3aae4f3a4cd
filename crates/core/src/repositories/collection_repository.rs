use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::article::Article;
use readit_primitives::models::entities::collection::Collection;
use readit_primitives::schema::{articles, collection_articles, collections};

pub struct CollectionRepository;

impl CollectionRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<Collection>, ApiError> {
        collections::table
            .find(id)
            .first::<Collection>(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    /// Member articles, de-duplicated by the unique (collection, article)
    /// constraint at write time.
    pub fn member_articles(
        conn: &mut PgConnection,
        collection_id: i64,
    ) -> Result<Vec<Article>, ApiError> {
        collection_articles::table
            .inner_join(articles::table)
            .filter(collection_articles::collection_id.eq(collection_id))
            .select(Article::as_select())
            .load::<Article>(conn)
            .map_err(ApiError::Database)
    }
}
