use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::article::Article;
use readit_primitives::schema::articles;

pub struct ArticleRepository;

impl ArticleRepository {
    pub fn find_by_id(conn: &mut PgConnection, id: i64) -> Result<Option<Article>, ApiError> {
        articles::table
            .find(id)
            .first::<Article>(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    /// Loads every id or reports the first missing one. Checkout must fail
    /// on any invalid cart entry, not silently price a partial cart.
    pub fn find_all_by_ids(
        conn: &mut PgConnection,
        ids: &[i64],
    ) -> Result<Vec<Article>, ApiError> {
        let loaded = articles::table
            .filter(articles::id.eq_any(ids))
            .load::<Article>(conn)
            .map_err(ApiError::Database)?;

        if loaded.len() != ids.len() {
            let missing = ids
                .iter()
                .find(|id| !loaded.iter().any(|a| a.id == **id))
                .copied()
                .unwrap_or_default();
            return Err(ApiError::NotFound(format!("Article {} not found", missing)));
        }

        // Return in cart order; eq_any gives no ordering guarantee.
        let mut ordered = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(article) = loaded.iter().find(|a| a.id == *id) {
                ordered.push(article.clone());
            }
        }
        Ok(ordered)
    }
}
