use std::collections::HashSet;

use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::article::Article;
use readit_primitives::models::entities::purchase::NewArticlePurchase;
use readit_primitives::schema::{article_purchase, articles};

pub struct PurchaseRepository;

impl PurchaseRepository {
    /// Idempotent entitlement grant. Returns true when a row was inserted,
    /// false when the user already owned the article. Direct buys, bundle
    /// buys and settlement may race here; the unique constraint absorbs it.
    pub fn grant(conn: &mut PgConnection, user_id: i64, article_id: i64) -> Result<bool, ApiError> {
        let inserted = diesel::insert_into(article_purchase::table)
            .values(NewArticlePurchase {
                user_id,
                article_id,
            })
            .on_conflict((article_purchase::user_id, article_purchase::article_id))
            .do_nothing()
            .returning(article_purchase::id)
            .get_result::<i64>(conn)
            .optional()
            .map_err(ApiError::Database)?;

        Ok(inserted.is_some())
    }

    pub fn owns(conn: &mut PgConnection, user_id: i64, article_id: i64) -> Result<bool, ApiError> {
        article_purchase::table
            .filter(article_purchase::user_id.eq(user_id))
            .filter(article_purchase::article_id.eq(article_id))
            .select(article_purchase::id)
            .first::<i64>(conn)
            .optional()
            .map(|row| row.is_some())
            .map_err(ApiError::Database)
    }

    /// Which of `article_ids` the user already owns. One query instead of
    /// one `owns` probe per cart entry.
    pub fn owned_among(
        conn: &mut PgConnection,
        user_id: i64,
        article_ids: &[i64],
    ) -> Result<HashSet<i64>, ApiError> {
        let owned = article_purchase::table
            .filter(article_purchase::user_id.eq(user_id))
            .filter(article_purchase::article_id.eq_any(article_ids))
            .select(article_purchase::article_id)
            .load::<i64>(conn)
            .map_err(ApiError::Database)?;

        Ok(owned.into_iter().collect())
    }

    pub fn bought_articles(
        conn: &mut PgConnection,
        user_id: i64,
    ) -> Result<Vec<Article>, ApiError> {
        article_purchase::table
            .inner_join(articles::table)
            .filter(article_purchase::user_id.eq(user_id))
            .order(article_purchase::id.desc())
            .select(Article::as_select())
            .load::<Article>(conn)
            .map_err(ApiError::Database)
    }
}
