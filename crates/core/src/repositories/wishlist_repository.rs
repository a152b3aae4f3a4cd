use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::article::Article;
use readit_primitives::models::entities::wishlist::{NewWishList, WishList};
use readit_primitives::schema::{articles, wishlists};

pub struct WishlistRepository;

impl WishlistRepository {
    /// Returns None when the article was already wishlisted.
    pub fn add(
        conn: &mut PgConnection,
        user_id: i64,
        article_id: i64,
    ) -> Result<Option<WishList>, ApiError> {
        diesel::insert_into(wishlists::table)
            .values(NewWishList {
                user_id,
                article_id,
            })
            .on_conflict((wishlists::user_id, wishlists::article_id))
            .do_nothing()
            .get_result::<WishList>(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    pub fn list_for_user(
        conn: &mut PgConnection,
        user_id: i64,
    ) -> Result<Vec<(WishList, Article)>, ApiError> {
        wishlists::table
            .inner_join(articles::table)
            .filter(wishlists::user_id.eq(user_id))
            .order(wishlists::created_at.desc())
            .select((WishList::as_select(), Article::as_select()))
            .load::<(WishList, Article)>(conn)
            .map_err(ApiError::Database)
    }

    /// Returns true when a row was removed.
    pub fn remove(
        conn: &mut PgConnection,
        user_id: i64,
        article_id: i64,
    ) -> Result<bool, ApiError> {
        let deleted = diesel::delete(
            wishlists::table
                .filter(wishlists::user_id.eq(user_id))
                .filter(wishlists::article_id.eq(article_id)),
        )
        .execute(conn)
        .map_err(ApiError::Database)?;

        Ok(deleted > 0)
    }
}
