use diesel::PgConnection;
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::article::Article;

use crate::repositories::purchase_repository::PurchaseRepository;

/// The ownership predicate every content, comment and purchase path runs
/// through: a user may act on an article iff they authored it, it is free,
/// or they hold an entitlement for it.
pub struct AccessService;

impl AccessService {
    pub fn can_access(
        conn: &mut PgConnection,
        user_id: i64,
        article: &Article,
    ) -> Result<bool, ApiError> {
        if article.author_id == user_id || article.is_free {
            return Ok(true);
        }
        PurchaseRepository::owns(conn, user_id, article.id)
    }

    /// Unauthorized, not NotFound: callers already know the article exists
    /// and must be able to tell "absent" from "denied".
    pub fn ensure_can_access(
        conn: &mut PgConnection,
        user_id: i64,
        article: &Article,
    ) -> Result<(), ApiError> {
        if Self::can_access(conn, user_id, article)? {
            Ok(())
        } else {
            Err(ApiError::Unauthorized(format!(
                "No access to article {}",
                article.id
            )))
        }
    }

    /// The inverted gate in front of direct purchases: the author may not
    /// buy their own article, and a re-buy of an owned article is a
    /// user-facing mistake worth flagging even though the grant underneath
    /// is idempotent.
    pub fn ensure_can_buy(
        conn: &mut PgConnection,
        user_id: i64,
        article: &Article,
    ) -> Result<(), ApiError> {
        if article.author_id == user_id {
            return Err(ApiError::Unauthorized(
                "Authors cannot buy their own articles".into(),
            ));
        }
        if PurchaseRepository::owns(conn, user_id, article.id)? {
            return Err(ApiError::Conflict("Article already bought".into()));
        }
        Ok(())
    }
}
