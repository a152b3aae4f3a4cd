use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

/// Ground truth of ownership: one row per (user, article), never deleted.
/// Creation is idempotent; direct buys, bundle buys and settlement may race
/// to grant the same entitlement.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::article_purchase)]
pub struct ArticlePurchase {
    pub id: i64,
    pub user_id: i64,
    pub article_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::article_purchase)]
pub struct NewArticlePurchase {
    pub user_id: i64,
    pub article_id: i64,
}
