use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

/// Catalog record. `price` is in minor units and is snapshotted into the
/// ledger only implicitly: a TransactionItem records membership, not price.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::articles)]
#[diesel(belongs_to(crate::models::entities::user::User, foreign_key = author_id))]
pub struct Article {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub is_free: bool,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::articles)]
pub struct NewArticle<'a> {
    pub author_id: i64,
    pub title: &'a str,
    pub slug: &'a str,
    pub summary: &'a str,
    pub is_free: bool,
    pub price: i64,
}
