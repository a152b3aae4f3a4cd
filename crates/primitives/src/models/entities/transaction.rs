use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

use crate::models::entities::enum_types::TransactionStatus;

/// One row per checkout attempt. `id` is the opaque reference handed to the
/// gateway as extOrderId; `payu_order_id` is NULL for zero-total carts that
/// never reach the gateway. Rows are append-only audit trail.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Transaction {
    pub id: String,
    pub user_id: i64,
    pub status: TransactionStatus,
    pub payu_order_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransaction<'a> {
    pub id: &'a str,
    pub user_id: i64,
    pub status: TransactionStatus,
    pub payu_order_id: Option<&'a str>,
}

/// Checkout-time snapshot of the cart. Fixed once inserted, never mutated.
/// `paid_out` marks items no payment was due for (free or already owned).
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::transaction_items)]
#[diesel(belongs_to(Transaction))]
pub struct TransactionItem {
    pub id: i64,
    pub transaction_id: String,
    pub article_id: i64,
    pub paid_out: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::transaction_items)]
pub struct NewTransactionItem<'a> {
    pub transaction_id: &'a str,
    pub article_id: i64,
    pub paid_out: bool,
}
