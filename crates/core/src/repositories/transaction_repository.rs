use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::entities::article::Article;
use readit_primitives::models::entities::enum_types::TransactionStatus;
use readit_primitives::models::entities::transaction::{
    NewTransaction, NewTransactionItem, Transaction, TransactionItem,
};
use readit_primitives::schema::{articles, transaction_items, transactions};

pub struct TransactionRepository;

impl TransactionRepository {
    /// Inserts the transaction and its full item snapshot. Callers wrap this
    /// in `conn.transaction` together with whatever else must be atomic
    /// (inline settlement for zero-total carts).
    pub fn create_with_items(
        conn: &mut PgConnection,
        new_tx: NewTransaction<'_>,
        items: &[(i64, bool)],
    ) -> Result<Transaction, ApiError> {
        let tx = diesel::insert_into(transactions::table)
            .values(&new_tx)
            .get_result::<Transaction>(conn)
            .map_err(ApiError::Database)?;

        let new_items: Vec<NewTransactionItem<'_>> = items
            .iter()
            .map(|(article_id, paid_out)| NewTransactionItem {
                transaction_id: &tx.id,
                article_id: *article_id,
                paid_out: *paid_out,
            })
            .collect();

        diesel::insert_into(transaction_items::table)
            .values(&new_items)
            .execute(conn)
            .map_err(ApiError::Database)?;

        Ok(tx)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        id: &str,
    ) -> Result<Option<Transaction>, ApiError> {
        transactions::table
            .find(id)
            .first::<Transaction>(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    /// Row-locked read; serializes concurrent status writers per
    /// transaction so a gateway retry cannot settle twice.
    pub fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: &str,
    ) -> Result<Option<Transaction>, ApiError> {
        transactions::table
            .find(id)
            .for_update()
            .first::<Transaction>(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    pub fn find_by_id_and_user(
        conn: &mut PgConnection,
        id: &str,
        user_id: i64,
    ) -> Result<Option<Transaction>, ApiError> {
        transactions::table
            .find(id)
            .filter(transactions::user_id.eq(user_id))
            .first::<Transaction>(conn)
            .optional()
            .map_err(ApiError::Database)
    }

    pub fn update_status(
        conn: &mut PgConnection,
        id: &str,
        status: TransactionStatus,
    ) -> Result<(), ApiError> {
        diesel::update(transactions::table.find(id))
            .set(transactions::status.eq(status))
            .execute(conn)
            .map_err(ApiError::Database)?;
        Ok(())
    }

    pub fn items_for(
        conn: &mut PgConnection,
        transaction_id: &str,
    ) -> Result<Vec<TransactionItem>, ApiError> {
        transaction_items::table
            .filter(transaction_items::transaction_id.eq(transaction_id))
            .order(transaction_items::id.asc())
            .load::<TransactionItem>(conn)
            .map_err(ApiError::Database)
    }

    /// Items joined with their articles at the current catalog price.
    pub fn item_articles_for(
        conn: &mut PgConnection,
        transaction_id: &str,
    ) -> Result<Vec<(TransactionItem, Article)>, ApiError> {
        transaction_items::table
            .inner_join(articles::table)
            .filter(transaction_items::transaction_id.eq(transaction_id))
            .order(transaction_items::id.asc())
            .select((TransactionItem::as_select(), Article::as_select()))
            .load::<(TransactionItem, Article)>(conn)
            .map_err(ApiError::Database)
    }

    pub fn page_by_user(
        conn: &mut PgConnection,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transaction>, ApiError> {
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .order(transactions::created_at.desc())
            .limit(limit)
            .offset(offset)
            .load::<Transaction>(conn)
            .map_err(ApiError::Database)
    }

    pub fn count_by_user(conn: &mut PgConnection, user_id: i64) -> Result<i64, ApiError> {
        transactions::table
            .filter(transactions::user_id.eq(user_id))
            .count()
            .get_result::<i64>(conn)
            .map_err(ApiError::Database)
    }
}
