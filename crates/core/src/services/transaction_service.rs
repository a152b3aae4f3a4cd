use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::dtos::transaction_dto::{
    PageQuery, TransactionItemSummary, UserTransaction, UserTransactionsPage,
};
use readit_primitives::models::entities::enum_types::TransactionStatus;
use readit_primitives::models::entities::transaction::Transaction;
use tracing::{debug, info};

use crate::repositories::purchase_repository::PurchaseRepository;
use crate::repositories::transaction_repository::TransactionRepository;

pub struct TransactionService;

impl TransactionService {
    /// Applies a status reported by the gateway. Everything happens in one
    /// database transaction under a row lock, so concurrent notifications
    /// for the same checkout serialize and settlement runs at most once:
    ///
    /// - unknown transaction id: Ok. Callbacks for foreign or replayed
    ///   orders must not error, and must not leak existence.
    /// - same status, or a terminal row: no-op.
    /// - PENDING -> COMPLETED: status write + inline settlement, atomically.
    pub fn mark_status(
        conn: &mut PgConnection,
        transaction_id: &str,
        new_status: TransactionStatus,
    ) -> Result<(), ApiError> {
        conn.transaction(|conn| {
            let Some(tx) = TransactionRepository::find_by_id_for_update(conn, transaction_id)?
            else {
                debug!(transaction_id, "Status report for unknown transaction, ignoring");
                return Ok(());
            };

            if tx.status == new_status {
                debug!(transaction_id, "Transaction already in reported status");
                return Ok(());
            }

            if tx.status.is_terminal() {
                info!(
                    transaction_id,
                    current = %tx.status,
                    reported = %new_status,
                    "Ignoring status report for settled transaction"
                );
                return Ok(());
            }

            TransactionRepository::update_status(conn, transaction_id, new_status)?;

            if new_status == TransactionStatus::Completed {
                Self::settle(conn, &tx)?;
            }

            Ok(())
        })
    }

    /// Materializes one entitlement per cart item. Must run inside the same
    /// database transaction as the status write that triggered it: readers
    /// never observe COMPLETED without the purchases, or purchases without
    /// COMPLETED. Items already owned at settlement time are skipped.
    pub fn settle(conn: &mut PgConnection, tx: &Transaction) -> Result<usize, ApiError> {
        let items = TransactionRepository::items_for(conn, &tx.id)?;

        let mut granted = 0;
        for item in &items {
            if PurchaseRepository::grant(conn, tx.user_id, item.article_id)? {
                granted += 1;
            }
        }

        info!(
            transaction_id = %tx.id,
            user_id = tx.user_id,
            items = items.len(),
            granted,
            "Transaction settled"
        );

        Ok(granted)
    }

    pub fn order_status(
        conn: &mut PgConnection,
        user_id: i64,
        order_id: &str,
    ) -> Result<TransactionStatus, ApiError> {
        TransactionRepository::find_by_id_and_user(conn, order_id, user_id)?
            .map(|tx| tx.status)
            .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", order_id)))
    }

    /// Paginated order history. Item prices and the derived total are read
    /// from the current catalog, not a checkout-time snapshot; a later price
    /// change shows the new number here.
    pub fn user_transactions(
        conn: &mut PgConnection,
        user_id: i64,
        page: &PageQuery,
    ) -> Result<UserTransactionsPage, ApiError> {
        let total = TransactionRepository::count_by_user(conn, user_id)?;
        let transactions =
            TransactionRepository::page_by_user(conn, user_id, page.per_page(), page.offset())?;

        let mut items = Vec::with_capacity(transactions.len());
        for tx in transactions {
            items.push(Self::to_user_transaction(conn, tx)?);
        }

        Ok(UserTransactionsPage {
            items,
            total,
            page: page.page(),
            per_page: page.per_page(),
        })
    }

    fn to_user_transaction(
        conn: &mut PgConnection,
        tx: Transaction,
    ) -> Result<UserTransaction, ApiError> {
        let pairs = TransactionRepository::item_articles_for(conn, &tx.id)?;

        let items: Vec<TransactionItemSummary> = pairs
            .into_iter()
            .map(|(item, article)| TransactionItemSummary {
                id: item.id,
                article_id: article.id,
                title: article.title,
                price: article.price,
            })
            .collect();

        let total_price = items.iter().map(|i| i.price).sum();

        Ok(UserTransaction {
            id: tx.id,
            status: tx.status,
            created_at: tx.created_at,
            total_price,
            items,
        })
    }
}
