use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::dtos::payu::PayuProduct;
use readit_primitives::models::dtos::transaction_dto::{CreateOrderRequest, CreateOrderResponse};
use readit_primitives::models::entities::enum_types::TransactionStatus;
use readit_primitives::models::entities::transaction::NewTransaction;
use tracing::info;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::repositories::article_repository::ArticleRepository;
use crate::repositories::purchase_repository::PurchaseRepository;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::transaction_service::TransactionService;

pub struct CheckoutService;

impl CheckoutService {
    /// Opens a checkout for a cart of articles.
    ///
    /// Free and already-owned articles contribute nothing to the total and
    /// are recorded as `paid_out`. A zero-total cart never reaches the
    /// gateway: the transaction is inserted COMPLETED and settled in the
    /// same database transaction. A payable cart creates the gateway order
    /// first, so the order id is known when the PENDING row is inserted;
    /// if order creation fails nothing is persisted. An orphaned gateway
    /// order (insert fails after creation) is tolerated: the buyer is never
    /// redirected to it and no local state exists.
    pub async fn open_checkout(
        state: &AppState,
        user_id: i64,
        req: &CreateOrderRequest,
    ) -> Result<CreateOrderResponse, ApiError> {
        let mut conn = state.db.get()?;

        let buyer = UserRepository::find_by_id(&mut conn, user_id)?
            .ok_or_else(|| ApiError::NotFound(format!("User {} not found", user_id)))?;

        let cart = dedupe_cart(&req.items);
        if cart.is_empty() {
            return Err(ApiError::InvalidInput("Cart is empty".into()));
        }

        let articles = ArticleRepository::find_all_by_ids(&mut conn, &cart)?;
        let owned = PurchaseRepository::owned_among(&mut conn, user_id, &cart)?;

        let mut items = Vec::with_capacity(articles.len());
        let mut payable = Vec::new();
        let mut total_due: i64 = 0;

        for article in &articles {
            let paid_out = article.is_free || owned.contains(&article.id);
            items.push((article.id, paid_out));
            if !paid_out {
                total_due += article.price;
                payable.push(article);
            }
        }

        let order_id = Uuid::new_v4().to_string();

        if total_due == 0 {
            let tx = conn.transaction(|conn| {
                let tx = TransactionRepository::create_with_items(
                    conn,
                    NewTransaction {
                        id: &order_id,
                        user_id,
                        status: TransactionStatus::Completed,
                        payu_order_id: None,
                    },
                    &items,
                )?;
                TransactionService::settle(conn, &tx)?;
                Ok::<_, ApiError>(tx)
            })?;

            info!(
                order_id = %tx.id,
                user_id,
                items = items.len(),
                "Zero-total checkout settled without gateway"
            );

            return Ok(CreateOrderResponse {
                status: "success".into(),
                redirect_url: None,
                payu_order_id: None,
                order_id: tx.id,
            });
        }

        let products: Vec<PayuProduct> = payable
            .iter()
            .map(|a| PayuProduct {
                name: a.title.clone(),
                unit_price: a.price.to_string(),
                quantity: "1".into(),
            })
            .collect();

        let order = state
            .payu
            .create_order(&buyer, products, total_due, &order_id, &req.redirect_url)
            .await?;

        let tx = conn.transaction(|conn| {
            TransactionRepository::create_with_items(
                conn,
                NewTransaction {
                    id: &order_id,
                    user_id,
                    status: TransactionStatus::Pending,
                    payu_order_id: order.order_id.as_deref(),
                },
                &items,
            )
        })?;

        info!(
            order_id = %tx.id,
            user_id,
            total_due,
            items = items.len(),
            "Checkout opened, awaiting gateway notification"
        );

        Ok(CreateOrderResponse {
            status: "success".into(),
            redirect_url: order.redirect_uri,
            payu_order_id: order.order_id,
            order_id: tx.id,
        })
    }
}

fn dedupe_cart(items: &[i64]) -> Vec<i64> {
    let mut seen = std::collections::HashSet::new();
    items
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}
