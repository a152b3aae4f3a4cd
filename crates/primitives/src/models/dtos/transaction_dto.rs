use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::entities::enum_types::TransactionStatus;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    /// Article ids in the cart. Duplicates are collapsed before pricing.
    #[validate(length(min = 1, message = "Cart must contain at least one article"))]
    pub items: Vec<i64>,
    /// Where the gateway sends the buyer after payment.
    #[validate(url(message = "redirect_url must be a valid URL"))]
    pub redirect_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub status: String,
    /// None for zero-total carts; no gateway round trip happened.
    pub redirect_url: Option<String>,
    pub payu_order_id: Option<String>,
    pub order_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderStatusResponse {
    pub status: TransactionStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionItemSummary {
    pub id: i64,
    pub article_id: i64,
    pub title: String,
    /// Current catalog price, not a checkout-time snapshot.
    pub price: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserTransaction {
    pub id: String,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    pub total_price: i64,
    pub items: Vec<TransactionItemSummary>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserTransactionsPage {
    pub items: Vec<UserTransaction>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(20).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.per_page()
    }
}
