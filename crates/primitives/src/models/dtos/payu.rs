//! Wire types for the PayU REST API (order creation + asynchronous
//! order-status notifications).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
pub struct PayuTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// PayU wants all amounts as decimal strings of minor units.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayuProduct {
    pub name: String,
    pub unit_price: String,
    pub quantity: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayuBuyer {
    pub ext_customer_id: String,
    pub email: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayuOrderRequest {
    pub notify_url: String,
    pub customer_ip: String,
    pub merchant_pos_id: String,
    pub description: String,
    pub currency_code: String,
    pub total_amount: String,
    /// Our transaction id; echoed back in notifications.
    pub ext_order_id: String,
    pub continue_url: String,
    pub buyer: PayuBuyer,
    pub products: Vec<PayuProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayuOrderResponse {
    pub redirect_uri: Option<String>,
    pub order_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PayuNotification {
    pub order: PayuNotificationOrder,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayuNotificationOrder {
    pub ext_order_id: String,
    pub status: String,
    #[serde(default)]
    pub order_id: Option<String>,
}

/// Webhook responses are always a bare OK so the gateway stops retrying.
#[derive(Debug, Serialize, ToSchema)]
pub struct NotifyAck {
    pub status: &'static str,
}

impl NotifyAck {
    pub fn ok() -> Self {
        Self { status: "OK" }
    }
}
