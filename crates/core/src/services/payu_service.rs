use http::HeaderMap;
use readit_primitives::error::ApiError;
use readit_primitives::models::dtos::payu::PayuNotification;
use readit_primitives::models::entities::enum_types::TransactionStatus;
use tracing::{debug, warn};

use crate::app_state::AppState;
use crate::services::transaction_service::TransactionService;

pub struct PayuService;

impl PayuService {
    /// Authenticates a notification before anything is trusted. A missing or
    /// wrong signature is a rejection, not a processing error.
    pub fn verify_notification(
        state: &AppState,
        headers: &HeaderMap,
        body: &[u8],
    ) -> Result<(), ApiError> {
        let signature = headers
            .get("OpenPayu-Signature")
            .and_then(|h| h.to_str().ok());

        state.payu.verify_signature(signature, body)
    }

    /// Processes an authenticated notification. Unknown order ids and
    /// gateway statuses with no ledger equivalent are deliberate no-ops:
    /// the webhook endpoint acknowledges them so the gateway stops retrying.
    pub fn process_notification(state: &AppState, body: &[u8]) -> Result<(), ApiError> {
        let payload: PayuNotification = serde_json::from_slice(body).map_err(|e| {
            warn!("Malformed PayU notification: {}", e);
            ApiError::InvalidInput("Malformed notification payload".into())
        })?;

        let order = &payload.order;

        let Some(status) = TransactionStatus::from_gateway(&order.status) else {
            debug!(
                ext_order_id = %order.ext_order_id,
                status = %order.status,
                "Gateway status has no ledger mapping, ignoring"
            );
            return Ok(());
        };

        let mut conn = state.db.get()?;
        TransactionService::mark_status(&mut conn, &order.ext_order_id, status)
    }
}
