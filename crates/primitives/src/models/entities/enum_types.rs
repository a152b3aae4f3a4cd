use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Ledger status of a checkout. The PENDING -> COMPLETED transition is the
/// only event that settles entitlements; COMPLETED and CANCELLED are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, DbEnum, Display, EnumString, ToSchema,
)]
#[ExistingTypePath = "crate::schema::sql_types::TransactionStatus"]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionStatus::Completed | TransactionStatus::Cancelled)
    }

    /// Maps a PayU order status onto the ledger vocabulary. Intermediate
    /// gateway statuses (e.g. WAITING_FOR_CONFIRMATION) have no ledger
    /// equivalent and return None.
    pub fn from_gateway(status: &str) -> Option<Self> {
        match status {
            "PENDING" => Some(TransactionStatus::Pending),
            "COMPLETED" => Some(TransactionStatus::Completed),
            "CANCELED" | "CANCELLED" => Some(TransactionStatus::Cancelled),
            _ => None,
        }
    }
}
