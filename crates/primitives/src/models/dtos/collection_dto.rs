use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionPriceResponse {
    pub collection_id: i64,
    pub title: String,
    pub discount_percentage: i32,
    pub articles_count: usize,
    /// Viewer-specific price in minor units. Anonymous viewers see the
    /// undiscounted-by-ownership full bundle price.
    pub price: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionBuyResponse {
    pub collection_id: i64,
    /// Articles this call actually granted (already-owned members skipped).
    pub granted_article_ids: Vec<i64>,
}
