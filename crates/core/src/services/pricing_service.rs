use std::collections::HashSet;

use diesel::PgConnection;
use readit_primitives::error::ApiError;
use readit_primitives::models::dtos::collection_dto::CollectionPriceResponse;
use readit_primitives::models::entities::article::Article;
use readit_primitives::models::entities::collection::Collection;

use crate::repositories::collection_repository::CollectionRepository;
use crate::repositories::purchase_repository::PurchaseRepository;

pub struct PricingService;

impl PricingService {
    /// Buyer-specific bundle price: the sum of member prices the viewer does
    /// not already own, minus the percentage discount on that same subtotal.
    /// Owning part of the bundle therefore shrinks both the payable base and
    /// the discount amount. Anonymous viewers get the full-bundle price.
    pub fn price_for_viewer(
        conn: &mut PgConnection,
        collection: &Collection,
        members: &[Article],
        viewer: Option<i64>,
    ) -> Result<i64, ApiError> {
        collection.validate_shape(members.len())?;

        let owned: HashSet<i64> = match viewer {
            Some(user_id) => {
                let ids: Vec<i64> = members.iter().map(|a| a.id).collect();
                PurchaseRepository::owned_among(conn, user_id, &ids)?
            }
            None => HashSet::new(),
        };

        let base: i64 = members
            .iter()
            .filter(|a| !owned.contains(&a.id))
            .map(|a| a.price)
            .sum();

        // Integer minor units; the discount floors toward the buyer.
        let discount = base * i64::from(collection.discount_percentage) / 100;

        Ok(base - discount)
    }

    pub fn price_for_collection(
        conn: &mut PgConnection,
        collection_id: i64,
        viewer: Option<i64>,
    ) -> Result<CollectionPriceResponse, ApiError> {
        let collection = CollectionRepository::find_by_id(conn, collection_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Collection {} not found", collection_id)))?;

        let members = CollectionRepository::member_articles(conn, collection_id)?;
        let price = Self::price_for_viewer(conn, &collection, &members, viewer)?;

        Ok(CollectionPriceResponse {
            collection_id: collection.id,
            title: collection.title,
            discount_percentage: collection.discount_percentage,
            articles_count: members.len(),
            price,
        })
    }
}
