use diesel::prelude::*;
use readit_primitives::error::ApiError;
use readit_primitives::models::dtos::collection_dto::CollectionBuyResponse;
use tracing::info;

use crate::repositories::article_repository::ArticleRepository;
use crate::repositories::collection_repository::CollectionRepository;
use crate::repositories::purchase_repository::PurchaseRepository;
use crate::services::access_service::AccessService;

/// Direct, non-gateway entitlement grants: the zero-cost buy endpoints.
pub struct PurchaseService;

impl PurchaseService {
    pub fn buy_article(
        conn: &mut PgConnection,
        user_id: i64,
        article_id: i64,
    ) -> Result<(), ApiError> {
        let article = ArticleRepository::find_by_id(conn, article_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Article {} not found", article_id)))?;

        AccessService::ensure_can_buy(conn, user_id, &article)?;

        PurchaseRepository::grant(conn, user_id, article_id)?;

        info!(user_id, article_id, "Article bought directly");
        Ok(())
    }

    /// Grants every member article the buyer does not already hold. The
    /// collection owner is rejected outright; a buyer holding every member
    /// (authored ones count as held) gets Conflict, mirroring the
    /// single-article re-buy rule.
    pub fn buy_collection(
        conn: &mut PgConnection,
        user_id: i64,
        collection_id: i64,
    ) -> Result<CollectionBuyResponse, ApiError> {
        let collection = CollectionRepository::find_by_id(conn, collection_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Collection {} not found", collection_id)))?;

        if collection.owner_id == user_id {
            return Err(ApiError::Unauthorized(
                "Owners cannot buy their own collections".into(),
            ));
        }

        let members = CollectionRepository::member_articles(conn, collection_id)?;
        collection.validate_shape(members.len())?;

        let member_ids: Vec<i64> = members.iter().map(|a| a.id).collect();
        let owned = PurchaseRepository::owned_among(conn, user_id, &member_ids)?;

        let grantable: Vec<i64> = members
            .iter()
            .filter(|a| !owned.contains(&a.id) && a.author_id != user_id)
            .map(|a| a.id)
            .collect();

        if grantable.is_empty() {
            return Err(ApiError::Conflict(
                "All collection articles already owned".into(),
            ));
        }

        let granted = conn.transaction(|conn| {
            let mut granted = Vec::with_capacity(grantable.len());
            for article_id in &grantable {
                if PurchaseRepository::grant(conn, user_id, *article_id)? {
                    granted.push(*article_id);
                }
            }
            Ok::<_, ApiError>(granted)
        })?;

        info!(
            user_id,
            collection_id,
            granted = granted.len(),
            "Collection bought directly"
        );

        Ok(CollectionBuyResponse {
            collection_id,
            granted_article_ids: granted,
        })
    }
}
