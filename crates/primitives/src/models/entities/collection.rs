use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;

use crate::error::ApiError;

pub const MIN_COLLECTION_ARTICLES: usize = 2;

/// A discounted bundle. Price is never stored; it is computed per viewer
/// from the member articles the viewer does not yet own.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::collections)]
#[diesel(belongs_to(crate::models::entities::user::User, foreign_key = owner_id))]
pub struct Collection {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub discount_percentage: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    /// The DB carries CHECK constraints for both rules; this re-validation
    /// protects pricing against rows written before the constraints existed.
    pub fn validate_shape(&self, member_count: usize) -> Result<(), ApiError> {
        if member_count < MIN_COLLECTION_ARTICLES {
            return Err(ApiError::InvalidInput(format!(
                "Collection {} has fewer than {} articles",
                self.id, MIN_COLLECTION_ARTICLES
            )));
        }
        if !(0..=100).contains(&self.discount_percentage) {
            return Err(ApiError::InvalidInput(format!(
                "Collection {} discount {} outside 0-100",
                self.id, self.discount_percentage
            )));
        }
        Ok(())
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::collections)]
pub struct NewCollection<'a> {
    pub owner_id: i64,
    pub title: &'a str,
    pub discount_percentage: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::collection_articles)]
pub struct CollectionArticle {
    pub id: i64,
    pub collection_id: i64,
    pub article_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::collection_articles)]
pub struct NewCollectionArticle {
    pub collection_id: i64,
    pub article_id: i64,
}
