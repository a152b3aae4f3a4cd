mod common;

use common::fixtures::{create_article, create_collection, create_user};
use readit_core::repositories::purchase_repository::PurchaseRepository;
use readit_core::services::pricing_service::PricingService;
use readit_primitives::error::ApiError;
use serial_test::serial;

#[test]
#[serial]
fn discount_applies_to_full_bundle_for_fresh_viewer() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let author = create_user(&mut conn, "author");
    let viewer = create_user(&mut conn, "viewer");

    let a = create_article(&mut conn, author.id, 1000, false);
    let b = create_article(&mut conn, author.id, 2000, false);
    let c = create_article(&mut conn, author.id, 3000, false);
    let collection = create_collection(&mut conn, author.id, 20, &[a.id, b.id, c.id]);

    // 6000 - 20% = 4800
    let price =
        PricingService::price_for_collection(&mut conn, collection.id, Some(viewer.id)).unwrap();
    assert_eq!(price.price, 4800);
    assert_eq!(price.articles_count, 3);
}

/// Owning one member shrinks both the payable base and, proportionally,
/// the discount: the discount applies to the unowned subtotal only.
#[test]
#[serial]
fn owned_members_are_priced_out_before_the_discount() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let author = create_user(&mut conn, "author");
    let viewer = create_user(&mut conn, "viewer");

    let a = create_article(&mut conn, author.id, 1000, false);
    let b = create_article(&mut conn, author.id, 2000, false);
    let c = create_article(&mut conn, author.id, 3000, false);
    let collection = create_collection(&mut conn, author.id, 20, &[a.id, b.id, c.id]);

    PurchaseRepository::grant(&mut conn, viewer.id, a.id).unwrap();
    PurchaseRepository::grant(&mut conn, viewer.id, b.id).unwrap();

    // base = 3000, discount = 600
    let price =
        PricingService::price_for_collection(&mut conn, collection.id, Some(viewer.id)).unwrap();
    assert_eq!(price.price, 2400);
}

#[test]
#[serial]
fn fully_owned_bundle_costs_nothing() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let author = create_user(&mut conn, "author");
    let viewer = create_user(&mut conn, "viewer");

    let a = create_article(&mut conn, author.id, 1000, false);
    let b = create_article(&mut conn, author.id, 2000, false);
    let collection = create_collection(&mut conn, author.id, 50, &[a.id, b.id]);

    PurchaseRepository::grant(&mut conn, viewer.id, a.id).unwrap();
    PurchaseRepository::grant(&mut conn, viewer.id, b.id).unwrap();

    let price =
        PricingService::price_for_collection(&mut conn, collection.id, Some(viewer.id)).unwrap();
    assert_eq!(price.price, 0);
}

#[test]
#[serial]
fn anonymous_viewer_gets_full_bundle_price() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let author = create_user(&mut conn, "author");
    let buyer = create_user(&mut conn, "buyer");

    let a = create_article(&mut conn, author.id, 1000, false);
    let b = create_article(&mut conn, author.id, 2000, false);
    let collection = create_collection(&mut conn, author.id, 10, &[a.id, b.id]);

    // Ownership exists but no identity is presented, so it cannot apply.
    PurchaseRepository::grant(&mut conn, buyer.id, a.id).unwrap();

    let price = PricingService::price_for_collection(&mut conn, collection.id, None).unwrap();
    assert_eq!(price.price, 2700);
}

#[test]
#[serial]
fn discount_floors_toward_the_buyer() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let author = create_user(&mut conn, "author");
    let viewer = create_user(&mut conn, "viewer");

    let a = create_article(&mut conn, author.id, 999, false);
    let b = create_article(&mut conn, author.id, 100, false);
    let collection = create_collection(&mut conn, author.id, 33, &[a.id, b.id]);

    // base = 1099, discount = floor(1099 * 33 / 100) = 362
    let price =
        PricingService::price_for_collection(&mut conn, collection.id, Some(viewer.id)).unwrap();
    assert_eq!(price.price, 737);
}

#[test]
#[serial]
fn undersized_collection_is_invalid() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let author = create_user(&mut conn, "author");
    let a = create_article(&mut conn, author.id, 1000, false);
    let collection = create_collection(&mut conn, author.id, 20, &[a.id]);

    let err =
        PricingService::price_for_collection(&mut conn, collection.id, None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
#[serial]
fn missing_collection_is_not_found() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let err = PricingService::price_for_collection(&mut conn, 424242, None).unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
