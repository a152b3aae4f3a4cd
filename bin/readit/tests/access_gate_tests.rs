mod common;

use common::fixtures::{create_article, create_user};
use readit_core::repositories::purchase_repository::PurchaseRepository;
use readit_core::services::access_service::AccessService;
use readit_primitives::error::ApiError;
use serial_test::serial;

/// The access predicate is author OR free OR owned; every combination of
/// the three inputs must agree with that truth table.
#[test]
#[serial]
fn access_truth_table() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    for is_author in [false, true] {
        for is_free in [false, true] {
            for is_owned in [false, true] {
                let author = create_user(&mut conn, "author");
                let reader = create_user(&mut conn, "reader");

                let article = create_article(
                    &mut conn,
                    author.id,
                    if is_free { 0 } else { 1500 },
                    is_free,
                );

                let viewer = if is_author { author.id } else { reader.id };
                if is_owned {
                    PurchaseRepository::grant(&mut conn, viewer, article.id).unwrap();
                }

                let expected = is_author || is_free || is_owned;
                let actual = AccessService::can_access(&mut conn, viewer, &article).unwrap();

                assert_eq!(
                    actual, expected,
                    "author={} free={} owned={}",
                    is_author, is_free, is_owned
                );
            }
        }
    }
}

#[test]
#[serial]
fn ensure_can_access_distinguishes_denied_from_absent() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let author = create_user(&mut conn, "author");
    let reader = create_user(&mut conn, "reader");
    let paid = create_article(&mut conn, author.id, 2000, false);

    let err = AccessService::ensure_can_access(&mut conn, reader.id, &paid).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));
}

#[test]
#[serial]
fn buy_gate_rejects_author_and_owner_differently() {
    let state = common::create_test_app_state();
    let mut conn = state.db.get().expect("Failed to get DB connection");
    common::cleanup_test_db(&mut conn);

    let author = create_user(&mut conn, "author");
    let reader = create_user(&mut conn, "reader");
    let article = create_article(&mut conn, author.id, 2000, false);

    // The author may never buy their own article.
    let err = AccessService::ensure_can_buy(&mut conn, author.id, &article).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized(_)));

    // A fresh reader may.
    AccessService::ensure_can_buy(&mut conn, reader.id, &article).unwrap();

    // An owner re-buying is a conflict, not an authorization failure.
    PurchaseRepository::grant(&mut conn, reader.id, article.id).unwrap();
    let err = AccessService::ensure_can_buy(&mut conn, reader.id, &article).unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}
