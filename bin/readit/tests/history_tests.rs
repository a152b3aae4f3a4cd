mod common;

use axum_test::TestServer;
use common::fixtures::{create_article, create_user};
use diesel::prelude::*;
use http::StatusCode;
use readit_core::repositories::transaction_repository::TransactionRepository;
use readit_primitives::models::entities::enum_types::TransactionStatus;
use readit_primitives::models::entities::transaction::NewTransaction;
use readit_primitives::schema::articles;
use serde_json::Value;
use serial_test::serial;
use uuid::Uuid;

#[tokio::test]
#[serial]
async fn history_pages_newest_first() {
    let state = common::create_test_app_state();

    let token = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);

        let author = create_user(&mut conn, "author");
        let buyer = create_user(&mut conn, "buyer");
        let article = create_article(&mut conn, author.id, 1000, false);

        for i in 0..3 {
            TransactionRepository::create_with_items(
                &mut conn,
                NewTransaction {
                    id: &format!("order-{}", i),
                    user_id: buyer.id,
                    status: TransactionStatus::Completed,
                    payu_order_id: Some("PAYU-H"),
                },
                &[(article.id, false)],
            )
            .unwrap();
        }

        common::auth_token_for(&state, buyer.id)
    };

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/transactions/user-transactions?page=1&per_page=2")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 1);
    assert_eq!(body["per_page"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let response = server
        .get("/transactions/user-transactions?page=2&per_page=2")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["items"].as_array().unwrap().len(), 1);
}

/// Totals are computed from the live catalog, not a checkout-time snapshot;
/// a price change after purchase shows up in old history entries.
#[tokio::test]
#[serial]
async fn history_totals_follow_current_catalog_prices() {
    let state = common::create_test_app_state();

    let (article_id, token) = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);

        let author = create_user(&mut conn, "author");
        let buyer = create_user(&mut conn, "buyer");
        let article = create_article(&mut conn, author.id, 1000, false);

        TransactionRepository::create_with_items(
            &mut conn,
            NewTransaction {
                id: &Uuid::new_v4().to_string(),
                user_id: buyer.id,
                status: TransactionStatus::Completed,
                payu_order_id: Some("PAYU-H"),
            },
            &[(article.id, false)],
        )
        .unwrap();

        (article.id, common::auth_token_for(&state, buyer.id))
    };

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .get("/transactions/user-transactions")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["items"][0]["total_price"], 1000);

    {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        diesel::update(articles::table.find(article_id))
            .set(articles::price.eq(1500))
            .execute(&mut conn)
            .unwrap();
    }

    let response = server
        .get("/transactions/user-transactions")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["items"][0]["total_price"], 1500);
}

#[tokio::test]
#[serial]
async fn history_only_shows_the_callers_orders() {
    let state = common::create_test_app_state();

    let (buyer_token, other_token) = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);

        let author = create_user(&mut conn, "author");
        let buyer = create_user(&mut conn, "buyer");
        let other = create_user(&mut conn, "other");
        let article = create_article(&mut conn, author.id, 1000, false);

        TransactionRepository::create_with_items(
            &mut conn,
            NewTransaction {
                id: &Uuid::new_v4().to_string(),
                user_id: buyer.id,
                status: TransactionStatus::Pending,
                payu_order_id: Some("PAYU-H"),
            },
            &[(article.id, false)],
        )
        .unwrap();

        (
            common::auth_token_for(&state, buyer.id),
            common::auth_token_for(&state, other.id),
        )
    };

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .get("/transactions/user-transactions")
        .add_header("Authorization", format!("Bearer {}", buyer_token))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["total"], 1);

    let response = server
        .get("/transactions/user-transactions")
        .add_header("Authorization", format!("Bearer {}", other_token))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["total"], 0);
}
