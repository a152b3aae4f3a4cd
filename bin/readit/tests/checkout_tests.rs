mod common;

use axum_test::TestServer;
use common::fixtures::{create_article, create_user};
use diesel::prelude::*;
use http::StatusCode;
use readit_core::repositories::purchase_repository::PurchaseRepository;
use readit_core::repositories::transaction_repository::TransactionRepository;
use readit_primitives::models::entities::enum_types::TransactionStatus;
use readit_primitives::schema::transactions;
use serde_json::{json, Value};
use serial_test::serial;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_gateway() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pl/standard/user/oauth/authorize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "token_type": "bearer",
            "expires_in": 43199
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v2_1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": { "statusCode": "SUCCESS" },
            "redirectUri": "https://merch-prod.snd.payu.com/pay/?orderId=TEST123",
            "orderId": "TEST123"
        })))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
#[serial]
async fn paid_cart_opens_a_pending_gateway_checkout() {
    let gateway = mock_gateway().await;
    let state = common::create_test_app_state_with_payu(&gateway.uri());

    let (buyer_id, article_id, token) = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);

        let author = create_user(&mut conn, "author");
        let buyer = create_user(&mut conn, "buyer");
        let article = create_article(&mut conn, author.id, 1000, false);
        let token = common::auth_token_for(&state, buyer.id);
        (buyer.id, article.id, token)
    };

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/transactions/create-order")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "items": [article_id],
            "redirect_url": "https://readit.example/checkout/done"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["payu_order_id"], "TEST123");
    assert!(body["redirect_url"].as_str().unwrap().contains("TEST123"));

    let order_id = body["order_id"].as_str().unwrap().to_string();

    let mut conn = state.db.get().expect("Failed to get DB connection");
    let tx = TransactionRepository::find_by_id(&mut conn, &order_id)
        .unwrap()
        .expect("Transaction should be persisted");
    assert_eq!(tx.status, TransactionStatus::Pending);
    assert_eq!(tx.user_id, buyer_id);
    assert_eq!(tx.payu_order_id.as_deref(), Some("TEST123"));

    let items = TransactionRepository::items_for(&mut conn, &order_id).unwrap();
    assert_eq!(items.len(), 1);
    assert!(!items[0].paid_out);

    // Nothing is owned until the gateway confirms payment.
    assert!(!PurchaseRepository::owns(&mut conn, buyer_id, article_id).unwrap());
}

#[tokio::test]
#[serial]
async fn zero_total_cart_settles_inline_without_the_gateway() {
    // No mocks mounted: any gateway call would error the checkout.
    let gateway = MockServer::start().await;
    let state = common::create_test_app_state_with_payu(&gateway.uri());

    let (buyer_id, free_id, owned_id, token) = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);

        let author = create_user(&mut conn, "author");
        let buyer = create_user(&mut conn, "buyer");
        let free = create_article(&mut conn, author.id, 0, true);
        let owned = create_article(&mut conn, author.id, 2500, false);
        PurchaseRepository::grant(&mut conn, buyer.id, owned.id).unwrap();

        let token = common::auth_token_for(&state, buyer.id);
        (buyer.id, free.id, owned.id, token)
    };

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/transactions/create-order")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "items": [free_id, owned_id],
            "redirect_url": "https://readit.example/checkout/done"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert!(body["redirect_url"].is_null());
    assert!(body["payu_order_id"].is_null());

    let order_id = body["order_id"].as_str().unwrap().to_string();

    let mut conn = state.db.get().expect("Failed to get DB connection");
    let tx = TransactionRepository::find_by_id(&mut conn, &order_id)
        .unwrap()
        .unwrap();
    assert_eq!(tx.status, TransactionStatus::Completed);
    assert!(tx.payu_order_id.is_none());

    let items = TransactionRepository::items_for(&mut conn, &order_id).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.paid_out));

    // Settled inline: the free article is now owned too.
    assert!(PurchaseRepository::owns(&mut conn, buyer_id, free_id).unwrap());
}

#[tokio::test]
#[serial]
async fn gateway_failure_aborts_checkout_without_persisting() {
    let gateway = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pl/standard/user/oauth/authorize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-token",
            "expires_in": 43199
        })))
        .mount(&gateway)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/v2_1/orders"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&gateway)
        .await;

    let state = common::create_test_app_state_with_payu(&gateway.uri());

    let (buyer_id, article_id, token) = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);

        let author = create_user(&mut conn, "author");
        let buyer = create_user(&mut conn, "buyer");
        let article = create_article(&mut conn, author.id, 1000, false);
        let token = common::auth_token_for(&state, buyer.id);
        (buyer.id, article.id, token)
    };

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/transactions/create-order")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "items": [article_id],
            "redirect_url": "https://readit.example/checkout/done"
        }))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);

    // No orphan PENDING row may exist.
    let mut conn = state.db.get().expect("Failed to get DB connection");
    let count = transactions::table
        .filter(transactions::user_id.eq(buyer_id))
        .count()
        .get_result::<i64>(&mut conn)
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
#[serial]
async fn unknown_article_in_cart_is_rejected_before_anything_happens() {
    let gateway = MockServer::start().await;
    let state = common::create_test_app_state_with_payu(&gateway.uri());

    let token = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
        let buyer = create_user(&mut conn, "buyer");
        common::auth_token_for(&state, buyer.id)
    };

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/transactions/create-order")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "items": [987654],
            "redirect_url": "https://readit.example/checkout/done"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn empty_cart_is_rejected() {
    let gateway = MockServer::start().await;
    let state = common::create_test_app_state_with_payu(&gateway.uri());

    let token = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);
        let buyer = create_user(&mut conn, "buyer");
        common::auth_token_for(&state, buyer.id)
    };

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/transactions/create-order")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "items": [],
            "redirect_url": "https://readit.example/checkout/done"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn duplicate_cart_entries_collapse_into_one_item() {
    let gateway = mock_gateway().await;
    let state = common::create_test_app_state_with_payu(&gateway.uri());

    let (article_id, token) = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);

        let author = create_user(&mut conn, "author");
        let buyer = create_user(&mut conn, "buyer");
        let article = create_article(&mut conn, author.id, 1000, false);
        let token = common::auth_token_for(&state, buyer.id);
        (article.id, token)
    };

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/transactions/create-order")
        .add_header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "items": [article_id, article_id, article_id],
            "redirect_url": "https://readit.example/checkout/done"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    let order_id = body["order_id"].as_str().unwrap().to_string();

    let mut conn = state.db.get().expect("Failed to get DB connection");
    let items = TransactionRepository::items_for(&mut conn, &order_id).unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
#[serial]
async fn order_status_is_scoped_to_its_owner() {
    let gateway = mock_gateway().await;
    let state = common::create_test_app_state_with_payu(&gateway.uri());

    let (buyer_token, other_token, article_id) = {
        let mut conn = state.db.get().expect("Failed to get DB connection");
        common::cleanup_test_db(&mut conn);

        let author = create_user(&mut conn, "author");
        let buyer = create_user(&mut conn, "buyer");
        let other = create_user(&mut conn, "other");
        let article = create_article(&mut conn, author.id, 1000, false);
        (
            common::auth_token_for(&state, buyer.id),
            common::auth_token_for(&state, other.id),
            article.id,
        )
    };

    let server = TestServer::new(common::create_test_app(state.clone())).unwrap();

    let response = server
        .post("/transactions/create-order")
        .add_header("Authorization", format!("Bearer {}", buyer_token))
        .json(&json!({
            "items": [article_id],
            "redirect_url": "https://readit.example/checkout/done"
        }))
        .await;
    response.assert_status(StatusCode::OK);
    let order_id = response.json::<Value>()["order_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server
        .get(&format!("/transactions/order-status/{}", order_id))
        .add_header("Authorization", format!("Bearer {}", buyer_token))
        .await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>()["status"], "PENDING");

    // Someone else's order id looks like it does not exist.
    let response = server
        .get(&format!("/transactions/order-status/{}", order_id))
        .add_header("Authorization", format!("Bearer {}", other_token))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
