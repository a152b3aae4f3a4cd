use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    article_detail::article_detail, bought_list::bought_list, buy_article::buy_article,
    buy_collection::buy_collection, collection_price::collection_price, comment::post_comment,
    create_order::create_order, health::health_check, is_bought::is_bought,
    order_status::order_status, payu_notify::payu_notify, user_transactions::user_transactions,
    wishlist::{add_to_wishlist, my_wishlist, remove_from_wishlist},
};
use axum::{middleware, routing::get, routing::post, Router};
use readit_core::{AppState, SecurityConfig};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(state: Arc<AppState>) -> Router {
    // rate limiting configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .unwrap(),
    );

    let public_router = create_public_routers(&state);
    let protected_router = create_secured_routers(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(protected_router)
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        );

    // disable rate limiting in test environment
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer::new(governor_conf));
    }

    router.with_state(state)
}

fn create_secured_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/transactions/create-order", post(create_order))
        .route("/transactions/order-status/{order_id}", get(order_status))
        .route("/transactions/user-transactions", get(user_transactions))
        .route("/articles/buy/{article_id}", post(buy_article))
        .route(
            "/articles/collection/buy/{collection_id}",
            post(buy_collection),
        )
        .route("/articles/is-bought/{article_id}", get(is_bought))
        .route("/articles/bought-list", get(bought_list))
        .route("/articles/detail/{article_id}", get(article_detail))
        .route("/articles/comment/{article_id}", post(post_comment))
        .route("/articles/wish-list/add/{article_id}", post(add_to_wishlist))
        .route("/articles/wish-list/me", get(my_wishlist))
        .route(
            "/articles/wish-list/{article_id}",
            axum::routing::delete(remove_from_wishlist),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_public_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    // collection pricing serves anonymous viewers but honors identity
    let optional_auth = Router::new()
        .route(
            "/articles/collection/price/{collection_id}",
            get(collection_price),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::optional_auth_middleware,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(optional_auth)
        .route("/transactions/notify", post(payu_notify))
        .route("/api/health", get(health_check))
}
