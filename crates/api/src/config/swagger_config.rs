use crate::handlers::{
    article_detail::__path_article_detail, bought_list::__path_bought_list,
    buy_article::__path_buy_article, buy_collection::__path_buy_collection,
    collection_price::__path_collection_price, comment::__path_post_comment,
    create_order::__path_create_order, health::__path_health_check,
    is_bought::__path_is_bought, order_status::__path_order_status,
    payu_notify::__path_payu_notify, user_transactions::__path_user_transactions,
    wishlist::__path_add_to_wishlist, wishlist::__path_my_wishlist,
    wishlist::__path_remove_from_wishlist,
};
use readit_primitives::models::{
    ArticleDetailResponse, ArticleView, CollectionBuyResponse, CollectionPriceResponse,
    CommentRequest, CommentResponse, CreateOrderRequest, CreateOrderResponse, NotifyAck,
    OrderStatusResponse, UserTransactionsPage, WishListEntry,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        create_order, order_status, payu_notify, user_transactions,
        buy_article, buy_collection, is_bought, bought_list,
        collection_price, article_detail, post_comment,
        add_to_wishlist, my_wishlist, remove_from_wishlist,
        health_check
    ),
    components(schemas(
        CreateOrderRequest, CreateOrderResponse, OrderStatusResponse,
        UserTransactionsPage, ArticleView, ArticleDetailResponse,
        CollectionPriceResponse, CollectionBuyResponse, CommentRequest,
        CommentResponse, WishListEntry, NotifyAck
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Transactions", description = "Checkout, settlement and order history"),
        (name = "Articles", description = "Purchases and gated article access"),
        (name = "Wish list", description = "Reader wish lists"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
