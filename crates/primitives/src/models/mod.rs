pub mod app_state;
pub mod dtos;
pub mod entities;

pub use app_state::{AppConfig, JwtInfo, PayuInfo};
pub use dtos::article_dto::{
    ArticleDetailResponse, ArticleView, CommentRequest, CommentResponse, WishListEntry,
};
pub use dtos::collection_dto::{CollectionBuyResponse, CollectionPriceResponse};
pub use dtos::payu::{NotifyAck, PayuNotification};
pub use dtos::transaction_dto::{
    CreateOrderRequest, CreateOrderResponse, OrderStatusResponse, PageQuery,
    TransactionItemSummary, UserTransaction, UserTransactionsPage,
};
pub use entities::article::{Article, NewArticle};
pub use entities::collection::{Collection, CollectionArticle, NewCollection, NewCollectionArticle};
pub use entities::comment::{ArticleComment, NewArticleComment};
pub use entities::enum_types::TransactionStatus;
pub use entities::purchase::{ArticlePurchase, NewArticlePurchase};
pub use entities::transaction::{
    NewTransaction, NewTransactionItem, Transaction, TransactionItem,
};
pub use entities::user::{NewUser, User};
pub use entities::wishlist::{NewWishList, WishList};
