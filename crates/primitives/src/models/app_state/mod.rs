pub mod app_config;
pub mod jwt_details;
pub mod payu_details;

pub use app_config::AppConfig;
pub use jwt_details::JwtInfo;
pub use payu_details::PayuInfo;
