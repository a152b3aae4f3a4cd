use eyre::Report;
use std::env;

use crate::models::app_state::jwt_details::JwtInfo;
use crate::models::app_state::payu_details::PayuInfo;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_details: JwtInfo,

    pub app_url: String,

    pub payu_details: PayuInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt_details: JwtInfo::new()?,

            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            payu_details: PayuInfo::new()?,
        })
    }
}
