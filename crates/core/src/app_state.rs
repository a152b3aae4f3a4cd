use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::PayuClient;
pub use readit_primitives::models::app_state::AppConfig;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub http_client: Client,
    pub config: AppConfig,
    pub payu: PayuClient,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let payu = PayuClient::new(&config.payu_details)?;

        Ok(Arc::new(Self {
            db,
            http_client: http,
            config,
            payu,
        }))
    }
}
