use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct PayuInfo {
    pub payu_client_id: String,
    pub payu_client_secret: SecretString,
    pub payu_pos_id: String,
    /// Second key ("MD5 key" in the merchant panel) used to sign
    /// order-status notifications.
    pub payu_second_key: SecretString,
    pub payu_api_url: String,
    /// Absolute URL the gateway posts notifications to.
    pub payu_notify_url: String,
    pub currency_code: String,
}

impl PayuInfo {
    pub fn new() -> Result<Self, Report> {
        let api_url = env::var("PAYU_API_URL").unwrap_or_else(|_| {
            if env::var("PAYU_ENV").as_deref() == Ok("sandbox") {
                "https://secure.snd.payu.com".into()
            } else {
                "https://secure.payu.com".into()
            }
        });

        Ok(Self {
            payu_client_id: env::var("PAYU_CLIENT_ID")
                .map_err(|_| eyre!("PAYU_CLIENT_ID must be set"))?,
            payu_client_secret: SecretString::new(Box::from(
                env::var("PAYU_CLIENT_SECRET")
                    .map_err(|_| eyre!("PAYU_CLIENT_SECRET must be set"))?,
            )),
            payu_pos_id: env::var("PAYU_POS_ID").map_err(|_| eyre!("PAYU_POS_ID must be set"))?,
            payu_second_key: SecretString::new(Box::from(
                env::var("PAYU_SECOND_KEY")
                    .map_err(|_| eyre!("PAYU_SECOND_KEY must be set"))?,
            )),
            payu_api_url: api_url,
            payu_notify_url: env::var("PAYU_NOTIFY_URL")
                .map_err(|_| eyre!("PAYU_NOTIFY_URL must be set"))?,
            currency_code: env::var("PAYU_CURRENCY").unwrap_or_else(|_| "PLN".into()),
        })
    }
}
