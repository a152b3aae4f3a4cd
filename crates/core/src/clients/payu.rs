use std::sync::Arc;
use std::time::{Duration, Instant};

use readit_primitives::error::ApiError;
use readit_primitives::models::app_state::payu_details::PayuInfo;
use readit_primitives::models::dtos::payu::{
    PayuBuyer, PayuOrderRequest, PayuOrderResponse, PayuProduct, PayuTokenResponse,
};
use readit_primitives::models::entities::user::User;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

const ORDER_TIMEOUT: Duration = Duration::from_secs(15);
const TOKEN_TIMEOUT: Duration = Duration::from_secs(5);
// Refresh slightly early so a token never expires mid-order.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Client for PayU's order API. Owns its own reqwest client: order creation
/// answers with a 302 whose body carries the JSON we need, so redirects must
/// not be followed.
#[derive(Clone)]
pub struct PayuClient {
    http: Client,
    base_url: Url,
    client_id: String,
    client_secret: SecretString,
    pos_id: String,
    second_key: SecretString,
    notify_url: String,
    currency_code: String,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl PayuClient {
    pub fn new(config: &PayuInfo) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.payu_api_url)
            .map_err(|_| ApiError::Internal("Invalid PayU base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            client_id: config.payu_client_id.clone(),
            client_secret: config.payu_client_secret.clone(),
            pos_id: config.payu_pos_id.clone(),
            second_key: config.payu_second_key.clone(),
            notify_url: config.payu_notify_url.clone(),
            currency_code: config.currency_code.clone(),
            token: Arc::new(Mutex::new(None)),
        })
    }

    /// Client-credentials exchange, cached until shortly before expiry.
    async fn access_token(&self) -> Result<String, ApiError> {
        let mut guard = self.token.lock().await;

        if let Some(cached) = guard.as_ref() {
            if cached.expires_at > Instant::now() {
                return Ok(cached.value.clone());
            }
        }

        let url = self
            .base_url
            .join("/pl/standard/user/oauth/authorize")
            .map_err(|_| ApiError::Internal("Invalid PayU token URL".into()))?;

        let resp = self
            .http
            .post(url)
            .timeout(TOKEN_TIMEOUT)
            .basic_auth(&self.client_id, Some(self.client_secret.expose_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                error!("PayU token request failed: {}", e);
                ApiError::GatewayUnavailable(format!("Token request failed: {}", e))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            error!("PayU token request rejected: {}", status);
            return Err(ApiError::GatewayUnavailable(format!(
                "Token request rejected with {}",
                status
            )));
        }

        let body = resp
            .json::<PayuTokenResponse>()
            .await
            .map_err(|_| ApiError::GatewayUnavailable("Invalid token response".into()))?;

        let lifetime = Duration::from_secs(body.expires_in)
            .saturating_sub(TOKEN_EXPIRY_MARGIN)
            .max(Duration::from_secs(1));

        *guard = Some(CachedToken {
            value: body.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });

        debug!("PayU access token refreshed");
        Ok(body.access_token)
    }

    /// Creates a gateway order for `total_amount` minor units. Any non-2xx,
    /// non-302 answer (or a timeout) surfaces as GatewayUnavailable so the
    /// caller can abort checkout without persisting anything.
    pub async fn create_order(
        &self,
        buyer: &User,
        products: Vec<PayuProduct>,
        total_amount: i64,
        ext_order_id: &str,
        continue_url: &str,
    ) -> Result<PayuOrderResponse, ApiError> {
        let token = self.access_token().await?;

        let url = self
            .base_url
            .join("/api/v2_1/orders")
            .map_err(|_| ApiError::Internal("Invalid PayU order URL".into()))?;

        let payload = PayuOrderRequest {
            notify_url: self.notify_url.clone(),
            customer_ip: "127.0.0.1".to_string(),
            merchant_pos_id: self.pos_id.clone(),
            description: format!(
                "Purchase by {} of {} articles",
                buyer.full_name(),
                products.len()
            ),
            currency_code: self.currency_code.clone(),
            total_amount: total_amount.to_string(),
            ext_order_id: ext_order_id.to_string(),
            continue_url: continue_url.to_string(),
            buyer: PayuBuyer {
                ext_customer_id: buyer.id.to_string(),
                email: buyer.email.clone(),
                language: "pl".to_string(),
            },
            products,
        };

        let resp = self
            .http
            .post(url)
            .timeout(ORDER_TIMEOUT)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("PayU order request failed: {}", e);
                ApiError::GatewayUnavailable(format!("Order request failed: {}", e))
            })?;

        let status = resp.status();
        if !(status.is_success() || status == StatusCode::FOUND) {
            let body = resp.text().await.unwrap_or_default();
            error!("PayU order rejected: {} {}", status, body);
            return Err(ApiError::GatewayUnavailable(format!(
                "Order rejected with {}",
                status
            )));
        }

        let order = resp
            .json::<PayuOrderResponse>()
            .await
            .map_err(|_| ApiError::GatewayUnavailable("Invalid order response".into()))?;

        info!(
            ext_order_id,
            payu_order_id = order.order_id.as_deref().unwrap_or(""),
            "PayU order created"
        );

        Ok(order)
    }

    /// Verifies the OpenPayu-Signature header against the raw notification
    /// body: signature = lowercase hex of SHA-256(body || second_key).
    pub fn verify_signature(&self, header: Option<&str>, body: &[u8]) -> Result<(), ApiError> {
        let header =
            header.ok_or_else(|| ApiError::InvalidInput("Missing OpenPayu-Signature".into()))?;

        let (signature, algorithm) = parse_signature_header(header)
            .ok_or_else(|| ApiError::InvalidInput("Malformed OpenPayu-Signature".into()))?;

        if !algorithm.eq_ignore_ascii_case("SHA-256") {
            return Err(ApiError::InvalidInput(format!(
                "Unsupported signature algorithm: {}",
                algorithm
            )));
        }

        let mut hasher = Sha256::new();
        hasher.update(body);
        hasher.update(self.second_key.expose_secret().as_bytes());
        let expected = hex::encode(hasher.finalize());

        if expected
            .as_bytes()
            .ct_eq(signature.to_ascii_lowercase().as_bytes())
            .unwrap_u8()
            != 1
        {
            return Err(ApiError::InvalidInput("Invalid webhook signature".into()));
        }

        Ok(())
    }
}

/// Header format: `sender=checkout;signature=<hex>;algorithm=SHA-256;content=DOCUMENT`
fn parse_signature_header(header: &str) -> Option<(&str, &str)> {
    let mut signature = None;
    let mut algorithm = None;

    for part in header.split(';') {
        match part.trim().split_once('=') {
            Some(("signature", v)) => signature = Some(v),
            Some(("algorithm", v)) => algorithm = Some(v),
            _ => {}
        }
    }

    Some((signature?, algorithm?))
}
