use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct JwtInfo {
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub jwt_issuer: String,
    pub jwt_audience: String,
}

impl JwtInfo {
    pub fn new() -> Result<Self, Report> {
        let secret = env::var("JWT_SECRET").map_err(|_| eyre!("JWT_SECRET must be set"))?;
        if secret.len() < 32 {
            return Err(eyre!("JWT_SECRET must be at least 32 characters"));
        }

        Ok(Self {
            jwt_secret: SecretString::new(Box::from(secret)),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".into())
                .parse()?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "readit".into()),
            jwt_audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "readit_api".into()),
        })
    }
}
