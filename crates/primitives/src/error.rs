use axum::response::{IntoResponse, Response};
use diesel::r2d2;
use http::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// Article, collection or transaction absent.
    NotFound(String),
    /// The resource exists but the caller may not act on it.
    Unauthorized(String),
    /// Duplicate purchase attempt or duplicate engagement row.
    Conflict(String),
    /// Upstream payment provider failure (non-2xx, timeout, bad body).
    GatewayUnavailable(String),
    /// Malformed cart, bad collection shape, out-of-range discount.
    InvalidInput(String),
    Validation(validator::ValidationErrors),
    Database(diesel::result::Error),
    DatabaseConnection(String),
    /// Credential problems: missing/invalid/expired token.
    Auth(String),
    Token(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::Unauthorized(e) => write!(f, "Unauthorized: {}", e),
            ApiError::Conflict(e) => write!(f, "Conflict: {}", e),
            ApiError::GatewayUnavailable(e) => write!(f, "Payment gateway unavailable: {}", e),
            ApiError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::Token(e) => write!(f, "Token error: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::GatewayUnavailable(err.to_string())
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Unauthorized(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::GatewayUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Payment gateway unavailable: {}", msg),
            ),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::Database(e) => match e {
                diesel::result::Error::NotFound => {
                    (StatusCode::NOT_FOUND, "Record not found".to_string())
                }
                diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                ) => (StatusCode::CONFLICT, format!("Database error: {}", e)),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                ),
            },
            ApiError::DatabaseConnection(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database connection error: {}", e),
            ),
            ApiError::Auth(msg) => (StatusCode::UNAUTHORIZED, format!("Auth error: {}", msg)),
            ApiError::Token(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Token error: {}", e),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", msg),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, String) = self.into();
        (status, body).into_response()
    }
}

#[cfg(test)]
mod _probe_tests {
    use super::*;
    #[test]
    fn probe_from_r2d2() {
        fn _f(e: diesel::r2d2::PoolError) -> ApiError { e.into() }
        fn _g<T: Into<ApiError>>() {}
        _g::<diesel::r2d2::Error>();
    }
}
