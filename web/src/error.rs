//! Error types for web handlers.
//!
//! This module defines the error type that bridges between domain errors
//! and HTTP responses, implementing Axum's `IntoResponse` trait, plus the
//! status mapping for every [`OrderError`] kind.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use storefront_core::OrderError;

/// Application error type for web handlers.
///
/// Wraps domain errors and produces HTTP-friendly error responses. Handlers
/// return `Result<_, AppError>` and rely on the `From<OrderError>` impl for
/// the status mapping.
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for client error handling)
    code: String,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: String) -> Self {
        Self {
            status,
            message,
            code,
            source: None,
        }
    }

    /// Create a new error with a source error.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            message.into(),
            "BAD_REQUEST".to_string(),
        )
    }

    /// Create a 401 Unauthorized error.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            message.into(),
            "UNAUTHORIZED".to_string(),
        )
    }

    /// Create a 403 Forbidden error.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            message.into(),
            "FORBIDDEN".to_string(),
        )
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(resource: impl fmt::Display, id: impl fmt::Display) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("{resource} with id {id} not found"),
            "NOT_FOUND".to_string(),
        )
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.into(),
            "INTERNAL_SERVER_ERROR".to_string(),
        )
    }

    /// The HTTP status this error renders as.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Status mapping for the domain error taxonomy.
///
/// | Kind | Status |
/// |---|---|
/// | `ProductNotFound`, `OrderNotFound`, `CartItemNotFound` | 404 |
/// | `InsufficientStock`, `Validation` | 400 |
/// | `NotAuthorized` | 401 |
/// | `ConcurrencyConflict` | 409 |
/// | `Store` | 500, source logged |
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::ProductNotFound(id) => Self::not_found("Product", id),
            OrderError::OrderNotFound(id) => Self::not_found("Order", id),
            OrderError::CartItemNotFound(id) => Self::new(
                StatusCode::NOT_FOUND,
                format!("Item not found in cart: {id}"),
                "NOT_FOUND".to_string(),
            ),
            err @ OrderError::InsufficientStock { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                err.to_string(),
                "INSUFFICIENT_STOCK".to_string(),
            ),
            err @ OrderError::Validation(_) => Self::new(
                StatusCode::BAD_REQUEST,
                err.to_string(),
                "VALIDATION_ERROR".to_string(),
            ),
            OrderError::NotAuthorized => Self::unauthorized("Not authorized"),
            err @ OrderError::ConcurrencyConflict(_) => Self::new(
                StatusCode::CONFLICT,
                err.to_string(),
                "CONFLICT".to_string(),
            ),
            OrderError::Store(source) => Self::internal("An internal error occurred")
                .with_source(anyhow::Error::new(source)),
        }
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal("An internal error occurred").with_source(err)
    }
}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error code (for client error handling).
    code: String,
    /// Human-readable error message.
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log internal errors
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    error = %source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    "Internal server error"
                );
            }
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{OrderId, ProductId, StoreError};

    #[test]
    fn test_error_display() {
        let err = AppError::bad_request("Invalid input");
        assert_eq!(err.to_string(), "[BAD_REQUEST] Invalid input");
    }

    #[test]
    fn test_not_found() {
        let err = AppError::not_found("Order", "123");
        assert_eq!(err.to_string(), "[NOT_FOUND] Order with id 123 not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn domain_errors_map_to_status_codes() {
        let product = ProductId::new();

        let cases = [
            (OrderError::ProductNotFound(product), StatusCode::NOT_FOUND),
            (
                OrderError::InsufficientStock {
                    product_id: product,
                    available: 1,
                    requested: 2,
                },
                StatusCode::BAD_REQUEST,
            ),
            (
                OrderError::OrderNotFound(OrderId::new()),
                StatusCode::NOT_FOUND,
            ),
            (OrderError::NotAuthorized, StatusCode::UNAUTHORIZED),
            (
                OrderError::Validation("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                OrderError::ConcurrencyConflict(product),
                StatusCode::CONFLICT,
            ),
            (
                OrderError::CartItemNotFound(product),
                StatusCode::NOT_FOUND,
            ),
            (
                OrderError::Store(StoreError::Unavailable("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn insufficient_stock_keeps_its_own_code() {
        let err = AppError::from(OrderError::InsufficientStock {
            product_id: ProductId::new(),
            available: 0,
            requested: 3,
        });
        assert_eq!(err.code(), "INSUFFICIENT_STOCK");
    }
}
