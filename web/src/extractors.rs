//! Custom Axum extractors.
//!
//! # Examples
//!
//! ```ignore
//! use storefront_web::extractors::CorrelationId;
//!
//! async fn handler(correlation_id: CorrelationId) -> String {
//!     format!("Request ID: {}", correlation_id.0)
//! }
//! ```

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Correlation ID for request tracing.
///
/// Reads the ID the correlation middleware stored in request extensions,
/// falling back to the `X-Correlation-ID` header, and generating a fresh
/// UUID v4 when neither is present.
#[derive(Debug, Clone, Copy)]
pub struct CorrelationId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(id) = parts.extensions.get::<Uuid>() {
            return Ok(Self(*id));
        }

        let correlation_id = parts
            .headers
            .get(crate::middleware::CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s).ok())
            .unwrap_or_else(Uuid::new_v4);

        Ok(Self(correlation_id))
    }
}
