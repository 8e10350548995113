//! # Storefront Web
//!
//! Axum glue shared by the storefront HTTP surface:
//!
//! - [`error::AppError`]: the HTTP error response type, with the status
//!   mapping for every domain error kind
//! - [`extractors::CorrelationId`]: request correlation
//! - [`middleware::correlation_id_layer`]: span-per-request tracking that
//!   echoes `X-Correlation-ID` back to clients

pub mod error;
pub mod extractors;
pub mod middleware;

pub use error::AppError;
pub use extractors::CorrelationId;
pub use middleware::{CORRELATION_ID_HEADER, correlation_id_layer};
