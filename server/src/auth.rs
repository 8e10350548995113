//! Identity extractors for the storefront API.
//!
//! Authentication itself lives upstream (a gateway terminates sessions and
//! verifies credentials); by the time a request reaches this service its
//! identity arrives as trusted headers. The extractors here turn those
//! headers into typed capabilities:
//!
//! - `X-User-Id`: the verified user's UUID
//! - `X-User-Role`: `admin` grants the admin capability; anything else is a
//!   regular user
//!
//! # Usage
//!
//! ```rust,ignore
//! use storefront::auth::{Identity, RequireAdmin};
//!
//! // Require authentication
//! async fn my_orders(identity: Identity) -> Result<Json<Vec<Order>>, AppError> {
//!     // identity.user_id is guaranteed present
//! }
//!
//! // Require the admin capability
//! async fn all_orders(admin: RequireAdmin) -> Result<Json<Vec<Order>>, AppError> {
//!     // admin.0.is_admin is guaranteed true
//! }
//! ```

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use storefront_core::{Requester, UserId};
use storefront_web::AppError;

/// Header carrying the gateway-verified user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying the gateway-verified role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// The verified identity attached to a request.
///
/// Rejects with 401 when the identity header is missing or malformed.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    /// Verified user identifier
    pub user_id: UserId,
    /// Whether the user holds the admin role
    pub is_admin: bool,
}

impl Identity {
    /// The identity as the workflow engine's requester capability pair.
    #[must_use]
    pub const fn requester(&self) -> Requester {
        Requester {
            user_id: self.user_id,
            is_admin: self.is_admin,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing identity header"))?;

        let uuid = uuid::Uuid::parse_str(user_id)
            .map_err(|_| AppError::unauthorized("Invalid identity header"))?;

        let is_admin = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|role| role.eq_ignore_ascii_case("admin"));

        Ok(Self {
            user_id: UserId::from_uuid(uuid),
            is_admin,
        })
    }
}

/// Require the admin role.
///
/// Validates the identity first, then rejects with 403 Forbidden when the
/// user is not an admin.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_request_parts(parts, state).await?;

        if !identity.is_admin {
            return Err(AppError::forbidden("Not authorized as admin"));
        }

        Ok(Self(identity))
    }
}
