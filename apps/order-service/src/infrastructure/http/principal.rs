//! Authenticated principals.
//!
//! Identity is resolved upstream; the gateway forwards the principal id in a
//! trusted header. A missing or blank header rejects the request with 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::shared::{RestaurantId, UserId};
use crate::error::ServiceError;

/// Header carrying the diner id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying the restaurant id.
pub const RESTAURANT_ID_HEADER: &str = "x-restaurant-id";

/// The diner making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPrincipal(pub UserId);

/// The restaurant making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPrincipal(pub RestaurantId);

fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl<S> FromRequestParts<S> for UserPrincipal
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_value(parts, USER_ID_HEADER)
            .map(|id| Self(UserId::new(id)))
            .ok_or_else(|| ServiceError::unauthenticated(USER_ID_HEADER))
    }
}

impl<S> FromRequestParts<S> for RestaurantPrincipal
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        header_value(parts, RESTAURANT_ID_HEADER)
            .map(|id| Self(RestaurantId::new(id)))
            .ok_or_else(|| ServiceError::unauthenticated(RESTAURANT_ID_HEADER))
    }
}
