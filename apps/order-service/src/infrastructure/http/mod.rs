//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to application use cases.

mod controller;
mod principal;
mod response;

pub use controller::{AppState, create_router};
pub use principal::{RESTAURANT_ID_HEADER, RestaurantPrincipal, USER_ID_HEADER, UserPrincipal};
pub use response::*;
