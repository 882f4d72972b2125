//! Request/response DTOs for the TapTable API
//!
//! Shapes shared by the HTTP gateway and the demo backend so both sides of
//! the dual-mode client speak the same wire format.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login/register payload: a bearer token plus the public
/// identity of the restaurant the account belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub restaurant: RestaurantSummary,
}

/// Public identity fields of a restaurant, as returned by auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Body of an order status update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: crate::models::OrderStatus,
}
