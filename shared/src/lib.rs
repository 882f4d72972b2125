//! Shared types for the TapTable platform
//!
//! Domain models and wire DTOs used by every component that speaks the
//! TapTable API, plus small id/time helpers. Field names carry `serde`
//! renames where the wire format differs from Rust naming.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{AuthResponse, LoginRequest, RegisterRequest, RestaurantSummary, StatusUpdate};
pub use models::{
    AnalyticsQuery, AnalyticsReport, DietaryInfo, MenuItem, MenuItemCreate, MenuItemUpdate, Order,
    OrderCreate, OrderItem, OrderStatus, PaymentMethod, Restaurant, RevenuePoint, Settings,
    SettingsUpdate, Table, TableCreate, TableStatus, TimeRange,
};
