//! TapTable Client - data access for the TapTable frontend
//!
//! One API surface, two backends: HTTP calls against a real TapTable
//! server, or a fully local demo backed by an embedded store. The mode
//! is chosen once when the client is built, from configuration or
//! environment.

pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod gateway;
pub mod token;

pub use api::{RestaurantApi, TapTableClient};
pub use config::{ClientConfig, Mode};
pub use demo::{DEMO_EMAIL, DEMO_PASSWORD, DemoApi, DemoLatency, DemoStore};
pub use error::{ClientError, ClientResult};
pub use gateway::HttpGateway;
pub use token::TokenStore;

// Re-export shared types for convenience
pub use shared::client::{
    AuthResponse, LoginRequest, RegisterRequest, RestaurantSummary, StatusUpdate,
};
pub use shared::models::{
    AnalyticsQuery, AnalyticsReport, DietaryInfo, MenuItem, MenuItemCreate, MenuItemUpdate, Order,
    OrderCreate, OrderItem, OrderStatus, PaymentMethod, Restaurant, RevenuePoint, Settings,
    SettingsUpdate, Table, TableCreate, TableStatus, TimeRange,
};
