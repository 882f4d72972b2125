//! Unified API surface
//!
//! [`RestaurantApi`] is the contract both backends implement: the HTTP
//! gateway in remote mode and the store-backed demo in demo mode. The
//! app talks to [`TapTableClient`], which picks one implementation at
//! construction and never switches afterwards.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use shared::client::AuthResponse;
use shared::models::{
    AnalyticsQuery, AnalyticsReport, MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderCreate,
    OrderStatus, Restaurant, Settings, SettingsUpdate, Table, TableCreate,
};

use crate::config::{ClientConfig, Mode};
use crate::demo::DemoApi;
use crate::error::ClientResult;
use crate::gateway::HttpGateway;

/// Everything a TapTable frontend needs from a backend
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    /// Authenticate and obtain a session token
    async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse>;

    /// Create a restaurant account and log in
    async fn register(&self, name: &str, email: &str, password: &str)
        -> ClientResult<AuthResponse>;

    /// Fetch a restaurant's profile
    async fn restaurant_info(&self, restaurant_id: i64) -> ClientResult<Restaurant>;

    /// List a restaurant's tables
    async fn tables(&self, restaurant_id: i64) -> ClientResult<Vec<Table>>;

    /// Add a table
    async fn add_table(&self, payload: TableCreate) -> ClientResult<Table>;

    /// Delete a table; deleting an unknown id succeeds
    async fn delete_table(&self, table_id: i64) -> ClientResult<()>;

    /// List a restaurant's menu items
    async fn menu(&self, restaurant_id: i64) -> ClientResult<Vec<MenuItem>>;

    /// Add a menu item
    async fn add_menu_item(&self, payload: MenuItemCreate) -> ClientResult<MenuItem>;

    /// Apply a partial update to a menu item
    async fn update_menu_item(
        &self,
        menu_item_id: i64,
        payload: MenuItemUpdate,
    ) -> ClientResult<MenuItem>;

    /// Delete a menu item; deleting an unknown id succeeds
    async fn delete_menu_item(&self, menu_item_id: i64) -> ClientResult<()>;

    /// Trigger re-categorization of a restaurant's menu
    async fn reclassify_menu(&self, restaurant_id: i64) -> ClientResult<()>;

    /// List a restaurant's orders
    async fn orders(&self, restaurant_id: i64) -> ClientResult<Vec<Order>>;

    /// Place a customer order
    async fn create_order(&self, payload: OrderCreate) -> ClientResult<Order>;

    /// Move an order to a new status
    async fn update_order_status(&self, order_id: i64, status: OrderStatus)
        -> ClientResult<Order>;

    /// Fetch the analytics report for a restaurant
    async fn analytics(
        &self,
        restaurant_id: i64,
        query: AnalyticsQuery,
    ) -> ClientResult<AnalyticsReport>;

    /// Fetch a restaurant's settings
    async fn settings(&self, restaurant_id: i64) -> ClientResult<Settings>;

    /// Apply a partial update to a restaurant's settings
    async fn update_settings(
        &self,
        restaurant_id: i64,
        payload: SettingsUpdate,
    ) -> ClientResult<Settings>;

    /// The current session token, if any
    async fn token(&self) -> ClientResult<Option<String>>;

    /// Forget the current session token
    async fn clear_token(&self) -> ClientResult<()>;
}

/// Entry point for applications
///
/// Cheap to clone; all clones share the same backend.
#[derive(Clone)]
pub struct TapTableClient {
    api: Arc<dyn RestaurantApi>,
    mode: Mode,
}

impl TapTableClient {
    /// Wrap an existing backend implementation.
    pub fn new(api: Arc<dyn RestaurantApi>, mode: Mode) -> Self {
        Self { api, mode }
    }

    /// Build a client from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_config(&ClientConfig::from_env())
    }

    /// Build a client for the given configuration.
    ///
    /// Remote mode requires a base URL; demo mode only needs a writable
    /// data directory.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        match config.mode() {
            Mode::Remote => {
                let gateway = HttpGateway::new(config)?;
                info!(base_url = gateway.base_url(), "using remote backend");
                Ok(Self::new(Arc::new(gateway), Mode::Remote))
            }
            Mode::Demo => {
                let demo = DemoApi::open(config)?;
                info!(data_dir = %config.data_dir.display(), "using demo backend");
                Ok(Self::new(Arc::new(demo), Mode::Demo))
            }
        }
    }

    /// Which backend this client was built with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        self.api.login(email, password).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<AuthResponse> {
        self.api.register(name, email, password).await
    }

    pub async fn restaurant_info(&self, restaurant_id: i64) -> ClientResult<Restaurant> {
        self.api.restaurant_info(restaurant_id).await
    }

    pub async fn tables(&self, restaurant_id: i64) -> ClientResult<Vec<Table>> {
        self.api.tables(restaurant_id).await
    }

    pub async fn add_table(&self, payload: TableCreate) -> ClientResult<Table> {
        self.api.add_table(payload).await
    }

    pub async fn delete_table(&self, table_id: i64) -> ClientResult<()> {
        self.api.delete_table(table_id).await
    }

    pub async fn menu(&self, restaurant_id: i64) -> ClientResult<Vec<MenuItem>> {
        self.api.menu(restaurant_id).await
    }

    pub async fn add_menu_item(&self, payload: MenuItemCreate) -> ClientResult<MenuItem> {
        self.api.add_menu_item(payload).await
    }

    pub async fn update_menu_item(
        &self,
        menu_item_id: i64,
        payload: MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        self.api.update_menu_item(menu_item_id, payload).await
    }

    pub async fn delete_menu_item(&self, menu_item_id: i64) -> ClientResult<()> {
        self.api.delete_menu_item(menu_item_id).await
    }

    pub async fn reclassify_menu(&self, restaurant_id: i64) -> ClientResult<()> {
        self.api.reclassify_menu(restaurant_id).await
    }

    pub async fn orders(&self, restaurant_id: i64) -> ClientResult<Vec<Order>> {
        self.api.orders(restaurant_id).await
    }

    pub async fn create_order(&self, payload: OrderCreate) -> ClientResult<Order> {
        self.api.create_order(payload).await
    }

    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> ClientResult<Order> {
        self.api.update_order_status(order_id, status).await
    }

    pub async fn analytics(
        &self,
        restaurant_id: i64,
        query: AnalyticsQuery,
    ) -> ClientResult<AnalyticsReport> {
        self.api.analytics(restaurant_id, query).await
    }

    pub async fn settings(&self, restaurant_id: i64) -> ClientResult<Settings> {
        self.api.settings(restaurant_id).await
    }

    pub async fn update_settings(
        &self,
        restaurant_id: i64,
        payload: SettingsUpdate,
    ) -> ClientResult<Settings> {
        self.api.update_settings(restaurant_id, payload).await
    }

    pub async fn token(&self) -> ClientResult<Option<String>> {
        self.api.token().await
    }

    pub async fn clear_token(&self) -> ClientResult<()> {
        self.api.clear_token().await
    }
}
