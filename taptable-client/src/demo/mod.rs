//! Local demo backend
//!
//! Mirrors the whole remote API surface using only the embedded store, so
//! the app runs offline with seeded data. Operations sleep for a fixed
//! artificial delay before returning to keep UI flows honest about
//! latency.
//!
//! Strictly single-user: every mutation reads the full collection,
//! transforms it in memory and writes it back, so concurrent writers to
//! the same collection race (last write wins).

pub mod seed;
pub mod store;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::time::sleep;
use tracing::debug;

use shared::client::{AuthResponse, RestaurantSummary};
use shared::models::{
    AnalyticsQuery, AnalyticsReport, MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderCreate,
    OrderStatus, Restaurant, RevenuePoint, Settings, SettingsUpdate, Table, TableCreate,
    TableStatus,
};
use shared::util::{next_id, now_iso};

use crate::api::RestaurantApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

pub use seed::{DEMO_EMAIL, DEMO_PASSWORD};
pub use store::DemoStore;

/// Artificial latency applied to demo operations
#[derive(Debug, Clone, Copy)]
pub struct DemoLatency {
    /// Delay before data operations return
    pub data: Duration,
    /// Delay for login and menu reclassification
    pub slow: Duration,
}

impl Default for DemoLatency {
    fn default() -> Self {
        Self {
            data: Duration::from_millis(300),
            slow: Duration::from_millis(500),
        }
    }
}

impl DemoLatency {
    /// No delays (for tests).
    pub fn none() -> Self {
        Self {
            data: Duration::ZERO,
            slow: Duration::ZERO,
        }
    }
}

/// Demo implementation of the API, backed by local storage only
pub struct DemoApi {
    store: DemoStore,
    latency: DemoLatency,
}

impl DemoApi {
    /// Wrap an already opened store, seeding default data on first use.
    pub fn new(store: DemoStore) -> ClientResult<Self> {
        seed::ensure_seeded(&store)?;
        Ok(Self {
            store,
            latency: DemoLatency::default(),
        })
    }

    /// Open the demo store under the configured data directory.
    pub fn open(config: &ClientConfig) -> ClientResult<Self> {
        let store = DemoStore::open(config.data_dir.join("demo.redb"))?;
        Self::new(store)
    }

    /// Override the artificial latency.
    pub fn with_latency(mut self, latency: DemoLatency) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl RestaurantApi for DemoApi {
    async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        sleep(self.latency.slow).await;
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            return Err(ClientError::InvalidCredentials);
        }

        // Unique per call so re-login always produces a fresh session.
        let token = format!("demo-jwt-{}", uuid::Uuid::new_v4());
        self.store.set_token(&token)?;

        let restaurants: Vec<Restaurant> = self.store.get_collection(store::RESTAURANTS)?;
        let restaurant = restaurants
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound("Restaurant".to_string()))?;

        debug!(restaurant_id = restaurant.id, "demo login succeeded");
        Ok(AuthResponse {
            token,
            restaurant: RestaurantSummary {
                id: restaurant.id,
                name: restaurant.name,
                email: restaurant.email,
            },
        })
    }

    async fn register(
        &self,
        _name: &str,
        _email: &str,
        _password: &str,
    ) -> ClientResult<AuthResponse> {
        Err(ClientError::Unsupported(
            "Registration not available in demo mode".to_string(),
        ))
    }

    async fn restaurant_info(&self, restaurant_id: i64) -> ClientResult<Restaurant> {
        sleep(self.latency.data).await;
        let restaurants: Vec<Restaurant> = self.store.get_collection(store::RESTAURANTS)?;
        restaurants
            .into_iter()
            .find(|r| r.id == restaurant_id)
            .ok_or_else(|| ClientError::NotFound("Restaurant".to_string()))
    }

    async fn tables(&self, restaurant_id: i64) -> ClientResult<Vec<Table>> {
        sleep(self.latency.data).await;
        let tables: Vec<Table> = self.store.get_collection(store::TABLES)?;
        Ok(tables
            .into_iter()
            .filter(|t| t.restaurant_id == restaurant_id)
            .collect())
    }

    async fn add_table(&self, payload: TableCreate) -> ClientResult<Table> {
        sleep(self.latency.data).await;
        let number: i32 = payload.number.trim().parse().map_err(|_| {
            ClientError::Validation(format!("Invalid table number: {}", payload.number))
        })?;

        let mut tables: Vec<Table> = self.store.get_collection(store::TABLES)?;
        let table = Table {
            id: next_id(),
            number,
            seats: payload.seats,
            status: TableStatus::Available,
            restaurant_id: payload.restaurant_id,
            // Derived from the raw input once; never re-synced with the
            // parsed number.
            qr_code: format!("QR-TABLE-{}", payload.number),
        };
        tables.push(table.clone());
        self.store.put_collection(store::TABLES, &tables)?;
        Ok(table)
    }

    async fn delete_table(&self, table_id: i64) -> ClientResult<()> {
        sleep(self.latency.data).await;
        let mut tables: Vec<Table> = self.store.get_collection(store::TABLES)?;
        tables.retain(|t| t.id != table_id);
        self.store.put_collection(store::TABLES, &tables)?;
        Ok(())
    }

    async fn menu(&self, restaurant_id: i64) -> ClientResult<Vec<MenuItem>> {
        sleep(self.latency.data).await;
        let items: Vec<MenuItem> = self.store.get_collection(store::MENU_ITEMS)?;
        Ok(items
            .into_iter()
            .filter(|i| i.restaurant_id == restaurant_id)
            .collect())
    }

    async fn add_menu_item(&self, payload: MenuItemCreate) -> ClientResult<MenuItem> {
        sleep(self.latency.data).await;
        let mut items: Vec<MenuItem> = self.store.get_collection(store::MENU_ITEMS)?;
        let item = MenuItem::from_create(next_id(), payload);
        items.push(item.clone());
        self.store.put_collection(store::MENU_ITEMS, &items)?;
        Ok(item)
    }

    async fn update_menu_item(
        &self,
        menu_item_id: i64,
        payload: MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        sleep(self.latency.data).await;
        let mut items: Vec<MenuItem> = self.store.get_collection(store::MENU_ITEMS)?;
        let item = items
            .iter_mut()
            .find(|i| i.id == menu_item_id)
            .ok_or_else(|| ClientError::NotFound("Item".to_string()))?;
        item.merge(payload);
        let updated = item.clone();
        self.store.put_collection(store::MENU_ITEMS, &items)?;
        Ok(updated)
    }

    async fn delete_menu_item(&self, menu_item_id: i64) -> ClientResult<()> {
        sleep(self.latency.data).await;
        let mut items: Vec<MenuItem> = self.store.get_collection(store::MENU_ITEMS)?;
        items.retain(|i| i.id != menu_item_id);
        self.store.put_collection(store::MENU_ITEMS, &items)?;
        Ok(())
    }

    async fn reclassify_menu(&self, _restaurant_id: i64) -> ClientResult<()> {
        // Latency-only stand-in for the server-side recategorization job.
        sleep(self.latency.slow).await;
        Ok(())
    }

    async fn orders(&self, restaurant_id: i64) -> ClientResult<Vec<Order>> {
        sleep(self.latency.data).await;
        let orders: Vec<Order> = self.store.get_collection(store::ORDERS)?;
        Ok(orders
            .into_iter()
            .filter(|o| o.restaurant_id == restaurant_id)
            .collect())
    }

    async fn create_order(&self, payload: OrderCreate) -> ClientResult<Order> {
        sleep(self.latency.data).await;
        let mut orders: Vec<Order> = self.store.get_collection(store::ORDERS)?;
        let order = Order {
            id: next_id(),
            restaurant_id: payload.restaurant_id,
            table_number: payload.table_number,
            customer_name: payload.customer_name,
            customer_phone: payload.customer_phone,
            items: payload.items,
            amount: payload.amount,
            status: OrderStatus::Pending,
            payment_method: payload.payment_method.as_str().to_string(),
            created_at: now_iso(),
        };
        orders.push(order.clone());
        self.store.put_collection(store::ORDERS, &orders)?;
        debug!(order_id = order.id, "demo order created");
        Ok(order)
    }

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<Order> {
        sleep(self.latency.data).await;
        let mut orders: Vec<Order> = self.store.get_collection(store::ORDERS)?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ClientError::NotFound("Order".to_string()))?;
        // Transitions are unchecked: any stored status may be overwritten
        // with any other.
        order.status = status;
        let updated = order.clone();
        self.store.put_collection(store::ORDERS, &orders)?;
        Ok(updated)
    }

    async fn analytics(
        &self,
        restaurant_id: i64,
        _query: AnalyticsQuery,
    ) -> ClientResult<AnalyticsReport> {
        sleep(self.latency.data).await;
        let orders: Vec<Order> = self.store.get_collection(store::ORDERS)?;
        let restaurant_orders: Vec<&Order> = orders
            .iter()
            .filter(|o| o.restaurant_id == restaurant_id)
            .collect();

        let total_revenue: f64 = restaurant_orders.iter().map(|o| o.amount).sum();
        let total_orders = restaurant_orders.len() as i64;

        // Fabricated 7-day trend; intentionally non-reproducible.
        let mut rng = rand::thread_rng();
        let today = Utc::now().date_naive();
        let revenue_trend = (0..7)
            .map(|i| RevenuePoint {
                date: today - chrono::Duration::days(6 - i),
                revenue: rng.gen_range(500..1500),
            })
            .collect();

        Ok(AnalyticsReport {
            total_revenue: if total_revenue > 0.0 { total_revenue } else { 5847.0 },
            total_orders: if total_orders > 0 { total_orders } else { 142 },
            average_rating: 4.5,
            revenue_trend,
            previous_revenue: if total_revenue > 0.0 {
                total_revenue * 0.85
            } else {
                4980.0
            },
            previous_orders: if total_orders > 0 { total_orders - 12 } else { 130 },
            previous_rating: 4.3,
            top_items: [
                "Margherita Pizza",
                "Grilled Chicken",
                "Caesar Salad",
                "Chocolate Cake",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            recent_reviews: Vec::new(),
        })
    }

    async fn settings(&self, restaurant_id: i64) -> ClientResult<Settings> {
        sleep(self.latency.data).await;
        let restaurants: Vec<Restaurant> = self.store.get_collection(store::RESTAURANTS)?;
        restaurants
            .into_iter()
            .find(|r| r.id == restaurant_id)
            .map(|r| r.settings)
            .ok_or_else(|| ClientError::NotFound("Restaurant".to_string()))
    }

    async fn update_settings(
        &self,
        restaurant_id: i64,
        payload: SettingsUpdate,
    ) -> ClientResult<Settings> {
        sleep(self.latency.data).await;
        let mut restaurants: Vec<Restaurant> = self.store.get_collection(store::RESTAURANTS)?;
        let restaurant = restaurants
            .iter_mut()
            .find(|r| r.id == restaurant_id)
            .ok_or_else(|| ClientError::NotFound("Restaurant".to_string()))?;
        restaurant.settings.merge(payload);
        let settings = restaurant.settings.clone();
        self.store.put_collection(store::RESTAURANTS, &restaurants)?;
        Ok(settings)
    }

    async fn token(&self) -> ClientResult<Option<String>> {
        Ok(self.store.get_token()?)
    }

    async fn clear_token(&self) -> ClientResult<()> {
        Ok(self.store.clear_token()?)
    }
}
