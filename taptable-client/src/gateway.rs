//! HTTP gateway for the remote TapTable backend

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use shared::client::{AuthResponse, LoginRequest, RegisterRequest, StatusUpdate};
use shared::models::{
    AnalyticsQuery, AnalyticsReport, MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderCreate,
    OrderStatus, Restaurant, Settings, SettingsUpdate, Table, TableCreate,
};

use crate::api::RestaurantApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::token::TokenStore;

/// Parse a response body without assuming it is JSON.
///
/// Empty bodies become `null` and non-JSON text is wrapped as a JSON
/// string, so callers always get a [`Value`] to work with.
fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Extract a human-readable message from an error response body.
///
/// Backends report failures as `{"error": "..."}`; anything else falls
/// back to the bare status code.
fn error_message(body: &Value, status: u16) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Deserialize an already-parsed body into the expected type.
fn decode<T: DeserializeOwned>(body: Value) -> ClientResult<T> {
    serde_json::from_value(body)
        .map_err(|e| ClientError::InvalidResponse(format!("unexpected response shape: {e}")))
}

/// Build the analytics path with its query string.
///
/// Parameters use the backend's camelCase names and are appended only
/// when present; an empty filter yields the bare path.
fn analytics_path(restaurant_id: i64, query: &AnalyticsQuery) -> String {
    let mut params = Vec::new();
    if let Some(range) = query.time_range {
        params.push(format!("timeRange={}", range.as_str()));
    }
    if let Some(start) = query.start_date {
        params.push(format!("startDate={start}"));
    }
    if let Some(end) = query.end_date {
        params.push(format!("endDate={end}"));
    }

    if params.is_empty() {
        format!("/api/analytics/{restaurant_id}")
    } else {
        format!("/api/analytics/{}?{}", restaurant_id, params.join("&"))
    }
}

/// HTTP client for making network requests to the TapTable backend
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
    token_store: TokenStore,
}

impl HttpGateway {
    /// Create a new gateway from configuration.
    ///
    /// Picks up a previously persisted token so sessions survive
    /// restarts.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .ok_or_else(|| ClientError::Config("no API base URL configured".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        let token_store = TokenStore::new(&config.data_dir);
        let token = token_store.load();

        Ok(Self {
            client,
            base_url,
            token: Arc::new(RwLock::new(token)),
            token_store,
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build authorization header value
    async fn auth_header(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| format!("Bearer {}", t))
    }

    /// Remember a fresh token in memory and on disk.
    async fn store_token(&self, token: &str) {
        *self.token.write().await = Some(token.to_string());
        if let Err(error) = self.token_store.save(token) {
            warn!(%error, "failed to persist auth token");
        }
    }

    /// Forget the current token in memory and on disk.
    async fn drop_token(&self) {
        *self.token.write().await = None;
        if let Err(error) = self.token_store.delete() {
            warn!(%error, "failed to remove persisted auth token");
        }
    }

    /// Make a GET request
    async fn get(&self, path: &str) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).header(CONTENT_TYPE, "application/json");

        if let Some(auth) = self.auth_header().await {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header().await {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request without body
    async fn post_empty(&self, path: &str) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.post(&url).header(CONTENT_TYPE, "application/json");

        if let Some(auth) = self.auth_header().await {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.put(&url).json(body);

        if let Some(auth) = self.auth_header().await {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request
    async fn delete(&self, path: &str) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .client
            .delete(&url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(auth) = self.auth_header().await {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// An expired or revoked session (401/403) drops the stored token
    /// before the error is surfaced, so the next login starts clean.
    async fn handle_response(&self, response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();
        let text = response.text().await?;
        let body = parse_body(&text);

        if !status.is_success() {
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                debug!(status = status.as_u16(), "session rejected, clearing token");
                self.drop_token().await;
            }
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body, status.as_u16()),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl RestaurantApi for HttpGateway {
    async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = self.post("/api/auth/login", &request).await?;
        let auth: AuthResponse = decode(body)?;
        self.store_token(&auth.token).await;
        debug!(restaurant_id = auth.restaurant.id, "login succeeded");
        Ok(auth)
    }

    async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<AuthResponse> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = self.post("/api/auth/register", &request).await?;
        let auth: AuthResponse = decode(body)?;
        self.store_token(&auth.token).await;
        Ok(auth)
    }

    async fn restaurant_info(&self, restaurant_id: i64) -> ClientResult<Restaurant> {
        decode(self.get(&format!("/api/restaurants/{restaurant_id}")).await?)
    }

    async fn tables(&self, restaurant_id: i64) -> ClientResult<Vec<Table>> {
        decode(
            self.get(&format!("/api/restaurants/{restaurant_id}/tables"))
                .await?,
        )
    }

    async fn add_table(&self, payload: TableCreate) -> ClientResult<Table> {
        decode(self.post("/api/tables", &payload).await?)
    }

    async fn delete_table(&self, table_id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/tables/{table_id}")).await?;
        Ok(())
    }

    async fn menu(&self, restaurant_id: i64) -> ClientResult<Vec<MenuItem>> {
        decode(self.get(&format!("/api/menu/{restaurant_id}")).await?)
    }

    async fn add_menu_item(&self, payload: MenuItemCreate) -> ClientResult<MenuItem> {
        // Historical route: the backend registered the create handler on
        // the trailing-slash path only.
        decode(self.post("/api/menu/", &payload).await?)
    }

    async fn update_menu_item(
        &self,
        menu_item_id: i64,
        payload: MenuItemUpdate,
    ) -> ClientResult<MenuItem> {
        decode(self.put(&format!("/api/menu/{menu_item_id}"), &payload).await?)
    }

    async fn delete_menu_item(&self, menu_item_id: i64) -> ClientResult<()> {
        self.delete(&format!("/api/menu/{menu_item_id}")).await?;
        Ok(())
    }

    async fn reclassify_menu(&self, restaurant_id: i64) -> ClientResult<()> {
        self.post_empty(&format!("/api/menu/{restaurant_id}/reclassify"))
            .await?;
        Ok(())
    }

    async fn orders(&self, restaurant_id: i64) -> ClientResult<Vec<Order>> {
        decode(
            self.get(&format!("/api/orders?restaurant_id={restaurant_id}"))
                .await?,
        )
    }

    async fn create_order(&self, payload: OrderCreate) -> ClientResult<Order> {
        decode(self.post("/api/customer-order/create-order", &payload).await?)
    }

    async fn update_order_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<Order> {
        let update = StatusUpdate { status };
        decode(
            self.put(&format!("/api/orders/{order_id}/status"), &update)
                .await?,
        )
    }

    async fn analytics(
        &self,
        restaurant_id: i64,
        query: AnalyticsQuery,
    ) -> ClientResult<AnalyticsReport> {
        decode(self.get(&analytics_path(restaurant_id, &query)).await?)
    }

    async fn settings(&self, restaurant_id: i64) -> ClientResult<Settings> {
        decode(self.get(&format!("/api/settings/{restaurant_id}")).await?)
    }

    async fn update_settings(
        &self,
        restaurant_id: i64,
        payload: SettingsUpdate,
    ) -> ClientResult<Settings> {
        decode(
            self.put(&format!("/api/settings/{restaurant_id}"), &payload)
                .await?,
        )
    }

    async fn token(&self) -> ClientResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn clear_token(&self) -> ClientResult<()> {
        self.drop_token().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::TimeRange;

    #[test]
    fn test_parse_body_accepts_json() {
        let body = parse_body(r#"{"a": 1}"#);
        assert_eq!(body["a"], 1);
    }

    #[test]
    fn test_parse_body_maps_empty_to_null() {
        assert_eq!(parse_body(""), Value::Null);
    }

    #[test]
    fn test_parse_body_wraps_plain_text() {
        assert_eq!(parse_body("not json"), Value::String("not json".to_string()));
    }

    #[test]
    fn test_error_message_prefers_error_field() {
        let body = parse_body(r#"{"error": "menu item not found"}"#);
        assert_eq!(error_message(&body, 404), "menu item not found");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(&Value::Null, 500), "HTTP 500");
        let plain = parse_body("Internal Server Error");
        assert_eq!(error_message(&plain, 500), "HTTP 500");
    }

    #[test]
    fn test_analytics_path_without_filter_is_bare() {
        assert_eq!(
            analytics_path(7, &AnalyticsQuery::default()),
            "/api/analytics/7"
        );
    }

    #[test]
    fn test_analytics_path_includes_preset_range() {
        let query = AnalyticsQuery {
            time_range: Some(TimeRange::Last30Days),
            ..Default::default()
        };
        assert_eq!(analytics_path(7, &query), "/api/analytics/7?timeRange=30days");
    }

    #[test]
    fn test_analytics_path_appends_each_present_param() {
        let query = AnalyticsQuery {
            time_range: Some(TimeRange::Custom),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 15),
        };
        assert_eq!(
            analytics_path(7, &query),
            "/api/analytics/7?timeRange=custom&startDate=2024-03-01&endDate=2024-03-15"
        );

        // No preset: the date bounds still go out on their own.
        let query = AnalyticsQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        };
        assert_eq!(
            analytics_path(7, &query),
            "/api/analytics/7?startDate=2024-03-01"
        );
    }
}
