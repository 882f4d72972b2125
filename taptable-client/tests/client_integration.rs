// HTTP gateway behavior against an in-process fixture server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use taptable_client::{
    ClientConfig, ClientError, DietaryInfo, HttpGateway, MenuItemCreate, Mode, RestaurantApi,
    TapTableClient, TokenStore,
};

type Seen = Arc<Mutex<Option<String>>>;

async fn spawn(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn gateway(addr: SocketAddr, dir: &TempDir) -> HttpGateway {
    let config = ClientConfig::remote(format!("http://{addr}")).with_data_dir(dir.path());
    HttpGateway::new(&config).unwrap()
}

fn auth_json() -> Value {
    json!({
        "token": "jwt-abc",
        "restaurant": {
            "id": 1,
            "name": "TapTable Restaurant",
            "email": "admin@taptable.com"
        }
    })
}

fn restaurant_json() -> Value {
    json!({
        "id": 1,
        "name": "TapTable Restaurant",
        "email": "admin@taptable.com",
        "phone": "+1234567890",
        "address": "123 Main Street, City",
        "settings": {
            "taxRate": 10.0,
            "serviceCharge": 5.0,
            "currency": "USD",
            "acceptsOnlinePayment": true,
            "acceptsCash": true
        }
    })
}

#[tokio::test]
async fn test_token_store_save_load_delete() {
    let dir = TempDir::new().unwrap();
    let store = TokenStore::new(dir.path());

    assert!(!store.exists());
    assert!(store.load().is_none());

    store.save("demo-jwt-123").unwrap();
    assert!(store.exists());
    assert_eq!(store.load().as_deref(), Some("demo-jwt-123"));
    assert_eq!(store.path(), dir.path().join("token"));

    store.delete().unwrap();
    assert!(!store.exists());
    // Deleting again is a no-op.
    store.delete().unwrap();
}

#[tokio::test]
async fn test_login_stores_token_and_sends_bearer() {
    async fn info(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
        *seen.lock().await = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        Json(restaurant_json())
    }

    let seen: Seen = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route("/api/auth/login", post(|| async { Json(auth_json()) }))
        .route("/api/restaurants/{id}", get(info))
        .with_state(seen.clone());
    let dir = TempDir::new().unwrap();
    let gateway = gateway(spawn(router).await, &dir);

    let auth = gateway.login("admin@taptable.com", "admin123").await.unwrap();
    assert_eq!(auth.token, "jwt-abc");
    assert_eq!(auth.restaurant.id, 1);
    assert_eq!(gateway.token().await.unwrap().as_deref(), Some("jwt-abc"));

    let restaurant = gateway.restaurant_info(1).await.unwrap();
    assert_eq!(restaurant.settings.tax_rate, 10.0);
    assert_eq!(seen.lock().await.as_deref(), Some("Bearer jwt-abc"));

    // Token also lands on disk for the next process.
    assert_eq!(
        TokenStore::new(dir.path()).load().as_deref(),
        Some("jwt-abc")
    );
}

#[tokio::test]
async fn test_persisted_token_survives_restart() {
    let router =
        Router::new().route("/api/auth/login", post(|| async { Json(auth_json()) }));
    let addr = spawn(router).await;
    let dir = TempDir::new().unwrap();

    gateway(addr, &dir)
        .login("admin@taptable.com", "admin123")
        .await
        .unwrap();

    // A fresh gateway over the same data directory is already logged in.
    let reopened = gateway(addr, &dir);
    assert_eq!(reopened.token().await.unwrap().as_deref(), Some("jwt-abc"));
}

#[tokio::test]
async fn test_rejected_session_clears_token() {
    let router = Router::new().route(
        "/api/restaurants/{id}",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "token expired"})),
            )
        }),
    );
    let dir = TempDir::new().unwrap();
    TokenStore::new(dir.path()).save("stale-token").unwrap();
    let gateway = gateway(spawn(router).await, &dir);
    assert_eq!(gateway.token().await.unwrap().as_deref(), Some("stale-token"));

    let err = gateway.restaurant_info(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 401, .. }));
    assert_eq!(err.to_string(), "token expired");

    // Cleared in memory and on disk.
    assert!(gateway.token().await.unwrap().is_none());
    assert!(TokenStore::new(dir.path()).load().is_none());
}

#[tokio::test]
async fn test_api_error_messages() {
    let router = Router::new()
        .route(
            "/api/settings/{id}",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"error": "Restaurant not found"})),
                )
            }),
        )
        .route(
            "/api/orders",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
    let dir = TempDir::new().unwrap();
    let gateway = gateway(spawn(router).await, &dir);

    // Body with an "error" field surfaces that message verbatim.
    let err = gateway.settings(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "Restaurant not found");

    // Non-JSON bodies fall back to the status code.
    let err = gateway.orders(1).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn test_bodyless_success_responses() {
    async fn drop_table(State(seen): State<Seen>, headers: HeaderMap) -> StatusCode {
        *seen.lock().await = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        StatusCode::OK
    }

    let seen: Seen = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route("/api/tables/{id}", delete(drop_table))
        .route(
            "/api/menu/{id}/reclassify",
            post(|| async { "Re-categorization started" }),
        )
        .with_state(seen.clone());
    let dir = TempDir::new().unwrap();
    let gateway = gateway(spawn(router).await, &dir);

    // Empty 200 body decodes as unit.
    gateway.delete_table(5).await.unwrap();
    assert_eq!(seen.lock().await.as_deref(), Some("application/json"));

    // Plain-text 200 body is tolerated when the caller ignores it.
    gateway.reclassify_menu(1).await.unwrap();
}

#[tokio::test]
async fn test_menu_create_posts_to_trailing_slash_route() {
    async fn create(Json(mut body): Json<Value>) -> Json<Value> {
        body["id"] = json!(99);
        Json(body)
    }

    // Registered with the trailing slash only, like the real backend.
    let router = Router::new().route("/api/menu/", post(create));
    let dir = TempDir::new().unwrap();
    let gateway = gateway(spawn(router).await, &dir);

    let created = gateway
        .add_menu_item(MenuItemCreate {
            name: "Tiramisu".to_string(),
            description: "Espresso-soaked ladyfingers".to_string(),
            price: 7.5,
            category: "Desserts".to_string(),
            image: String::new(),
            available: true,
            restaurant_id: 1,
            dietary_info: DietaryInfo {
                is_vegetarian: true,
                ..Default::default()
            },
        })
        .await
        .unwrap();

    assert_eq!(created.id, 99);
    assert_eq!(created.name, "Tiramisu");
    assert!(created.dietary_info.is_vegetarian);
}

#[tokio::test]
async fn test_orders_pass_restaurant_as_query_param() {
    async fn orders(State(seen): State<Seen>, RawQuery(query): RawQuery) -> Json<Value> {
        *seen.lock().await = query;
        Json(json!([]))
    }

    let seen: Seen = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route("/api/orders", get(orders))
        .with_state(seen.clone());
    let dir = TempDir::new().unwrap();
    let gateway = gateway(spawn(router).await, &dir);

    assert!(gateway.orders(7).await.unwrap().is_empty());
    assert_eq!(seen.lock().await.as_deref(), Some("restaurant_id=7"));
}

#[tokio::test]
async fn test_facade_selects_demo_mode() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig::demo().with_data_dir(dir.path());
    let client = TapTableClient::from_config(&config).unwrap();
    assert_eq!(client.mode(), Mode::Demo);

    // Full demo latency applies here; this exercises the real defaults.
    let auth = client.login("admin@taptable.com", "admin123").await.unwrap();
    assert!(auth.token.starts_with("demo-jwt-"));
    assert_eq!(client.menu(auth.restaurant.id).await.unwrap().len(), 5);
}
