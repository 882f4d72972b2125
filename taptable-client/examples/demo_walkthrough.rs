// taptable-client/examples/demo_walkthrough.rs
// Tour of the demo backend: login, browse the menu, place an order,
// check the dashboard. Run with `cargo run --example demo_walkthrough`.

use taptable_client::{
    AnalyticsQuery, ClientConfig, DEMO_EMAIL, DEMO_PASSWORD, OrderCreate, OrderItem, OrderStatus,
    PaymentMethod, TapTableClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let client = TapTableClient::from_config(&ClientConfig::demo())?;

    let auth = client.login(DEMO_EMAIL, DEMO_PASSWORD).await?;
    tracing::info!(restaurant = %auth.restaurant.name, "logged in");
    let restaurant_id = auth.restaurant.id;

    let menu = client.menu(restaurant_id).await?;
    tracing::info!(items = menu.len(), "menu loaded");
    for item in &menu {
        tracing::info!("  {} - {} ({})", item.name, item.price, item.category);
    }

    let first = menu
        .first()
        .ok_or_else(|| anyhow::anyhow!("demo menu is empty"))?;
    let order = client
        .create_order(OrderCreate {
            restaurant_id,
            table_number: 2,
            customer_name: "Walk-in".to_string(),
            customer_phone: "+10000000000".to_string(),
            amount: first.price * 2.0,
            payment_method: PaymentMethod::Upi,
            items: vec![OrderItem {
                id: first.id,
                name: first.name.clone(),
                price: first.price,
                quantity: 2,
            }],
        })
        .await?;
    tracing::info!(order_id = order.id, status = ?order.status, "order placed");

    let served = client
        .update_order_status(order.id, OrderStatus::Served)
        .await?;
    tracing::info!(order_id = served.id, status = ?served.status, "order served");

    let report = client
        .analytics(restaurant_id, AnalyticsQuery::default())
        .await?;
    tracing::info!(
        revenue = report.total_revenue,
        orders = report.total_orders,
        "dashboard"
    );

    Ok(())
}
