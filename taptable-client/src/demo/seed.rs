//! First-use seed data for the demo backend
//!
//! A collection is seeded only while its key is entirely absent from the
//! store; existing data is never merged into or re-seeded.

use shared::models::{DietaryInfo, MenuItem, Order, Restaurant, Settings, Table, TableStatus};
use tracing::info;

use super::store::{self, DemoStore, StoreResult};

/// The one credential pair the demo backend accepts.
pub const DEMO_EMAIL: &str = "admin@taptable.com";
pub const DEMO_PASSWORD: &str = "admin123";

/// Seed any collection whose key is missing.
pub fn ensure_seeded(store: &DemoStore) -> StoreResult<()> {
    let mut seeded = false;

    if !store.has_collection(store::RESTAURANTS)? {
        store.put_collection(store::RESTAURANTS, &default_restaurants())?;
        seeded = true;
    }
    if !store.has_collection(store::MENU_ITEMS)? {
        store.put_collection(store::MENU_ITEMS, &default_menu_items())?;
        seeded = true;
    }
    if !store.has_collection(store::TABLES)? {
        store.put_collection(store::TABLES, &default_tables())?;
        seeded = true;
    }
    if !store.has_collection(store::ORDERS)? {
        store.put_collection::<Order>(store::ORDERS, &[])?;
        seeded = true;
    }

    if seeded {
        info!("seeded demo data");
    }
    Ok(())
}

fn default_restaurants() -> Vec<Restaurant> {
    vec![Restaurant {
        id: 1,
        name: "TapTable Restaurant".to_string(),
        email: DEMO_EMAIL.to_string(),
        phone: "+1234567890".to_string(),
        address: "123 Main Street, City".to_string(),
        settings: Settings {
            tax_rate: 10.0,
            service_charge: 5.0,
            currency: "USD".to_string(),
            accepts_online_payment: true,
            accepts_cash: true,
        },
    }]
}

fn default_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Caesar Salad".to_string(),
            description: "Fresh romaine lettuce with caesar dressing".to_string(),
            price: 12.99,
            category: "Appetizers".to_string(),
            image: "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=300&h=200&fit=crop"
                .to_string(),
            available: true,
            restaurant_id: 1,
            dietary_info: DietaryInfo {
                is_vegetarian: true,
                is_vegan: false,
                is_gluten_free: false,
                is_nut_free: true,
            },
        },
        MenuItem {
            id: 2,
            name: "Grilled Chicken".to_string(),
            description: "Tender grilled chicken with herbs".to_string(),
            price: 18.99,
            category: "Main Course".to_string(),
            image: "https://images.unsplash.com/photo-1598103442097-8b74394b95c6?w=300&h=200&fit=crop"
                .to_string(),
            available: true,
            restaurant_id: 1,
            dietary_info: DietaryInfo {
                is_vegetarian: false,
                is_vegan: false,
                is_gluten_free: true,
                is_nut_free: true,
            },
        },
        MenuItem {
            id: 3,
            name: "Margherita Pizza".to_string(),
            description: "Classic pizza with fresh mozzarella".to_string(),
            price: 14.99,
            category: "Pizzas".to_string(),
            image: "https://images.unsplash.com/photo-1574071318508-1cdbab80d002?w=300&h=200&fit=crop"
                .to_string(),
            available: true,
            restaurant_id: 1,
            dietary_info: DietaryInfo {
                is_vegetarian: true,
                is_vegan: false,
                is_gluten_free: false,
                is_nut_free: true,
            },
        },
        MenuItem {
            id: 4,
            name: "Chocolate Cake".to_string(),
            description: "Rich chocolate cake with ganache".to_string(),
            price: 8.99,
            category: "Desserts".to_string(),
            image: "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=300&h=200&fit=crop"
                .to_string(),
            available: true,
            restaurant_id: 1,
            dietary_info: DietaryInfo {
                is_vegetarian: true,
                is_vegan: false,
                is_gluten_free: false,
                is_nut_free: false,
            },
        },
        MenuItem {
            id: 5,
            name: "Fresh Juice".to_string(),
            description: "Freshly squeezed orange juice".to_string(),
            price: 5.99,
            category: "Drinks & Beverages".to_string(),
            image: "https://images.unsplash.com/photo-1600271886742-f049cd451bba?w=300&h=200&fit=crop"
                .to_string(),
            available: true,
            restaurant_id: 1,
            dietary_info: DietaryInfo {
                is_vegetarian: true,
                is_vegan: true,
                is_gluten_free: true,
                is_nut_free: true,
            },
        },
    ]
}

fn default_tables() -> Vec<Table> {
    vec![
        Table {
            id: 1,
            number: 1,
            seats: 4,
            status: TableStatus::Available,
            restaurant_id: 1,
            qr_code: "QR-TABLE-1".to_string(),
        },
        Table {
            id: 2,
            number: 2,
            seats: 2,
            status: TableStatus::Occupied,
            restaurant_id: 1,
            qr_code: "QR-TABLE-2".to_string(),
        },
        Table {
            id: 3,
            number: 3,
            seats: 6,
            status: TableStatus::Available,
            restaurant_id: 1,
            qr_code: "QR-TABLE-3".to_string(),
        },
    ]
}
