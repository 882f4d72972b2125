//! Order Model

use serde::{Deserialize, Serialize};

/// Order status
///
/// The nominal lifecycle is pending → confirmed → preparing → ready →
/// served, with cancelled reachable from any non-terminal state. No
/// transition table is enforced anywhere: a status update overwrites
/// whatever is stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

/// Payment method accepted at order creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Upi,
    Razorpay,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "upi",
            PaymentMethod::Razorpay => "razorpay",
        }
    }
}

/// Order line item: a denormalized snapshot of the menu item at order
/// time (id/name/price copied, never re-synced with live menu state).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item id at snapshot time
    pub id: i64,
    pub name: String,
    /// Unit price in currency unit
    pub price: f64,
    pub quantity: i32,
}

/// Order entity
///
/// `table_number` is a denormalized copy of the table's display number,
/// not a foreign key. `payment_method` stays a free-form string here so
/// orders recorded by older backends still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub restaurant_id: i64,
    pub table_number: i32,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerPhone")]
    pub customer_phone: String,
    pub items: Vec<OrderItem>,
    /// Total amount in currency unit
    pub amount: f64,
    pub status: OrderStatus,
    pub payment_method: String,
    /// ISO 8601 creation timestamp
    pub created_at: String,
}

/// Create order payload (customer checkout). Carries no status or
/// timestamp: the backend stamps both, so created orders are always
/// pending by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub restaurant_id: i64,
    pub table_number: i32,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerPhone")]
    pub customer_phone: String,
    /// Total amount in currency unit
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }

    #[test]
    fn test_customer_fields_use_camel_case_on_the_wire() {
        let payload = OrderCreate {
            restaurant_id: 1,
            table_number: 2,
            customer_name: "Ana".to_string(),
            customer_phone: "+34123456".to_string(),
            amount: 31.98,
            payment_method: PaymentMethod::Upi,
            items: vec![OrderItem {
                id: 3,
                name: "Margherita Pizza".to_string(),
                price: 15.99,
                quantity: 2,
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["customerName"], "Ana");
        assert_eq!(json["payment_method"], "upi");
        assert!(json.get("status").is_none());
    }
}
