//! Table Model

use serde::{Deserialize, Serialize};

/// Table status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

/// Dining table entity
///
/// `number` is a display label, not enforced unique in storage. `qr_code`
/// is derived from the number string at creation time only and is not kept
/// in sync with later renumbering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub number: i32,
    pub seats: i32,
    pub status: TableStatus,
    pub restaurant_id: i64,
    pub qr_code: String,
}

/// Create table payload. The number arrives as a string (form input) and
/// is parsed server-side; status defaults to available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub number: String,
    pub seats: i32,
    pub restaurant_id: i64,
}
