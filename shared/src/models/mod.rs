//! Data models
//!
//! Shared between the HTTP gateway and the demo backend (same wire shapes
//! either way). All IDs are `i64` and stay within JavaScript's safe-integer
//! range so they survive JSON round-trips through web frontends.

pub mod analytics;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod table;

// Re-exports
pub use analytics::*;
pub use menu_item::*;
pub use order::*;
pub use restaurant::*;
pub use table::*;
