//! Analytics Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Named time-range preset for analytics queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeRange {
    #[serde(rename = "7days")]
    Last7Days,
    #[serde(rename = "30days")]
    Last30Days,
    #[serde(rename = "custom")]
    Custom,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7days",
            TimeRange::Last30Days => "30days",
            TimeRange::Custom => "custom",
        }
    }
}

/// Optional analytics filter; each field becomes a query parameter only
/// when present. The backend decides what an absent range means.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsQuery {
    pub time_range: Option<TimeRange>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// One day of revenue for the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub revenue: i64,
}

/// Analytics report for a restaurant's dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub average_rating: f64,
    pub revenue_trend: Vec<RevenuePoint>,
    pub previous_revenue: f64,
    pub previous_orders: i64,
    pub previous_rating: f64,
    pub top_items: Vec<String>,
    pub recent_reviews: Vec<serde_json::Value>,
}
