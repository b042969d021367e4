use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ticker the user follows without holding it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: Uuid,
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    /// Absolute change since the previous close
    pub day_change: f64,
    pub day_change_percent: f64,
}

impl WatchlistEntry {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        current_price: f64,
        day_change: f64,
        day_change_percent: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            symbol: symbol.into(),
            current_price,
            day_change,
            day_change_percent,
        }
    }

    #[must_use]
    pub fn is_up(&self) -> bool {
        self.day_change >= 0.0
    }
}
