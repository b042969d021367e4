use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a price alert threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertCondition {
    /// Fires when the price reaches or exceeds the threshold
    Above,
    /// Fires when the price drops to or below the threshold
    Below,
}

impl std::fmt::Display for AlertCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertCondition::Above => write!(f, "above"),
            AlertCondition::Below => write!(f, "below"),
        }
    }
}

/// A user-defined price threshold on a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub id: Uuid,
    pub symbol: String,
    pub condition: AlertCondition,
    pub price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl PriceAlert {
    pub fn new(alert: NewAlert) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: alert.symbol.trim().to_uppercase(),
            condition: alert.condition,
            price: alert.price,
            active: alert.active,
            created_at: Utc::now(),
        }
    }

    /// Whether `price` crosses this alert's threshold. Inactive alerts never fire.
    #[must_use]
    pub fn is_triggered(&self, price: f64) -> bool {
        if !self.active {
            return false;
        }
        match self.condition {
            AlertCondition::Above => price >= self.price,
            AlertCondition::Below => price <= self.price,
        }
    }
}

/// Alert form data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub symbol: String,
    pub condition: AlertCondition,
    pub price: f64,
    pub active: bool,
}

impl NewAlert {
    pub fn above(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            condition: AlertCondition::Above,
            price,
            active: true,
        }
    }

    pub fn below(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            condition: AlertCondition::Below,
            price,
            active: true,
        }
    }
}
