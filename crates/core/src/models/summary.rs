use serde::{Deserialize, Serialize};

/// Portfolio-level metrics derived from the current holdings.
///
/// Never stored: recomputed from the collection on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Σ current_price × quantity
    pub total_value: f64,

    /// Σ purchase_price × quantity
    pub invested: f64,

    /// Estimated change since the previous close. This is an approximation
    /// supplied by a `DailyChangeEstimator`, not real market data.
    pub today_gain: f64,

    /// total_value - invested
    pub total_gain: f64,

    /// (total_gain / invested) × 100, or 0 when nothing is invested
    pub total_gain_percentage: f64,

    /// Number of holdings
    pub stock_count: usize,
}

impl PortfolioSummary {
    #[must_use]
    pub fn is_today_gain_positive(&self) -> bool {
        self.today_gain > 0.0
    }

    #[must_use]
    pub fn is_total_gain_positive(&self) -> bool {
        self.total_gain > 0.0
    }
}

/// Share of portfolio value held in one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocation {
    pub sector: String,

    /// Σ market value of holdings in this sector
    pub value: f64,

    /// value / total portfolio value × 100 (0 when the portfolio is worth nothing)
    pub allocation_pct: f64,

    pub holding_count: usize,
}
