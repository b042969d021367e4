use serde::{Deserialize, Serialize};

/// Fraction of total value reported as today's gain until real
/// previous-close data is available.
pub const PLACEHOLDER_DAILY_CHANGE_RATIO: f64 = 0.005;

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Currency all monetary values are displayed in (e.g., "INR", "USD").
    pub display_currency: String,

    /// Ratio used by the fixed-ratio today's-gain approximation, or `None`
    /// while a custom estimator is installed.
    pub daily_change_ratio: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_currency: "INR".to_string(),
            daily_change_ratio: Some(PLACEHOLDER_DAILY_CHANGE_RATIO),
        }
    }
}
