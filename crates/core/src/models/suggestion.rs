use serde::{Deserialize, Serialize};

/// A static, read-only investment idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub sector: String,
    /// Expected upside, in percent
    pub potential_return: f64,
    /// 0–100
    pub confidence_score: u8,
    pub reason: String,
}
