use crate::models::holding::Holding;
use crate::models::settings::PLACEHOLDER_DAILY_CHANGE_RATIO;
use crate::models::summary::{PortfolioSummary, SectorAllocation};

/// Strategy for the "today's gain" figure.
///
/// There is no previous-close data yet, so the default implementation is a
/// fixed-ratio approximation. A real price feed plugs in here.
pub trait DailyChangeEstimator: Send + Sync {
    /// Human-readable name of this estimator (for logs/debugging).
    fn name(&self) -> &str;

    /// Estimated change since the previous close for the whole portfolio.
    fn today_gain(&self, holdings: &[Holding], total_value: f64) -> f64;
}

/// Approximates today's gain as a fixed share of total value.
/// Not a real daily-change computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRatioEstimate {
    pub ratio: f64,
}

impl FixedRatioEstimate {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }
}

impl Default for FixedRatioEstimate {
    fn default() -> Self {
        Self::new(PLACEHOLDER_DAILY_CHANGE_RATIO)
    }
}

impl DailyChangeEstimator for FixedRatioEstimate {
    fn name(&self) -> &str {
        "fixed-ratio"
    }

    fn today_gain(&self, _holdings: &[Holding], total_value: f64) -> f64 {
        total_value * self.ratio
    }
}

/// Computes portfolio analytics: totals, gain/loss, sector breakdown.
///
/// Stateless apart from the today's-gain strategy. Never fails.
pub struct AnalyticsService {
    estimator: Box<dyn DailyChangeEstimator>,
}

impl AnalyticsService {
    pub fn new() -> Self {
        Self::with_estimator(Box::new(FixedRatioEstimate::default()))
    }

    pub fn with_estimator(estimator: Box<dyn DailyChangeEstimator>) -> Self {
        Self { estimator }
    }

    #[must_use]
    pub fn estimator_name(&self) -> &str {
        self.estimator.name()
    }

    /// Summarize a holdings collection. An empty collection yields all zeros.
    pub fn summarize(&self, holdings: &[Holding]) -> PortfolioSummary {
        let total_value: f64 = holdings.iter().map(Holding::market_value).sum();
        let invested: f64 = holdings.iter().map(Holding::invested).sum();
        let total_gain = total_value - invested;

        // Zero invested reports 0% instead of NaN/Infinity.
        let total_gain_percentage = if invested == 0.0 {
            0.0
        } else {
            (total_gain / invested) * 100.0
        };

        PortfolioSummary {
            total_value,
            invested,
            today_gain: self.estimator.today_gain(holdings, total_value),
            total_gain,
            total_gain_percentage,
            stock_count: holdings.len(),
        }
    }

    /// Value per sector, largest first. Sectors with equal value keep the
    /// order in which they first appear in `holdings`.
    pub fn sector_allocation(&self, holdings: &[Holding]) -> Vec<SectorAllocation> {
        let mut allocations: Vec<SectorAllocation> = Vec::new();

        for holding in holdings {
            match allocations.iter_mut().find(|a| a.sector == holding.sector) {
                Some(existing) => {
                    existing.value += holding.market_value();
                    existing.holding_count += 1;
                }
                None => allocations.push(SectorAllocation {
                    sector: holding.sector.clone(),
                    value: holding.market_value(),
                    allocation_pct: 0.0, // filled below
                    holding_count: 1,
                }),
            }
        }

        let total_value: f64 = allocations.iter().map(|a| a.value).sum();
        for allocation in &mut allocations {
            allocation.allocation_pct = if total_value > 0.0 {
                (allocation.value / total_value) * 100.0
            } else {
                0.0
            };
        }

        allocations.sort_by(|a, b| b.value.total_cmp(&a.value));
        allocations
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
