use std::cmp::Ordering;

use crate::models::holding::Holding;
use crate::models::view::{
    EmptyState, HoldingRow, HoldingStatus, HoldingsView, SortDirection, SortField, ViewState,
};

/// Shown instead of a percentage when the purchase price is zero.
pub const UNDEFINED_STATUS_TEXT: &str = "—";

/// Holdings table view model: status derivation, sorting and search.
///
/// Borrows the collection and never mutates it. Same input, same output.
pub struct ViewService;

impl ViewService {
    pub fn new() -> Self {
        Self
    }

    /// Sort by `field`/`direction`, then keep rows whose name, symbol or
    /// sector contains `search_term` (case-insensitive), then annotate each
    /// row with its status.
    pub fn present<'a>(
        &self,
        holdings: &'a [Holding],
        sort_field: SortField,
        sort_direction: SortDirection,
        search_term: &str,
    ) -> HoldingsView<'a> {
        let rows: Vec<HoldingRow<'a>> = self
            .sort_holdings(holdings, sort_field, sort_direction)
            .into_iter()
            .filter(|h| Self::matches_search(h, search_term))
            .map(|holding| HoldingRow {
                holding,
                status: Self::status(holding),
                status_text: Self::status_text(holding),
            })
            .collect();

        // An active search always reports "no matches", even on an empty portfolio.
        let empty_state = match (rows.is_empty(), search_term.is_empty()) {
            (false, _) => None,
            (true, true) => Some(EmptyState::NoHoldings),
            (true, false) => Some(EmptyState::NoMatches),
        };

        HoldingsView { rows, empty_state }
    }

    /// `present` driven by a `ViewState`.
    pub fn present_with<'a>(&self, holdings: &'a [Holding], view: &ViewState) -> HoldingsView<'a> {
        self.present(holdings, view.sort_field, view.sort_direction, &view.search_term)
    }

    /// Stable sort: holdings with equal keys keep their collection order
    /// in both directions. NaN keys go last in both directions.
    pub fn sort_holdings<'a>(
        &self,
        holdings: &'a [Holding],
        field: SortField,
        direction: SortDirection,
    ) -> Vec<&'a Holding> {
        let mut sorted: Vec<&Holding> = holdings.iter().collect();
        sorted.sort_by(|a, b| {
            let nan_last = Self::key_is_nan(field, a).cmp(&Self::key_is_nan(field, b));
            let ord = Self::compare(field, a, b);
            nan_last.then(match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            })
        });
        sorted
    }

    /// Ascending comparison of two holdings on one field.
    /// Strings compare case-sensitively by code point, not by locale.
    pub fn compare(field: SortField, a: &Holding, b: &Holding) -> Ordering {
        match field {
            SortField::Name => a.name.cmp(&b.name),
            SortField::Symbol => a.symbol.cmp(&b.symbol),
            SortField::Sector => a.sector.cmp(&b.sector),
            SortField::CurrentPrice => compare_f64(a.current_price, b.current_price),
            SortField::PurchasePrice => compare_f64(a.purchase_price, b.purchase_price),
            SortField::Quantity => compare_f64(a.quantity, b.quantity),
            SortField::TargetPrice => compare_f64(a.target_price, b.target_price),
            SortField::StopLoss => compare_f64(a.stop_loss, b.stop_loss),
            SortField::LastUpdated => a.last_updated.cmp(&b.last_updated),
        }
    }

    fn key_is_nan(field: SortField, holding: &Holding) -> bool {
        match field {
            SortField::CurrentPrice => holding.current_price.is_nan(),
            SortField::PurchasePrice => holding.purchase_price.is_nan(),
            SortField::Quantity => holding.quantity.is_nan(),
            SortField::TargetPrice => holding.target_price.is_nan(),
            SortField::StopLoss => holding.stop_loss.is_nan(),
            SortField::Name | SortField::Symbol | SortField::Sector | SortField::LastUpdated => {
                false
            }
        }
    }

    /// Case-insensitive substring match against name, symbol or sector.
    /// An empty term matches everything.
    pub fn matches_search(holding: &Holding, search_term: &str) -> bool {
        let term = search_term.to_lowercase();
        holding.name.to_lowercase().contains(&term)
            || holding.symbol.to_lowercase().contains(&term)
            || holding.sector.to_lowercase().contains(&term)
    }

    /// Profit/loss/neutral from current vs purchase price.
    /// A zero purchase price is reported as neutral.
    pub fn status(holding: &Holding) -> HoldingStatus {
        if holding.purchase_price == 0.0 {
            return HoldingStatus::Neutral;
        }
        match holding.current_price.partial_cmp(&holding.purchase_price) {
            Some(Ordering::Greater) => HoldingStatus::Profit,
            Some(Ordering::Less) => HoldingStatus::Loss,
            _ => HoldingStatus::Neutral,
        }
    }

    /// Percent change formatted like "10.00%", or "—" when undefined.
    pub fn status_text(holding: &Holding) -> String {
        match holding.percent_change() {
            Some(pct) => format_percentage(pct),
            None => UNDEFINED_STATUS_TEXT.to_string(),
        }
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}

/// Two decimals and a trailing '%'.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

// Numbers ascending, NaN after every number. Keeps `sort_by` on a total order.
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
