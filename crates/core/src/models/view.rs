use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Holding attribute the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    #[default]
    Symbol,
    Sector,
    CurrentPrice,
    PurchasePrice,
    Quantity,
    TargetPrice,
    StopLoss,
    LastUpdated,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Symbol => write!(f, "symbol"),
            SortField::Sector => write!(f, "sector"),
            SortField::CurrentPrice => write!(f, "currentPrice"),
            SortField::PurchasePrice => write!(f, "purchasePrice"),
            SortField::Quantity => write!(f, "quantity"),
            SortField::TargetPrice => write!(f, "targetPrice"),
            SortField::StopLoss => write!(f, "stopLoss"),
            SortField::LastUpdated => write!(f, "lastUpdated"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Ephemeral sort/filter controls of the holdings table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub search_term: String,
}

impl ViewState {
    /// Header click: the same field flips direction, a new field starts ascending.
    pub fn select_sort_field(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}

/// Profit/loss classification of a holding (current vs purchase price).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoldingStatus {
    Profit,
    Loss,
    Neutral,
}

impl std::fmt::Display for HoldingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoldingStatus::Profit => write!(f, "profit"),
            HoldingStatus::Loss => write!(f, "loss"),
            HoldingStatus::Neutral => write!(f, "neutral"),
        }
    }
}

/// One visible table row: the holding plus its derived status.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingRow<'a> {
    pub holding: &'a Holding,
    pub status: HoldingStatus,
    /// Percent change with two decimals and a trailing '%', or "—" when undefined
    pub status_text: String,
}

/// Why the table has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyState {
    /// The portfolio has no holdings at all
    NoHoldings,
    /// Holdings exist but none match the search term
    NoMatches,
}

impl EmptyState {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoHoldings => "No stocks in your portfolio yet.",
            EmptyState::NoMatches => "No stocks found matching your search.",
        }
    }
}

/// Display-ready result of the holdings view model.
#[derive(Debug, Clone, PartialEq)]
pub struct HoldingsView<'a> {
    pub rows: Vec<HoldingRow<'a>>,
    /// Set only when `rows` is empty
    pub empty_state: Option<EmptyState>,
}

impl HoldingsView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
