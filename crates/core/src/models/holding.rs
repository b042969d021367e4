use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One owned stock position.
///
/// Serialized with camelCase keys so exported JSON matches the dashboard's
/// `Stock` shape (`purchasePrice`, `lastUpdated`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Unique identifier, assigned once at creation and never reassigned
    pub id: Uuid,

    /// Display name (e.g., "Infosys")
    pub name: String,

    /// Ticker symbol. Uppercase by convention, not enforced.
    pub symbol: String,

    /// Free-form category (e.g., "IT", "Banking")
    pub sector: String,

    pub purchase_price: f64,
    pub current_price: f64,
    pub quantity: f64,
    pub target_price: f64,
    pub stop_loss: f64,

    /// When the position was created or last edited
    pub last_updated: DateTime<Utc>,
}

impl Holding {
    /// Build a holding from form data with a fresh id, stamped now.
    /// Does not validate; see `PortfolioService::create_holding`.
    pub fn from_draft(draft: HoldingDraft) -> Self {
        Self::from_draft_with_id(Uuid::new_v4(), draft, Utc::now())
    }

    pub fn from_draft_with_id(id: Uuid, draft: HoldingDraft, last_updated: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            symbol: draft.symbol,
            sector: draft.sector,
            purchase_price: draft.purchase_price,
            current_price: draft.current_price,
            quantity: draft.quantity,
            target_price: draft.target_price,
            stop_loss: draft.stop_loss,
            last_updated,
        }
    }

    /// current_price × quantity
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.current_price * self.quantity
    }

    /// purchase_price × quantity
    #[must_use]
    pub fn invested(&self) -> f64 {
        self.purchase_price * self.quantity
    }

    /// Unrealized gain/loss in currency units.
    #[must_use]
    pub fn gain(&self) -> f64 {
        self.market_value() - self.invested()
    }

    /// Price change since purchase, in percent.
    ///
    /// `None` when the purchase price is zero (or the result is not finite),
    /// so a bad row can never leak NaN/Infinity into the table.
    #[must_use]
    pub fn percent_change(&self) -> Option<f64> {
        if self.purchase_price == 0.0 {
            return None;
        }
        let pct = ((self.current_price - self.purchase_price) / self.purchase_price) * 100.0;
        pct.is_finite().then_some(pct)
    }
}

/// Add/edit form data: a holding without identity or timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingDraft {
    pub name: String,
    pub symbol: String,
    pub sector: String,
    pub purchase_price: f64,
    pub current_price: f64,
    pub quantity: f64,
    pub target_price: f64,
    pub stop_loss: f64,
}

impl HoldingDraft {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            sector: sector.into(),
            ..Self::default()
        }
    }

    pub fn with_prices(mut self, purchase_price: f64, current_price: f64) -> Self {
        self.purchase_price = purchase_price;
        self.current_price = current_price;
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_targets(mut self, target_price: f64, stop_loss: f64) -> Self {
        self.target_price = target_price;
        self.stop_loss = stop_loss;
        self
    }

    /// Pre-fill the edit form from an existing holding.
    pub fn from_holding(holding: &Holding) -> Self {
        Self {
            name: holding.name.clone(),
            symbol: holding.symbol.clone(),
            sector: holding.sector.clone(),
            purchase_price: holding.purchase_price,
            current_price: holding.current_price,
            quantity: holding.quantity,
            target_price: holding.target_price,
            stop_loss: holding.stop_loss,
        }
    }

    /// Apply a single typed field change.
    pub fn apply(&mut self, update: HoldingUpdate) {
        match update {
            HoldingUpdate::Name(v) => self.name = v,
            HoldingUpdate::Symbol(v) => self.symbol = v,
            HoldingUpdate::Sector(v) => self.sector = v,
            HoldingUpdate::PurchasePrice(v) => self.purchase_price = v,
            HoldingUpdate::CurrentPrice(v) => self.current_price = v,
            HoldingUpdate::Quantity(v) => self.quantity = v,
            HoldingUpdate::TargetPrice(v) => self.target_price = v,
            HoldingUpdate::StopLoss(v) => self.stop_loss = v,
        }
    }
}

/// Editable fields of a holding, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoldingField {
    Name,
    Symbol,
    PurchasePrice,
    CurrentPrice,
    Quantity,
    Sector,
    TargetPrice,
    StopLoss,
}

impl HoldingField {
    pub const ALL: [HoldingField; 8] = [
        HoldingField::Name,
        HoldingField::Symbol,
        HoldingField::PurchasePrice,
        HoldingField::CurrentPrice,
        HoldingField::Quantity,
        HoldingField::Sector,
        HoldingField::TargetPrice,
        HoldingField::StopLoss,
    ];
}

impl std::fmt::Display for HoldingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HoldingField::Name => write!(f, "name"),
            HoldingField::Symbol => write!(f, "symbol"),
            HoldingField::PurchasePrice => write!(f, "purchasePrice"),
            HoldingField::CurrentPrice => write!(f, "currentPrice"),
            HoldingField::Quantity => write!(f, "quantity"),
            HoldingField::Sector => write!(f, "sector"),
            HoldingField::TargetPrice => write!(f, "targetPrice"),
            HoldingField::StopLoss => write!(f, "stopLoss"),
        }
    }
}

/// A typed single-field change to a `HoldingDraft`.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldingUpdate {
    Name(String),
    Symbol(String),
    Sector(String),
    PurchasePrice(f64),
    CurrentPrice(f64),
    Quantity(f64),
    TargetPrice(f64),
    StopLoss(f64),
}

impl HoldingUpdate {
    #[must_use]
    pub fn field(&self) -> HoldingField {
        match self {
            HoldingUpdate::Name(_) => HoldingField::Name,
            HoldingUpdate::Symbol(_) => HoldingField::Symbol,
            HoldingUpdate::Sector(_) => HoldingField::Sector,
            HoldingUpdate::PurchasePrice(_) => HoldingField::PurchasePrice,
            HoldingUpdate::CurrentPrice(_) => HoldingField::CurrentPrice,
            HoldingUpdate::Quantity(_) => HoldingField::Quantity,
            HoldingUpdate::TargetPrice(_) => HoldingField::TargetPrice,
            HoldingUpdate::StopLoss(_) => HoldingField::StopLoss,
        }
    }
}

/// One failed entry-form check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: HoldingField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: HoldingField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
