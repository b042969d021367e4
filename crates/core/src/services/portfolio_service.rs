use chrono::Utc;
use log::{debug, warn};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::holding::{FieldError, Holding, HoldingDraft, HoldingField};

/// Manages the holdings collection: validation, creation, and
/// copy-on-write add/update/delete.
///
/// Pure business logic — no I/O. Every mutation returns a new collection
/// and leaves its input untouched.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Append a holding.
    ///
    /// If a holding with the same id already exists the collection is returned
    /// unchanged, so ids stay unique.
    pub fn add_holding(&self, holdings: &[Holding], holding: Holding) -> Vec<Holding> {
        if holdings.iter().any(|h| h.id == holding.id) {
            warn!("Not adding holding {}: id already present", holding.id);
            return holdings.to_vec();
        }
        debug!("Adding holding {} ({})", holding.id, holding.symbol);
        let mut next = Vec::with_capacity(holdings.len() + 1);
        next.extend_from_slice(holdings);
        next.push(holding);
        next
    }

    /// Replace the holding with `id` by `updated`, keeping its position.
    ///
    /// The stored id is always `id`, whatever `updated.id` says.
    /// Unknown ids are a no-op: the collection comes back unchanged.
    pub fn update_holding(&self, holdings: &[Holding], id: Uuid, updated: Holding) -> Vec<Holding> {
        if !holdings.iter().any(|h| h.id == id) {
            warn!("Not updating holding {id}: not found");
            return holdings.to_vec();
        }
        debug!("Updating holding {id}");
        let replacement = Holding { id, ..updated };
        holdings
            .iter()
            .map(|h| if h.id == id { replacement.clone() } else { h.clone() })
            .collect()
    }

    /// Remove the holding with `id`. Unknown ids are a no-op.
    pub fn delete_holding(&self, holdings: &[Holding], id: Uuid) -> Vec<Holding> {
        let next: Vec<Holding> = holdings.iter().filter(|h| h.id != id).cloned().collect();
        if next.len() == holdings.len() {
            warn!("Not deleting holding {id}: not found");
        } else {
            debug!("Deleted holding {id}");
        }
        next
    }

    /// Validate form data and build a new holding with a fresh id.
    pub fn create_holding(&self, draft: HoldingDraft) -> Result<Holding, CoreError> {
        self.validate_draft(&draft)?;
        Ok(Holding::from_draft(draft))
    }

    /// Validate form data and apply it to `existing`, keeping its id and
    /// refreshing `last_updated`.
    pub fn revise_holding(&self, existing: &Holding, draft: HoldingDraft) -> Result<Holding, CoreError> {
        self.validate_draft(&draft)?;
        Ok(Holding::from_draft_with_id(existing.id, draft, Utc::now()))
    }

    /// Entry-form rules. Every failing field is reported, in form order.
    ///
    /// - name, symbol, sector: non-empty after trimming
    /// - every price and the quantity: finite and strictly greater than 0
    pub fn validate_draft(&self, draft: &HoldingDraft) -> Result<(), CoreError> {
        let mut errors = Vec::new();

        for field in HoldingField::ALL {
            let failure = match field {
                HoldingField::Name => blank(&draft.name).then_some("Stock name is required"),
                HoldingField::Symbol => blank(&draft.symbol).then_some("Stock symbol is required"),
                HoldingField::Sector => blank(&draft.sector).then_some("Sector is required"),
                HoldingField::PurchasePrice => not_positive(draft.purchase_price)
                    .then_some("Purchase price must be greater than 0"),
                HoldingField::CurrentPrice => not_positive(draft.current_price)
                    .then_some("Current price must be greater than 0"),
                HoldingField::Quantity => {
                    not_positive(draft.quantity).then_some("Quantity must be greater than 0")
                }
                HoldingField::TargetPrice => not_positive(draft.target_price)
                    .then_some("Target price must be greater than 0"),
                HoldingField::StopLoss => {
                    not_positive(draft.stop_loss).then_some("Stop loss must be greater than 0")
                }
            };
            if let Some(message) = failure {
                errors.push(FieldError::new(field, message));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidHolding(errors))
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

// NaN fails `> 0.0`, so it is rejected along with zero and negatives.
fn not_positive(value: f64) -> bool {
    !(value.is_finite() && value > 0.0)
}
