use log::{debug, warn};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::alert::{NewAlert, PriceAlert};
use crate::models::holding::Holding;

/// An active alert whose threshold is crossed by a held position.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggeredAlert<'a> {
    pub alert: &'a PriceAlert,
    pub holding: &'a Holding,
}

/// Price alert bookkeeping. Same copy-on-write rules as holdings.
pub struct AlertService;

impl AlertService {
    pub fn new() -> Self {
        Self
    }

    /// Validate alert form data and build the alert.
    pub fn create_alert(&self, alert: NewAlert) -> Result<PriceAlert, CoreError> {
        if alert.symbol.trim().is_empty() {
            return Err(CoreError::ValidationError("Alert symbol is required".into()));
        }
        if !(alert.price.is_finite() && alert.price > 0.0) {
            return Err(CoreError::ValidationError(format!(
                "Alert price must be greater than 0, got {}",
                alert.price
            )));
        }
        Ok(PriceAlert::new(alert))
    }

    pub fn add_alert(&self, alerts: &[PriceAlert], alert: PriceAlert) -> Vec<PriceAlert> {
        debug!("Adding {} alert on {} at {}", alert.condition, alert.symbol, alert.price);
        let mut next = alerts.to_vec();
        next.push(alert);
        next
    }

    /// Remove an alert. Unknown ids are a no-op.
    pub fn delete_alert(&self, alerts: &[PriceAlert], id: Uuid) -> Vec<PriceAlert> {
        let next: Vec<PriceAlert> = alerts.iter().filter(|a| a.id != id).cloned().collect();
        if next.len() == alerts.len() {
            warn!("Not deleting alert {id}: not found");
        }
        next
    }

    /// Flip an alert between active and paused. Unknown ids are a no-op.
    pub fn toggle_alert(&self, alerts: &[PriceAlert], id: Uuid) -> Vec<PriceAlert> {
        if !alerts.iter().any(|a| a.id == id) {
            warn!("Not toggling alert {id}: not found");
        }
        alerts
            .iter()
            .map(|a| {
                if a.id == id {
                    PriceAlert {
                        active: !a.active,
                        ..a.clone()
                    }
                } else {
                    a.clone()
                }
            })
            .collect()
    }

    /// Alerts crossed by the current price of a held position with the same
    /// symbol (ASCII case-insensitive). Alert order is preserved.
    pub fn triggered_alerts<'a>(
        &self,
        alerts: &'a [PriceAlert],
        holdings: &'a [Holding],
    ) -> Vec<TriggeredAlert<'a>> {
        alerts
            .iter()
            .filter_map(|alert| {
                holdings
                    .iter()
                    .find(|h| h.symbol.eq_ignore_ascii_case(&alert.symbol))
                    .filter(|h| alert.is_triggered(h.current_price))
                    .map(|holding| TriggeredAlert { alert, holding })
            })
            .collect()
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}
