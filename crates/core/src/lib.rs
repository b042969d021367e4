pub mod errors;
pub mod models;
pub mod seed;
pub mod services;

use log::debug;
use std::collections::HashSet;
use uuid::Uuid;

use errors::CoreError;
use models::{
    alert::{NewAlert, PriceAlert},
    holding::{Holding, HoldingDraft},
    navigation::{ModalState, Screen},
    settings::{Settings, PLACEHOLDER_DAILY_CHANGE_RATIO},
    suggestion::Suggestion,
    summary::{PortfolioSummary, SectorAllocation},
    view::{HoldingsView, SortField, ViewState},
    watchlist::WatchlistEntry,
};
use services::{
    alert_service::{AlertService, TriggeredAlert},
    analytics_service::{AnalyticsService, DailyChangeEstimator, FixedRatioEstimate},
    portfolio_service::PortfolioService,
    view_service::ViewService,
    watchlist_service::WatchlistService,
};

/// Main entry point for the stock portfolio core library.
///
/// This is the top-level application state: the single writer of the
/// holdings collection. Every holdings change replaces the collection with
/// the new value returned by `PortfolioService`; summary and table are
/// recomputed from it on every call and never cached.
#[must_use]
pub struct PortfolioTracker {
    holdings: Vec<Holding>,
    view_state: ViewState,
    screen: Screen,
    modal: ModalState,
    alerts: Vec<PriceAlert>,
    watchlist: Vec<WatchlistEntry>,
    suggestions: Vec<Suggestion>,
    settings: Settings,
    portfolio_service: PortfolioService,
    analytics_service: AnalyticsService,
    view_service: ViewService,
    alert_service: AlertService,
    watchlist_service: WatchlistService,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("holdings", &self.holdings.len())
            .field("view_state", &self.view_state)
            .field("screen", &self.screen)
            .field("modal", &self.modal)
            .field("alerts", &self.alerts.len())
            .field("watchlist", &self.watchlist.len())
            .field("settings", &self.settings)
            .field("estimator", &self.analytics_service.estimator_name())
            .finish()
    }
}

impl PortfolioTracker {
    /// An empty portfolio with default settings.
    pub fn create_new() -> Self {
        Self::build(Vec::new(), Vec::new(), Vec::new(), Settings::default())
    }

    /// The demo portfolio: sample holdings, alerts and watchlist.
    pub fn with_sample_data() -> Self {
        Self::build(
            seed::sample_holdings(),
            seed::sample_alerts(),
            seed::sample_watchlist(),
            Settings::default(),
        )
    }

    /// An empty portfolio with the given settings, validated first.
    /// A `None` ratio keeps the default fixed ratio.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        let mut tracker = Self::create_new();
        tracker.set_display_currency(settings.display_currency)?;
        if let Some(ratio) = settings.daily_change_ratio {
            tracker.set_daily_change_ratio(ratio)?;
        }
        Ok(tracker)
    }

    // ── Holdings ────────────────────────────────────────────────────

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    #[must_use]
    pub fn get_holding(&self, id: Uuid) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == id)
    }

    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Validate form data and add it as a new holding. Returns the new id.
    pub fn add_holding(&mut self, draft: HoldingDraft) -> Result<Uuid, CoreError> {
        let holding = self.portfolio_service.create_holding(draft)?;
        let id = holding.id;
        self.holdings = self.portfolio_service.add_holding(&self.holdings, holding);
        Ok(id)
    }

    /// Validate form data and apply it to the holding with `id`.
    ///
    /// Returns `Ok(false)` and leaves the collection untouched when no such
    /// holding exists; the draft is only validated for an existing holding.
    pub fn update_holding(&mut self, id: Uuid, draft: HoldingDraft) -> Result<bool, CoreError> {
        let Some(existing) = self.get_holding(id) else {
            debug!("Holding {id} not found, update skipped");
            return Ok(false);
        };
        let revised = self.portfolio_service.revise_holding(existing, draft)?;
        self.holdings = self
            .portfolio_service
            .update_holding(&self.holdings, id, revised);
        Ok(true)
    }

    /// Delete a holding. Returns `false` if there was nothing to delete.
    pub fn remove_holding(&mut self, id: Uuid) -> bool {
        let before = self.holdings.len();
        self.holdings = self.portfolio_service.delete_holding(&self.holdings, id);
        if self.modal == ModalState::EditHolding(id) {
            self.modal = ModalState::Closed;
        }
        self.holdings.len() != before
    }

    // ── Summary ─────────────────────────────────────────────────────

    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.analytics_service.summarize(&self.holdings)
    }

    #[must_use]
    pub fn sector_allocation(&self) -> Vec<SectorAllocation> {
        self.analytics_service.sector_allocation(&self.holdings)
    }

    // ── Holdings table ──────────────────────────────────────────────

    /// Sorted, filtered and annotated rows for the current view state.
    #[must_use]
    pub fn present_holdings(&self) -> HoldingsView<'_> {
        self.view_service
            .present_with(&self.holdings, &self.view_state)
    }

    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Header click on `field`.
    pub fn sort_by(&mut self, field: SortField) {
        self.view_state.select_sort_field(field);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view_state.set_search_term(term);
    }

    // ── Navigation & dialog ─────────────────────────────────────────

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switch screens. `Screen::AddHolding` opens the add dialog and lands
    /// on the dashboard.
    pub fn navigate(&mut self, screen: Screen) {
        if screen == Screen::AddHolding {
            self.modal = ModalState::AddHolding;
            self.screen = Screen::Dashboard;
        } else {
            self.screen = screen;
        }
    }

    #[must_use]
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn open_add_modal(&mut self) {
        self.modal = ModalState::AddHolding;
    }

    /// Open the edit dialog for `id`. Returns `false` (dialog unchanged) if
    /// the holding does not exist.
    pub fn open_edit_modal(&mut self, id: Uuid) -> bool {
        if self.get_holding(id).is_none() {
            return false;
        }
        self.modal = ModalState::EditHolding(id);
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Initial form contents for the open dialog: blank for add, pre-filled
    /// for edit, `None` when closed.
    #[must_use]
    pub fn modal_draft(&self) -> Option<HoldingDraft> {
        match self.modal {
            ModalState::Closed => None,
            ModalState::AddHolding => Some(HoldingDraft::default()),
            ModalState::EditHolding(id) => self.get_holding(id).map(HoldingDraft::from_holding),
        }
    }

    /// Submit the open dialog: adds or updates depending on the dialog mode,
    /// then closes it. On validation failure the dialog stays open.
    pub fn save_from_modal(&mut self, draft: HoldingDraft) -> Result<Uuid, CoreError> {
        let id = match self.modal {
            ModalState::Closed => {
                return Err(CoreError::ValidationError("No holding dialog is open".into()));
            }
            ModalState::AddHolding => self.add_holding(draft)?,
            ModalState::EditHolding(id) => {
                if !self.update_holding(id, draft)? {
                    return Err(CoreError::ValidationError(format!(
                        "Holding {id} no longer exists"
                    )));
                }
                id
            }
        };
        self.modal = ModalState::Closed;
        Ok(id)
    }

    // ── Alerts ──────────────────────────────────────────────────────

    #[must_use]
    pub fn alerts(&self) -> &[PriceAlert] {
        &self.alerts
    }

    pub fn add_alert(&mut self, alert: NewAlert) -> Result<Uuid, CoreError> {
        let alert = self.alert_service.create_alert(alert)?;
        let id = alert.id;
        self.alerts = self.alert_service.add_alert(&self.alerts, alert);
        Ok(id)
    }

    pub fn remove_alert(&mut self, id: Uuid) -> bool {
        let before = self.alerts.len();
        self.alerts = self.alert_service.delete_alert(&self.alerts, id);
        self.alerts.len() != before
    }

    /// Pause or resume an alert. Returns `false` if no such alert exists.
    pub fn toggle_alert(&mut self, id: Uuid) -> bool {
        let found = self.alerts.iter().any(|a| a.id == id);
        self.alerts = self.alert_service.toggle_alert(&self.alerts, id);
        found
    }

    /// Active alerts crossed by the current price of a held position.
    #[must_use]
    pub fn triggered_alerts(&self) -> Vec<TriggeredAlert<'_>> {
        self.alert_service
            .triggered_alerts(&self.alerts, &self.holdings)
    }

    // ── Watchlist & suggestions ─────────────────────────────────────

    #[must_use]
    pub fn watchlist(&self) -> &[WatchlistEntry] {
        &self.watchlist
    }

    /// Follow a ticker. Fails if an entry with the same id is already watched.
    pub fn add_to_watchlist(&mut self, entry: WatchlistEntry) -> Result<Uuid, CoreError> {
        let id = entry.id;
        if self.watchlist.iter().any(|e| e.id == id) {
            return Err(CoreError::ValidationError(format!(
                "Watchlist entry {id} already exists"
            )));
        }
        self.watchlist = self.watchlist_service.add_entry(&self.watchlist, entry);
        Ok(id)
    }

    /// Stop following a ticker. Returns `false` if there was nothing to remove.
    pub fn remove_from_watchlist(&mut self, id: Uuid) -> bool {
        let before = self.watchlist.len();
        self.watchlist = self.watchlist_service.remove_entry(&self.watchlist, id);
        self.watchlist.len() != before
    }

    /// "Add to portfolio" from the watchlist: opens the add dialog and
    /// returns a draft pre-filled with the entry's name, symbol and price.
    pub fn start_holding_from_watchlist(&mut self, id: Uuid) -> Option<HoldingDraft> {
        let entry = self.watchlist.iter().find(|e| e.id == id)?;
        let draft = HoldingDraft {
            name: entry.name.clone(),
            symbol: entry.symbol.clone(),
            purchase_price: entry.current_price,
            current_price: entry.current_price,
            ..HoldingDraft::default()
        };
        self.modal = ModalState::AddHolding;
        Some(draft)
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the display currency. Must be exactly 3 ASCII letters.
    pub fn set_display_currency(&mut self, currency: String) -> Result<(), CoreError> {
        let trimmed = currency.trim().to_uppercase();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., INR, USD, EUR)"
            )));
        }
        self.settings.display_currency = trimmed;
        Ok(())
    }

    /// Switch today's gain to the fixed-ratio approximation with `ratio`.
    /// Replaces any custom estimator installed with
    /// [`set_daily_change_estimator`](Self::set_daily_change_estimator).
    pub fn set_daily_change_ratio(&mut self, ratio: f64) -> Result<(), CoreError> {
        if !ratio.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Daily change ratio must be a finite number, got {ratio}"
            )));
        }
        if self.settings.daily_change_ratio.is_none() {
            debug!(
                "Replacing '{}' daily change estimator with fixed ratio {ratio}",
                self.analytics_service.estimator_name()
            );
        }
        self.settings.daily_change_ratio = Some(ratio);
        self.analytics_service =
            AnalyticsService::with_estimator(Box::new(FixedRatioEstimate::new(ratio)));
        Ok(())
    }

    /// Replace the today's-gain strategy, e.g. with one backed by real
    /// previous-close prices. Clears `daily_change_ratio` in the settings.
    pub fn set_daily_change_estimator(&mut self, estimator: Box<dyn DailyChangeEstimator>) {
        debug!("Using '{}' daily change estimator", estimator.name());
        self.settings.daily_change_ratio = None;
        self.analytics_service = AnalyticsService::with_estimator(estimator);
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all holdings as a JSON array (camelCase keys).
    pub fn export_holdings_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.holdings)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize holdings to JSON: {e}")))
    }

    /// Replace the holdings with a JSON array. Every holding must pass the
    /// entry rules and ids must be unique; otherwise nothing changes.
    /// Returns the number of holdings imported.
    pub fn import_holdings_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let imported: Vec<Holding> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for holding in &imported {
            if !seen.insert(holding.id) {
                return Err(CoreError::DuplicateHolding(holding.id.to_string()));
            }
            self.portfolio_service
                .validate_draft(&HoldingDraft::from_holding(holding))?;
        }

        let count = imported.len();
        debug!("Imported {count} holdings");
        self.holdings = imported;
        self.modal = ModalState::Closed;
        Ok(count)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        holdings: Vec<Holding>,
        alerts: Vec<PriceAlert>,
        watchlist: Vec<WatchlistEntry>,
        settings: Settings,
    ) -> Self {
        let ratio = settings
            .daily_change_ratio
            .unwrap_or(PLACEHOLDER_DAILY_CHANGE_RATIO);
        let analytics_service =
            AnalyticsService::with_estimator(Box::new(FixedRatioEstimate::new(ratio)));

        Self {
            holdings,
            view_state: ViewState::default(),
            screen: Screen::default(),
            modal: ModalState::default(),
            alerts,
            watchlist,
            suggestions: seed::suggestions(),
            settings,
            portfolio_service: PortfolioService::new(),
            analytics_service,
            view_service: ViewService::new(),
            alert_service: AlertService::new(),
            watchlist_service: WatchlistService::new(),
        }
    }
}
