use chrono::{TimeZone, Utc};
use stock_portfolio_core::models::alert::{AlertCondition, NewAlert, PriceAlert};
use stock_portfolio_core::models::holding::{
    FieldError, Holding, HoldingDraft, HoldingField, HoldingUpdate,
};
use stock_portfolio_core::models::navigation::{ModalState, Screen};
use stock_portfolio_core::models::settings::{Settings, PLACEHOLDER_DAILY_CHANGE_RATIO};
use stock_portfolio_core::models::summary::PortfolioSummary;
use stock_portfolio_core::models::view::{
    EmptyState, HoldingStatus, SortDirection, SortField, ViewState,
};
use stock_portfolio_core::models::watchlist::WatchlistEntry;
use uuid::Uuid;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn draft() -> HoldingDraft {
    HoldingDraft::new("Infosys", "INFY", "IT")
        .with_prices(1600.0, 1560.2)
        .with_quantity(15.0)
        .with_targets(1800.0, 1400.0)
}

// ═══════════════════════════════════════════════════════════════════
//  Holding
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    #[test]
    fn from_draft_copies_every_field() {
        let h = Holding::from_draft(draft());
        assert_eq!(h.name, "Infosys");
        assert_eq!(h.symbol, "INFY");
        assert_eq!(h.sector, "IT");
        assert_eq!(h.purchase_price, 1600.0);
        assert_eq!(h.current_price, 1560.2);
        assert_eq!(h.quantity, 15.0);
        assert_eq!(h.target_price, 1800.0);
        assert_eq!(h.stop_loss, 1400.0);
    }

    #[test]
    fn from_draft_assigns_unique_ids() {
        let a = Holding::from_draft(draft());
        let b = Holding::from_draft(draft());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn symbol_case_is_not_forced() {
        let h = Holding::from_draft(HoldingDraft::new("Lower", "abc", "IT"));
        assert_eq!(h.symbol, "abc");
    }

    #[test]
    fn from_draft_with_id_keeps_id_and_timestamp() {
        let id = Uuid::new_v4();
        let ts = Utc.with_ymd_and_hms(2025, 4, 10, 9, 30, 0).unwrap();
        let h = Holding::from_draft_with_id(id, draft(), ts);
        assert_eq!(h.id, id);
        assert_eq!(h.last_updated, ts);
    }

    #[test]
    fn market_value_invested_and_gain() {
        let h = Holding::from_draft(
            HoldingDraft::new("A", "A", "IT")
                .with_prices(100.0, 110.0)
                .with_quantity(10.0),
        );
        assert!(approx(h.market_value(), 1100.0));
        assert!(approx(h.invested(), 1000.0));
        assert!(approx(h.gain(), 100.0));
    }

    #[test]
    fn percent_change_positive_and_negative() {
        let up = Holding::from_draft(HoldingDraft::new("A", "A", "IT").with_prices(100.0, 110.0));
        let down = Holding::from_draft(HoldingDraft::new("B", "B", "IT").with_prices(100.0, 90.0));
        assert!(approx(up.percent_change().unwrap(), 10.0));
        assert!(approx(down.percent_change().unwrap(), -10.0));
    }

    #[test]
    fn percent_change_undefined_for_zero_purchase_price() {
        let h = Holding::from_draft(HoldingDraft::new("Z", "Z", "IT").with_prices(0.0, 50.0));
        assert_eq!(h.percent_change(), None);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let h = Holding::from_draft(draft());
        let json = serde_json::to_value(&h).unwrap();
        assert!(json.get("purchasePrice").is_some());
        assert!(json.get("currentPrice").is_some());
        assert!(json.get("targetPrice").is_some());
        assert!(json.get("stopLoss").is_some());
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("purchase_price").is_none());
    }

    #[test]
    fn json_roundtrip_preserves_equality() {
        let h = Holding::from_draft(draft());
        let json = serde_json::to_string(&h).unwrap();
        let back: Holding = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  HoldingDraft & HoldingUpdate
// ═══════════════════════════════════════════════════════════════════

mod holding_draft {
    use super::*;

    #[test]
    fn default_is_blank_form() {
        let d = HoldingDraft::default();
        assert!(d.name.is_empty());
        assert!(d.symbol.is_empty());
        assert!(d.sector.is_empty());
        assert_eq!(d.purchase_price, 0.0);
        assert_eq!(d.stop_loss, 0.0);
    }

    #[test]
    fn from_holding_prefills_edit_form() {
        let h = Holding::from_draft(draft());
        assert_eq!(HoldingDraft::from_holding(&h), draft());
    }

    #[test]
    fn apply_sets_each_field() {
        let mut d = HoldingDraft::default();
        d.apply(HoldingUpdate::Name("Titan".into()));
        d.apply(HoldingUpdate::Symbol("TITAN".into()));
        d.apply(HoldingUpdate::Sector("Consumer".into()));
        d.apply(HoldingUpdate::PurchasePrice(3000.0));
        d.apply(HoldingUpdate::CurrentPrice(3420.75));
        d.apply(HoldingUpdate::Quantity(4.0));
        d.apply(HoldingUpdate::TargetPrice(3600.0));
        d.apply(HoldingUpdate::StopLoss(2900.0));

        let expected = HoldingDraft::new("Titan", "TITAN", "Consumer")
            .with_prices(3000.0, 3420.75)
            .with_quantity(4.0)
            .with_targets(3600.0, 2900.0);
        assert_eq!(d, expected);
    }

    #[test]
    fn apply_touches_only_the_named_field() {
        let mut d = draft();
        d.apply(HoldingUpdate::Quantity(99.0));
        assert_eq!(d.quantity, 99.0);
        assert_eq!(d.name, "Infosys");
        assert_eq!(d.purchase_price, 1600.0);
    }

    #[test]
    fn update_reports_its_field() {
        assert_eq!(HoldingUpdate::Name(String::new()).field(), HoldingField::Name);
        assert_eq!(HoldingUpdate::StopLoss(1.0).field(), HoldingField::StopLoss);
        assert_eq!(HoldingUpdate::CurrentPrice(1.0).field(), HoldingField::CurrentPrice);
    }

    #[test]
    fn field_display_uses_form_keys() {
        assert_eq!(HoldingField::PurchasePrice.to_string(), "purchasePrice");
        assert_eq!(HoldingField::StopLoss.to_string(), "stopLoss");
        assert_eq!(HoldingField::Name.to_string(), "name");
    }

    #[test]
    fn field_order_matches_form() {
        assert_eq!(HoldingField::ALL.len(), 8);
        assert_eq!(HoldingField::ALL[0], HoldingField::Name);
        assert_eq!(HoldingField::ALL[5], HoldingField::Sector);
        assert_eq!(HoldingField::ALL[7], HoldingField::StopLoss);
    }

    #[test]
    fn field_error_display() {
        let e = FieldError::new(HoldingField::Quantity, "Quantity must be greater than 0");
        assert_eq!(e.to_string(), "quantity: Quantity must be greater than 0");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  View state
// ═══════════════════════════════════════════════════════════════════

mod view_state {
    use super::*;

    #[test]
    fn defaults_to_symbol_ascending_no_search() {
        let v = ViewState::default();
        assert_eq!(v.sort_field, SortField::Symbol);
        assert_eq!(v.sort_direction, SortDirection::Ascending);
        assert!(v.search_term.is_empty());
    }

    #[test]
    fn reselecting_same_field_flips_direction() {
        let mut v = ViewState::default();
        v.select_sort_field(SortField::Symbol);
        assert_eq!(v.sort_direction, SortDirection::Descending);
        v.select_sort_field(SortField::Symbol);
        assert_eq!(v.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn new_field_resets_to_ascending() {
        let mut v = ViewState::default();
        v.select_sort_field(SortField::Symbol); // now descending
        v.select_sort_field(SortField::CurrentPrice);
        assert_eq!(v.sort_field, SortField::CurrentPrice);
        assert_eq!(v.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn set_search_term() {
        let mut v = ViewState::default();
        v.set_search_term("bank");
        assert_eq!(v.search_term, "bank");
    }

    #[test]
    fn direction_flipped() {
        assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
    }

    #[test]
    fn status_display() {
        assert_eq!(HoldingStatus::Profit.to_string(), "profit");
        assert_eq!(HoldingStatus::Loss.to_string(), "loss");
        assert_eq!(HoldingStatus::Neutral.to_string(), "neutral");
    }

    #[test]
    fn empty_state_messages_differ() {
        assert_eq!(EmptyState::NoHoldings.message(), "No stocks in your portfolio yet.");
        assert_eq!(EmptyState::NoMatches.message(), "No stocks found matching your search.");
    }

    #[test]
    fn sort_field_display() {
        assert_eq!(SortField::CurrentPrice.to_string(), "currentPrice");
        assert_eq!(SortField::LastUpdated.to_string(), "lastUpdated");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Summary
// ═══════════════════════════════════════════════════════════════════

mod summary {
    use super::*;

    #[test]
    fn default_is_all_zero() {
        let s = PortfolioSummary::default();
        assert_eq!(s.total_value, 0.0);
        assert_eq!(s.total_gain_percentage, 0.0);
        assert_eq!(s.stock_count, 0);
        assert!(!s.is_today_gain_positive());
        assert!(!s.is_total_gain_positive());
    }

    #[test]
    fn positivity_flags() {
        let s = PortfolioSummary {
            today_gain: 1.0,
            total_gain: -5.0,
            ..PortfolioSummary::default()
        };
        assert!(s.is_today_gain_positive());
        assert!(!s.is_total_gain_positive());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(PortfolioSummary::default()).unwrap();
        assert!(json.get("totalGainPercentage").is_some());
        assert!(json.get("stockCount").is_some());
        assert!(json.get("todayGain").is_some());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Alerts, watchlist, navigation, settings
// ═══════════════════════════════════════════════════════════════════

mod alert {
    use super::*;

    #[test]
    fn new_uppercases_and_trims_symbol() {
        let a = PriceAlert::new(NewAlert::above(" reliance ", 2500.0));
        assert_eq!(a.symbol, "RELIANCE");
        assert!(a.active);
    }

    #[test]
    fn above_triggers_at_or_over_threshold() {
        let a = PriceAlert::new(NewAlert::above("X", 100.0));
        assert!(a.is_triggered(100.0));
        assert!(a.is_triggered(120.0));
        assert!(!a.is_triggered(99.99));
    }

    #[test]
    fn below_triggers_at_or_under_threshold() {
        let a = PriceAlert::new(NewAlert::below("X", 100.0));
        assert!(a.is_triggered(100.0));
        assert!(a.is_triggered(80.0));
        assert!(!a.is_triggered(100.01));
    }

    #[test]
    fn inactive_never_triggers() {
        let mut a = PriceAlert::new(NewAlert::above("X", 1.0));
        a.active = false;
        assert!(!a.is_triggered(1_000.0));
    }

    #[test]
    fn condition_display() {
        assert_eq!(AlertCondition::Above.to_string(), "above");
        assert_eq!(AlertCondition::Below.to_string(), "below");
    }
}

mod watchlist {
    use super::*;

    #[test]
    fn is_up_includes_flat() {
        assert!(WatchlistEntry::new("A", "A", 10.0, 0.0, 0.0).is_up());
        assert!(WatchlistEntry::new("A", "A", 10.0, 1.0, 10.0).is_up());
        assert!(!WatchlistEntry::new("A", "A", 10.0, -0.1, -1.0).is_up());
    }
}

mod navigation {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Screen::default(), Screen::Dashboard);
        assert_eq!(ModalState::default(), ModalState::Closed);
        assert!(!ModalState::Closed.is_open());
        assert!(ModalState::AddHolding.is_open());
        assert!(ModalState::EditHolding(Uuid::new_v4()).is_open());
    }

    #[test]
    fn screen_display() {
        assert_eq!(Screen::AddHolding.to_string(), "add-stock");
        assert_eq!(Screen::Watchlist.to_string(), "watchlist");
    }

    #[test]
    fn screen_serializes_like_display() {
        for screen in [
            Screen::Dashboard,
            Screen::Watchlist,
            Screen::Alerts,
            Screen::Suggestions,
            Screen::AddHolding,
        ] {
            assert_eq!(serde_json::to_string(&screen).unwrap(), format!("\"{screen}\""));
        }
        let parsed: Screen = serde_json::from_str("\"add-stock\"").unwrap();
        assert_eq!(parsed, Screen::AddHolding);
    }
}

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.display_currency, "INR");
        assert_eq!(s.daily_change_ratio, Some(PLACEHOLDER_DAILY_CHANGE_RATIO));
        assert_eq!(PLACEHOLDER_DAILY_CHANGE_RATIO, 0.005);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let s: Settings = serde_json::from_str(r#"{"displayCurrency":"USD"}"#).unwrap();
        assert_eq!(s.display_currency, "USD");
        assert_eq!(s.daily_change_ratio, Some(0.005));
    }

    #[test]
    fn null_ratio_means_custom_estimator() {
        let s: Settings = serde_json::from_str(r#"{"dailyChangeRatio":null}"#).unwrap();
        assert_eq!(s.daily_change_ratio, None);
        assert_eq!(s.display_currency, "INR");
    }
}
