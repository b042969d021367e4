//! Built-in sample data: an eight-position NSE portfolio plus the demo
//! alerts, watchlist and suggestions shown on a fresh dashboard.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::alert::{AlertCondition, PriceAlert};
use crate::models::holding::{Holding, HoldingDraft};
use crate::models::suggestion::Suggestion;
use crate::models::watchlist::WatchlistEntry;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// (name, symbol, sector, purchase, current, quantity, target, stop loss)
type SeedRow = (&'static str, &'static str, &'static str, f64, f64, f64, f64, f64);

const HOLDINGS: [SeedRow; 8] = [
    ("Reliance Industries", "RELIANCE", "Oil & Gas", 2100.5, 2451.8, 10.0, 2700.0, 2000.0),
    ("Infosys", "INFY", "IT", 1600.0, 1560.2, 15.0, 1800.0, 1400.0),
    ("HDFC Bank", "HDFCBANK", "Banking", 1520.75, 1680.5, 8.0, 1850.0, 1500.0),
    ("Tata Consultancy Services", "TCS", "IT", 3400.0, 3520.3, 5.0, 3800.0, 3200.0),
    ("Hindustan Unilever", "HINDUNILVR", "FMCG", 2400.5, 2350.0, 7.0, 2550.0, 2250.0),
    ("Bharti Airtel", "BHARTIARTL", "Telecom", 750.0, 875.3, 20.0, 950.0, 800.0),
    ("ITC Limited", "ITC", "FMCG", 375.8, 415.6, 50.0, 450.0, 380.0),
    ("Larsen & Toubro", "LT", "Construction", 2300.0, 2560.75, 6.0, 2800.0, 2200.0),
];

/// Sample holdings, each with a fresh id.
pub fn sample_holdings() -> Vec<Holding> {
    let last_updated = at(2025, 4, 10, 9, 30);
    HOLDINGS
        .iter()
        .map(|&(name, symbol, sector, purchase, current, quantity, target, stop)| {
            let draft = HoldingDraft::new(name, symbol, sector)
                .with_prices(purchase, current)
                .with_quantity(quantity)
                .with_targets(target, stop);
            Holding::from_draft_with_id(uuid::Uuid::new_v4(), draft, last_updated)
        })
        .collect()
}

pub fn sample_alerts() -> Vec<PriceAlert> {
    [
        ("RELIANCE", AlertCondition::Above, 2500.0, true, at(2025, 4, 2, 10, 30)),
        ("INFY", AlertCondition::Below, 1500.0, true, at(2025, 4, 5, 14, 20)),
        ("HDFCBANK", AlertCondition::Above, 1700.0, false, at(2025, 4, 8, 9, 15)),
    ]
    .into_iter()
    .map(|(symbol, condition, price, active, created_at)| PriceAlert {
        id: uuid::Uuid::new_v4(),
        symbol: symbol.to_string(),
        condition,
        price,
        active,
        created_at,
    })
    .collect()
}

pub fn sample_watchlist() -> Vec<WatchlistEntry> {
    vec![
        WatchlistEntry::new("HDFC AMC", "HDFCAMC", 3250.40, 45.60, 1.42),
        WatchlistEntry::new("Titan Company", "TITAN", 3420.75, -22.30, -0.65),
        WatchlistEntry::new("Asian Paints", "ASIANPAINT", 3125.20, 15.80, 0.51),
    ]
}

pub fn suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            id: "1".into(),
            name: "Bajaj Finance".into(),
            symbol: "BAJFINANCE".into(),
            current_price: 7250.80,
            sector: "Finance".into(),
            potential_return: 12.5,
            confidence_score: 85,
            reason: "Strong growth in consumer lending, expansion in rural markets, and robust digital initiatives.".into(),
        },
        Suggestion {
            id: "2".into(),
            name: "Tata Motors".into(),
            symbol: "TATAMOTORS".into(),
            current_price: 620.40,
            sector: "Auto".into(),
            potential_return: 18.2,
            confidence_score: 78,
            reason: "EV transition strategy, strong JLR performance, and improved domestic market share.".into(),
        },
        Suggestion {
            id: "3".into(),
            name: "Sun Pharma".into(),
            symbol: "SUNPHARMA".into(),
            current_price: 1120.75,
            sector: "Pharma".into(),
            potential_return: 9.8,
            confidence_score: 72,
            reason: "Specialty products pipeline, growing US market presence, and margin expansion.".into(),
        },
    ]
}
