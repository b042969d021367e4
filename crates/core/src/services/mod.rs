pub mod alert_service;
pub mod analytics_service;
pub mod portfolio_service;
pub mod view_service;
pub mod watchlist_service;
