pub mod alert;
pub mod holding;
pub mod navigation;
pub mod settings;
pub mod suggestion;
pub mod summary;
pub mod view;
pub mod watchlist;
