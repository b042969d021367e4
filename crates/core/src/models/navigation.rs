use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which top-level screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Dashboard,
    Watchlist,
    Alerts,
    Suggestions,
    /// Not a real screen: selecting it opens the add-holding modal
    /// and the tracker falls back to the dashboard.
    #[serde(rename = "add-stock")]
    AddHolding,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Screen::Dashboard => write!(f, "dashboard"),
            Screen::Watchlist => write!(f, "watchlist"),
            Screen::Alerts => write!(f, "alerts"),
            Screen::Suggestions => write!(f, "suggestions"),
            Screen::AddHolding => write!(f, "add-stock"),
        }
    }
}

/// State of the add/edit holding dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModalState {
    #[default]
    Closed,
    AddHolding,
    EditHolding(Uuid),
}

impl ModalState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}
