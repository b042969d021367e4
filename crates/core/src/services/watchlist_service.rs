use log::{debug, warn};
use uuid::Uuid;

use crate::models::watchlist::WatchlistEntry;

/// Watchlist bookkeeping. Same copy-on-write rules as holdings and alerts.
pub struct WatchlistService;

impl WatchlistService {
    pub fn new() -> Self {
        Self
    }

    /// Append `entry`. An entry whose id is already present is refused and
    /// the collection comes back unchanged.
    pub fn add_entry(&self, watchlist: &[WatchlistEntry], entry: WatchlistEntry) -> Vec<WatchlistEntry> {
        if watchlist.iter().any(|e| e.id == entry.id) {
            warn!("Not watching {}: entry {} already exists", entry.symbol, entry.id);
            return watchlist.to_vec();
        }
        debug!("Watching {}", entry.symbol);
        let mut next = watchlist.to_vec();
        next.push(entry);
        next
    }

    /// Remove an entry. Unknown ids are a no-op.
    pub fn remove_entry(&self, watchlist: &[WatchlistEntry], id: Uuid) -> Vec<WatchlistEntry> {
        let next: Vec<WatchlistEntry> = watchlist.iter().filter(|e| e.id != id).cloned().collect();
        if next.len() == watchlist.len() {
            warn!("Not removing watchlist entry {id}: not found");
        } else {
            debug!("Removed watchlist entry {id}");
        }
        next
    }
}

impl Default for WatchlistService {
    fn default() -> Self {
        Self::new()
    }
}
