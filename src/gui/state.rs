use std::collections::BTreeSet;
use std::sync::Arc;

use crate::core::date_range::{PresetMode, RangeSelection, today};
use crate::core::session::MemoryStore;
use crate::data;
use crate::models::Channel;

/// Global filters, toggled from the sidebar and the per-screen filter
/// bars. Screens read these when selecting rows from the datasets.
#[derive(Debug, Clone)]
pub struct Filters {
    pub property: String,
    pub channels: BTreeSet<Channel>,
    /// Committed date range from the header picker.
    pub range: RangeSelection,
}

impl Filters {
    fn new() -> Self {
        Self {
            property: data::properties().first().cloned().unwrap_or_default(),
            channels: Channel::ALL.into_iter().collect(),
            range: PresetMode::Next30Days.range(today()),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub filters: Filters,
    pub dark_theme: bool,
    /// One process run is one session; the store is shared so screens
    /// rebuilt during the run observe earlier suppression flags.
    pub session: Arc<MemoryStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            filters: Filters::new(),
            dark_theme: true,
            session: Arc::new(MemoryStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
