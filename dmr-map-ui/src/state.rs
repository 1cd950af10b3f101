//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals the components read. The
//! Coordinator is the only writer of `rows`, `sort` and `selected_station`;
//! components turn clicks into `ViewEvent`s instead of writing them.

use dioxus::prelude::*;
use dmr_stations::StationRecord;
use dmr_sync::{RowSpec, SortState};

/// Shared application state for DMR map apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Table rows in display order
    pub rows: Signal<Vec<RowSpec>>,
    /// Header sort indicators
    pub sort: Signal<SortState>,
    /// Station shown in the details panel
    pub selected_station: Signal<Option<StationRecord>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            rows: Signal::new(Vec::new()),
            sort: Signal::new(SortState::default()),
            selected_station: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
