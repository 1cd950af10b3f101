//! The Coordinator owns the dataset, the selection and both views.
//!
//! Every interaction enters through [`Coordinator::dispatch`] and is fully
//! applied to both views before it returns. Selection updates run in a
//! fixed order: clear the old highlight in both views, highlight the new
//! station in both views, then re-center the map.

use crate::config::ViewConfig;
use crate::map_view::MapView;
use crate::selection::SelectionState;
use crate::sort::{SortDirection, SortKey, SortState};
use crate::surface::{MapSurface, TableSurface, ViewEvent};
use crate::table_view::TableView;
use dmr_stations::{StationDataset, StationRecord};

type SelectListener = Box<dyn FnMut(&StationRecord)>;

pub struct Coordinator<M: MapSurface, T: TableSurface> {
    dataset: StationDataset,
    selection: SelectionState,
    map: MapView<M>,
    table: TableView<T>,
    listener: Option<SelectListener>,
}

impl<M: MapSurface, T: TableSurface> Coordinator<M, T> {
    pub fn new(dataset: StationDataset, map: M, table: T, config: ViewConfig) -> Self {
        let table = TableView::new(table, &config);
        Self {
            dataset,
            selection: SelectionState::new(),
            map: MapView::new(map, config),
            table,
            listener: None,
        }
    }

    /// Draw both views from the dataset.
    pub fn mount(&mut self) {
        let range = self.dataset.loading_range();
        self.map.render_all(&self.dataset, range);
        self.table.render_all(&self.dataset);
        log::info!("coordinator: mounted {} stations", self.dataset.len());
    }

    /// Register the callback run after each selection change. Replaces any
    /// previous one.
    pub fn on_select(&mut self, listener: impl FnMut(&StationRecord) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::MarkerActivated(id) | ViewEvent::RowActivated(id) => {
                self.select(&id);
            }
            ViewEvent::HeaderActivated(key) => {
                self.activate_header(key);
            }
        }
    }

    /// Make `station_id` the selected station in both views.
    ///
    /// Returns false and changes nothing when the id is not in the dataset.
    pub fn select(&mut self, station_id: &str) -> bool {
        let Some(station) = self.dataset.get(station_id) else {
            log::warn!("coordinator: ignoring unknown station {}", station_id);
            return false;
        };
        let previous = self.selection.select(station_id);
        log::debug!(
            "coordinator: selection {:?} -> {}",
            previous,
            station_id
        );

        self.map.clear_highlight();
        self.table.clear_highlight();

        self.map.highlight(station_id);
        self.table.highlight(&self.dataset, station_id);

        self.map.focus(station_id);

        if let Some(listener) = self.listener.as_mut() {
            listener(station);
        }
        true
    }

    pub fn activate_header(&mut self, key: SortKey) -> SortDirection {
        self.table.activate_header(&self.dataset, key)
    }

    pub fn dataset(&self) -> &StationDataset {
        &self.dataset
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_station(&self) -> Option<&StationRecord> {
        self.selection.selected().and_then(|id| self.dataset.get(id))
    }

    pub fn sort_state(&self) -> SortState {
        self.table.sort_state()
    }

    pub fn map(&self) -> &MapView<M> {
        &self.map
    }

    pub fn table(&self) -> &TableView<T> {
        &self.table
    }
}
