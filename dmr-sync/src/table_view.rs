//! Row order, sort state and row highlight on top of a `TableSurface`.

use crate::config::ViewConfig;
use crate::sort::{sort_indices, SortDirection, SortKey, SortState};
use crate::surface::{RowSpec, TableSurface};
use dmr_stations::{StationDataset, StationRecord};

pub struct TableView<S: TableSurface> {
    surface: S,
    name_max_chars: usize,
    /// Display order as indices into the dataset
    order: Vec<usize>,
    sort: SortState,
    highlighted: Option<String>,
}

impl<S: TableSurface> TableView<S> {
    pub fn new(surface: S, config: &ViewConfig) -> Self {
        Self {
            surface,
            name_max_chars: config.name_max_chars,
            order: Vec::new(),
            sort: SortState::default(),
            highlighted: None,
        }
    }

    /// Redraw all rows in the current display order, keeping the highlight.
    pub fn render_all(&mut self, dataset: &StationDataset) {
        if self.order.len() != dataset.len() {
            self.order = (0..dataset.len()).collect();
            self.sort = SortState::default();
        }
        let rows: Vec<RowSpec> = self
            .order
            .iter()
            .map(|&i| &dataset.stations()[i])
            .map(|s| {
                let selected = self.highlighted.as_deref() == Some(s.station_id.as_str());
                RowSpec::for_station(s, self.name_max_chars, selected)
            })
            .collect();
        self.surface.render_rows(&rows);
        self.surface.show_sort(self.sort);
    }

    /// Advance the header cycle for `key` and re-sort.
    pub fn activate_header(&mut self, dataset: &StationDataset, key: SortKey) -> SortDirection {
        let direction = self.sort.activate(key);
        log::debug!("table: sort by {} {:?}", key, direction);
        self.sort(dataset, key, direction);
        direction
    }

    /// Stable sort of the dataset order, then redraw. Ties always fall back
    /// to dataset order, whatever the previous sort was.
    ///
    /// Sets the header indicators to `key`/`direction` directly.
    pub fn sort(&mut self, dataset: &StationDataset, key: SortKey, direction: SortDirection) {
        self.order = (0..dataset.len()).collect();
        sort_indices(dataset.stations(), &mut self.order, key, direction);
        self.sort = SortState::Sorted { key, direction };
        self.render_all(dataset);
    }

    pub fn clear_highlight(&mut self) {
        if let Some(previous) = self.highlighted.take() {
            self.surface.set_row_highlighted(&previous, false);
        }
    }

    /// Highlight the row for `station_id` and scroll to it. Unknown ids do
    /// nothing.
    pub fn highlight(&mut self, dataset: &StationDataset, station_id: &str) -> bool {
        if dataset.get(station_id).is_none() {
            log::warn!("table: no row for station {}", station_id);
            return false;
        }
        self.surface.set_row_highlighted(station_id, true);
        self.surface.scroll_row_into_view(station_id);
        self.highlighted = Some(station_id.to_string());
        true
    }

    /// Stations in display order.
    pub fn displayed<'a>(&self, dataset: &'a StationDataset) -> Vec<&'a StationRecord> {
        self.order
            .iter()
            .filter_map(|&i| dataset.stations().get(i))
            .collect()
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
