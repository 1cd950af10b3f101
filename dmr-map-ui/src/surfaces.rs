//! Browser implementations of the view surfaces.
//!
//! `LeafletMap` forwards marker work to the Leaflet bridge. `SignalTable`
//! writes rows and sort indicators into Dioxus signals that the
//! `StationTable` component renders.

use crate::js_bridge;
use dioxus::prelude::*;
use dmr_sync::{MapFrame, MapSurface, MarkerSpec, RowSpec, SortState, TableSurface};

pub struct LeafletMap {
    container_id: String,
}

impl LeafletMap {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }
}

impl MapSurface for LeafletMap {
    fn render_markers(&mut self, markers: &[MarkerSpec], frame: &MapFrame) {
        let markers_json = match serde_json::to_string(markers) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize markers: {}", e);
                return;
            }
        };
        let config_json = match serde_json::to_string(frame) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize map frame: {}", e);
                return;
            }
        };
        js_bridge::render_station_map(&self.container_id, &markers_json, &config_json);
    }

    fn open_popup(&mut self, station_id: &str) {
        js_bridge::open_station_popup(station_id);
    }

    fn close_popup(&mut self, station_id: &str) {
        js_bridge::close_station_popup(station_id);
    }

    fn zoom(&self) -> Option<f64> {
        js_bridge::map_zoom()
    }

    fn set_view(&mut self, lat: f64, lon: f64, zoom: f64) {
        js_bridge::set_map_view(lat, lon, zoom);
    }
}

pub struct SignalTable {
    table_id: String,
    rows: Signal<Vec<RowSpec>>,
    sort: Signal<SortState>,
}

impl SignalTable {
    pub fn new(table_id: &str, rows: Signal<Vec<RowSpec>>, sort: Signal<SortState>) -> Self {
        Self {
            table_id: table_id.to_string(),
            rows,
            sort,
        }
    }
}

impl TableSurface for SignalTable {
    fn render_rows(&mut self, rows: &[RowSpec]) {
        self.rows.set(rows.to_vec());
    }

    fn set_row_highlighted(&mut self, station_id: &str, highlighted: bool) {
        if let Some(row) = self
            .rows
            .write()
            .iter_mut()
            .find(|r| r.station_id == station_id)
        {
            row.selected = highlighted;
        }
    }

    fn scroll_row_into_view(&mut self, station_id: &str) {
        js_bridge::scroll_row_into_view(&self.table_id, station_id);
    }

    fn show_sort(&mut self, sort: SortState) {
        self.sort.set(sort);
    }
}
