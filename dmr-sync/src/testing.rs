//! Recording surfaces and fixtures for unit tests.

use crate::sort::SortState;
use crate::surface::{MapFrame, MapSurface, MarkerSpec, RowSpec, TableSurface};
use dmr_stations::{StationDataset, StationRecord};
use std::cell::RefCell;
use std::rc::Rc;

pub fn station(id: &str, name: &str, nitrate: f64) -> StationRecord {
    StationRecord {
        station_id: id.to_string(),
        name: name.to_string(),
        lat: 42.0,
        lon: -94.0,
        drainage_area: 100.0,
        typical_nitrate: nitrate,
        nitrate_loading: 1000.0,
        huc8: "07100004".to_string(),
        description: String::new(),
    }
}

/// Stations C, A, B in that order, with A and B sharing a nitrate value.
pub fn dataset() -> StationDataset {
    let mut c = station("C", "C", 9.2);
    c.lat = 41.6;
    c.lon = -93.6;
    c.nitrate_loading = 245122.0;
    let mut a = station("A", "A", 6.3);
    a.lat = 42.7;
    a.lon = -94.2;
    a.nitrate_loading = 5696.0;
    let mut b = station("B", "B", 6.3);
    b.lat = 42.4;
    b.lon = -94.9;
    b.nitrate_loading = 84753.0;
    StationDataset::from_records(vec![c, a, b]).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RenderMarkers(Vec<String>),
    OpenPopup(String),
    ClosePopup(String),
    SetView(f64, f64, f64),
    RenderRows(Vec<(String, bool)>),
    Highlight(String, bool),
    Scroll(String),
    ShowSort(SortState),
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

pub struct RecordingMap {
    pub journal: Journal,
    pub zoom: Option<f64>,
    /// `open_station` of the last rendered frame
    pub rendered_open: Option<String>,
}

impl RecordingMap {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            zoom: Some(9.0),
            rendered_open: None,
        }
    }
}

impl MapSurface for RecordingMap {
    fn render_markers(&mut self, markers: &[MarkerSpec], frame: &MapFrame) {
        self.rendered_open = frame.open_station.clone();
        let ids = markers.iter().map(|m| m.station_id.clone()).collect();
        self.journal.borrow_mut().push(Call::RenderMarkers(ids));
    }

    fn open_popup(&mut self, station_id: &str) {
        self.journal
            .borrow_mut()
            .push(Call::OpenPopup(station_id.to_string()));
    }

    fn close_popup(&mut self, station_id: &str) {
        self.journal
            .borrow_mut()
            .push(Call::ClosePopup(station_id.to_string()));
    }

    fn zoom(&self) -> Option<f64> {
        self.zoom
    }

    fn set_view(&mut self, lat: f64, lon: f64, zoom: f64) {
        self.zoom = Some(zoom);
        self.journal.borrow_mut().push(Call::SetView(lat, lon, zoom));
    }
}

pub struct RecordingTable {
    pub journal: Journal,
    pub rows: Vec<RowSpec>,
}

impl RecordingTable {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            rows: Vec::new(),
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.station_id.as_str()).collect()
    }

    pub fn selected_ids(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.station_id.as_str())
            .collect()
    }
}

impl TableSurface for RecordingTable {
    fn render_rows(&mut self, rows: &[RowSpec]) {
        self.rows = rows.to_vec();
        let summary = rows
            .iter()
            .map(|r| (r.station_id.clone(), r.selected))
            .collect();
        self.journal.borrow_mut().push(Call::RenderRows(summary));
    }

    fn set_row_highlighted(&mut self, station_id: &str, highlighted: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.station_id == station_id) {
            row.selected = highlighted;
        }
        self.journal
            .borrow_mut()
            .push(Call::Highlight(station_id.to_string(), highlighted));
    }

    fn scroll_row_into_view(&mut self, station_id: &str) {
        self.journal
            .borrow_mut()
            .push(Call::Scroll(station_id.to_string()));
    }

    fn show_sort(&mut self, sort: SortState) {
        self.journal.borrow_mut().push(Call::ShowSort(sort));
    }
}
