//! Marker bookkeeping on top of a `MapSurface`.

use crate::config::ViewConfig;
use crate::surface::{MapFrame, MapSurface, MarkerSpec};
use dmr_stations::{DerivedRange, StationDataset};

/// One marker per station plus the id of the marker whose popup is open.
pub struct MapView<S: MapSurface> {
    surface: S,
    config: ViewConfig,
    markers: Vec<MarkerSpec>,
    open: Option<String>,
}

impl<S: MapSurface> MapView<S> {
    pub fn new(surface: S, config: ViewConfig) -> Self {
        Self {
            surface,
            config,
            markers: Vec::new(),
            open: None,
        }
    }

    /// Redraw every marker from scratch. Safe to call repeatedly; an open
    /// popup is handed to the surface to reopen on the new marker.
    pub fn render_all(&mut self, dataset: &StationDataset, range: DerivedRange) {
        self.markers = dataset
            .stations()
            .iter()
            .map(|s| MarkerSpec::for_station(s, range, &self.config))
            .collect();
        let frame = MapFrame {
            open_station: self.open.clone(),
            ..MapFrame::new(dataset.bounds(), &self.config)
        };
        self.surface.render_markers(&self.markers, &frame);
        log::debug!("map: rendered {} markers", self.markers.len());
    }

    /// Close the open popup, if any.
    pub fn clear_highlight(&mut self) {
        if let Some(previous) = self.open.take() {
            self.surface.close_popup(&previous);
        }
    }

    /// Open the popup for `station_id`. Unknown ids do nothing.
    pub fn highlight(&mut self, station_id: &str) -> bool {
        if self.marker(station_id).is_none() {
            log::warn!("map: no marker for station {}", station_id);
            return false;
        }
        self.surface.open_popup(station_id);
        self.open = Some(station_id.to_string());
        true
    }

    /// Center on `station_id`, raising the zoom to at least the focus zoom.
    pub fn focus(&mut self, station_id: &str) {
        let Some((lat, lon)) = self.marker(station_id).map(|m| (m.lat, m.lon)) else {
            return;
        };
        let current = self.surface.zoom().unwrap_or(self.config.initial_zoom);
        let zoom = current.max(self.config.focus_zoom);
        self.surface.set_view(lat, lon, zoom);
    }

    /// Highlight and focus `station_id`, or only clear when `None`.
    pub fn set_highlighted(&mut self, station_id: Option<&str>) {
        self.clear_highlight();
        if let Some(id) = station_id {
            if self.highlight(id) {
                self.focus(id);
            }
        }
    }

    pub fn marker(&self, station_id: &str) -> Option<&MarkerSpec> {
        self.markers.iter().find(|m| m.station_id == station_id)
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn open_popup(&self) -> Option<&str> {
        self.open.as_deref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
