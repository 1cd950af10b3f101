//! Display settings shared by the map bridge, the table and the CLI.
//!
//! Serialized as camelCase JSON and passed straight to the Leaflet bridge
//! as its `config_json`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    /// Tile layer URL template
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: f64,
    /// Zoom used before the map is fitted to the station bounds
    pub initial_zoom: f64,
    /// Lowest zoom the map is raised to when a station is selected
    pub focus_zoom: f64,
    /// Padding in pixels around the station bounds
    pub fit_padding: u32,
    pub popup_max_width: u32,
    pub popup_class: String,
    /// Station names longer than this are truncated in table rows
    pub name_max_chars: usize,
    /// Marker outline color
    pub marker_stroke: String,
    pub marker_weight: f64,
    pub marker_opacity: f64,
    pub marker_fill_opacity: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            max_zoom: 18.0,
            initial_zoom: 9.0,
            focus_zoom: 10.0,
            fit_padding: 20,
            popup_max_width: 300,
            popup_class: "custom-popup".to_string(),
            name_max_chars: 30,
            marker_stroke: "#ffffff".to_string(),
            marker_weight: 3.0,
            marker_opacity: 1.0,
            marker_fill_opacity: 0.8,
        }
    }
}

impl ViewConfig {
    /// Parse a (possibly partial) JSON override; missing keys keep defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
