//! Collaborator seams: what the views ask of the map library and the
//! document, and the one event type that flows back.

use crate::config::ViewConfig;
use crate::sort::{SortKey, SortState};
use dmr_stations::{DerivedRange, GeoBounds, StationRecord};
use dmr_utils::format::{escape_html, thousands, truncate};
use dmr_utils::styling::{color_for, size_for, NitrateColor};
use serde::Serialize;

/// User interaction reported by a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    MarkerActivated(String),
    RowActivated(String),
    HeaderActivated(SortKey),
}

/// Everything the map library needs to draw one station marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub station_id: String,
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub bucket: NitrateColor,
    pub fill_color: &'static str,
    /// Outline color
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
    pub popup_html: String,
}

impl MarkerSpec {
    pub fn for_station(station: &StationRecord, range: DerivedRange, config: &ViewConfig) -> Self {
        let bucket = color_for(station.typical_nitrate);
        Self {
            station_id: station.station_id.clone(),
            lat: station.lat,
            lon: station.lon,
            radius: size_for(station.nitrate_loading, range.min, range.max),
            bucket,
            fill_color: bucket.hex(),
            color: config.marker_stroke.clone(),
            weight: config.marker_weight,
            opacity: config.marker_opacity,
            fill_opacity: config.marker_fill_opacity,
            popup_html: popup_content(station),
        }
    }
}

/// Popup markup for a station. All interpolated text is escaped.
pub fn popup_content(station: &StationRecord) -> String {
    let nitrate_class = if station.is_high_nitrate() {
        " high-nitrate"
    } else {
        ""
    };
    let detail = |label: &str, value: &str, extra_class: &str| {
        format!(
            r#"<div class="popup-detail"><span class="popup-label">{}</span><span class="popup-value{}">{}</span></div>"#,
            label, extra_class, value
        )
    };

    let mut html = String::from(r#"<div class="popup-content">"#);
    html.push_str(&format!(
        r#"<div class="popup-title">{}</div><div class="popup-details">"#,
        escape_html(&station.name)
    ));
    html.push_str(&detail("Station ID:", &escape_html(&station.station_id), ""));
    html.push_str(&detail(
        "Nitrate Concentration:",
        &format!("{} mg/L", station.typical_nitrate),
        nitrate_class,
    ));
    html.push_str(&detail(
        "Loading Rate:",
        &format!("{} lbs/day", thousands(station.nitrate_loading)),
        "",
    ));
    html.push_str(&detail(
        "Drainage Area:",
        &format!("{} mi²", thousands(station.drainage_area)),
        "",
    ));
    html.push_str(&detail("HUC8:", &escape_html(&station.huc8), ""));
    html.push_str(&format!(
        r#"<div class="popup-detail popup-description"><span class="popup-label">{}</span></div>"#,
        escape_html(&station.description)
    ));
    html.push_str("</div></div>");
    html
}

/// Initial framing of the map: dataset center and bounds plus display config.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFrame {
    /// `[lat, lon]`
    pub center: [f64; 2],
    /// `[[min_lat, min_lon], [max_lat, max_lon]]`
    pub bounds: [[f64; 2]; 2],
    /// Popup to open once the markers are drawn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_station: Option<String>,
    #[serde(flatten)]
    pub config: ViewConfig,
}

impl MapFrame {
    pub fn new(bounds: GeoBounds, config: &ViewConfig) -> Self {
        let (lat, lon) = bounds.center();
        Self {
            center: [lat, lon],
            bounds: [
                [bounds.min_lat, bounds.min_lon],
                [bounds.max_lat, bounds.max_lon],
            ],
            open_station: None,
            config: config.clone(),
        }
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSpec {
    pub station_id: String,
    /// Name as shown, possibly truncated
    pub name: String,
    /// Untruncated name for the cell tooltip
    pub full_name: String,
    pub nitrate: String,
    pub loading: String,
    pub drainage: String,
    pub high_nitrate: bool,
    pub selected: bool,
}

impl RowSpec {
    pub fn for_station(station: &StationRecord, name_max_chars: usize, selected: bool) -> Self {
        Self {
            station_id: station.station_id.clone(),
            name: truncate(&station.name, name_max_chars),
            full_name: station.name.clone(),
            nitrate: station.typical_nitrate.to_string(),
            loading: thousands(station.nitrate_loading),
            drainage: thousands(station.drainage_area),
            high_nitrate: station.is_high_nitrate(),
            selected,
        }
    }

    /// Space-separated CSS classes for the `<tr>`.
    pub fn css_class(&self) -> String {
        match (self.high_nitrate, self.selected) {
            (true, true) => "high-nitrate selected".to_string(),
            (true, false) => "high-nitrate".to_string(),
            (false, true) => "selected".to_string(),
            (false, false) => String::new(),
        }
    }
}

/// The mapping library, seen from the map view.
pub trait MapSurface {
    /// Replace every marker and frame the map.
    /// Replace all markers and frame the map. `frame.open_station` is opened
    /// by the surface after the new markers exist.
    fn render_markers(&mut self, markers: &[MarkerSpec], frame: &MapFrame);
    fn open_popup(&mut self, station_id: &str);
    fn close_popup(&mut self, station_id: &str);
    /// Current zoom, `None` while the map is not ready.
    fn zoom(&self) -> Option<f64>;
    fn set_view(&mut self, lat: f64, lon: f64, zoom: f64);
}

/// The document table, seen from the table view.
pub trait TableSurface {
    /// Replace all rows, in display order.
    fn render_rows(&mut self, rows: &[RowSpec]);
    fn set_row_highlighted(&mut self, station_id: &str, highlighted: bool);
    fn scroll_row_into_view(&mut self, station_id: &str);
    /// Update the header sort indicators.
    fn show_sort(&mut self, sort: SortState);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::station;

    #[test]
    fn marker_style_follows_styling_rules() {
        let mut s = station("05482000", "Des Moines River", 8.5);
        s.nitrate_loading = 150.0;
        let range = DerivedRange { min: 100.0, max: 200.0 };
        let marker = MarkerSpec::for_station(&s, range, &ViewConfig::default());
        assert_eq!(marker.bucket, NitrateColor::Red);
        assert_eq!(marker.fill_color, "#ef4444");
        assert_eq!(marker.radius, 15.0);
        assert_eq!(marker.color, "#ffffff");
        assert_eq!(marker.weight, 3.0);
        assert_eq!(marker.fill_opacity, 0.8);
    }

    #[test]
    fn popup_shows_formatted_values_and_escapes() {
        let mut s = station("05482000", "River <North> & Co", 8.5);
        s.nitrate_loading = 143164.0;
        s.drainage_area = 6245.0;
        s.description = "Below \"dam\"".to_string();
        let html = popup_content(&s);
        assert!(html.contains("River &lt;North&gt; &amp; Co"));
        assert!(html.contains("8.5 mg/L"));
        assert!(html.contains("popup-value high-nitrate"));
        assert!(html.contains("143,164 lbs/day"));
        assert!(html.contains("6,245 mi²"));
        assert!(html.contains("Below &quot;dam&quot;"));
    }

    #[test]
    fn popup_skips_high_class_at_threshold() {
        let html = popup_content(&station("1", "x", 7.0));
        assert!(!html.contains("high-nitrate"));
    }

    #[test]
    fn row_truncates_name_and_formats_numbers() {
        let mut s = station(
            "05482000",
            "Des Moines River at 2nd Avenue at Des Moines, IA",
            8.5,
        );
        s.nitrate_loading = 143164.0;
        s.drainage_area = 6245.0;
        let row = RowSpec::for_station(&s, 30, false);
        assert_eq!(row.name, "Des Moines River at 2nd Avenue...");
        assert_eq!(row.full_name, s.name);
        assert_eq!(row.nitrate, "8.5");
        assert_eq!(row.loading, "143,164");
        assert_eq!(row.drainage, "6,245");
        assert_eq!(row.css_class(), "high-nitrate");

        let selected = RowSpec::for_station(&station("2", "y", 4.8), 30, true);
        assert_eq!(selected.css_class(), "selected");
    }

    #[test]
    fn frame_uses_bounds_center() {
        let bounds = GeoBounds {
            min_lat: 41.0,
            max_lat: 43.0,
            min_lon: -95.0,
            max_lon: -93.0,
        };
        let frame = MapFrame::new(bounds, &ViewConfig::default());
        assert_eq!(frame.center, [42.0, -94.0]);
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["bounds"][1][0], 43.0);
        assert_eq!(json["focusZoom"], 10.0);
        assert!(json.get("openStation").is_none());

        let frame = MapFrame {
            open_station: Some("05482000".to_string()),
            ..frame
        };
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["openStation"], "05482000");
    }
}
