//! Details panel for the selected station.

use crate::state::AppState;
use dioxus::prelude::*;
use dmr_utils::format::thousands;
use dmr_utils::styling::color_for;

#[component]
pub fn StationDetails() -> Element {
    let state = use_context::<AppState>();
    let selected = (state.selected_station)();

    let Some(station) = selected else {
        return rsx! {
            div {
                style: "margin-top: 12px; font-size: 13px; color: #757575;",
                "Click a marker or a table row to select a station."
            }
        };
    };

    let swatch = color_for(station.typical_nitrate).hex();
    let loading = thousands(station.nitrate_loading);
    let drainage = thousands(station.drainage_area);

    rsx! {
        div {
            style: "margin-top: 12px; padding: 10px 12px; border-left: 4px solid {swatch}; background: #F9FAFB; font-size: 13px;",
            div {
                style: "font-weight: 600; margin-bottom: 4px;",
                "{station.name} ({station.station_id})"
            }
            div { "{station.typical_nitrate} mg/L nitrate, {loading} lbs/day, {drainage} mi² drainage, HUC8 {station.huc8}" }
            if !station.description.is_empty() {
                div {
                    style: "margin-top: 4px; font-style: italic; color: #616161;",
                    "{station.description}"
                }
            }
        }
    }
}
