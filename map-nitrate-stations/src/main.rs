//! Des Moines River Nitrate Stations Map
//!
//! Shows the monitoring stations on a Leaflet map and in a sortable table.
//! Selecting a station on either side highlights it on both.
//!
//! Data flow:
//! 1. The station CSV is embedded in `dmr-stations` via `include_str!`.
//! 2. On mount, the dataset is parsed and handed to a `Coordinator` that
//!    owns a `LeafletMap` and a `SignalTable`.
//! 3. Row and header clicks dispatch straight into the Coordinator.
//! 4. Marker clicks come back from Leaflet through a JS callback and reach
//!    the Coordinator via this component's coroutine.

use dioxus::prelude::*;
use dmr_map_ui::components::{
    ErrorDisplay, LoadingSpinner, MapContainer, MapHeader, NitrateLegend, StationDetails,
    StationTable,
};
use dmr_map_ui::js_bridge;
use dmr_map_ui::state::AppState;
use dmr_map_ui::surfaces::{LeafletMap, SignalTable};
use dmr_stations::StationDataset;
use dmr_sync::{Coordinator, ViewConfig, ViewEvent};
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use std::cell::RefCell;
use std::rc::Rc;

/// Map container DOM element ID used by Leaflet to render into.
const MAP_ID: &str = "nitrate-station-map";
/// Station table DOM element ID.
const TABLE_ID: &str = "stations-table";

type StationCoordinator = Coordinator<LeafletMap, SignalTable>;
type SharedCoordinator = Rc<RefCell<Option<StationCoordinator>>>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("nitrate-stations-root"))
        .launch(App);
}

fn dispatch(coordinator: &SharedCoordinator, event: ViewEvent) {
    match coordinator.borrow_mut().as_mut() {
        Some(c) => c.dispatch(event),
        None => log::warn!("Ignoring {:?} before stations are loaded", event),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let coordinator: SharedCoordinator = use_hook(|| Rc::new(RefCell::new(None)));
    let mut station_count = use_signal(|| 0usize);

    // Marker clicks arrive from Leaflet outside any Dioxus handler
    let marker_events = use_coroutine({
        let coordinator = coordinator.clone();
        move |mut rx: UnboundedReceiver<ViewEvent>| {
            let coordinator = coordinator.clone();
            async move {
                while let Some(event) = rx.next().await {
                    dispatch(&coordinator, event);
                }
            }
        }
    });

    // Build the dataset and coordinator on mount
    use_effect({
        let coordinator = coordinator.clone();
        move || {
            if coordinator.borrow().is_some() {
                return;
            }
            let dataset = match StationDataset::embedded() {
                Ok(dataset) => dataset,
                Err(e) => {
                    log::error!("Failed to load stations: {:#}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load station data: {:#}", e)));
                    state.loading.set(false);
                    return;
                }
            };
            station_count.set(dataset.len());

            js_bridge::init_map_scripts();
            let tx = marker_events.tx();
            js_bridge::register_marker_callback(move |station_id: String| {
                if tx
                    .unbounded_send(ViewEvent::MarkerActivated(station_id))
                    .is_err()
                {
                    log::warn!("Marker event dropped; app is shutting down");
                }
            });

            let mut c = Coordinator::new(
                dataset,
                LeafletMap::new(MAP_ID),
                SignalTable::new(TABLE_ID, state.rows, state.sort),
                ViewConfig::default(),
            );
            let mut selected = state.selected_station;
            c.on_select(move |station| selected.set(Some(station.clone())));
            c.mount();
            *coordinator.borrow_mut() = Some(c);
            state.loading.set(false);
        }
    });

    use_drop(js_bridge::destroy_map);

    let on_event = {
        let coordinator = coordinator.clone();
        move |event: ViewEvent| dispatch(&coordinator, event)
    };

    let subtitle = format!(
        "{} USGS monitoring stations in the Des Moines River basin, Iowa",
        station_count()
    );

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            MapHeader {
                title: "Des Moines River Nitrate Monitoring".to_string(),
                subtitle,
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: flex-start;",
                    div {
                        style: "flex: 1 1 420px; min-width: 320px;",
                        MapContainer { id: MAP_ID.to_string() }
                    }
                    div {
                        style: "flex: 1 1 420px; min-width: 320px;",
                        StationTable { id: TABLE_ID.to_string(), on_event }
                    }
                }

                StationDetails {}
                NitrateLegend {}
            }
        }
    }
}
