//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map functions live in `assets/js/station-map.js` and are
//! evaluated as globals (no ES modules) once Leaflet itself has loaded.
//! This module provides Rust wrappers that serialize data and call those globals.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the map JS at compile time
static STATION_MAP_JS: &str = include_str!("../assets/js/station-map.js");

const LEAFLET_JS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Global the map script calls with a station id when a marker is clicked.
pub const MARKER_CALLBACK: &str = "__dmrMarkerActivated";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('DMR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `s` as a JS string literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Load Leaflet if the page does not already have it, then evaluate the
/// map script at global scope. Call once at app startup.
pub fn init_map_scripts() {
    let store_js = format!(
        "window.__dmrMapScripts = {};",
        js_string(STATION_MAP_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__dmrMapReady || window.__dmrMapLoading) return;
            window.__dmrMapLoading = true;
            if (typeof L === 'undefined' && !document.getElementById('dmr-leaflet-js')) {{
                var css = document.createElement('link');
                css.rel = 'stylesheet';
                css.href = {css};
                document.head.appendChild(css);
                var js = document.createElement('script');
                js.id = 'dmr-leaflet-js';
                js.src = {js};
                document.head.appendChild(js);
            }}
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined') {{
                    clearInterval(waitForLeaflet);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__dmrMapScripts);
                    delete window.__dmrMapScripts;
                    window.renderStationMap = renderStationMap;
                    window.openStationPopup = openStationPopup;
                    window.closeStationPopup = closeStationPopup;
                    window.setStationMapView = setStationMapView;
                    window.__dmrMapReady = true;
                    console.log('DMR map initialized');
                }}
            }}, 100);
        }})();
        "#,
        css = js_string(LEAFLET_CSS_URL),
        js = js_string(LEAFLET_JS_URL),
    );
    let _ = js_sys::eval(&init_js);
}

/// Draw the station markers into `container_id`.
///
/// Polls until Leaflet, the map script and the container DOM element are
/// all available before rendering.
pub fn render_station_map(container_id: &str, markers_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let markers = js_string(markers_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__dmrMapReady && document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderStationMap({id}, {markers}, {config});
                    }} catch(e) {{ console.error('[DMR] renderStationMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Open the popup of a station's marker. Does nothing before the map is ready.
pub fn open_station_popup(station_id: &str) {
    call_js(&format!(
        "if (window.__dmrMapReady) window.openStationPopup({});",
        js_string(station_id)
    ));
}

pub fn close_station_popup(station_id: &str) {
    call_js(&format!(
        "if (window.__dmrMapReady) window.closeStationPopup({});",
        js_string(station_id)
    ));
}

pub fn set_map_view(lat: f64, lon: f64, zoom: f64) {
    call_js(&format!(
        "if (window.__dmrMapReady) window.setStationMapView({}, {}, {});",
        lat, lon, zoom
    ));
}

/// Current map zoom, `None` until the map exists.
pub fn map_zoom() -> Option<f64> {
    js_sys::eval("window.__dmrMap ? window.__dmrMap.getZoom() : null")
        .ok()
        .and_then(|v| v.as_f64())
}

/// Smooth-scroll the table row for `station_id` into view after the next paint.
pub fn scroll_row_into_view(table_id: &str, station_id: &str) {
    call_js(&format!(
        r#"
        requestAnimationFrame(function() {{
            var table = document.getElementById({table});
            if (!table) return;
            var rows = table.querySelectorAll('tbody tr');
            for (var i = 0; i < rows.length; i++) {{
                if (rows[i].dataset.stationId === {id}) {{
                    rows[i].scrollIntoView({{ behavior: 'smooth', block: 'nearest' }});
                    break;
                }}
            }}
        }});
        "#,
        table = js_string(table_id),
        id = js_string(station_id),
    ));
}

/// Install `callback` as the global the map script calls on marker clicks.
///
/// The closure is leaked so it outlives this call, matching the page lifetime.
pub fn register_marker_callback(callback: impl FnMut(String) + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window; marker clicks will be ignored");
        return;
    };
    let closure = Closure::<dyn FnMut(String)>::new(callback);
    if let Err(e) = js_sys::Reflect::set(
        &window,
        &JsValue::from_str(MARKER_CALLBACK),
        closure.as_ref(),
    ) {
        log::warn!("Failed to register marker callback: {:?}", e);
    }
    closure.forget();
}

/// Remove the map and its markers from the page.
pub fn destroy_map() {
    call_js(
        "if (window.__dmrMap) { window.__dmrMap.remove(); window.__dmrMap = null; window.__dmrMarkerLayer = null; window.__dmrMarkers = {}; }",
    );
}
