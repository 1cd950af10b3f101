//! Shared Dioxus components and Leaflet bridge for DMR station maps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `surfaces`: `MapSurface`/`TableSurface` implementations for the browser
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (map container, station table, legend, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod surfaces;
