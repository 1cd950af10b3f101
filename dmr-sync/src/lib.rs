//! Keeps the station map and the station table in step.
//!
//! This crate provides:
//! - `selection` / `sort`: the two pieces of interaction state
//! - `surface`: traits for the rendering collaborators plus the marker and
//!   row descriptions handed to them
//! - `map_view` / `table_view`: per-view bookkeeping over a surface
//! - `coordinator`: the single owner of state and the only dispatcher of
//!   `ViewEvent`s
//!
//! Nothing here touches the browser; the Dioxus crate supplies real surfaces
//! and the tests use recording ones.

pub mod config;
pub mod coordinator;
pub mod map_view;
pub mod selection;
pub mod sort;
pub mod surface;
pub mod table_view;

#[cfg(test)]
pub(crate) mod testing;

pub use config::ViewConfig;
pub use coordinator::Coordinator;
pub use map_view::MapView;
pub use selection::SelectionState;
pub use sort::{SortDirection, SortKey, SortState};
pub use surface::{MapFrame, MapSurface, MarkerSpec, RowSpec, TableSurface, ViewEvent};
pub use table_view::TableView;
