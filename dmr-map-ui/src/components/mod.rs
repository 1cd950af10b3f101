//! Reusable Dioxus RSX components for DMR map apps.

mod error_display;
mod loading_spinner;
mod map_container;
mod map_header;
mod nitrate_legend;
mod station_details;
mod station_table;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use map_header::MapHeader;
pub use nitrate_legend::NitrateLegend;
pub use station_details::StationDetails;
pub use station_table::StationTable;
