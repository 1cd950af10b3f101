//! Map container component.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet renders the map into
    pub id: String,
    /// Map height in pixels
    #[props(default = 480)]
    pub height: u32,
}

/// A fixed-height div for the Leaflet map.
///
/// Leaflet needs an explicit height on its container, unlike the
/// auto-sizing chart containers.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; border-radius: 8px; border: 1px solid #E0E0E0; overflow: hidden;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
