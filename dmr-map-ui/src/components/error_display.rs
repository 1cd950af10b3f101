//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shows a load failure in place of the map and table.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FEF2F2; color: #B91C1C; border-radius: 4px; border: 1px solid #FCA5A5;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
