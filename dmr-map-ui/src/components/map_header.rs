//! Page header with title and a short description of the stations.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeaderProps {
    pub title: String,
    /// Line under the title, e.g. the number of stations shown
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn MapHeader(props: MapHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
