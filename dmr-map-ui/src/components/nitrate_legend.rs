//! Legend explaining marker colors and sizes.

use dioxus::prelude::*;
use dmr_utils::styling::NitrateColor;

#[component]
pub fn NitrateLegend() -> Element {
    rsx! {
        div {
            style: "margin-top: 12px; padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px; display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
            strong { "Typical nitrate:" }
            for color in NitrateColor::ALL {
                div {
                    key: "{color.hex()}",
                    style: "display: flex; align-items: center; gap: 4px;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 50%; border: 2px solid #FFFFFF; box-shadow: 0 0 0 1px #BDBDBD; background: {color.hex()};",
                    }
                    "{color.range_label()}"
                }
            }
            span {
                style: "color: #616161;",
                "Marker size scales with nitrate loading (lbs/day)."
            }
        }
    }
}
