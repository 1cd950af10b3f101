//! Sortable station table.
//!
//! Renders `AppState::rows` in order and reports row and header clicks as
//! `ViewEvent`s. It never reorders or highlights on its own.

use crate::state::AppState;
use dioxus::prelude::*;
use dmr_sync::{RowSpec, SortDirection, SortKey, SortState, ViewEvent};

const HEADER_STYLE: &str =
    "padding: 10px 12px; text-align: left; font-weight: 600; cursor: pointer; user-select: none; white-space: nowrap;";
const CELL_STYLE: &str = "padding: 8px 12px; border-top: 1px solid #E5E7EB;";

#[derive(Props, Clone, PartialEq)]
pub struct StationTableProps {
    /// DOM id of the `<table>`, used for scroll-into-view
    pub id: String,
    pub on_event: EventHandler<ViewEvent>,
}

/// Header classes: `sortable` plus the current direction class, if any.
fn header_class(sort: SortState, key: SortKey) -> String {
    match sort.indicator(key) {
        Some(direction) => format!("sortable {}", direction.css_class()),
        None => "sortable".to_string(),
    }
}

fn header_arrow(sort: SortState, key: SortKey) -> &'static str {
    match sort.indicator(key) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    }
}

fn row_style(row: &RowSpec) -> &'static str {
    match (row.selected, row.high_nitrate) {
        (true, _) => "cursor: pointer; background: #DBEAFE; outline: 2px solid #3B82F6;",
        (false, true) => "cursor: pointer; background: #FEF2F2;",
        (false, false) => "cursor: pointer; background: white;",
    }
}

#[component]
pub fn StationTable(props: StationTableProps) -> Element {
    let state = use_context::<AppState>();
    let rows = state.rows.read().clone();
    let sort = (state.sort)();
    let on_event = props.on_event;

    rsx! {
        div {
            style: "overflow: auto; max-height: 480px; border: 1px solid #E0E0E0; border-radius: 8px;",
            table {
                id: "{props.id}",
                style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                thead {
                    tr {
                        style: "background: #1E3A5F; color: white; position: sticky; top: 0;",
                        for column in SortKey::ALL {
                            th {
                                key: "{column}",
                                class: "{header_class(sort, column)}",
                                "data-sort": "{column}",
                                style: HEADER_STYLE,
                                onclick: move |_| on_event.call(ViewEvent::HeaderActivated(column)),
                                "{column.label()}{header_arrow(sort, column)}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        {
                            let station_id = row.station_id.clone();
                            rsx! {
                                tr {
                                    key: "{row.station_id}",
                                    class: "{row.css_class()}",
                                    "data-station-id": "{row.station_id}",
                                    style: row_style(row),
                                    onclick: move |_| on_event.call(ViewEvent::RowActivated(station_id.clone())),
                                    td { style: CELL_STYLE, "{row.station_id}" }
                                    td { style: CELL_STYLE, title: "{row.full_name}", "{row.name}" }
                                    td { style: CELL_STYLE, "{row.nitrate}" }
                                    td { style: CELL_STYLE, "{row.loading}" }
                                    td { style: CELL_STYLE, "{row.drainage}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
