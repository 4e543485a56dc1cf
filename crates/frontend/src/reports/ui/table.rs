//! Paginated, selectable table for the selected report.

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use contracts::reports::{ReportData, ReportDataItem, ReportField};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Text rendered for a schema key of a row: `-` for values the row does
/// not carry (and for nulls), strings verbatim, everything else through
/// its JSON representation.
pub fn cell_text(item: &ReportDataItem, key: &str) -> String {
    match item.value(key) {
        None | Some(serde_json::Value::Null) => "-".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// True while the user has an actual text range selected; row clicks are
/// ignored then so selecting text for copy/paste does not toggle rows.
fn has_active_text_selection() -> bool {
    web_sys::window()
        .and_then(|w| w.get_selection().ok().flatten())
        .map(|sel| sel.type_() == "Range")
        .unwrap_or(false)
}

/// Table over the current page of the selected report.
///
/// Columns are exactly the schema fields in schema order, never inferred
/// from the data rows. Loading, error, and empty states are terminal and
/// take precedence over the table render, in that order.
#[component]
pub fn ReportTable(
    /// Column schema of the selected report, in display order
    #[prop(into)]
    fields: Signal<Vec<ReportField>>,
    /// Current page of data with its pagination, if loaded
    #[prop(into)]
    report_data: Signal<Option<ReportData>>,
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Row ids currently marked for export
    #[prop(into)]
    selected_ids: Signal<HashSet<String>>,
    #[prop(into)]
    page_size: Signal<u32>,
    on_toggle_row: Callback<String>,
    on_clear_selection: Callback<()>,
    on_export: Callback<()>,
    on_page_change: Callback<u32>,
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    // "Unselect all" is destructive enough to warrant a confirmation.
    let handle_clear = move |_: leptos::ev::MouseEvent| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Unselect all rows?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            on_clear_selection.run(());
        }
    };

    let rendered = move || -> AnyView {
        if loading.get() {
            return view! {
                <div class="report-table__loading">
                    <Spinner/>
                </div>
            }
            .into_any();
        }

        if let Some(message) = error.get() {
            return view! { <div class="error-banner">{message}</div> }.into_any();
        }

        let Some(data) = report_data.get() else {
            return empty_state();
        };
        if data.data.is_empty() {
            return empty_state();
        }

        let fields = fields.get();
        let selected = selected_ids.get();

        let selection_bar = (!selected.is_empty()).then(|| {
            view! {
                <div class="selection-bar">
                    <span class="selection-bar__count">
                        {format!("{} selected", selected.len())}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_export.run(())
                    >
                        {icon("download")}
                        "Export JSON"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=handle_clear>
                        "Unselect all"
                    </Button>
                </div>
            }
        });

        let header_cells = fields
            .iter()
            .map(|field| {
                view! { <th scope="col">{field.label.clone()}</th> }
            })
            .collect_view();

        let rows = data
            .data
            .iter()
            .map(|item| {
                let row_id = item.id.clone();
                let is_selected = selected.contains(&row_id);
                let cells = fields
                    .iter()
                    .map(|field| {
                        view! { <td>{cell_text(item, &field.key)}</td> }
                    })
                    .collect_view();
                view! {
                    <tr
                        class=if is_selected { "row row--selected" } else { "row" }
                        on:click=move |_| {
                            if has_active_text_selection() {
                                return;
                            }
                            on_toggle_row.run(row_id.clone());
                        }
                    >
                        {cells}
                    </tr>
                }
            })
            .collect_view();

        view! {
            {selection_bar}
            <div class="report-table__scroll">
                <table class="data-table">
                    <thead>
                        <tr>{header_cells}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <PaginationControls
                pagination=data.pagination.clone()
                page_size=page_size.get()
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        }
        .into_any()
    };

    view! { <div class="report-table">{rendered}</div> }
}

fn empty_state() -> AnyView {
    view! {
        <div class="report-table__empty">
            <p>"No data available for this report."</p>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(json: serde_json::Value) -> ReportDataItem {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn missing_and_null_values_render_as_placeholder() {
        let row = item(serde_json::json!({ "_id": "1", "name": "A", "gone": null }));
        assert_eq!(cell_text(&row, "absent"), "-");
        assert_eq!(cell_text(&row, "gone"), "-");
    }

    #[test]
    fn strings_render_verbatim_and_the_rest_as_json() {
        let row = item(serde_json::json!({
            "_id": "1",
            "name": "Quarterly",
            "total": 42,
            "open": true,
            "customer": {"id": "c1", "city": "Austin"},
            "tags": ["a", "b"]
        }));
        assert_eq!(cell_text(&row, "name"), "Quarterly");
        assert_eq!(cell_text(&row, "total"), "42");
        assert_eq!(cell_text(&row, "open"), "true");
        // serde_json maps iterate in key order.
        assert_eq!(cell_text(&row, "customer"), r#"{"city":"Austin","id":"c1"}"#);
        assert_eq!(cell_text(&row, "tags"), r#"["a","b"]"#);
    }

    #[test]
    fn identifier_and_metadata_keys_never_render_as_cells() {
        let row = item(serde_json::json!({ "_id": "1", "__v": 2, "name": "A" }));
        assert_eq!(cell_text(&row, "_id"), "-");
        assert_eq!(cell_text(&row, "__v"), "-");
    }
}
