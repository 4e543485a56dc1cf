//! Client-side export of selected report rows to a JSON download.

use contracts::reports::ReportDataItem;
use std::collections::HashSet;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// The artifact name is fixed; the selection, not the filename, carries
/// the context.
pub const EXPORT_FILENAME: &str = "selected-rows.json";

/// Serializes the selected rows in display order.
///
/// An empty selection is an error: the export control is only rendered
/// when something is selected, so reaching this with nothing picked means
/// a bug upstream, not an empty artifact to download.
pub fn selected_rows_json(
    rows: &[ReportDataItem],
    selected: &HashSet<String>,
) -> Result<String, String> {
    let picked: Vec<&ReportDataItem> = rows.iter().filter(|r| selected.contains(&r.id)).collect();
    if picked.is_empty() {
        return Err("No rows selected for export".to_string());
    }
    serde_json::to_string_pretty(&picked).map_err(|e| format!("Failed to serialize selection: {e}"))
}

/// Serializes the selection and hands it to the browser as a download
/// named [`EXPORT_FILENAME`].
pub fn export_selected_rows(
    rows: &[ReportDataItem],
    selected: &HashSet<String>,
) -> Result<(), String> {
    let json = selected_rows_json(rows, selected)?;
    let blob = create_json_blob(&json)?;
    download_blob(&blob, EXPORT_FILENAME)
}

fn create_json_blob(content: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/json");

    Blob::new_with_str_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Creates a hidden anchor pointing at an object URL, clicks it, and
/// cleans both up again.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, name: &str) -> ReportDataItem {
        serde_json::from_value(serde_json::json!({ "_id": id, "name": name })).unwrap()
    }

    #[test]
    fn serializes_only_selected_rows_in_display_order() {
        let rows = vec![row("1", "A"), row("2", "B"), row("3", "C")];
        let selected: HashSet<String> = ["3".to_string(), "1".to_string()].into();
        let json = selected_rows_json(&rows, &selected).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        let ids: Vec<&str> = parsed.iter().map(|v| v["_id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert_eq!(parsed[0]["name"], "A");
    }

    #[test]
    fn empty_selection_is_rejected() {
        let rows = vec![row("1", "A")];
        assert!(selected_rows_json(&rows, &HashSet::new()).is_err());
        // Selection referencing rows outside the current page exports
        // nothing and is rejected the same way.
        let stale: HashSet<String> = ["99".to_string()].into();
        assert!(selected_rows_json(&rows, &stale).is_err());
    }
}
