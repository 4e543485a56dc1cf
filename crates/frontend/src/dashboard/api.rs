//! API client for the dashboard widgets.

use crate::shared::api_utils::{api_url, response_error};
use contracts::widgets::{Widget, WidgetData, WidgetListEnvelope};
use gloo_net::http::Request;

const WIDGETS_FALLBACK: &str = "Failed to fetch widgets. Please try again later.";
const WIDGET_DATA_FALLBACK: &str = "Failed to fetch widget data. Please try again later.";

/// Fetches the widget definitions (`GET /reports/widgets`).
pub async fn fetch_widgets() -> Result<Vec<Widget>, String> {
    let resp = Request::get(&api_url("/reports/widgets"))
        .send()
        .await
        .map_err(|e| {
            log::error!("widget list request failed: {e}");
            WIDGETS_FALLBACK.to_string()
        })?;
    if !resp.ok() {
        return Err(response_error(resp, WIDGETS_FALLBACK).await);
    }
    let body = resp.text().await.map_err(|e| {
        log::error!("widget list body unreadable: {e}");
        WIDGETS_FALLBACK.to_string()
    })?;
    serde_json::from_str::<WidgetListEnvelope>(&body)
        .map(WidgetListEnvelope::into_widgets)
        .map_err(|e| {
            log::warn!("widget list shape not recognized: {e}");
            WIDGETS_FALLBACK.to_string()
        })
}

/// Fetches one widget's series (`GET /reports/widgets/{id}`).
pub async fn fetch_widget_data(widget_id: &str) -> Result<WidgetData, String> {
    let url = api_url(&format!(
        "/reports/widgets/{}",
        urlencoding::encode(widget_id)
    ));
    let resp = Request::get(&url).send().await.map_err(|e| {
        log::error!("widget data request failed: {e}");
        WIDGET_DATA_FALLBACK.to_string()
    })?;
    if !resp.ok() {
        return Err(response_error(resp, WIDGET_DATA_FALLBACK).await);
    }
    resp.json::<WidgetData>().await.map_err(|e| {
        log::warn!("widget {widget_id} data shape not recognized: {e}");
        WIDGET_DATA_FALLBACK.to_string()
    })
}
