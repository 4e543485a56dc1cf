//! API client for the reports service.
//!
//! Every failure collapses to a single user-visible string per fetch
//! site: the backend `message` verbatim when one is present, a generic
//! fallback otherwise. Nothing is retried.

use crate::shared::api_utils::{api_url, response_error};
use contracts::reports::{Report, ReportData, ReportListEnvelope};
use gloo_net::http::Request;

const REPORTS_FALLBACK: &str = "Failed to fetch reports. Please try again later.";
const REPORT_DATA_FALLBACK: &str = "Failed to fetch report data. Please try again later.";

/// Fetches the report metadata list (`GET /reports/reports`).
pub async fn fetch_reports() -> Result<Vec<Report>, String> {
    let resp = Request::get(&api_url("/reports/reports"))
        .send()
        .await
        .map_err(|e| {
            log::error!("report list request failed: {e}");
            REPORTS_FALLBACK.to_string()
        })?;
    if !resp.ok() {
        return Err(response_error(resp, REPORTS_FALLBACK).await);
    }
    let body = resp.text().await.map_err(|e| {
        log::error!("report list body unreadable: {e}");
        REPORTS_FALLBACK.to_string()
    })?;
    serde_json::from_str::<ReportListEnvelope>(&body)
        .map(ReportListEnvelope::into_reports)
        .map_err(|e| {
            log::warn!("report list shape not recognized: {e}");
            REPORTS_FALLBACK.to_string()
        })
}

/// Fetches one page of report data
/// (`GET /reports/{id}?count={n}&page={p}`), decoding through the
/// shape-tolerant envelope.
pub async fn fetch_report_data(
    report_id: &str,
    page: u32,
    count: u32,
) -> Result<ReportData, String> {
    let url = api_url(&format!(
        "/reports/{}?count={}&page={}",
        urlencoding::encode(report_id),
        count,
        page
    ));
    let resp = Request::get(&url).send().await.map_err(|e| {
        log::error!("report data request failed: {e}");
        REPORT_DATA_FALLBACK.to_string()
    })?;
    if !resp.ok() {
        return Err(response_error(resp, REPORT_DATA_FALLBACK).await);
    }
    let body = resp.text().await.map_err(|e| {
        log::error!("report data body unreadable: {e}");
        REPORT_DATA_FALLBACK.to_string()
    })?;
    ReportData::from_json(&body, page).map_err(|e| {
        log::warn!("report {report_id}: {e}");
        REPORT_DATA_FALLBACK.to_string()
    })
}
