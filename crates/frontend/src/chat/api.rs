//! API client for the free-text query endpoint.

use crate::shared::api_utils::{api_url, response_error};
use contracts::chat::{ChatRequest, ChatResponse};
use gloo_net::http::Request;

const CHAT_FALLBACK: &str = "Oops! Something went wrong. Please try again.";

/// Posts a free-text query (`POST /chats`). On failure the backend's
/// `message` is surfaced verbatim when present.
pub async fn send_chat_query(query: &str) -> Result<ChatResponse, String> {
    let resp = Request::post(&api_url("/chats"))
        .json(&ChatRequest {
            query: query.to_string(),
        })
        .map_err(|e| format!("Network error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;
    if !resp.ok() {
        return Err(response_error(resp, CHAT_FALLBACK).await);
    }
    resp.json::<ChatResponse>().await.map_err(|e| {
        log::warn!("chat response shape not recognized: {e}");
        CHAT_FALLBACK.to_string()
    })
}
