//! Helpers for constructing URLs against the reports service.
//!
//! The base path varies by deployment: in development the service sits on
//! port 3000 next to the dev server, behind the production proxy it shares
//! the page origin's host. Both cases derive from `window.location`.

/// Base URL of the reports service for the current page.
///
/// Returns an empty string when no `window` is available (non-browser
/// context), which keeps callers harmless outside the DOM.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Full URL for a service path such as `/reports/reports` or `/chats`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extracts a user-facing message from a non-2xx response: the backend's
/// `message` field verbatim when present, otherwise the given fallback
/// tagged with the status code.
pub async fn response_error(resp: gloo_net::http::Response, fallback: &str) -> String {
    let status = resp.status();
    match resp.json::<contracts::shared::ApiErrorBody>().await {
        Ok(body) => match body.message {
            Some(message) if !message.is_empty() => message,
            _ => format!("{} (HTTP {})", fallback, status),
        },
        Err(_) => format!("{} (HTTP {})", fallback, status),
    }
}
