//! Types shared across endpoints.

use serde::{Deserialize, Serialize};

/// Error body the service attaches to non-2xx responses. `message` is
/// surfaced to the user verbatim when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_unknown_fields_and_missing_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"code": 500, "message": "boom"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("boom"));
        let body: ApiErrorBody = serde_json::from_str(r#"{"code": 500}"#).unwrap();
        assert!(body.message.is_none());
    }
}
