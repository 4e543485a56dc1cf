//! Payloads for the free-text query endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /chats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Response of `POST /chats`. `raw_data` varies per query and stays
/// untyped; the UI only renders `natural_language_response`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub natural_language_response: Option<String>,
    #[serde(default)]
    pub generated_query: Option<String>,
    #[serde(default)]
    pub raw_data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_response() {
        let body = r#"{
            "naturalLanguageResponse": "There were 5 orders.",
            "generatedQuery": "db.orders.count()",
            "rawData": [{"n": 5}]
        }"#;
        let resp: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            resp.natural_language_response.as_deref(),
            Some("There were 5 orders.")
        );
        assert_eq!(resp.generated_query.as_deref(), Some("db.orders.count()"));
        assert!(resp.raw_data.is_array());
    }

    #[test]
    fn missing_answer_decodes_to_none() {
        let resp: ChatResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.natural_language_response.is_none());
        assert!(resp.raw_data.is_null());
    }
}
