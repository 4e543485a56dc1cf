//! Report schemas, paged report data, and response-shape normalization.
//!
//! Reports are created server-side and read-only to the UI: a `Report`
//! describes the dataset (ordered field schema, filters, searchable keys)
//! and `ReportData` is one page of rows plus server-computed pagination.
//!
//! The service is not consistent about its payload shape, so the network
//! boundary decodes through [`ReportDataEnvelope`] — an explicit union of
//! every tolerated shape — instead of duck-typing the JSON at call sites.
//! A payload matching none of the shapes is a [`ReportDataError`], not a
//! silent guess.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One column of a report schema: key into the row map, display label,
/// and the server-side type tag (opaque to the UI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportField {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A single allowed value of a report filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterValue {
    pub key: String,
    pub value: String,
}

/// A server-defined filter attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub name: String,
    #[serde(rename = "type")]
    pub filter_type: String,
    #[serde(default)]
    pub values: Vec<FilterValue>,
    pub field: String,
}

/// A named, schema-described tabular dataset retrievable in pages.
///
/// `fields` order is authoritative: the table renders exactly these
/// columns in exactly this order, regardless of which keys the data rows
/// happen to carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<ReportField>,
    #[serde(default)]
    pub filters: Vec<ReportFilter>,
    #[serde(default)]
    pub searchable: Vec<String>,
}

/// Version stamp carried in row metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportVersion {
    pub release: String,
    pub document: i64,
}

/// Server-side metadata attached to a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    #[serde(default)]
    pub deleted: bool,
    pub version: ReportVersion,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// One row of report data.
///
/// Values are heterogeneous (string, number, nested object); everything
/// except the identifier and metadata lands in the flattened `values` map
/// and is looked up by schema field key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDataItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReportMetadata>,
    #[serde(rename = "__v", default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<i64>,
    #[serde(flatten)]
    pub values: serde_json::Map<String, Value>,
}

impl ReportDataItem {
    /// Looks up a field value by schema key. `None` means the row does
    /// not carry the field at all.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// Server-computed paging metadata.
///
/// `has_next_page`/`has_prev_page` are recomputed by the server per
/// request; the client never derives them from `page`/`total_pages`
/// arithmetic. The only place they are synthesized is
/// [`ReportPagination::single_page`], the fallback for payloads that
/// carry no pagination at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPagination {
    pub page: u32,
    pub count: u32,
    pub total_count: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl ReportPagination {
    /// Single-page fallback: everything that was returned is the whole
    /// result set.
    pub fn single_page(page: u32, len: usize) -> Self {
        Self {
            page,
            count: len as u32,
            total_count: len as u64,
            total_pages: 1,
            has_next_page: false,
            has_prev_page: page > 1,
        }
    }
}

/// One page of report rows plus its pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub data: Vec<ReportDataItem>,
    pub pagination: ReportPagination,
}

/// Raised when a report payload matches none of the accepted shapes.
#[derive(Debug, thiserror::Error)]
pub enum ReportDataError {
    #[error("unrecognized report response shape: {0}")]
    UnrecognizedShape(String),
}

/// The tolerated wire shapes for report data, tried in order:
/// `{data, pagination}`, `{items, paging?}`, `{results}`, `{data}` with
/// no pagination, or a bare row array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReportDataEnvelope {
    Paged {
        data: Vec<ReportDataItem>,
        pagination: ReportPagination,
    },
    Items {
        items: Vec<ReportDataItem>,
        #[serde(default)]
        paging: Option<ReportPagination>,
    },
    Results {
        results: Vec<ReportDataItem>,
    },
    DataOnly {
        data: Vec<ReportDataItem>,
    },
    Bare(Vec<ReportDataItem>),
}

impl ReportDataEnvelope {
    /// Collapses the envelope into the canonical `{data, pagination}`
    /// form, synthesizing a single-page pagination when the payload
    /// carried none. `requested_page` is the page number the client
    /// asked for, used only by the synthesized fallback.
    pub fn normalize(self, requested_page: u32) -> ReportData {
        match self {
            ReportDataEnvelope::Paged { data, pagination } => ReportData { data, pagination },
            ReportDataEnvelope::Items {
                items,
                paging: Some(pagination),
            } => ReportData {
                data: items,
                pagination,
            },
            ReportDataEnvelope::Items { items, paging: None } => {
                let pagination = ReportPagination::single_page(requested_page, items.len());
                ReportData {
                    data: items,
                    pagination,
                }
            }
            ReportDataEnvelope::Results { results } => {
                let pagination = ReportPagination::single_page(requested_page, results.len());
                ReportData {
                    data: results,
                    pagination,
                }
            }
            ReportDataEnvelope::DataOnly { data } => {
                let pagination = ReportPagination::single_page(requested_page, data.len());
                ReportData { data, pagination }
            }
            ReportDataEnvelope::Bare(data) => {
                let pagination = ReportPagination::single_page(requested_page, data.len());
                ReportData { data, pagination }
            }
        }
    }
}

impl ReportData {
    /// Decodes a raw response body into normalized report data.
    pub fn from_json(body: &str, requested_page: u32) -> Result<Self, ReportDataError> {
        let envelope: ReportDataEnvelope = serde_json::from_str(body)
            .map_err(|e| ReportDataError::UnrecognizedShape(e.to_string()))?;
        Ok(envelope.normalize(requested_page))
    }
}

/// The report list endpoint answers either a bare array or `{reports}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReportListEnvelope {
    Bare(Vec<Report>),
    Wrapped { reports: Vec<Report> },
}

impl ReportListEnvelope {
    pub fn into_reports(self) -> Vec<Report> {
        match self {
            ReportListEnvelope::Bare(reports) => reports,
            ReportListEnvelope::Wrapped { reports } => reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_direct_shape() {
        let body = r#"{
            "data": [{"_id": "1", "name": "A"}, {"_id": "2", "name": "B"}],
            "pagination": {
                "page": 1, "count": 2, "totalCount": 5, "totalPages": 3,
                "hasNextPage": true, "hasPrevPage": false
            }
        }"#;
        let report = ReportData::from_json(body, 1).unwrap();
        assert_eq!(report.data.len(), 2);
        assert_eq!(report.pagination.page, 1);
        assert_eq!(report.pagination.total_pages, 3);
        assert_eq!(report.pagination.total_count, 5);
        assert!(report.pagination.has_next_page);
        assert!(!report.pagination.has_prev_page);
    }

    #[test]
    fn decodes_items_with_paging() {
        let body = r#"{
            "items": [{"_id": "7", "amount": 12.5}],
            "paging": {
                "page": 2, "count": 1, "totalCount": 11, "totalPages": 2,
                "hasNextPage": false, "hasPrevPage": true
            }
        }"#;
        let report = ReportData::from_json(body, 2).unwrap();
        assert_eq!(report.data[0].id, "7");
        assert!(report.pagination.has_prev_page);
        assert!(!report.pagination.has_next_page);
    }

    #[test]
    fn items_without_paging_synthesizes_single_page() {
        let body = r#"{"items": [{"_id": "1"}, {"_id": "2"}, {"_id": "3"}]}"#;
        let report = ReportData::from_json(body, 1).unwrap();
        assert_eq!(report.pagination.total_pages, 1);
        assert_eq!(report.pagination.count, 3);
        assert_eq!(report.pagination.total_count, 3);
        assert!(!report.pagination.has_next_page);
        assert!(!report.pagination.has_prev_page);
    }

    #[test]
    fn results_shape_synthesizes_with_prev_flag_past_page_one() {
        let body = r#"{"results": [{"_id": "9"}]}"#;
        let report = ReportData::from_json(body, 4).unwrap();
        assert_eq!(report.pagination.page, 4);
        assert_eq!(report.pagination.total_pages, 1);
        assert!(report.pagination.has_prev_page);
        assert!(!report.pagination.has_next_page);
    }

    #[test]
    fn decodes_bare_array() {
        let body = r#"[{"_id": "1", "x": 1}, {"_id": "2", "x": 2}]"#;
        let report = ReportData::from_json(body, 1).unwrap();
        assert_eq!(report.data.len(), 2);
        assert_eq!(report.pagination.total_pages, 1);
    }

    #[test]
    fn data_without_pagination_is_accepted() {
        let body = r#"{"data": [{"_id": "1"}]}"#;
        let report = ReportData::from_json(body, 1).unwrap();
        assert_eq!(report.data.len(), 1);
        assert_eq!(report.pagination.total_pages, 1);
    }

    #[test]
    fn unrecognized_shape_is_an_error() {
        let err = ReportData::from_json(r#"{"status": "ok"}"#, 1).unwrap_err();
        assert!(matches!(err, ReportDataError::UnrecognizedShape(_)));
        let err = ReportData::from_json("\"just a string\"", 1).unwrap_err();
        assert!(matches!(err, ReportDataError::UnrecognizedShape(_)));
    }

    #[test]
    fn row_values_exclude_identifier_and_metadata() {
        let body = r#"{
            "_id": "abc",
            "__v": 3,
            "_metadata": {
                "deleted": false,
                "version": {"release": "2.4", "document": 3},
                "createdAt": "2024-05-01T10:00:00Z",
                "lastUpdated": "2024-05-02T10:00:00Z"
            },
            "name": "Order",
            "total": 42,
            "customer": {"id": "c1", "city": "Austin"}
        }"#;
        let item: ReportDataItem = serde_json::from_str(body).unwrap();
        assert_eq!(item.id, "abc");
        assert_eq!(item.revision, Some(3));
        assert!(item.metadata.as_ref().is_some_and(|m| m.version.document == 3));
        assert!(item.value("_id").is_none());
        assert!(item.value("_metadata").is_none());
        assert!(item.value("__v").is_none());
        assert_eq!(item.value("total"), Some(&Value::from(42)));
        assert!(item.value("customer").is_some_and(Value::is_object));
        assert!(item.value("missing").is_none());
    }

    #[test]
    fn report_field_order_is_preserved() {
        let body = r#"{
            "id": "orders",
            "name": "Orders",
            "fields": [
                {"key": "zeta", "label": "Zeta", "type": "string"},
                {"key": "alpha", "label": "Alpha", "type": "number"},
                {"key": "mid", "label": "Mid", "type": "object"}
            ]
        }"#;
        let report: Report = serde_json::from_str(body).unwrap();
        let keys: Vec<&str> = report.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn report_list_accepts_both_shapes() {
        let bare = r#"[{"id": "a", "name": "A"}]"#;
        let wrapped = r#"{"reports": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}]}"#;
        let list: ReportListEnvelope = serde_json::from_str(bare).unwrap();
        assert_eq!(list.into_reports().len(), 1);
        let list: ReportListEnvelope = serde_json::from_str(wrapped).unwrap();
        assert_eq!(list.into_reports().len(), 2);
    }

    #[test]
    fn row_roundtrips_through_serialization() {
        let body = r#"{"_id": "r1", "name": "A", "nested": {"k": 1}}"#;
        let item: ReportDataItem = serde_json::from_str(body).unwrap();
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["_id"], "r1");
        assert_eq!(back["name"], "A");
        assert_eq!(back["nested"]["k"], 1);
    }
}
