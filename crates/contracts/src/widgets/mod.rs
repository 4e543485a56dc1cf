//! Dashboard widget definitions and their data series.
//!
//! The widget list is fetched once per dashboard mount; every widget's
//! series is then fetched independently and replaces the prior value
//! wholesale.

use serde::{Deserialize, Serialize};

/// How a widget's series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

/// A named chart definition with an associated remote data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "chartType")]
    pub chart_type: ChartKind,
}

/// One (value, label) pair of a widget series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetPoint {
    pub value: f64,
    pub label: String,
}

/// The series behind one widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetData {
    #[serde(rename = "widgetId")]
    pub widget_id: String,
    #[serde(default)]
    pub points: Vec<WidgetPoint>,
}

impl WidgetData {
    /// Splits the points into the parallel value/label arrays the chart
    /// component consumes.
    pub fn series(&self) -> (Vec<f64>, Vec<String>) {
        let values = self.points.iter().map(|p| p.value).collect();
        let labels = self.points.iter().map(|p| p.label.clone()).collect();
        (values, labels)
    }
}

/// The widget list endpoint answers either a bare array or `{widgets}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WidgetListEnvelope {
    Bare(Vec<Widget>),
    Wrapped { widgets: Vec<Widget> },
}

impl WidgetListEnvelope {
    pub fn into_widgets(self) -> Vec<Widget> {
        match self {
            WidgetListEnvelope::Bare(widgets) => widgets,
            WidgetListEnvelope::Wrapped { widgets } => widgets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_kind_uses_lowercase_tags() {
        let widget: Widget = serde_json::from_str(
            r#"{"id": "w1", "name": "Revenue", "chartType": "line"}"#,
        )
        .unwrap();
        assert_eq!(widget.chart_type, ChartKind::Line);
        assert!(serde_json::from_str::<Widget>(
            r#"{"id": "w2", "name": "Split", "chartType": "donut"}"#
        )
        .is_err());
    }

    #[test]
    fn series_splits_into_parallel_arrays() {
        let data: WidgetData = serde_json::from_str(
            r#"{"widgetId": "w1", "points": [
                {"value": 4200.0, "label": "Jan"},
                {"value": 5100.0, "label": "Feb"}
            ]}"#,
        )
        .unwrap();
        let (values, labels) = data.series();
        assert_eq!(values, vec![4200.0, 5100.0]);
        assert_eq!(labels, vec!["Jan", "Feb"]);
    }

    #[test]
    fn widget_list_accepts_both_shapes() {
        let bare = r#"[{"id": "w1", "name": "A", "chartType": "pie"}]"#;
        let wrapped = r#"{"widgets": [{"id": "w1", "name": "A", "chartType": "bar"}]}"#;
        let list: WidgetListEnvelope = serde_json::from_str(bare).unwrap();
        assert_eq!(list.into_widgets().len(), 1);
        let list: WidgetListEnvelope = serde_json::from_str(wrapped).unwrap();
        assert_eq!(list.into_widgets()[0].chart_type, ChartKind::Bar);
    }
}
