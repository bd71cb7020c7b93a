//! Wire types for traces and the tree-shaped trace summary.

use super::tree::{build_observation_tree, ObservationNode};
use crate::observations::Observation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Trace-level fields shared by `Trace` and `TraceTree`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceHeader {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub input: serde_json::Value,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub output: serde_json::Value,

    pub timestamp: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub public: bool,

    #[serde(default)]
    pub project_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default)]
    pub bookmarked: bool,

    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub external_id: serde_json::Value,

    /// Seconds between the first observation start and the last end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scores: Vec<serde_json::Value>,
}

/// A trace as returned by `GET /api/public/traces/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(flatten)]
    pub header: TraceHeader,

    /// Flat, unordered observation list
    #[serde(default)]
    pub observations: Vec<Observation>,
}

/// A trace with its observations rebuilt into a forest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceTree {
    #[serde(flatten)]
    pub header: TraceHeader,

    /// Root observations ordered by start time
    #[serde(default)]
    pub root_node: Vec<ObservationNode>,
}

impl Trace {
    /// Build the trace tree, consuming the trace
    pub fn into_trace_tree(self) -> TraceTree {
        TraceTree {
            header: self.header,
            root_node: build_observation_tree(self.observations),
        }
    }

    /// Build the trace tree from a borrowed trace
    pub fn to_trace_tree(&self) -> TraceTree {
        self.clone().into_trace_tree()
    }
}

/// Request body for creating a trace
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTraceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

/// Request body for updating a trace
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTraceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_tree_passes_header_through() {
        let raw = json!({
            "id": "trace-1",
            "name": "chat-request",
            "projectId": "proj",
            "timestamp": "2024-05-01T10:00:00Z",
            "tags": ["prod"],
            "totalCost": 0.5,
            "latency": 1.25,
            "observations": [
                { "id": "child", "parentObservationId": "root", "type": "SPAN",
                  "startTime": "2024-05-01T10:00:01Z" },
                { "id": "root", "type": "SPAN", "startTime": "2024-05-01T10:00:00Z" }
            ]
        });

        let trace: Trace = serde_json::from_value(raw).unwrap();
        let header = trace.header.clone();
        let tree = trace.into_trace_tree();

        assert_eq!(tree.header, header);
        assert_eq!(tree.root_node.len(), 1);
        assert_eq!(tree.root_node[0].observation.id, "root");
        assert_eq!(tree.root_node[0].children[0].observation.id, "child");
    }

    #[test]
    fn test_trace_tree_json_shape() {
        let trace: Trace = serde_json::from_value(json!({
            "id": "trace-1",
            "timestamp": "2024-05-01T10:00:00Z",
            "observations": [
                { "id": "leaf", "type": "EVENT", "startTime": "2024-05-01T10:00:00Z" }
            ]
        }))
        .unwrap();

        let value = serde_json::to_value(trace.to_trace_tree()).unwrap();

        assert_eq!(value["id"], "trace-1");
        assert!(value.get("observations").is_none());
        assert_eq!(value["rootNode"][0]["id"], "leaf");
        assert_eq!(value["rootNode"][0]["type"], "EVENT");
        // Leaves carry no children key
        assert!(value["rootNode"][0].get("children").is_none());
    }

    #[test]
    fn test_create_request_skips_unset_fields() {
        let request = CreateTraceRequest {
            name: Some("job".to_string()),
            user_id: Some("user-1".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "name": "job", "userId": "user-1" })
        );
    }
}
