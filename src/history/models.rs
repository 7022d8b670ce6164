//! Wire models for the query history endpoint.
//!
//! These types mirror the JSON the notebook backend returns from
//! `/notebook/api/get_history`. Field names on the wire are camelCase and
//! are mapped onto snake_case here via serde renames. Each value is a
//! transient parse of a response body; nothing is persisted client-side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Execution status of a previously run statement.
///
/// Values come from the editor's execution engine. Unrecognized server
/// values decode to [`ExecutionStatus::Unknown`] rather than failing the
/// whole history response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    /// Results are available for fetching.
    Available,
    /// Execution failed.
    Failed,
    /// Execution finished successfully.
    Success,
    /// The result set has expired server-side.
    Expired,
    /// The statement is currently executing.
    Running,
    /// Results are being streamed.
    Streaming,
    /// Execution is starting up.
    Starting,
    /// Queued, waiting for execution.
    Waiting,
    /// Parsed and ready to execute.
    Ready,
    /// Execution was cancelled by the user.
    Canceled,
    /// The session backing the execution was closed.
    Closed,
    /// Any status value this client does not know about.
    #[serde(other)]
    Unknown,
}

impl ExecutionStatus {
    /// Whether this status is terminal, i.e. execution will not progress
    /// further without being re-run.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionStatus::Available
                | ExecutionStatus::Failed
                | ExecutionStatus::Success
                | ExecutionStatus::Expired
                | ExecutionStatus::Canceled
                | ExecutionStatus::Closed
        )
    }

    /// Whether execution ended in failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, ExecutionStatus::Failed)
    }
}

/// Execution metadata attached to a history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntryData {
    /// When the statement was last executed.
    ///
    /// Epoch milliseconds on the wire.
    #[serde(rename = "lastExecuted", with = "chrono::serde::ts_milliseconds")]
    pub last_executed: DateTime<Utc>,

    /// UUID of the saved query this execution belongs to, empty when the
    /// statement was run ad hoc.
    #[serde(rename = "parentSavedQueryUuid", default)]
    pub parent_saved_query_uuid: String,

    /// The executed statement text.
    pub statement: String,

    /// Execution status at the time the history was recorded.
    pub status: ExecutionStatus,
}

/// A single record of a previously executed or saved query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Numeric document id.
    pub id: i64,

    /// Document UUID.
    pub uuid: String,

    /// Display name of the document.
    pub name: String,

    /// Document type, e.g. `query-hive`.
    #[serde(rename = "type")]
    pub doc_type: String,

    /// URL of the document within the web application.
    #[serde(rename = "absoluteUrl")]
    pub absolute_url: String,

    /// Execution metadata.
    pub data: HistoryEntryData,
}

/// Response body of the history endpoint.
///
/// `history` is ordered as the server returned it; no client-side reordering
/// is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchHistoryResponse {
    /// Total number of matching documents, across all pages.
    pub count: u64,

    /// The requested page of history entries.
    pub history: Vec<HistoryEntry>,

    /// Human-readable server message.
    pub message: String,

    /// Numeric server result code, 0 on success.
    pub status: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry_json() -> &'static str {
        r#"{
            "id": 42,
            "uuid": "c3e9674f-6b6c-4b9c-a5a8-3b8a9d2f1e00",
            "name": "My query",
            "type": "query-hive",
            "absoluteUrl": "/editor?editor=42",
            "data": {
                "lastExecuted": 1581610131116,
                "parentSavedQueryUuid": "8a20da5f-b69e-4843-b17d-dea5c74c41d1",
                "statement": "SELECT 1;",
                "status": "available"
            }
        }"#
    }

    #[test]
    fn test_history_entry_deserialization() {
        let entry: HistoryEntry = serde_json::from_str(sample_entry_json()).unwrap();

        assert_eq!(entry.id, 42);
        assert_eq!(entry.doc_type, "query-hive");
        assert_eq!(entry.absolute_url, "/editor?editor=42");
        assert_eq!(entry.data.statement, "SELECT 1;");
        assert_eq!(entry.data.status, ExecutionStatus::Available);
        assert_eq!(
            entry.data.last_executed,
            Utc.timestamp_millis_opt(1581610131116).unwrap()
        );
    }

    #[test]
    fn test_history_entry_missing_parent_uuid_defaults_empty() {
        let json = r#"{
            "id": 1,
            "uuid": "u",
            "name": "n",
            "type": "query-impala",
            "absoluteUrl": "/editor?editor=1",
            "data": {
                "lastExecuted": 0,
                "statement": "SELECT 2;",
                "status": "failed"
            }
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.data.parent_saved_query_uuid.is_empty());
        assert!(entry.data.status.is_failed());
    }

    #[test]
    fn test_execution_status_unknown_values_do_not_fail() {
        let status: ExecutionStatus = serde_json::from_str(r#""some-future-status""#).unwrap();
        assert_eq!(status, ExecutionStatus::Unknown);
    }

    #[test]
    fn test_execution_status_terminal() {
        assert!(ExecutionStatus::Success.is_terminal());
        assert!(ExecutionStatus::Canceled.is_terminal());
        assert!(!ExecutionStatus::Running.is_terminal());
        assert!(!ExecutionStatus::Waiting.is_terminal());
    }

    #[test]
    fn test_response_deserialization() {
        let json = format!(
            r#"{{"count": 123, "history": [{}], "message": "", "status": 0}}"#,
            sample_entry_json()
        );
        let response: FetchHistoryResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.count, 123);
        assert_eq!(response.history.len(), 1);
        assert_eq!(response.status, 0);
    }

    #[test]
    fn test_entry_serialization_round_trips_wire_names() {
        let entry: HistoryEntry = serde_json::from_str(sample_entry_json()).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("absoluteUrl"));
        assert!(json.contains("lastExecuted"));
        assert!(json.contains("parentSavedQueryUuid"));
    }
}
