use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One file known to the backend catalog.
///
/// `id` is the sole key used for selection and de-duplication; `name` and
/// `path` may collide between records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Opaque identifier, stable across fetches
    pub id: String,
    /// Display name (not necessarily unique)
    pub name: String,
    /// Full filesystem path on the backend host
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// Short category/extension tag, e.g. "log" or "tmp"
    #[serde(rename = "type")]
    pub kind: String,
    /// Last modification timestamp
    pub last_modified: DateTime<Utc>,
}

/// Response envelope for the file listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<FileRecord>,
}

/// Request body for the cleanup endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupRequest {
    pub file_ids: Vec<String>,
    pub confirm: bool,
}

/// Summary returned by a successful cleanup.
///
/// Created only on a successful cleanup response, displayed once, then
/// discarded on the next fetch cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResult {
    pub files_removed: u64,
    pub space_freed: u64,
    /// Per-category breakdown; shape is owned by the backend
    #[serde(default)]
    pub categories: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_record_wire_format() {
        let json = r#"{
            "id": "f-42",
            "name": "core.dump",
            "path": "/var/crash/core.dump",
            "size": 734003200,
            "type": "dump",
            "lastModified": "2024-11-03T14:22:00Z"
        }"#;
        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "f-42");
        assert_eq!(record.kind, "dump");
        assert_eq!(record.size, 734_003_200);
        assert_eq!(
            record.last_modified,
            Utc.with_ymd_and_hms(2024, 11, 3, 14, 22, 0).unwrap()
        );
    }

    #[test]
    fn test_cleanup_request_wire_format() {
        let req = CleanupRequest {
            file_ids: vec!["a".to_string(), "b".to_string()],
            confirm: true,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["fileIds"], serde_json::json!(["a", "b"]));
        assert_eq!(json["confirm"], serde_json::json!(true));
    }

    #[test]
    fn test_cleanup_result_tolerates_missing_categories() {
        let json = r#"{"filesRemoved": 3, "spaceFreed": 1048576}"#;
        let result: CleanupResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.files_removed, 3);
        assert_eq!(result.space_freed, 1_048_576);
        assert!(result.categories.is_null());
    }
}
