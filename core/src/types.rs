//! Domain DTOs for the file API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Wire names are camelCase to match the backend's JSON. `converted` and
//! `s3Url` are owned by the backend's conversion pipeline; the client carries
//! them through create/update payloads but never computes them. Integration
//! tests catch any schema drift between the two crates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single file record returned by the API.
///
/// `id` is present if and only if the record has been persisted; the backend
/// assigns it on create and the client never invents one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub file_name: String,
    pub file_type: String,
    pub last_modified: NaiveDate,
    #[serde(default)]
    pub converted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_url: Option<String>,
    pub category: String,
}

/// Request payload for creating a new file. Carries no `id` field at all, so
/// a client-invented identifier cannot even be serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFile {
    pub file_name: String,
    pub file_type: String,
    pub last_modified: NaiveDate,
    #[serde(default)]
    pub converted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_url: Option<String>,
    pub category: String,
}

/// Request payload for partially updating an existing file. Only the fields
/// present in the JSON are applied; omitted fields remain unchanged on the
/// server. The backend requires the body `id` to match the path id, so the
/// client sets it from the path when building the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn file_serializes_with_camel_case_wire_names() {
        let file = File {
            id: Some(7),
            file_name: "report.docx".to_string(),
            file_type: "docx".to_string(),
            last_modified: date("2025-01-07"),
            converted: true,
            s3_url: Some("s3://bucket/report.pdf".to_string()),
            category: "reports".to_string(),
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["fileName"], "report.docx");
        assert_eq!(json["fileType"], "docx");
        assert_eq!(json["lastModified"], "2025-01-07");
        assert_eq!(json["converted"], true);
        assert_eq!(json["s3Url"], "s3://bucket/report.pdf");
        assert_eq!(json["category"], "reports");
    }

    #[test]
    fn file_without_id_omits_the_field() {
        let file = File {
            id: None,
            file_name: "a".to_string(),
            file_type: "b".to_string(),
            last_modified: date("2025-01-07"),
            converted: false,
            s3_url: None,
            category: "c".to_string(),
        };
        let json = serde_json::to_value(&file).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("s3Url").is_none());
    }

    #[test]
    fn file_roundtrips_through_json() {
        let file = File {
            id: Some(1),
            file_name: "scan.pdf".to_string(),
            file_type: "pdf".to_string(),
            last_modified: date("2024-12-31"),
            converted: false,
            s3_url: None,
            category: "scans".to_string(),
        };
        let json = serde_json::to_string(&file).unwrap();
        let back: File = serde_json::from_str(&json).unwrap();
        assert_eq!(back, file);
    }

    #[test]
    fn file_defaults_converted_to_false() {
        let file: File = serde_json::from_str(
            r#"{"id":1,"fileName":"a","fileType":"b","lastModified":"2025-01-07","category":"c"}"#,
        )
        .unwrap();
        assert!(!file.converted);
        assert!(file.s3_url.is_none());
    }

    #[test]
    fn file_rejects_missing_file_name() {
        let result: Result<File, _> =
            serde_json::from_str(r#"{"fileType":"b","lastModified":"2025-01-07","category":"c"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_file_has_no_id_on_the_wire() {
        let input = NewFile {
            file_name: "a".to_string(),
            file_type: "b".to_string(),
            last_modified: date("2025-01-07"),
            converted: false,
            s3_url: None,
            category: "c".to_string(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["lastModified"], "2025-01-07");
    }

    #[test]
    fn patch_skips_absent_fields() {
        let patch = FilePatch {
            id: Some(3),
            category: Some("archive".to_string()),
            ..FilePatch::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["category"], "archive");
        assert!(json.get("fileName").is_none());
        assert!(json.get("lastModified").is_none());
        assert!(json.get("converted").is_none());
    }
}
