use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One file attached to an analysis, as returned by the file listing and
/// upload endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AnalysisFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
}

/// Attribute map: wire name and schema type of every serialisable field
pub const ATTRIBUTE_TYPES: &[(&str, &str)] = &[
    ("Id", "string"),
    ("Name", "string"),
    ("Path", "string"),
    ("Size", "int"),
    ("ContentType", "string"),
    ("Href", "string"),
    ("HrefContent", "string"),
    ("DateCreated", "datetime"),
];
