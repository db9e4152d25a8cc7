use std::fmt;

use serde::{Deserialize, Serialize};

/// Property map resource: named groups of key/value items hung off another
/// resource. Pure data holder, no operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PropertyMap {
    // "type" is reserved in Rust, renamed on the wire only
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Vec<PropertyMapKeyValues>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_displayed_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_total_count: Option<i64>,
}

/// Attribute map: wire name and schema type of every serialisable field
pub const ATTRIBUTE_TYPES: &[(&str, &str)] = &[
    ("Type", "string"),
    ("Href", "string"),
    ("Name", "string"),
    ("Description", "string"),
    ("Items", "list<list<PropertyMapKeyValues>>"),
    ("HrefItems", "string"),
    ("ItemsDisplayedCount", "int"),
    ("ItemsTotalCount", "int"),
];

/// One key with its list of values inside a property map
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PropertyMapKeyValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl fmt::Display for PropertyMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or("(unnamed)"))
    }
}
