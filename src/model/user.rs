use std::fmt;

use serde::{Deserialize, Serialize};

/// Compact reference to the user owning a resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserCompact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Attribute map: wire name and schema type of every serialisable field
pub const ATTRIBUTE_TYPES: &[(&str, &str)] = &[
    ("Id", "string"),
    ("Name", "string"),
    ("Href", "string"),
];

impl fmt::Display for UserCompact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or("(unnamed)"))
    }
}
