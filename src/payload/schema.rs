use std::sync::Arc;

use anyhow::anyhow;
use jsonschema::{JSONSchema, SchemaResolver, SchemaResolverError};
use serde_json::Value;
use url::Url;

/// included resource schemas, shipped with the crate
static ANALYSIS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/schema/analysis.json"));
static PROPERTY_MAP: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/schema/propertymap.json"));
static USER_COMPACT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/schema/usercompact.json"));

/// Compile the shipped schema for the analysis resource
pub fn analysis_schema() -> JSONSchema {
    compile_schema(ANALYSIS)
}

/// Compile the shipped schema for the property map resource
pub fn property_map_schema() -> JSONSchema {
    compile_schema(PROPERTY_MAP)
}

/// Compile the shipped schema for the compact user reference
pub fn user_compact_schema() -> JSONSchema {
    compile_schema(USER_COMPACT)
}

fn compile_schema(raw: &str) -> JSONSchema {
    let schema: Value = serde_json::from_str(raw).expect("Valid JSON");
    JSONSchema::options()
        .with_resolver(EmbeddedResolver)
        .compile(&schema)
        .expect("Valid schema")
}

/*
Resolver for references between the shipped schemas
The schemas refer to each other with a json-schema scheme and a bare file name
Unknown schemes are rejected so nothing ever resolves over the network
*/
struct EmbeddedResolver;

impl SchemaResolver for EmbeddedResolver {
    fn resolve(&self, _root_schema: &Value, url: &Url, _original_reference: &str) -> Result<Arc<Value>, SchemaResolverError> {
        match url.scheme() {
            "json-schema" => {
                let raw = match url.path() {
                    "analysis.json" => ANALYSIS,
                    "propertymap.json" => PROPERTY_MAP,
                    "usercompact.json" => USER_COMPACT,
                    other => return Err(anyhow!("no embedded schema named {other}")),
                };
                Ok(Arc::new(serde_json::from_str(raw).expect("Valid JSON")))
            }
            _ => Err(anyhow!("scheme is not supported"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_schemas_compile() {
        analysis_schema();
        property_map_schema();
        user_compact_schema();
    }

    #[test]
    fn analysis_schema_follows_the_user_reference() {
        let schema = analysis_schema();
        let json = serde_json::json!({
            "Id": "A1",
            "UserOwnedBy": { "Id": 42 }
        });
        assert!(schema.validate(&json).is_err());
    }
}
