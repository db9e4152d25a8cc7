use jsonschema::JSONSchema;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Stage at which decoding a server payload failed
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON")]
    JsonDecode(#[source] serde_json::Error),
    #[error("payload fails schema validation")]
    JsonValidation,
    #[error("payload does not match the resource shape")]
    Deserialization(#[source] serde_json::Error),
}

/// A raw response body paired with the schema it must satisfy.
///
/// Deserialisation is staged: the body is parsed into untyped JSON first,
/// validated against the resource schema, and only then deserialised into a
/// typed model. Invalid payloads never reach the models.
pub struct ResponsePayload<'a> {
    pub body: String,
    pub compiled_schema: &'a JSONSchema,
}

impl<'a> ResponsePayload<'a> {
    pub fn new<S: Into<String>>(body: S, compiled_schema: &'a JSONSchema) -> ResponsePayload<'a> {
        ResponsePayload {
            body: body.into(),
            compiled_schema,
        }
    }

    /// Parse, validate, and deserialise the body into a typed model
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, PayloadError> {
        let json: Value = self.parse_untyped_json()?;

        match self.validate(&json) {
            Ok(_) => {
                info!("Payload is valid");
                self.parse_json(json)
            }
            Err(err) => {
                warn!("Payload fails validation");
                Err(err)
            }
        }
    }

    fn validate(&self, json: &Value) -> Result<(), PayloadError> {
        info!("Validating raw payload against JSON schema");
        match self.compiled_schema.validate(json) {
            Ok(_) => Ok(()),
            Err(_) => Err(PayloadError::JsonValidation),
        }
    }

    fn parse_json<T: DeserializeOwned>(&self, value: Value) -> Result<T, PayloadError> {
        info!("Deserialising valid JSON into typed model");
        // from_value is a generic function, so request the model type specifically
        serde_json::from_value::<T>(value).map_err(PayloadError::Deserialization)
    }

    fn parse_untyped_json(&self) -> Result<Value, PayloadError> {
        info!("Parsing JSON into untyped structure");
        serde_json::from_str::<Value>(&self.body).map_err(PayloadError::JsonDecode)
    }
}
