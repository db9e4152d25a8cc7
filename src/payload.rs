//! Schema-validated population of models from raw server payloads

/// Decode raw response bodies into typed models
pub mod response;
/// Compiled JSON schemas for the shipped resources
pub mod schema;
