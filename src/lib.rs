//! Client-side data models for the BaseSpace REST API.
//!
//! Typed resources mirror the server-side schemas and are populated from
//! schema-validated JSON payloads. Operations on a resource delegate to an
//! externally supplied [`AnalysisClient`]; transport, authentication, and
//! request plumbing live behind that trait, not here.

/// The external API-client capability the models delegate to
pub mod client;
/// Error types shared across the model layer
pub mod error;
/// Typed resource models
pub mod model;
/// Validate and decode raw server payloads
pub mod payload;

pub use client::{AnalysisClient, StatusUpdate};
pub use error::{ModelError, ModelResult};
pub use model::analysis::Analysis;
pub use model::status::{AccessScope, AnalysisStatus};
