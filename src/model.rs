//! Typed resource models mirroring the server-side schemas

/// The analysis resource and its delegating operations
pub mod analysis;
/// File resources attached to an analysis
pub mod file;
/// Property map resources
pub mod property_map;
/// Sorting and paging parameters for list endpoints
pub mod query;
/// Lifecycle status and access scopes
pub mod status;
/// Multipart upload options and handle
pub mod upload;
/// Compact user references
pub mod user;
