//! The external API-client capability the models delegate to.
//!
//! Transport, authentication, and request plumbing all live behind
//! [`AnalysisClient`]; the model layer never builds a request itself.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::model::file::AnalysisFile;
use crate::model::query::QueryParameters;
use crate::model::status::AnalysisStatus;
use crate::model::upload::{MultipartOptions, MultipartUpload};

/// Operations the analysis model needs from a BaseSpace API client
pub trait AnalysisClient {
    /// List the files attached to an analysis
    fn analysis_files(&self, id: &str, params: &QueryParameters) -> Result<Vec<AnalysisFile>>;

    /// Ask the server to move an analysis to a new status
    fn advance_analysis_status(
        &self,
        id: &str,
        status: AnalysisStatus,
        summary: &str,
    ) -> Result<StatusUpdate>;

    /// Upload a local file to an analysis in a single request
    fn upload_analysis_file(
        &self,
        id: &str,
        local_path: &Path,
        file_name: &str,
        directory: &str,
        content_type: &str,
    ) -> Result<AnalysisFile>;

    /// Upload a local file to an analysis in parts
    fn upload_analysis_file_multipart(
        &self,
        id: &str,
        local_path: &Path,
        file_name: &str,
        directory: &str,
        content_type: &str,
        options: &MultipartOptions,
    ) -> Result<MultipartUpload>;
}

/// The only fields a status update may change on an analysis.
///
/// The server answers a status change with a full analysis resource; clients
/// deserialise just this slice of it, so the local model is updated in place
/// and a second copy of the resource never exists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusUpdate {
    pub status: AnalysisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_summary: Option<String>,
}
