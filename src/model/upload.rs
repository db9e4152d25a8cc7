use std::path::PathBuf;

use crate::model::file::AnalysisFile;

/// Tuning knobs for a multipart upload, forwarded to the client unchanged
#[derive(Debug, Clone)]
pub struct MultipartOptions {
    /// Scratch directory for part files; the client picks one when unset
    pub temp_dir: Option<PathBuf>,
    pub cpu_count: usize,
    pub part_size_mb: u64,
    pub verbose: bool,
}

impl Default for MultipartOptions {
    fn default() -> MultipartOptions {
        MultipartOptions {
            temp_dir: None,
            cpu_count: 1,
            part_size_mb: 10,
            verbose: false,
        }
    }
}

/// Handle for a multipart upload in flight, returned by the client.
///
/// Part bookkeeping and retries happen inside the client; the model only
/// carries enough to identify the upload and the file being assembled.
#[derive(Debug, Clone)]
pub struct MultipartUpload {
    pub upload_id: String,
    pub file: AnalysisFile,
    pub part_count: u64,
}
