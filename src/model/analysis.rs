use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::client::AnalysisClient;
use crate::error::ModelError;
use crate::model::file::AnalysisFile;
use crate::model::query::QueryParameters;
use crate::model::status::{AccessScope, AnalysisStatus};
use crate::model::upload::{MultipartOptions, MultipartUpload};
use crate::model::user::UserCompact;

/// Client-side copy of one analysis resource.
///
/// Populated by deserialising a server response; every field is optional
/// until then. Operations check the identifier first and fail with
/// [`ModelError::Uninitialized`] on an empty model, before anything reaches
/// the client.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Analysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AnalysisStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href_files: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href_genome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_owned_by: Option<UserCompact>,
}

/// Attribute map: wire name and schema type of every serialisable field
pub const ATTRIBUTE_TYPES: &[(&str, &str)] = &[
    ("Id", "string"),
    ("Name", "string"),
    ("Status", "string"),
    ("StatusSummary", "string"),
    ("StatusDetail", "string"),
    ("Description", "string"),
    ("DateCreated", "datetime"),
    ("Href", "string"),
    ("HrefFiles", "string"),
    ("HrefGenome", "string"),
    ("UserOwnedBy", "UserCompact"),
];

impl Analysis {
    /// Identifier guard. Every operation needs a populated model, so each
    /// one goes through here before touching the client.
    pub fn id(&self) -> Result<&str, ModelError> {
        self.id
            .as_deref()
            .ok_or(ModelError::Uninitialized { resource: "analysis" })
    }

    pub fn is_initialized(&self) -> bool {
        self.id.is_some()
    }

    /// Scope string for requesting access to this analysis
    pub fn access_scope(&self, scope: AccessScope) -> Result<String, ModelError> {
        let id = self.id()?;
        Ok(format!("{scope} analysis {id}"))
    }

    /// List the files attached to this analysis
    pub fn files<C: AnalysisClient>(
        &self,
        api: &C,
        params: &QueryParameters,
    ) -> Result<Vec<AnalysisFile>, ModelError> {
        let id = self.id()?;
        Ok(api.analysis_files(id, params)?)
    }

    /// Move the analysis to a new status on the server and mirror the result.
    ///
    /// Once an analysis is `completed` or `aborted` the server accepts no
    /// further transitions, so those are rejected locally before any request.
    /// On success only `status` and `status_summary` are copied back from the
    /// narrow update result; every other field is left untouched and the
    /// update happens in place, so a single copy of the resource exists.
    pub fn advance_status<C: AnalysisClient>(
        &mut self,
        api: &C,
        status: AnalysisStatus,
        summary: &str,
    ) -> Result<&mut Analysis, ModelError> {
        let id = self.id()?.to_string();
        if let Some(current) = self.status {
            if current.is_terminal() {
                return Err(ModelError::TerminalState { id, status: current });
            }
        }

        info!("Advancing analysis {id} to {status}");
        let update = api.advance_analysis_status(&id, status, summary)?;
        self.status = Some(update.status);
        self.status_summary = update.status_summary;
        Ok(self)
    }

    /// Upload a local file to this analysis in a single request
    pub fn upload_file<C: AnalysisClient>(
        &self,
        api: &C,
        local_path: &Path,
        file_name: &str,
        directory: &str,
        content_type: &str,
    ) -> Result<AnalysisFile, ModelError> {
        let id = self.id()?;
        info!("Uploading {file_name} to analysis {id}");
        Ok(api.upload_analysis_file(id, local_path, file_name, directory, content_type)?)
    }

    /// Upload a local file to this analysis in parts
    pub fn upload_multipart<C: AnalysisClient>(
        &self,
        api: &C,
        local_path: &Path,
        file_name: &str,
        directory: &str,
        content_type: &str,
        options: &MultipartOptions,
    ) -> Result<MultipartUpload, ModelError> {
        let id = self.id()?;
        info!("Starting multipart upload of {file_name} to analysis {id}");
        Ok(api.upload_analysis_file_multipart(
            id,
            local_path,
            file_name,
            directory,
            content_type,
            options,
        )?)
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        match self.status {
            Some(status) => write!(f, "{name} - {status}"),
            None => write!(f, "{name} - (no status)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::client::StatusUpdate;
    use crate::model::query::QueryParameters;

    /// Counts every call so tests can assert the guards short-circuit
    /// before the client is reached
    #[derive(Default)]
    struct RecordingClient {
        calls: RefCell<u32>,
        fail: bool,
    }

    impl AnalysisClient for RecordingClient {
        fn analysis_files(
            &self,
            _id: &str,
            _params: &QueryParameters,
        ) -> anyhow::Result<Vec<AnalysisFile>> {
            *self.calls.borrow_mut() += 1;
            Ok(Vec::new())
        }

        fn advance_analysis_status(
            &self,
            _id: &str,
            status: AnalysisStatus,
            summary: &str,
        ) -> anyhow::Result<StatusUpdate> {
            *self.calls.borrow_mut() += 1;
            if self.fail {
                return Err(anyhow!("409 Conflict"));
            }
            Ok(StatusUpdate {
                status,
                status_summary: Some(summary.to_string()),
            })
        }

        fn upload_analysis_file(
            &self,
            _id: &str,
            _local_path: &Path,
            file_name: &str,
            _directory: &str,
            _content_type: &str,
        ) -> anyhow::Result<AnalysisFile> {
            *self.calls.borrow_mut() += 1;
            Ok(AnalysisFile {
                name: Some(file_name.to_string()),
                ..AnalysisFile::default()
            })
        }

        fn upload_analysis_file_multipart(
            &self,
            _id: &str,
            _local_path: &Path,
            file_name: &str,
            _directory: &str,
            _content_type: &str,
            options: &MultipartOptions,
        ) -> anyhow::Result<MultipartUpload> {
            *self.calls.borrow_mut() += 1;
            Ok(MultipartUpload {
                upload_id: "mpu-1".to_string(),
                file: AnalysisFile {
                    name: Some(file_name.to_string()),
                    ..AnalysisFile::default()
                },
                part_count: options.part_size_mb,
            })
        }
    }

    fn working_analysis() -> Analysis {
        Analysis {
            id: Some("A1".to_string()),
            name: Some("resequencing run".to_string()),
            status: Some(AnalysisStatus::Working),
            status_summary: Some("aligning".to_string()),
            status_detail: Some("chromosome 7".to_string()),
            description: Some("NA12878 resequencing".to_string()),
            ..Analysis::default()
        }
    }

    #[test]
    fn uninitialized_model_refuses_every_operation() {
        let api = RecordingClient::default();
        let mut analysis = Analysis::default();

        let scope = analysis.access_scope(AccessScope::Write);
        assert!(matches!(scope, Err(ModelError::Uninitialized { .. })));

        let files = analysis.files(&api, &QueryParameters::default());
        assert!(matches!(files, Err(ModelError::Uninitialized { .. })));

        let advanced = analysis.advance_status(&api, AnalysisStatus::Completed, "done");
        assert!(matches!(advanced, Err(ModelError::Uninitialized { .. })));

        let uploaded = analysis.upload_file(&api, Path::new("/tmp/x.vcf"), "x.vcf", "results", "text/plain");
        assert!(matches!(uploaded, Err(ModelError::Uninitialized { .. })));

        let multipart = analysis.upload_multipart(
            &api,
            Path::new("/tmp/x.bam"),
            "x.bam",
            "results",
            "application/octet-stream",
            &MultipartOptions::default(),
        );
        assert!(matches!(multipart, Err(ModelError::Uninitialized { .. })));

        assert_eq!(*api.calls.borrow(), 0);
    }

    #[test]
    fn advance_status_calls_the_client_once_and_copies_the_narrow_result() {
        for live in [AnalysisStatus::Working, AnalysisStatus::Suspended] {
            let api = RecordingClient::default();
            let mut analysis = working_analysis();
            analysis.status = Some(live);

            let updated = analysis
                .advance_status(&api, AnalysisStatus::Completed, "done")
                .unwrap();
            assert_eq!(updated.status, Some(AnalysisStatus::Completed));

            assert_eq!(*api.calls.borrow(), 1);
            assert_eq!(analysis.status, Some(AnalysisStatus::Completed));
            assert_eq!(analysis.status_summary.as_deref(), Some("done"));
            // everything outside the narrow update result is untouched
            assert_eq!(analysis.status_detail.as_deref(), Some("chromosome 7"));
            assert_eq!(analysis.name.as_deref(), Some("resequencing run"));
            assert_eq!(analysis.description.as_deref(), Some("NA12878 resequencing"));
        }
    }

    #[test]
    fn terminal_status_blocks_further_transitions() {
        let api = RecordingClient::default();
        for terminal in [AnalysisStatus::Completed, AnalysisStatus::Aborted] {
            let mut analysis = working_analysis();
            analysis.status = Some(terminal);

            let err = analysis
                .advance_status(&api, AnalysisStatus::Working, "reopen")
                .unwrap_err();
            assert!(matches!(err, ModelError::TerminalState { .. }));
            assert_eq!(analysis.status, Some(terminal));
            assert_eq!(analysis.status_summary.as_deref(), Some("aligning"));
        }
        assert_eq!(*api.calls.borrow(), 0);
    }

    #[test]
    fn terminal_state_error_names_the_analysis() {
        let api = RecordingClient::default();
        let mut analysis = working_analysis();
        analysis.status = Some(AnalysisStatus::Aborted);

        let err = analysis
            .advance_status(&api, AnalysisStatus::Completed, "done")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "analysis A1 is aborted, no further status changes are allowed"
        );
    }

    #[test]
    fn client_failure_leaves_local_fields_unchanged() {
        let api = RecordingClient {
            fail: true,
            ..RecordingClient::default()
        };
        let mut analysis = working_analysis();

        let err = analysis
            .advance_status(&api, AnalysisStatus::Completed, "done")
            .unwrap_err();
        assert!(matches!(err, ModelError::Client(_)));
        assert_eq!(analysis.status, Some(AnalysisStatus::Working));
        assert_eq!(analysis.status_summary.as_deref(), Some("aligning"));
    }

    #[test]
    fn access_scope_names_the_resource() {
        let analysis = working_analysis();
        assert_eq!(analysis.access_scope(AccessScope::Write).unwrap(), "write analysis A1");
        assert_eq!(analysis.access_scope(AccessScope::Read).unwrap(), "read analysis A1");
    }

    #[test]
    fn delegations_forward_to_the_client() {
        let api = RecordingClient::default();
        let analysis = working_analysis();

        let files = analysis.files(&api, &QueryParameters::default()).unwrap();
        assert!(files.is_empty());

        let file = analysis
            .upload_file(&api, Path::new("/tmp/calls.vcf"), "calls.vcf", "results", "text/plain")
            .unwrap();
        assert_eq!(file.name.as_deref(), Some("calls.vcf"));

        let upload = analysis
            .upload_multipart(
                &api,
                Path::new("/tmp/aln.bam"),
                "aln.bam",
                "results",
                "application/octet-stream",
                &MultipartOptions { part_size_mb: 25, ..MultipartOptions::default() },
            )
            .unwrap();
        assert_eq!(upload.upload_id, "mpu-1");
        assert_eq!(upload.part_count, 25);

        assert_eq!(*api.calls.borrow(), 3);
    }

    #[test]
    fn attribute_map_matches_serialised_fields() {
        let analysis = Analysis {
            date_created: Some("2023-06-11T08:30:00Z".parse().unwrap()),
            href: Some("v1pre3/analyses/A1".to_string()),
            href_files: Some("v1pre3/analyses/A1/files".to_string()),
            href_genome: Some("v1pre3/genomes/4".to_string()),
            user_owned_by: Some(UserCompact::default()),
            ..working_analysis()
        };
        let value = serde_json::to_value(&analysis).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        let mut declared: Vec<&str> = ATTRIBUTE_TYPES.iter().map(|(name, _)| *name).collect();
        declared.sort_unstable();
        assert_eq!(keys, declared);
    }

    #[test]
    fn renders_name_and_status() {
        assert_eq!(working_analysis().to_string(), "resequencing run - working");
        assert_eq!(Analysis::default().to_string(), "(unnamed) - (no status)");
    }
}
