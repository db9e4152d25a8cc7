use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Lifecycle state of an analysis.
///
/// The server reports status with inconsistent casing, so parsing is
/// case-insensitive. `Completed` and `Aborted` are terminal: the server
/// refuses further transitions and the local guard rejects them before a
/// request is made.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnalysisStatus {
    Working,
    Suspended,
    Completed,
    Aborted,
}

#[derive(Debug, Error)]
#[error("unknown analysis status: {0}")]
pub struct UnknownStatus(pub String);

impl AnalysisStatus {
    /// No further transitions once the server reports one of these
    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisStatus::Completed | AnalysisStatus::Aborted)
    }

    /// Canonical casing used by the REST API
    pub fn as_wire(&self) -> &'static str {
        match self {
            AnalysisStatus::Working => "Working",
            AnalysisStatus::Suspended => "Suspended",
            AnalysisStatus::Completed => "Completed",
            AnalysisStatus::Aborted => "Aborted",
        }
    }
}

impl FromStr for AnalysisStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<AnalysisStatus, UnknownStatus> {
        match s.to_lowercase().as_str() {
            "working" => Ok(AnalysisStatus::Working),
            "suspended" => Ok(AnalysisStatus::Suspended),
            "completed" => Ok(AnalysisStatus::Completed),
            "aborted" => Ok(AnalysisStatus::Aborted),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalysisStatus::Working => write!(f, "working"),
            AnalysisStatus::Suspended => write!(f, "suspended"),
            AnalysisStatus::Completed => write!(f, "completed"),
            AnalysisStatus::Aborted => write!(f, "aborted"),
        }
    }
}

impl Serialize for AnalysisStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for AnalysisStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<AnalysisStatus, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Scope of access requested when building an OAuth scope string
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessScope {
    Read,
    Write,
}

impl Default for AccessScope {
    fn default() -> AccessScope {
        AccessScope::Write
    }
}

impl fmt::Display for AccessScope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccessScope::Read => write!(f, "read"),
            AccessScope::Write => write!(f, "write"),
        }
    }
}
