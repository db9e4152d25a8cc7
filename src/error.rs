//! Error types shared across the model layer

use thiserror::Error;

use crate::model::status::AnalysisStatus;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The model was never populated from a server response
    #[error("the {resource} model has not been initialized yet")]
    Uninitialized { resource: &'static str },

    /// completed and aborted are one-way states on the server
    #[error("analysis {id} is {status}, no further status changes are allowed")]
    TerminalState { id: String, status: AnalysisStatus },

    /// Failure reported by the external API client
    #[error(transparent)]
    Client(#[from] anyhow::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
