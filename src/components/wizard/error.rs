// ABOUTME: User-recoverable validation signals raised by wizard actions

use crate::export::ExportError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select a client type to continue")]
    MissingClientType,

    #[error("Enter the client name to continue")]
    MissingClientName,

    #[error("Add at least one identification to continue")]
    MissingIdentifications,

    #[error("Generate the performance report before continuing")]
    ReportNotGenerated,

    #[error("Add at least one identification before generating the report")]
    EmptyIdentificationSubmit,

    #[error("'{file_name}' is not an image file")]
    InvalidUploadType { file_name: String },

    #[error("{action} is not available on the {step} step")]
    InvalidAction {
        action: &'static str,
        step: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConsolidateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
