//! Error type for session-level operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Ingest(#[from] hplc_ingest::IngestError),

    #[error(transparent)]
    Transform(#[from] hplc_transform::TransformError),

    #[error(transparent)]
    Output(#[from] hplc_output::OutputError),

    /// No consolidated chromatogram rows carry this display name.
    #[error("no chromatogram rows for sample '{sample}'")]
    UnknownSample { sample: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
