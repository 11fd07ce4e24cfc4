use thiserror::Error;

/// Failure modes of the classification pipeline.
///
/// Every error is terminal for the request it occurred in: nothing is
/// retried, and no partial result is ever produced alongside one.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No image provided")]
    MissingInput,
    #[error("Image could not be decoded: {0}")]
    InvalidImage(String),
    #[error("Processing failed: {0}")]
    ProcessingFailure(String),
}

impl From<image::ImageError> for PipelineError {
    fn from(err: image::ImageError) -> Self {
        PipelineError::InvalidImage(err.to_string())
    }
}
