use thiserror::Error;

/// Request-level failures of the media pipeline.
///
/// Per-token problems never surface here; they are dropped inside the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Download links not found")]
    NoLinks,

    #[error("unexpected: {0}")]
    Search(#[from] reqwest::Error),
}
