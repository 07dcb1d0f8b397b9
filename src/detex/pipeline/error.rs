//! Pipeline error types.

/// Errors that can occur while assembling a pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error("stage '{stage}' has an invalid pattern: {source}")]
    Pattern {
        stage: &'static str,
        #[source]
        source: regex::Error,
    },
}

impl PipelineError {
    /// Create a pattern error attributed to a stage.
    pub fn pattern(stage: &'static str, source: regex::Error) -> Self {
        Self::Pattern { stage, source }
    }
}
