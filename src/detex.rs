mod chapters;
mod document;
mod paths;
pub mod pipeline;
mod runner;

use std::path::PathBuf;
use std::sync::LazyLock;

pub use chapters::sort_chapters;
pub use document::Document;
pub use paths::{expand_inputs, output_path};
pub use pipeline::Pipeline;
pub use runner::Runner;

/// Suffix that replaces the last four characters of an input path.
pub const OUTPUT_SUFFIX: &str = "_betterdetex.txt";

/// Extension of the files picked up when a directory is given as input.
pub const SOURCE_EXTENSION: &str = "tex";

#[derive(thiserror::Error, Debug)]
pub enum DetexError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("path is not valid unicode: {0}")]
    EncodePath(PathBuf),
}

static DEFAULT_PIPELINE: LazyLock<Pipeline> = LazyLock::new(|| {
    Pipeline::default_pipeline().expect("built-in detex rules are valid patterns")
});

/// The shared default pipeline.
pub fn default_pipeline() -> &'static Pipeline {
    &DEFAULT_PIPELINE
}

/// Strip (nearly) all TeX markup from a string.
///
/// Best effort: unusual markup may be over- or under-stripped, but this
/// never fails.
pub fn detex(text: &str) -> String {
    DEFAULT_PIPELINE.run(text)
}
