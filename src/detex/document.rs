//! Document type for file processing.

use std::path::PathBuf;

use super::{DetexError, detex, output_path};

/// A source file and its stripped text.
#[derive(Debug)]
pub struct Document {
    /// Path the text was read from
    pub source_path: PathBuf,

    /// Text as read, with invalid UTF-8 replaced
    pub original: String,

    /// Text after the detex pipeline
    pub stripped: String,
}

impl Document {
    /// Decode raw bytes and detex them.
    pub fn from_bytes(source_path: PathBuf, bytes: &[u8]) -> Self {
        let original = String::from_utf8_lossy(bytes).into_owned();
        let stripped = detex(&original);
        Self {
            source_path,
            original,
            stripped,
        }
    }

    /// Length of the original text in characters.
    pub fn original_len(&self) -> usize {
        self.original.chars().count()
    }

    /// Length of the stripped text in characters.
    pub fn stripped_len(&self) -> usize {
        self.stripped.chars().count()
    }

    /// Whether less than `threshold` of the original length remains.
    pub fn below_threshold(&self, threshold: f64) -> bool {
        (self.stripped_len() as f64) < (self.original_len() as f64) * threshold
    }

    /// The advisory message for a document that lost too much text, if any.
    pub fn threshold_warning(&self, threshold: f64) -> Option<String> {
        self.below_threshold(threshold).then(|| {
            format!(
                "Warning: Less than {}% of the content remains for file {}",
                (threshold * 100.0) as i64,
                self.source_path.display()
            )
        })
    }

    /// Where the stripped text is written.
    pub fn output_path(&self) -> Result<PathBuf, DetexError> {
        output_path(&self.source_path)
    }
}
