//! File iteration: read, strip, check, write.

use std::path::{Path, PathBuf};

use super::{DetexError, Document};

/// What a run did.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of files stripped
    pub files: usize,
    /// Number of files that fell below the threshold
    pub warnings: usize,
    /// Files written (empty on a dry run)
    pub outputs: Vec<PathBuf>,
}

/// Runs the detex pipeline over a list of files.
///
/// Each file is read once, stripped, checked against the threshold and
/// written once. Files are independent; a read or write failure aborts the
/// run with no retry.
pub struct Runner {
    threshold: f64,
    dry_run: bool,
}

impl Runner {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            dry_run: false,
        }
    }

    /// Strip and check without writing any output.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every file in order.
    pub async fn run(&self, paths: &[PathBuf]) -> Result<RunSummary, DetexError> {
        let mut summary = RunSummary::default();

        for path in paths {
            let doc = self.strip_file(path).await?;
            summary.files += 1;

            if let Some(warning) = doc.threshold_warning(self.threshold) {
                println!("{warning}");
                summary.warnings += 1;
            }

            if self.dry_run {
                continue;
            }

            summary.outputs.push(self.write_output(&doc).await?);
        }

        tracing::info!(
            files = summary.files,
            warnings = summary.warnings,
            written = summary.outputs.len(),
            "detex run finished"
        );
        Ok(summary)
    }

    /// Read a file and run it through the pipeline.
    pub async fn strip_file(&self, path: &Path) -> Result<Document, DetexError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| DetexError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc = Document::from_bytes(path.to_path_buf(), &bytes);
        tracing::debug!(
            path = %path.display(),
            original = doc.original_len(),
            stripped = doc.stripped_len(),
            "stripped file"
        );
        Ok(doc)
    }

    /// Write the stripped text next to its source, replacing any existing file.
    async fn write_output(&self, doc: &Document) -> Result<PathBuf, DetexError> {
        let output_path = doc.output_path()?;
        tokio::fs::write(&output_path, &doc.stripped)
            .await
            .map_err(|e| DetexError::Write {
                path: output_path.clone(),
                source: e,
            })?;
        Ok(output_path)
    }
}
