//! Input and output path handling.
//!
//! This module handles:
//! - Output paths (the input path with its extension swapped for a suffix)
//! - Input expansion (directories become the `.tex` files they contain)

use std::path::{Path, PathBuf};

use super::{DetexError, OUTPUT_SUFFIX, SOURCE_EXTENSION, sort_chapters};

/// Derive the output path for an input file.
///
/// The last four characters of the path (normally `.tex`) are replaced by
/// `_betterdetex.txt`.
///
/// # Examples
/// ```ignore
/// output_path("thesis/intro.tex") => "thesis/intro_betterdetex.txt"
/// output_path("a.b") => "_betterdetex.txt"
/// ```
pub fn output_path(source: &Path) -> Result<PathBuf, DetexError> {
    let source_str = source
        .to_str()
        .ok_or_else(|| DetexError::EncodePath(source.to_path_buf()))?;

    let keep = source_str.chars().count().saturating_sub(4);
    let mut output: String = source_str.chars().take(keep).collect();
    output.push_str(OUTPUT_SUFFIX);
    Ok(PathBuf::from(output))
}

/// Expand command-line inputs into the list of files to process.
///
/// Files are kept as given. Directories are walked recursively for `.tex`
/// files, which are then put in chapter order.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, DetexError> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found = Vec::new();
            walk_directory(input, &mut found)?;
            tracing::debug!(dir = %input.display(), count = found.len(), "discovered sources");
            files.extend(sort_chapters(found));
        } else {
            files.push(input.clone());
        }
    }
    Ok(files)
}

/// Recursively collect `.tex` files under a directory.
fn walk_directory(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), DetexError> {
    let entries = std::fs::read_dir(dir).map_err(|e| DetexError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| DetexError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        // Skip hidden files and directories
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        if path.is_dir() {
            walk_directory(&path, files)?;
        } else if path.is_file() && is_source(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION))
}
