//! Chapter ordering for multi-file documents.

use std::path::{Path, PathBuf};

/// File-name fragments that mark an opening chapter.
const INTRODUCTION_MARKERS: &[&str] = &["intro", "einleitung", "1"];

/// File-name fragments that mark a closing chapter.
const CONCLUSION_MARKERS: &[&str] = &["conclusion"];

/// Sort chapter files as well as possible.
///
/// Files are ordered alphabetically, except that introduction-like names
/// ("intro", "einleitung", or anything with a `1`) move to the front and
/// conclusion-like names move to the end. Both groups keep their alphabetical
/// order. Only the file name is inspected, not the directories above it.
pub fn sort_chapters(mut files: Vec<PathBuf>) -> Vec<PathBuf> {
    files.sort();

    let (front, rest): (Vec<_>, Vec<_>) = files
        .into_iter()
        .partition(|f| has_marker(f, INTRODUCTION_MARKERS));
    let (back, middle): (Vec<_>, Vec<_>) = rest
        .into_iter()
        .partition(|f| has_marker(f, CONCLUSION_MARKERS));

    front.into_iter().chain(middle).chain(back).collect()
}

fn has_marker(path: &Path, markers: &[&str]) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    markers.iter().any(|m| name.contains(m))
}
