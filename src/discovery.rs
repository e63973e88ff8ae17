//! Source file discovery
//!
//! Walks the scan root recursively, pruning generated and platform
//! directories, and collects the Dart files to process.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{DeconflictError, Result};

/// File name suffix targeted by the scan
pub const TARGET_EXTENSION: &str = ".dart";

/// Subdirectory scanned by default, relative to the project directory
pub const DEFAULT_SOURCE_DIR: &str = "lib";

/// Path fragments that exclude a directory from traversal: build output,
/// the local tool cache, and the mobile platform trees.
///
/// Matched as substrings of the full directory path, not as exact directory
/// names, so generated trees are skipped wherever they appear.
pub const EXCLUDED_PATH_MARKERS: &[&str] = &["build", ".dart_tool", "android", "ios"];

/// Whether a directory path is excluded from traversal.
pub fn is_excluded_dir(path: &Path) -> bool {
    let path_text = path.to_string_lossy();
    EXCLUDED_PATH_MARKERS
        .iter()
        .any(|marker| path_text.contains(marker))
}

fn has_target_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(TARGET_EXTENSION))
}

/// Recursively collect target files under `root` in traversal order.
///
/// Excluded directories are pruned, so their subtrees are never descended.
/// A missing root is a fatal setup error, not an empty result.
pub fn find_target_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(DeconflictError::RootNotFound {
            path: root.display().to_string(),
        });
    }

    let files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !(entry.file_type().is_dir() && is_excluded_dir(entry.path())))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| has_target_extension(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    Ok(files)
}
