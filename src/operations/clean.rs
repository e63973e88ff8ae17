//! Clean operation
//!
//! Walks the source tree and strips conflict markers file by file,
//! accumulating a run summary. Reporting goes through the
//! [`CleanReporter`](crate::ui::reporter::CleanReporter) trait so the
//! orchestration can run silently under test.

use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery;
use crate::error::{self, Result};
use crate::stripper;
use crate::ui::reporter::CleanReporter;

/// Configuration options for a clean run
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Directory to scan for target files
    pub root: PathBuf,
    /// Report deltas without rewriting any file
    pub dry_run: bool,
}

/// Outcome of processing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No marker literal present anywhere in the file; nothing written
    AlreadyClean,
    /// Conflict regions resolved and the file rewritten in place
    Cleaned { removed_lines: usize },
    /// Read or write failed; the run continues with the next file
    Failed { reason: String },
}

/// Counters accumulated across a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub already_clean: usize,
    pub cleaned: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::AlreadyClean => self.already_clean += 1,
            FileOutcome::Cleaned { .. } => self.cleaned += 1,
            FileOutcome::Failed { .. } => self.errors += 1,
        }
    }

    /// Files processed without error
    pub fn succeeded(&self) -> usize {
        self.already_clean + self.cleaned
    }
}

/// High-level clean operation
pub struct CleanOperation {
    options: CleanOptions,
}

impl CleanOperation {
    pub fn new(options: CleanOptions) -> Self {
        Self { options }
    }

    /// Execute the clean run: discover target files, process each in
    /// discovery order and return the accumulated summary.
    ///
    /// Per-file failures are contained and tallied; only a missing scan root
    /// aborts the run.
    pub fn execute(&self, reporter: &mut dyn CleanReporter) -> Result<RunSummary> {
        let files = discovery::find_target_files(&self.options.root)?;
        reporter.scan_finished(files.len());

        let mut summary = RunSummary::default();
        for path in &files {
            reporter.file_started(path);
            let outcome = match clean_file(path, self.options.dry_run) {
                Ok(outcome) => outcome,
                Err(e) => FileOutcome::Failed {
                    reason: e.to_string(),
                },
            };
            reporter.file_finished(path, &outcome);
            summary.record(&outcome);
        }

        Ok(summary)
    }
}

/// Read one file, strip conflict regions and write the result back.
///
/// Files without any marker literal are left untouched. The removed-line
/// count is the difference in newline counts between the original and the
/// cleaned content.
pub fn clean_file(path: &Path, dry_run: bool) -> Result<FileOutcome> {
    let content = fs::read_to_string(path)
        .map_err(|e| error::read_failed(path.display().to_string(), e.to_string()))?;

    if !stripper::has_conflict_markers(&content) {
        return Ok(FileOutcome::AlreadyClean);
    }

    let cleaned = stripper::strip_conflict_markers(&content);
    let removed_lines = newline_count(&content).saturating_sub(newline_count(&cleaned));

    if !dry_run {
        fs::write(path, &cleaned)
            .map_err(|e| error::write_failed(path.display().to_string(), e.to_string()))?;
    }

    Ok(FileOutcome::Cleaned { removed_lines })
}

fn newline_count(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count()
}
