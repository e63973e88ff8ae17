//! Console reporting for clean runs
//!
//! All run output goes through the [`CleanReporter`] trait so the
//! orchestration in [`operations::clean`](crate::operations::clean) can be
//! exercised in tests without capturing stdout.

use std::path::Path;

use console::Style;

use crate::discovery::EXCLUDED_PATH_MARKERS;
use crate::operations::clean::{FileOutcome, RunSummary};

/// Reporter for the observable output of a clean run
pub trait CleanReporter {
    /// Print the opening banner
    fn banner(&mut self);

    /// Called once before discovery with the resolved scan root
    fn scan_started(&mut self, root: &Path);

    /// Called once after discovery with the number of files found
    fn scan_finished(&mut self, file_count: usize);

    /// Called before each file is processed
    fn file_started(&mut self, path: &Path);

    /// Called after each file with its outcome
    fn file_finished(&mut self, path: &Path, outcome: &FileOutcome);

    /// Print the final summary block
    fn summary(&mut self, summary: &RunSummary);
}

/// Reporter printing the standard console output
pub struct ConsoleReporter {
    verbose: bool,
    dry_run: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool, dry_run: bool) -> Self {
        Self { verbose, dry_run }
    }

    fn ok(&self) -> console::StyledObject<&'static str> {
        Style::new().green().apply_to("\u{2713}")
    }

    fn fail(&self) -> console::StyledObject<&'static str> {
        Style::new().red().apply_to("\u{2717}")
    }
}

impl CleanReporter for ConsoleReporter {
    fn banner(&mut self) {
        println!(
            "{}",
            Style::new().bold().apply_to("Git Conflict Marker Cleaner")
        );
        println!("{}", "=".repeat(50));
        if self.dry_run {
            println!(
                "{}",
                Style::new()
                    .yellow()
                    .apply_to("Dry run: no files will be rewritten")
            );
        }
    }

    fn scan_started(&mut self, root: &Path) {
        if self.verbose {
            println!("Scanning: {}", root.display());
            println!("Excluding paths containing: {}", EXCLUDED_PATH_MARKERS.join(", "));
        }
    }

    fn scan_finished(&mut self, file_count: usize) {
        let label = if file_count == 1 { "file" } else { "files" };
        println!();
        println!("Found {} Dart {}", file_count, label);
        println!();
    }

    fn file_started(&mut self, path: &Path) {
        println!("Processing: {}", path.display());
    }

    fn file_finished(&mut self, _path: &Path, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::AlreadyClean => {
                println!("  {} No conflict markers found", self.ok());
            }
            FileOutcome::Cleaned { removed_lines } => {
                if self.dry_run {
                    println!(
                        "  {} Would remove {} lines of conflict markers",
                        self.ok(),
                        removed_lines
                    );
                } else {
                    println!(
                        "  {} Cleaned! Removed {} lines of conflict markers",
                        self.ok(),
                        removed_lines
                    );
                }
            }
            FileOutcome::Failed { reason } => {
                println!("  {} Error: {}", self.fail(), reason);
            }
        }
    }

    fn summary(&mut self, summary: &RunSummary) {
        println!();
        println!("{}", "=".repeat(50));
        println!("{}", Style::new().bold().apply_to("Summary:"));
        println!("  {} Successfully processed: {}", self.ok(), summary.succeeded());
        println!("  {} Errors: {}", self.fail(), summary.errors);
        println!();
        if summary.errors == 0 {
            println!("{} All files cleaned successfully!", self.ok());
        } else {
            println!("{} Some files had errors", self.fail());
        }
    }
}

/// No-op reporter used by tests
#[allow(dead_code)]
#[derive(Default)]
pub struct SilentReporter;

impl CleanReporter for SilentReporter {
    fn banner(&mut self) {}

    fn scan_started(&mut self, _root: &Path) {}

    fn scan_finished(&mut self, _file_count: usize) {}

    fn file_started(&mut self, _path: &Path) {}

    fn file_finished(&mut self, _path: &Path, _outcome: &FileOutcome) {}

    fn summary(&mut self, _summary: &RunSummary) {}
}
