//! Clean command implementation
//!
//! Resolves the scan root, runs the clean operation and maps the error tally
//! to the process exit status.

use std::path::PathBuf;

use crate::cli::CleanArgs;
use crate::discovery::DEFAULT_SOURCE_DIR;
use crate::error::{DeconflictError, Result};
use crate::operations::clean::{CleanOperation, CleanOptions};
use crate::ui::reporter::{CleanReporter, ConsoleReporter};

/// Run clean command
pub fn run(project: Option<PathBuf>, verbose: bool, args: CleanArgs) -> Result<()> {
    let root = resolve_root(project, args.root)?;

    let mut reporter = ConsoleReporter::new(verbose, args.dry_run);
    reporter.banner();
    reporter.scan_started(&root);

    let operation = CleanOperation::new(CleanOptions {
        root,
        dry_run: args.dry_run,
    });
    let summary = operation.execute(&mut reporter)?;
    reporter.summary(&summary);

    if summary.errors > 0 {
        return Err(DeconflictError::CompletedWithErrors {
            count: summary.errors,
        });
    }

    Ok(())
}

/// Resolve the scan root from CLI arguments.
///
/// Defaults to the fixed source subdirectory of the project directory; an
/// explicit `--root` wins over both.
fn resolve_root(project: Option<PathBuf>, root: Option<PathBuf>) -> Result<PathBuf> {
    let base = match project {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| DeconflictError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };

    let root = root.unwrap_or_else(|| base.join(DEFAULT_SOURCE_DIR));

    // Canonicalize when the path exists so per-file lines show absolute
    // paths; a missing root is reported as given.
    Ok(dunce::canonicalize(&root).unwrap_or(root))
}
