//! Error types and handling for Deconflict
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Deconflict operations
#[derive(Error, Diagnostic, Debug)]
pub enum DeconflictError {
    // Scan errors
    #[error("Source root not found: {path}")]
    #[diagnostic(
        code(deconflict::scan::root_not_found),
        help(
            "Deconflict scans the lib/ subdirectory of the project by default. \
             Run it from the project root, or point it elsewhere with --root."
        )
    )]
    RootNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(deconflict::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(deconflict::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(deconflict::fs::io_error))]
    IoError { message: String },

    // Aggregate clean outcome
    #[error("Cleaning finished with {count} error(s)")]
    #[diagnostic(
        code(deconflict::clean::completed_with_errors),
        help("See the per-file messages above for the failure reasons")
    )]
    CompletedWithErrors { count: usize },
}

/// Creates a file read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> DeconflictError {
    DeconflictError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> DeconflictError {
    DeconflictError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

impl From<std::io::Error> for DeconflictError {
    fn from(err: std::io::Error) -> Self {
        DeconflictError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DeconflictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeconflictError::RootNotFound {
            path: "/project/lib".to_string(),
        };
        assert_eq!(err.to_string(), "Source root not found: /project/lib");
    }

    #[test]
    fn test_error_code() {
        let err = DeconflictError::RootNotFound {
            path: "/project/lib".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("deconflict::scan::root_not_found".to_string())
        );
    }

    #[test]
    fn test_read_failed_constructor() {
        let err = read_failed("/lib/main.dart", "permission denied");
        assert!(matches!(err, DeconflictError::FileReadFailed { .. }));
        assert!(err.to_string().contains("Failed to read file"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_write_failed_constructor() {
        let err = write_failed("/lib/main.dart", "disk full");
        assert!(matches!(err, DeconflictError::FileWriteFailed { .. }));
        assert!(err.to_string().contains("Failed to write file"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DeconflictError = io_err.into();
        assert!(matches!(err, DeconflictError::IoError { .. }));
    }

    #[test]
    fn test_completed_with_errors_display() {
        let err = DeconflictError::CompletedWithErrors { count: 3 };
        assert_eq!(err.to_string(), "Cleaning finished with 3 error(s)");
    }
}
