//! Common test utilities for Deconflict integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway project tree for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create the lib/ source directory
    pub fn create_lib_dir(&self) -> PathBuf {
        let lib_path = self.path.join("lib");
        std::fs::create_dir_all(&lib_path).expect("Failed to create lib directory");
        lib_path
    }

    /// Write a file in the project, creating parent directories as needed
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write raw bytes in the project, creating parent directories as needed
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A Dart file containing one well-formed conflict region
#[allow(dead_code)]
pub const CONFLICTED_DART: &str = "line1\n\
<<<<<<< HEAD\n\
new_code()\n\
=======\n\
old_code()\n\
>>>>>>> parent of abc123\n\
line2\n";

/// The same file after cleaning
#[allow(dead_code)]
pub const CLEANED_DART: &str = "line1\nnew_code()\nline2\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_file_operations() {
        let project = TestProject::new();
        project.write_file("lib/test.dart", "hello");
        assert!(project.file_exists("lib/test.dart"));
        assert_eq!(project.read_file("lib/test.dart"), "hello");
    }
}
