//! CLI surface tests using the real deconflict binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn deconflict_cmd() -> Command {
    Command::cargo_bin("deconflict").unwrap()
}

#[test]
fn test_help_output() {
    deconflict_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("conflict markers"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    deconflict_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("deconflict"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    deconflict_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deconflict"));
}

#[test]
fn test_completions_unknown_shell() {
    deconflict_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_missing_lib_dir_exits_nonzero() {
    let project = common::TestProject::new();

    deconflict_cmd()
        .current_dir(&project.path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Source root not found"));
}

#[test]
fn test_missing_lib_dir_touches_nothing() {
    let project = common::TestProject::new();
    // A conflicted file outside the (missing) scan root must stay as-is.
    project.write_file("stray.dart", common::CONFLICTED_DART);

    deconflict_cmd()
        .current_dir(&project.path)
        .assert()
        .failure()
        .code(1);

    assert_eq!(project.read_file("stray.dart"), common::CONFLICTED_DART);
}

#[test]
fn test_zero_argument_run_on_empty_lib() {
    let project = common::TestProject::new();
    project.create_lib_dir();

    deconflict_cmd()
        .current_dir(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Git Conflict Marker Cleaner"))
        .stdout(predicate::str::contains("Found 0 Dart files"))
        .stdout(predicate::str::contains("Successfully processed: 0"))
        .stdout(predicate::str::contains("All files cleaned successfully!"));
}

#[test]
fn test_verbose_prints_scan_root() {
    let project = common::TestProject::new();
    project.create_lib_dir();

    deconflict_cmd()
        .current_dir(&project.path)
        .args(["-v", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanning:"))
        .stdout(predicate::str::contains(".dart_tool"));
}
