//! Integration tests for the testforge binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn testforge() -> Command {
    Command::cargo_bin("testforge").unwrap()
}

#[test]
fn writes_suite_for_two_argument_prototype() {
    let temp_dir = tempdir().unwrap();

    testforge()
        .arg("doExample($argc, $argv)")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("DoExampleTest.php"));

    let generated = temp_dir.path().join("DoExampleTest.php");
    let contents = std::fs::read_to_string(&generated).unwrap();
    assert!(contents.contains("class DoExampleTest extends PHPUnit_Framework_TestCase"));
    assert!(contents.contains("public function testDoExample_MaxInt()"));
    assert!(contents.contains("public function testDoExample_StringValue()"));
}

#[test]
fn skips_zero_argument_prototype() {
    let temp_dir = tempdir().unwrap();

    testforge()
        .arg("noop()")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no suite generated"));

    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn fails_when_directory_is_missing() {
    testforge()
        .arg("doExample($argc, $argv)")
        .arg("/nonexistent-testforge-dir")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn requires_both_positional_arguments() {
    testforge()
        .arg("doExample($argc, $argv)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TEST_DIR"));
}

#[test]
fn regeneration_is_idempotent() {
    let temp_dir = tempdir().unwrap();
    let generated = temp_dir.path().join("SingleTest.php");

    testforge()
        .arg("single($x)")
        .arg(temp_dir.path())
        .assert()
        .success();
    let first = std::fs::read(&generated).unwrap();

    testforge()
        .arg("single($x)")
        .arg(temp_dir.path())
        .assert()
        .success();
    let second = std::fs::read(&generated).unwrap();

    assert_eq!(first, second);
}
