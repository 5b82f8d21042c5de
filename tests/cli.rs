use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir, tempdir};

fn numbered_file(lines: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for i in 0..lines {
        writeln!(file, "row-{i:04}").unwrap();
    }
    file.flush().unwrap();
    file
}

// Point the config lookup at a throwaway directory so tests never touch a
// real configuration.
fn folio_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_dir.path());
    cmd
}

#[test]
fn test_dump_prints_the_first_page() {
    let config_dir = tempdir().unwrap();
    let file = numbered_file(120);

    folio_cmd(&config_dir)
        .arg("--dump")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("row-0000"))
        .stdout(predicates::str::contains("row-0099"))
        .stdout(predicates::str::contains("row-0100").not());
}

#[test]
fn test_dump_prints_a_specific_page() {
    let config_dir = tempdir().unwrap();
    let file = numbered_file(120);

    folio_cmd(&config_dir)
        .arg("--dump")
        .arg("--page")
        .arg("2")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("row-0100"))
        .stdout(predicates::str::contains("row-0119"))
        .stdout(predicates::str::contains("row-0099").not());
}

#[test]
fn test_dump_clamps_past_the_last_page() {
    let config_dir = tempdir().unwrap();
    let file = numbered_file(120);

    folio_cmd(&config_dir)
        .arg("--dump")
        .arg("--page")
        .arg("99")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("row-0119"))
        .stdout(predicates::str::contains("row-0099").not());
}

#[test]
fn test_dump_honors_page_size() {
    let config_dir = tempdir().unwrap();
    let file = numbered_file(120);

    folio_cmd(&config_dir)
        .arg("--dump")
        .arg("--page-size")
        .arg("50")
        .arg("--page")
        .arg("2")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("row-0050"))
        .stdout(predicates::str::contains("row-0099"))
        .stdout(predicates::str::contains("row-0100").not());
}

#[test]
fn test_dump_of_empty_file_prints_nothing() {
    let config_dir = tempdir().unwrap();
    let file = NamedTempFile::new().unwrap();

    folio_cmd(&config_dir)
        .arg("--dump")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

#[test]
fn test_out_of_range_page_size_is_rejected() {
    let config_dir = tempdir().unwrap();
    let file = numbered_file(10);

    folio_cmd(&config_dir)
        .arg("--dump")
        .arg("--page-size")
        .arg("10")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("out of range"));
}

#[test]
fn test_page_zero_is_rejected() {
    let config_dir = tempdir().unwrap();
    let file = numbered_file(10);

    folio_cmd(&config_dir)
        .arg("--dump")
        .arg("--page")
        .arg("0")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("start at 1"));
}

#[test]
fn test_missing_file_reports_an_error() {
    let config_dir = tempdir().unwrap();

    folio_cmd(&config_dir)
        .arg("--dump")
        .arg("/nonexistent/never-here.txt")
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot open"));
}

#[test]
fn test_help_describes_the_program() {
    let config_dir = tempdir().unwrap();

    folio_cmd(&config_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("very large plain-text files"));
}
