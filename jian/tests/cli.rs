//! End-to-end tests driving the `jian` binary itself rather than its
//! internal functions, so a regression in argument wiring or exit-code
//! behavior shows up even if the unit tests in `main.rs` still pass.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn jian_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jian"))
}

#[test]
fn help_flag_prints_usage() {
    jian_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("jian"));
}

#[test]
fn version_flag_prints_the_crate_version() {
    jian_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn running_a_file_prints_its_final_value() {
    let mut file = tempfile::Builder::new().suffix(".jian").tempfile().unwrap();
    writeln!(file, "let x = 5; let y = 10; x + y;").unwrap();

    jian_bin()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("15"));
}

#[test]
fn running_a_file_with_a_parse_error_reports_it_on_stderr() {
    let mut file = tempfile::Builder::new().suffix(".jian").tempfile().unwrap();
    writeln!(file, "let = 5;").unwrap();

    jian_bin()
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("expected"));
}

#[test]
fn running_a_missing_file_fails_with_a_nonzero_exit_code() {
    jian_bin()
        .arg("/no/such/file.jian")
        .assert()
        .failure();
}

#[test]
fn repl_mode_evaluates_stdin_line_by_line() {
    jian_bin()
        .write_stdin("let x = 10;\nx * 2;\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("20"));
}

#[test]
fn verbose_flag_is_accepted_and_repeatable() {
    jian_bin()
        .arg("-vv")
        .write_stdin("1 + 1;\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));
}
