use std::fs;
use std::io::Write;

use assert_cmd::Command;
use assertables::assert_contains;
use tempfile::NamedTempFile;

const BIN_NAME: &str = "svg2tikz";

#[test]
fn test_cmdline_help() {
    let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
    let output = cmd.arg("-h").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_contains!(stdout, "Usage");
    assert_contains!(stdout, "--standalone");
}

#[test]
fn test_cmdline_stdin_stdout() {
    let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
    let output = cmd
        .write_stdin(r#"<svg><rect x="0" y="0" width="4" height="2"/></svg>"#)
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_contains!(stdout, "\\begin{tikzpicture}");
    assert_contains!(stdout, "\\draw (0mm,0mm) rectangle (4mm,2mm);");
}

#[test]
fn test_cmdline_standalone() {
    let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
    let output = cmd
        .arg("--standalone")
        .write_stdin(r#"<svg><circle cx="1" cy="1" r="1"/></svg>"#)
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    assert_contains!(stdout, "\\documentclass[tikz,border=1mm]{standalone}");
    assert_contains!(stdout, "\\end{document}");
}

#[test]
fn test_cmdline_file_io() {
    let mut infile = NamedTempFile::new().expect("could not create tmpfile");
    write!(infile, r#"<svg><rect width="1" height="1"/></svg>"#).expect("tmpfile write failed");
    let outfile = NamedTempFile::new().expect("could not create outfile");

    let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
    cmd.arg(infile.path())
        .arg("-o")
        .arg(outfile.path())
        .assert()
        .success();

    let output = fs::read_to_string(outfile.path()).unwrap();
    assert_contains!(output, "rectangle");
}

#[test]
fn test_cmdline_same_input_output() {
    let mut infile = NamedTempFile::new().expect("could not create tmpfile");
    write!(infile, r#"<svg><rect width="1" height="1"/></svg>"#).expect("tmpfile write failed");

    let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
    let output = cmd
        .arg(infile.path())
        .arg("-o")
        .arg(infile.path())
        .assert()
        .failure();
    let stderr = String::from_utf8(output.get_output().stderr.clone()).unwrap();
    assert_contains!(stderr, "same file");

    // input must be left untouched
    let content = fs::read_to_string(infile.path()).unwrap();
    assert_contains!(content, "<svg>");
}
