//! Tests that drive the `knights-travail` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn knights_travail(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_knights-travail"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn knights-travail");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for knights-travail")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_path_from_arguments() {
    let output = knights_travail(&["a1", "h8"], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "A1 B3 C5 D7 F8 G6 H8\n");
}

#[test]
fn test_same_square() {
    let output = knights_travail(&["D4", "d4"], "");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "D4\n");
}

#[test]
fn test_path_from_prompts() {
    let output = knights_travail(&[], "A1\nB4\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Enter start position in algebraic notation:\
         Enter end position in algebraic notation:A1 C2 B4\n"
    );
}

#[test]
fn test_prompt_only_for_missing_square() {
    let output = knights_travail(&["a1"], "b3\n");
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Enter end position in algebraic notation:A1 B3\n"
    );
}

#[test]
fn test_invalid_square_fails_without_output() {
    let output = knights_travail(&["Z9", "A1"], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(
        stderr(&output).contains("error: invalid rank 'Z'"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn test_invalid_prompted_square() {
    let output = knights_travail(&[], "A9\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: invalid file '9'"));
}

#[test]
fn test_missing_input() {
    let output = knights_travail(&[], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unexpected end of input"));
}

#[test]
fn test_json_and_separator_flags() {
    let output = knights_travail(&["--format", "json", "A1", "B4"], "");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["moves"], 2);
    assert_eq!(value["path"][1], "C2");

    let output = knights_travail(&["-s", ",", "A1", "B4"], "");
    assert_eq!(stdout(&output), "A1,C2,B4\n");
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("travail.toml");
    std::fs::write(&path, "separator = \" > \"\nshow_move_count = true\n").unwrap();

    let output = knights_travail(&["--config", path.to_str().unwrap(), "A1", "B4"], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "A1 > C2 > B4 (2 moves)\n");
}

#[test]
fn test_missing_config_file() {
    let output = knights_travail(&["--config", "does-not-exist.toml", "A1", "B4"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Config file not found"));
}

#[test]
fn test_distances() {
    let output = knights_travail(&["distances", "a1"], "");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "  A B C D E F G H");
    assert_eq!(lines[8], "1 0 3 2 3 2 3 4 5");
}
