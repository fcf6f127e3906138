#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn arincbox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arincbox"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .env_remove("ARINCBOX_PORT")
        .env_remove("ARINCBOX_BAUD")
        .output()
        .expect("arincbox should run")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout should be utf-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn encode_json_lists_frames() {
    let output = arincbox(&["--format", "json", "encode", "0", "0xF0000000"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(&lines[0]).expect("json line");
    assert_eq!(first["word"], 0);
    assert_eq!(first["frame"], "01 41 41 41 41 41 41 41 41 0D");
    assert!(first["port"].is_null());

    let second: serde_json::Value = serde_json::from_str(&lines[1]).expect("json line");
    assert_eq!(second["hex"], "0xF0000000");
    assert_eq!(second["frame"], "01 41 41 41 41 41 41 41 50 0D");
}

#[test]
fn encode_raw_writes_wire_bytes() {
    let output = arincbox(&["--format", "raw", "encode", "0xF0000000"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"\x01AAAAAAAP\x0D");
}

#[test]
fn decode_hex_prints_messages() {
    let output = arincbox(&[
        "--format",
        "pretty",
        "decode",
        "--hex",
        "06 11 22 33 44 00 0D 06 00 00 00 80 00 0D",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["DATA 0x44332211", "EMPTY 0x00000000"]);
}

#[test]
fn decode_errors_set_exit_code() {
    let output = arincbox(&["--format", "json", "decode", "--hex", "06 11 0D"]);
    assert_eq!(output.status.code(), Some(60));

    let lines = stdout_lines(&output);
    let message: serde_json::Value = serde_json::from_str(&lines[0]).expect("json line");
    assert_eq!(message["kind"], "ERROR");
    assert!(message["word"].is_null());
    assert_eq!(message["source"], "hex");
}

#[test]
fn decode_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_arincbox"))
        .args(["--log-level", "error", "--format", "raw", "decode"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("decode should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(&[0x06, 0x01, 0x02, 0x03, 0x04, 0x00, 0x0D])
        .expect("stdin should accept bytes");

    let output = child.wait_with_output().expect("decode should finish");
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["0x04030201"]);
}

#[test]
fn decode_bad_hex_is_usage_error() {
    let output = arincbox(&["decode", "--hex", "nothex"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
#[cfg(unix)]
fn tx_on_missing_port_fails_cleanly() {
    let output = arincbox(&["tx", "/dev/arincbox-test-no-such-port", "1"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("open failed"));
    assert!(stderr.contains("/dev/arincbox-test-no-such-port"));
}

#[test]
fn version_prints_name() {
    let output = arincbox(&["version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("arincbox "));
}
