//! CLI integration tests for nb64
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn nb64() -> Command {
    Command::cargo_bin("nb64").unwrap()
}

// ============================================================================
// Basic Commands
// ============================================================================

#[test]
fn test_help() {
    nb64()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("decode"));
}

#[test]
fn test_version() {
    nb64()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nb64"));
}

#[test]
fn test_config_list() {
    nb64()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("url"))
        .stdout(predicate::str::contains("standard"))
        .stdout(predicate::str::contains("raw"));
}

#[test]
fn test_config_list_json() {
    nb64()
        .args(["config", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"alphabets\""))
        .stdout(predicate::str::contains("\"default\": \"url\""));
}

#[test]
fn test_config_show() {
    nb64()
        .args(["config", "show", "url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alphabet: url"))
        .stdout(predicate::str::contains(
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
        ))
        .stdout(predicate::str::contains("Delimiter: ."));
}

#[test]
fn test_config_show_raw_uses_hex() {
    nb64()
        .args(["config", "show", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00 01 02"))
        .stdout(predicate::str::contains("Delimiter: ~"));
}

// ============================================================================
// Encode/Decode
// ============================================================================

#[test]
fn test_encode_ascii() {
    nb64()
        .arg("encode")
        .write_stdin("We are all good kids.")
        .assert()
        .success()
        .stdout("r5UGHllQYdmxBn378iDXpyc1w\n");
}

#[test]
fn test_encode_cjk() {
    nb64()
        .arg("encode")
        .write_stdin("我们都是好孩子。")
        .assert()
        .success()
        .stdout(".GIRE7sJD9GYvFl9FtpFtQDAC.\n");
}

#[test]
fn test_encode_no_newline() {
    nb64()
        .args(["encode", "-n"])
        .write_stdin("¢")
        .assert()
        .success()
        .stdout(".ACi.");
}

#[test]
fn test_decode() {
    nb64()
        .arg("decode")
        .write_stdin("kaUA.E4WHVM.\n")
        .assert()
        .success()
        .stdout("Hi 世界");
}

#[test]
fn test_roundtrip_standard() {
    let encoded = nb64()
        .args(["encode", "--alphabet", "standard"])
        .write_stdin("test data 123 测试数据")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    nb64()
        .args(["decode", "--alphabet", "standard"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("test data 123 测试数据");
}

#[test]
fn test_roundtrip_raw() {
    let encoded = nb64()
        .args(["encode", "-a", "raw", "-n"])
        .write_stdin("line one\nline two ¢")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    nb64()
        .args(["decode", "-a", "raw"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("line one\nline two ¢");
}

#[test]
fn test_file_input_and_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.txt");
    let encoded = dir.path().join("plain.nb64");
    std::fs::write(&input, "好 good").unwrap();

    nb64()
        .arg("encode")
        .arg(&input)
        .arg("-o")
        .arg(&encoded)
        .assert()
        .success()
        .stdout("");

    nb64()
        .arg("decode")
        .arg(&encoded)
        .assert()
        .success()
        .stdout("好 good");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_decode_invalid_symbol() {
    nb64()
        .arg("decode")
        .write_stdin("ab!c")
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal input data at input byte 2"));
}

#[test]
fn test_decode_bad_high_run_length() {
    nb64()
        .arg("decode")
        .write_stdin("wg.ACiA.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input byte 7"));
}

#[test]
fn test_encode_unsupported_codepoint() {
    nb64()
        .arg("encode")
        .write_stdin("ab\u{4FFFF}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("illegal input data at input byte 2"));
}

#[test]
fn test_unknown_alphabet_suggestion() {
    nb64()
        .args(["encode", "-a", "ulr"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("alphabet 'ulr' not found"))
        .stderr(predicate::str::contains("did you mean 'url'?"));
}

#[test]
fn test_max_size() {
    nb64()
        .args(["--max-size", "4", "encode"])
        .write_stdin("hello world")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum"));

    nb64()
        .args(["--max-size", "4", "--force", "encode"])
        .write_stdin("hello")
        .assert()
        .success()
        .stdout("0Zdmze\n");
}
