use std::process::{Command, Output};

use serde_json::{Value, json};

fn argsnap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_argsnap"))
}

fn stdout_json(out: &Output) -> Value {
    serde_json::from_slice(&out.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not valid JSON ({e}):\n{}",
            String::from_utf8_lossy(&out.stdout)
        )
    })
}

#[test]
fn dump_reports_parsed_snapshot() {
    let out = argsnap()
        .args(["--mode=dev", "--count=3", "-qv", "ignored.txt"])
        .output()
        .expect("failed to run argsnap");
    assert!(
        out.status.success(),
        "argsnap dump failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    assert_eq!(
        stdout_json(&out),
        json!({"mode": "dev", "count": 3, "q": true, "v": true})
    );
}

#[test]
fn dump_with_no_flags_is_empty_object() {
    let out = argsnap()
        .args(["serve", "input.txt"])
        .output()
        .expect("failed to run argsnap");
    assert!(out.status.success());
    assert_eq!(stdout_json(&out), json!({}));
}

#[test]
fn dump_pretty_prints_with_flag() {
    let out = argsnap()
        .args(["--pretty", "--mode=dev"])
        .output()
        .expect("failed to run argsnap");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.starts_with("{\n"),
        "expected pretty-printed output:\n{stdout}"
    );
    assert_eq!(
        stdout_json(&out),
        json!({"pretty": true, "mode": "dev"})
    );
}

#[test]
fn probe_resolves_stored_value() {
    let out = argsnap()
        .args(["--probe=width", "--width=42px"])
        .output()
        .expect("failed to run argsnap");
    assert!(
        out.status.success(),
        "probe failed:\nstderr:\n{}",
        String::from_utf8_lossy(&out.stderr),
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "\"42px\"");
}

#[test]
fn probe_normalizes_requested_name() {
    let out = argsnap()
        .args(["--probe=BUILD_DIR", "--build-dir=out"])
        .output()
        .expect("failed to run argsnap");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "\"out\"");
}

#[test]
fn probe_miss_prints_null() {
    let out = argsnap()
        .args(["--probe=missing"])
        .output()
        .expect("failed to run argsnap");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "null");
}

#[test]
fn probe_uses_fallback_when_missing() {
    let out = argsnap()
        .args(["--probe=missing", "--fallback=7"])
        .output()
        .expect("failed to run argsnap");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "7");
}

#[test]
fn strict_probe_falls_back_on_mismatch() {
    let out = argsnap()
        .args(["--probe=count", "--count=true", "--fallback=0", "--level=strict"])
        .output()
        .expect("failed to run argsnap");
    assert!(
        out.status.success(),
        "strict probe failed:\nstderr:\n{}",
        String::from_utf8_lossy(&out.stderr),
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "0");
}

#[test]
fn strict_error_probe_fails_on_mismatch() {
    let out = argsnap()
        .args([
            "--probe=count",
            "--count=true",
            "--fallback=0",
            "--level=strict-error",
        ])
        .output()
        .expect("failed to run argsnap");
    assert!(!out.status.success(), "expected a nonzero exit");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("did not match default type"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn probe_name_must_be_text() {
    let out = argsnap()
        .args(["--probe=42"])
        .output()
        .expect("failed to run argsnap");
    assert!(!out.status.success(), "expected a nonzero exit");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("probe name must be a string"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn probe_rejects_unknown_level() {
    let out = argsnap()
        .args(["--probe=x", "--level=bogus"])
        .output()
        .expect("failed to run argsnap");
    assert!(!out.status.success(), "expected a nonzero exit");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("unknown --level"),
        "unexpected stderr:\n{stderr}"
    );
}

#[test]
fn help_works() {
    let out = argsnap()
        .arg("--help")
        .output()
        .expect("failed to run argsnap --help");
    assert!(
        out.status.success(),
        "argsnap --help failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("argsnap") && stdout.contains("--probe") && stdout.contains("--level"),
        "unexpected help output:\n{stdout}"
    );
}

#[test]
fn version_works() {
    let out = argsnap()
        .arg("--version")
        .output()
        .expect("failed to run argsnap --version");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.starts_with("argsnap ") && stdout.contains(env!("CARGO_PKG_VERSION")),
        "unexpected version output:\n{stdout}"
    );
}
