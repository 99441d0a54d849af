//! End-to-end runs of the `tnsview` binary.

use std::path::Path;
use std::process::{Command, Output};

fn tnsview(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tnsview"))
        .args(args)
        .env_remove("TNSVIEW_FILE")
        .env_remove("TNSVIEW_DUMP")
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to spawn tnsview")
}

#[test]
fn dumps_scene_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("t.tns");
    let output = dir.path().join("scene.json");
    std::fs::write(&input, "0 0 0 1.5\n1 1 1 2.5\n").unwrap();

    let out = tnsview(&[&input, Path::new("--dump"), &output]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let doc: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(doc["point_count"], 2);
    assert_eq!(doc["bounds"]["max"], serde_json::json!([1.0, 1.0, 1.0]));
}

#[test]
fn malformed_file_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.tns");
    let output = dir.path().join("scene.json");
    std::fs::write(&input, "a b c 1\n").unwrap();

    let out = tnsview(&[&input, Path::new("--dump"), &output]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a number"));
    assert!(!output.exists());
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = tnsview(&[&dir.path().join("absent.tns")]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.tns"));
}
