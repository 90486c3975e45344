use std::io::Write;
use std::process::{Command, Output};

fn md5sum() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_md5sum"));
    cmd.env_remove("MD5SUM_CHUNK_SIZE").env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn no_arguments_runs_self_test() {
    let output = md5sum().output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "MD5 of 'hello world': 5eb63bbbe01eeed093cb22bb8f5acdc3\n"
    );
}

#[test]
fn hashes_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"abc").unwrap();
    file.flush().unwrap();

    let output = md5sum().arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("Calculating MD5 of file: "));
    assert!(out.ends_with("MD5: 900150983cd24fb0d6963f7d28e17f72\n"));
}

#[test]
fn chunk_size_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[b'a'; 1_000]).unwrap();
    file.flush().unwrap();

    let output = md5sum()
        .arg(file.path())
        .env("MD5SUM_CHUNK_SIZE", "7")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).ends_with("MD5: cabe45dcc9ae5b66ba86600cca6b8ba8\n"));
}

#[test]
fn invalid_chunk_size_is_usage_error() {
    let file = tempfile::NamedTempFile::new().unwrap();
    for value in &["0", "lots"] {
        let output = md5sum()
            .arg(file.path())
            .env("MD5SUM_CHUNK_SIZE", value)
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(2));
        assert!(!stdout(&output).contains("MD5:"));
    }
}

#[test]
fn missing_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bin");

    let output = md5sum().arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout(&output).contains("MD5:"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error processing file:"), "stderr: {}", stderr);
}

#[test]
fn too_many_arguments() {
    let output = md5sum().args(&["a", "b"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
