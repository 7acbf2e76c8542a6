use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use specflow_rust::suites::FIXTURE_FILE;

fn specflow(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_specflow"));
    for var in ["SPECFLOW_FIXTURE_DIR", "SPECFLOW_FORMAT", "SPECFLOW_LOG", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd.args(args).envs(env.iter().copied()).output().expect("run specflow")
}

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[test]
fn exits_zero_when_every_example_passes() {
    let dir = fixture_dir();
    let out = specflow(&["--fixture-dir", dir.to_str().expect("utf8 path")], &[]);
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("0 failed, 0 errors"));
}

#[test]
fn exits_one_when_an_example_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(FIXTURE_FILE), "Olá").expect("write fixture");

    let out = specflow(&["--fixture-dir", dir.path().to_str().expect("utf8 path")], &[]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FAIL  File > be read line by line"), "{stdout}");
    assert!(stdout.contains("1 failed, 0 errors"), "{stdout}");
}

#[test]
fn exits_two_on_an_invalid_format_variable() {
    let out = specflow(&[], &[("SPECFLOW_FORMAT", "xml")]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("SPECFLOW_FORMAT inválido"));
}
