//! CLI integration tests for stdmatrix.
//!
//! These tests run the binary against small matrices the way a packaging
//! pipeline would.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the stdmatrix binary command, isolated from any user config.
fn stdmatrix(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stdmatrix").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("STDMATRIX_CONFIG")
        .current_dir(home.path());
    cmd
}

/// Create a temporary directory for test inputs.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

const MATRIX: &str = r#"[
    {"compiler": "gcc", "compiler_version": "7", "arch": "x86_64", "build_type": "Debug"},
    {"compiler": "gcc", "compiler_version": "7", "arch": "x86_64", "build_type": "Release",
     "options": {"throwing_ptr:shared": "False"},
     "build_requires": ["catch2/2.1.2@bincrafters/stable"]},
    {"compiler": "Visual Studio", "compiler_version": "15", "arch": "x86_64",
     "build_type": "Release", "settings": {"compiler.runtime": "MD"}},
    {"compiler": "clang", "compiler_version": "3.9", "arch": "x86", "build_type": "Release"}
]"#;

fn write_matrix(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("matrix.json");
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// stdmatrix expand
// ============================================================================

#[test]
fn test_expand_json_output() {
    let tmp = temp_dir();
    let input = write_matrix(&tmp, MATRIX);

    let output = stdmatrix(&tmp)
        .args(["expand"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let builds: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let described: Vec<(String, Option<String>)> = builds
        .iter()
        .map(|b| {
            (
                b["compiler"].as_str().unwrap().to_string(),
                b["env"]["CXX_STANDARD"].as_str().map(str::to_string),
            )
        })
        .collect();

    assert_eq!(
        described,
        vec![
            ("gcc".to_string(), Some("11".to_string())),
            ("gcc".to_string(), Some("14".to_string())),
            ("gcc".to_string(), Some("17".to_string())),
            ("Visual Studio".to_string(), None),
            ("clang".to_string(), Some("11".to_string())),
            ("clang".to_string(), Some("14".to_string())),
        ]
    );
    assert!(builds
        .iter()
        .all(|b| b["build_type"].as_str() == Some("Release")));
    assert_eq!(builds[0]["options"]["throwing_ptr:shared"], "False");
    assert_eq!(builds[3]["settings"]["compiler.runtime"], "MD");
}

#[test]
fn test_expand_from_stdin_table() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand", "-", "--format", "table"])
        .write_stdin(r#"[{"compiler": "gcc", "compiler_version": "5", "build_type": "Release"}]"#)
        .assert()
        .success()
        .stdout("gcc 5 Release CXX_STANDARD=11\ngcc 5 Release CXX_STANDARD=14\n");
}

#[test]
fn test_expand_empty_list() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn test_expand_fixed_revision_keeps_debug() {
    let tmp = temp_dir();
    let input = write_matrix(&tmp, MATRIX);

    let output = stdmatrix(&tmp)
        .args(["expand", "--revision", "fixed"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let builds: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    // 3 + 3 gcc variants, 1 MSVC pass-through, 3 clang variants
    assert_eq!(builds.len(), 10);
}

#[test]
fn test_expand_custom_std_var_to_file() {
    let tmp = temp_dir();
    let input = write_matrix(&tmp, MATRIX);
    let out = tmp.path().join("out.json");

    stdmatrix(&tmp)
        .args(["expand", "--std-var", "CPP_STD", "-o"])
        .arg(&out)
        .arg(&input)
        .assert()
        .success()
        .stdout("");

    let contents = fs::read_to_string(&out).unwrap();
    assert!(contents.contains("\"CPP_STD\": \"17\""));
    assert!(!contents.contains("CXX_STANDARD"));
}

#[test]
fn test_expand_bad_version_fails() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand"])
        .write_stdin(
            r#"[{"compiler": "gcc", "compiler_version": "seven", "build_type": "Release"}]"#,
        )
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot compare version `seven`"))
        .stderr(predicate::str::contains("--lenient"));
}

#[test]
fn test_expand_lenient_accepts_bad_version() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand", "--lenient", "--format", "table"])
        .write_stdin(
            r#"[{"compiler": "gcc", "compiler_version": "7-ubuntu", "build_type": "Release"}]"#,
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("CXX_STANDARD=17"))
        .stderr(predicate::str::contains("not a clean dotted number"));
}

#[test]
fn test_expand_lenient_warns_on_empty_version() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand", "--lenient", "--format", "table"])
        .write_stdin(r#"[{"compiler": "gcc", "compiler_version": "", "build_type": "Release"}]"#)
        .assert()
        .success()
        .stdout("gcc  Release CXX_STANDARD=11\n")
        .stderr(predicate::str::contains("not a clean dotted number"));
}

#[test]
fn test_expand_msvc_toolset_passes_through() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand", "--format", "table"])
        .write_stdin(r#"[{"compiler": "msvc", "compiler_version": "190", "build_type": "Release"}]"#)
        .assert()
        .success()
        .stdout("msvc 190 Release\n");
}

#[test]
fn test_expand_missing_input_file() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read combinations"));
}

#[test]
fn test_expand_malformed_input() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand"])
        .write_stdin(r#"{"compiler": "gcc"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse combination list"))
        .stderr(predicate::str::contains("Pass a JSON array of combinations"));
}

#[test]
fn test_expand_unknown_revision() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["expand", "--revision", "v9"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown policy revision `v9`"));
}

#[test]
fn test_expand_uses_project_config() {
    let tmp = temp_dir();
    fs::create_dir_all(tmp.path().join(".stdmatrix")).unwrap();
    fs::write(
        tmp.path().join(".stdmatrix/config.toml"),
        "[matrix]\nstd_var = \"CPP_STD\"\nexclude_build_types = []\n",
    )
    .unwrap();

    stdmatrix(&tmp)
        .args(["expand", "--format", "table"])
        .write_stdin(r#"[{"compiler": "gcc", "compiler_version": "4.9", "build_type": "Debug"}]"#)
        .assert()
        .success()
        .stdout("gcc 4.9 Debug CPP_STD=11\n");
}

#[test]
fn test_expand_explicit_config_must_exist() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["--config", "missing.toml", "expand"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

// ============================================================================
// stdmatrix standards
// ============================================================================

#[test]
fn test_standards_gcc() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["standards", "gcc", "7"])
        .assert()
        .success()
        .stdout("11\n14\n17\n");
}

#[test]
fn test_standards_numeric_comparison() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["standards", "clang", "10.0"])
        .assert()
        .success()
        .stdout("11\n14\n17\n");
}

#[test]
fn test_standards_unknown_compiler_warns() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["standards", "intel", "19"])
        .assert()
        .success()
        .stdout("11\n")
        .stderr(predicate::str::contains("not in the standard table"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_standards_msvc_toolset_version() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["standards", "msvc", "190"])
        .assert()
        .success()
        .stdout("11\n14\n");

    stdmatrix(&tmp)
        .args(["standards", "msvc", "191"])
        .assert()
        .success()
        .stdout("11\n14\n17\n");
}

#[test]
fn test_standards_bad_version() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["standards", "apple-clang", "nine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid").or(predicate::str::contains("cannot compare")));
}

// ============================================================================
// stdmatrix completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = temp_dir();

    stdmatrix(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stdmatrix"));
}
