//! Integration tests for the pushmeta binary.
//!
//! Each test writes its inputs into a temporary directory and points
//! `HOME` there so a developer's own config file cannot leak in.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

const DESCRIPTOR: &str = r#"{
    "apiVersion": "kubernetes.external-secrets.io/v1alpha1",
    "kind": "PushSecretMetadata",
    "spec": {
        "sourceMergePolicy": "Merge",
        "targetMergePolicy": "Merge",
        "labels": { "b": "2" }
    }
}"#;

const SOURCE: &str = r#"{
    "apiVersion": "v1",
    "kind": "Secret",
    "metadata": { "name": "local", "labels": { "a": "1" } }
}"#;

const TARGET: &str = r#"{
    "apiVersion": "v1",
    "kind": "Secret",
    "metadata": { "name": "remote", "labels": { "a": "0", "c": "3" } }
}"#;

/// Get a command for running pushmeta, isolated from user config.
fn pushmeta(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pushmeta").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("PUSHMETA_CONFIG");
    cmd
}

/// Write the standard fixtures and return the temp dir.
fn fixtures() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("metadata.json").write_str(DESCRIPTOR).unwrap();
    temp.child("source.json").write_str(SOURCE).unwrap();
    temp.child("target.json").write_str(TARGET).unwrap();
    temp
}

fn merge_args(temp: &TempDir) -> Vec<String> {
    vec![
        "merge".to_string(),
        "--source".to_string(),
        temp.child("source.json").path().display().to_string(),
        "--target".to_string(),
        temp.child("target.json").path().display().to_string(),
    ]
}

#[test]
fn help_flag_works() {
    let temp = TempDir::new().unwrap();
    pushmeta(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("labels and annotations"));
}

#[test]
fn validate_valid_descriptor() {
    let temp = fixtures();
    pushmeta(&temp)
        .arg("validate")
        .arg(temp.child("metadata.json").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sourceMergePolicy: Merge"))
        .stdout(predicate::str::contains("  b=2"));
}

#[test]
fn validate_json_is_normalized() {
    let temp = TempDir::new().unwrap();
    temp.child("metadata.json")
        .write_str(
            r#"{ "apiVersion": "kubernetes.external-secrets.io/v1alpha1", "kind": "PushSecretMetadata" }"#,
        )
        .unwrap();

    pushmeta(&temp)
        .args(["validate", "--json"])
        .arg(temp.child("metadata.json").path())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""targetMergePolicy": "Merge""#))
        .stdout(predicate::str::contains(r#""sourceMergePolicy": "Merge""#));
}

#[test]
fn validate_rejects_wrong_kind() {
    let temp = TempDir::new().unwrap();
    temp.child("metadata.json")
        .write_str(r#"{ "apiVersion": "kubernetes.external-secrets.io/v1alpha1", "kind": "Secret" }"#)
        .unwrap();

    pushmeta(&temp)
        .arg("validate")
        .arg(temp.child("metadata.json").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            r#"unexpected kind "Secret", expected "PushSecretMetadata""#,
        ));
}

#[test]
fn validate_yaml_descriptor() {
    let temp = TempDir::new().unwrap();
    temp.child("metadata.yaml")
        .write_str(
            "apiVersion: kubernetes.external-secrets.io/v1alpha1\n\
             kind: PushSecretMetadata\n\
             spec:\n  targetMergePolicy: Ignore\n  labels:\n    team: payments\n",
        )
        .unwrap();

    pushmeta(&temp)
        .arg("validate")
        .arg(temp.child("metadata.yaml").path())
        .assert()
        .success()
        .stdout(predicate::str::contains("targetMergePolicy: Ignore"))
        .stdout(predicate::str::contains("  team=payments"));
}

#[test]
fn validate_warns_when_replace_omits_a_map() {
    let temp = TempDir::new().unwrap();
    temp.child("metadata.yaml")
        .write_str(
            "apiVersion: kubernetes.external-secrets.io/v1alpha1\n\
             kind: PushSecretMetadata\n\
             spec:\n  sourceMergePolicy: Replace\n  labels:\n    team: payments\n",
        )
        .unwrap();

    pushmeta(&temp)
        .arg("validate")
        .arg(temp.child("metadata.yaml").path())
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: sourceMergePolicy is Replace"))
        .stderr(predicate::str::contains("no annotations are set"));

    pushmeta(&temp)
        .args(["validate", "--quiet"])
        .arg(temp.child("metadata.yaml").path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn merge_with_descriptor() {
    let temp = fixtures();
    pushmeta(&temp)
        .args(merge_args(&temp))
        .arg("--metadata")
        .arg(temp.child("metadata.json").path())
        .assert()
        .success()
        .stdout("labels:\n  a=1\n  b=2\n  c=3\nannotations: (empty)\n");
}

#[test]
fn merge_without_descriptor() {
    let temp = fixtures();
    pushmeta(&temp)
        .args(merge_args(&temp))
        .assert()
        .success()
        .stdout("labels:\n  a=1\n  c=3\nannotations: (empty)\n");
}

#[test]
fn merge_json_with_stages() {
    let temp = fixtures();
    let output = pushmeta(&temp)
        .args(merge_args(&temp))
        .args(["--json", "--show-stages"])
        .arg("--metadata")
        .arg(temp.child("metadata.json").path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["source"]["labels"], serde_json::json!({ "a": "1", "b": "2" }));
    assert_eq!(
        value["target"]["labels"],
        serde_json::json!({ "a": "1", "b": "2", "c": "3" })
    );
}

#[test]
fn quiet_silences_merge_and_validate_alike() {
    let temp = fixtures();
    pushmeta(&temp)
        .args(merge_args(&temp))
        .arg("-q")
        .arg("--metadata")
        .arg(temp.child("metadata.json").path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    pushmeta(&temp)
        .args(["validate", "-q"])
        .arg(temp.child("metadata.json").path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn quiet_still_prints_json() {
    let temp = fixtures();
    let output = pushmeta(&temp)
        .args(merge_args(&temp))
        .args(["-q", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["labels"], serde_json::json!({ "a": "1", "c": "3" }));
}

#[test]
fn merge_rejects_unknown_policy() {
    let temp = fixtures();
    temp.child("bad.json")
        .write_str(
            r#"{
                "apiVersion": "kubernetes.external-secrets.io/v1alpha1",
                "kind": "PushSecretMetadata",
                "spec": { "targetMergePolicy": "Foo" }
            }"#,
        )
        .unwrap();

    pushmeta(&temp)
        .args(merge_args(&temp))
        .arg("--metadata")
        .arg(temp.child("bad.json").path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(r#"unexpected target merge policy "Foo""#));
}

#[test]
fn merge_missing_source_file() {
    let temp = fixtures();
    pushmeta(&temp)
        .args(["merge", "--source", "does-not-exist.json", "--target"])
        .arg(temp.child("target.json").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read object"));
}

#[test]
fn config_file_enables_json_and_stages() {
    let temp = fixtures();
    temp.child("pushmeta.toml")
        .write_str("output = \"json\"\n\n[merge]\nshow_stages = true\n")
        .unwrap();

    let output = pushmeta(&temp)
        .arg("--config")
        .arg(temp.child("pushmeta.toml").path())
        .args(merge_args(&temp))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.get("source").is_some());
    assert!(value.get("target").is_some());
}

#[test]
fn config_from_home() {
    let temp = TempDir::new().unwrap();
    temp.child(".pushmeta/config.toml")
        .write_str("output = \"json\"\n")
        .unwrap();

    pushmeta(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""output": "json""#));
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    temp.child("pushmeta.toml")
        .write_str("output = \"xml\"\n")
        .unwrap();

    pushmeta(&temp)
        .arg("--config")
        .arg(temp.child("pushmeta.toml").path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid output 'xml'"));
}

#[test]
fn completion_generates_script() {
    let temp = TempDir::new().unwrap();
    pushmeta(&temp)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pushmeta"));
}
