//! End-to-end runs of the `metodist` binary in a scratch directory.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const RAW: &str = "Конечно! Вот ваш материал:\n**Задание 1.** Решите уравнение\n| Критерий | Балл |\n|---|---|\n| Шаг 1 | 1 |\n";

/// Binary with config and cache isolated to `dir`.
fn metodist(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("metodist").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_CACHE_HOME", dir.join("cache"))
        .env_remove("METODIST_GENAI__API_KEY")
        .env_remove("METODIST_ACCESS__ENABLED")
        .env_remove("METODIST_LOG");
    cmd
}

#[test]
fn render_from_stdin_writes_docx() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.docx");

    metodist(dir.path())
        .args(["render", "--subject", "Алгебра", "--grade", "7", "--topic", "Уравнения"])
        .args(["--kind", "summative", "--max-score", "2", "--format", "raw", "--out"])
        .arg(&out)
        .write_stdin(RAW)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\":\"summative\""));

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn render_blocks_prints_block_model_without_writing() {
    let dir = TempDir::new().unwrap();

    let assert = metodist(dir.path())
        .args(["render", "--subject", "Алгебра", "--grade", "7", "--topic", "Уравнения"])
        .args(["--kind", "summative", "--blocks", "--format", "raw"])
        .write_stdin(RAW)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let dump: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let blocks = dump["blocks"].as_array().unwrap();
    assert_eq!(blocks[0]["block"], "header");
    assert!(blocks.iter().any(|b| b["block"] == "table"));
    assert_eq!(blocks.last().unwrap()["block"], "signature");
    assert!(
        std::fs::read_dir(dir.path())
            .unwrap()
            .flatten()
            .all(|entry| entry.path().extension().is_none_or(|ext| ext != "docx"))
    );
}

#[test]
fn normalize_drops_boilerplate_and_markers() {
    let dir = TempDir::new().unwrap();

    metodist(dir.path())
        .args(["normalize", "--format", "raw"])
        .write_stdin(RAW)
        .assert()
        .success()
        .stdout(predicate::str::contains("Задание 1. Решите уравнение"))
        .stdout(predicate::str::contains("Вот ваш").not());
}

#[test]
fn schema_prints_request_schema() {
    let dir = TempDir::new().unwrap();

    metodist(dir.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("GenerationRequest"))
        .stdout(predicate::str::contains("max_score"));
}

#[test]
fn generate_without_api_key_fails_cleanly() {
    let dir = TempDir::new().unwrap();

    metodist(dir.path())
        .args(["generate", "--subject", "Физика", "--grade", "8"])
        .args(["--topic", "Давление", "--goals", "8.2.1.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("metodist error:"))
        .stderr(predicate::str::contains("genai"));
}

#[test]
fn generate_rejects_unknown_kind_before_network() {
    let dir = TempDir::new().unwrap();

    metodist(dir.path())
        .env("METODIST_GENAI__API_KEY", "unused")
        .args(["generate", "--subject", "Физика", "--grade", "8"])
        .args(["--topic", "Давление", "--goals", "8.2.1.1", "--kind", "essay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid kind 'essay'"));
}

#[test]
fn last_with_empty_cache_explains() {
    let dir = TempDir::new().unwrap();

    metodist(dir.path())
        .arg("last")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing generated yet"));
}

#[test]
fn access_reports_project_allow_list() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".metodist")).unwrap();
    std::fs::write(
        dir.path().join(".metodist/config.toml"),
        "[access]\nenabled = true\nallowed_phones = [\"87011234567\"]\n",
    )
    .unwrap();

    metodist(dir.path())
        .args(["access", "+7 (701) 123-45-67", "--format", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allowed\":true"))
        .stdout(predicate::str::contains("\"normalized\":\"77011234567\""));

    metodist(dir.path())
        .args(["access", "+7 777 000 00 00", "--format", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allowed\":false"));
}
