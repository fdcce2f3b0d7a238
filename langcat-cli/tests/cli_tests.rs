use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn langcat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("langcat"))
}

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("langcat")
        .join("tests")
        .join("data")
        .join("translations")
}

/// Copies the fixture translations into a scratch directory.
fn scratch_copy() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for entry in fs::read_dir(fixture_dir()).unwrap() {
        let entry = entry.unwrap();
        fs::copy(entry.path(), temp_dir.path().join(entry.file_name())).unwrap();
    }
    temp_dir
}

#[test]
fn test_languages_lists_table() {
    let output = langcat_cmd().args(["languages"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("en_US"));
    assert!(stdout.contains("nan_Latn_pehoeji"));
    assert!(stdout.contains("forms: 3"));
}

#[test]
fn test_languages_json() {
    let output = langcat_cmd().args(["languages", "--json"]).output().unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let languages = body.as_array().unwrap();
    assert_eq!(languages.len(), 20);
    let ru = languages.iter().find(|l| l["id"] == "ru_RU").unwrap();
    assert_eq!(ru["forms"], 3);
    assert_eq!(ru["rule"], "east_slavic");
}

#[test]
fn test_check_clean_directory() {
    let dir = fixture_dir();
    let output = langcat_cmd()
        .args(["check", "--dir", dir.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Issues: 0"));
}

#[test]
fn test_check_reports_missing_key() {
    let temp_dir = scratch_copy();
    fs::write(
        temp_dir.path().join("tr_TR.json"),
        r#"{
            "menu.unread": "Okunmamış",
            "menu.starred": "Yıldızlı",
            "menu.settings": "Ayarlar",
            "page.welcome": "Hoş geldin, %s!",
            "page.unread_entry_count": ["%d okunmamış makale", "%d okunmamış makale"],
            "time_elapsed.minutes": ["%d dakika önce", "%d dakika önce"]
        }"#,
    )
    .unwrap();

    let output = langcat_cmd()
        .args(["check", "--dir", temp_dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("lang='tr_TR' key='menu.logout': missing singular translation"),
        "stdout: {}",
        stdout
    );
}

#[test]
fn test_check_json_reports_broken_file() {
    let temp_dir = scratch_copy();
    fs::write(temp_dir.path().join("fi_FI.json"), "{\"menu.unread\": ").unwrap();

    let output = langcat_cmd()
        .args(["check", "--dir", temp_dir.path().to_str().unwrap(), "--json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let failures = body["load_failures"].as_array().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0]["language"], "fi_FI");
    assert!(failures[0]["error"].as_str().unwrap().contains("parse error"));
}

#[test]
fn test_check_missing_directory() {
    let output = langcat_cmd()
        .args(["check", "--dir", "/definitely/not/here"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory does not exist"), "stderr: {}", stderr);
}

#[test]
fn test_translate_singular_and_plural() {
    let dir = fixture_dir();
    let dir = dir.to_str().unwrap();

    let output = langcat_cmd()
        .args(["translate", "--dir", dir, "--lang", "fr_FR", "page.welcome", "Marie"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Bienvenue, Marie !");

    let output = langcat_cmd()
        .args([
            "translate",
            "--dir",
            dir,
            "--lang",
            "uk_UA",
            "--count",
            "3",
            "time_elapsed.minutes",
            "3",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "3 хвилини тому");
}

#[test]
fn test_translate_unknown_key_echoes_key() {
    let dir = fixture_dir();
    let output = langcat_cmd()
        .args([
            "translate",
            "--dir",
            dir.to_str().unwrap(),
            "--lang",
            "ja_JP",
            "no.such.key",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "no.such.key");
}

#[test]
fn test_translate_rejects_unknown_language() {
    let dir = fixture_dir();
    let output = langcat_cmd()
        .args([
            "translate",
            "--dir",
            dir.to_str().unwrap(),
            "--lang",
            "xx_XX",
            "menu.unread",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported language: xx_XX"));
}

#[test]
fn test_plural_forms() {
    let output = langcat_cmd()
        .args(["plural", "--lang", "ru_RU", "1", "2", "11", "21"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["1 -> 0", "2 -> 1", "11 -> 2", "21 -> 0"]);
}
