//! Integration tests for the pagina CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn pagina() -> Command {
    Command::cargo_bin("pagina").unwrap()
}

#[test]
fn test_paginate_json_records_as_text() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-m")
        .arg("60");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://en.wikipedia.org/wiki/Rust\n"))
        .stdout(predicate::str::contains("https://en.wikipedia.org/wiki/Rust/part-2"))
        .stdout(predicate::str::contains("Rust (Part 3)"))
        .stdout(predicate::str::contains(
            "Rust is a systems language. (Continues in next result)",
        ))
        .stdout(predicate::str::contains(
            "Cargo is its build tool and package manager. (Continued from previous result)",
        ))
        .stdout(predicate::str::contains("https://rustacean.net/"))
        .stdout(predicate::str::contains("https://example.com/empty").not());
}

#[test]
fn test_paginate_default_length_keeps_records_whole() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("records.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("part-2").not())
        .stdout(predicate::str::contains("Continues in next result").not());
}

#[test]
fn test_json_output() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-m")
        .arg("60")
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let fragments: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let fragments = fragments.as_array().unwrap();

    assert_eq!(fragments.len(), 4);
    assert_eq!(fragments[0]["isMultiPart"], true);
    assert_eq!(fragments[0]["continues"], true);
    assert_eq!(fragments[0]["continuedFromPrevious"], false);
    assert_eq!(fragments[2]["continuedFromPrevious"], true);
    assert_eq!(fragments[2]["totalParts"], 3);
    assert_eq!(fragments[3]["isMultiPart"], false);
    assert!(fragments[0].get("fullBody").is_none());
}

#[test]
fn test_json_output_with_full_body() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-f")
        .arg("json")
        .arg("--full-body");

    let output = cmd.assert().success().get_output().stdout.clone();
    let fragments: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        fragments[1]["fullBody"],
        "Ferris is the unofficial mascot."
    );
}

#[test]
fn test_markdown_output() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-m")
        .arg("60")
        .arg("-f")
        .arg("markdown")
        .arg("--full-body");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1. [Rust](https://en.wikipedia.org/wiki/Rust) Rust is a systems language.",
        ))
        .stdout(predicate::str::contains("## Rust"))
        .stdout(predicate::str::contains("*Source: en.wikipedia.org*"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total fragments: 4*"));
}

#[test]
fn test_invalid_locator_fails_by_default() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("invalid.json"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a url"));
}

#[test]
fn test_skip_invalid_drops_bad_record() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("invalid.json"))
        .arg("--skip-invalid");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://example.org/fine"))
        .stdout(predicate::str::contains("Broken").not());
}

#[test]
fn test_skip_policy_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pagina.toml");
    fs::write(&config_path, "[pagination]\non_invalid_locator = \"skip\"\n").unwrap();

    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("invalid.json"))
        .arg("-c")
        .arg(&config_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://example.org/fine"));
}

#[test]
fn test_text_input_with_base_url() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("--base-url")
        .arg("https://docs.example.com")
        .arg("-m")
        .arg("60");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://docs.example.com/article\n"))
        .stdout(predicate::str::contains("https://docs.example.com/article/part-2"))
        .stdout(predicate::str::contains("article (Part 2)"));
}

#[test]
fn test_text_input_with_query() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("response.txt"))
        .arg("--query")
        .arg("tokio");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tokio - Overview"))
        .stdout(predicate::str::contains("https://wikipedia.org/tokio-overview"))
        .stdout(predicate::str::contains("https://example1.com/"))
        .stdout(predicate::str::contains("https://example2.com/"));
}

#[test]
fn test_text_input_without_locator_source() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("article.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--base-url"));
}

#[test]
fn test_zero_max_length_rejected() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-m")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pagination settings"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("fragments.json");

    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg(fixture_path("records.json"))
        .arg("-f")
        .arg("json")
        .arg("-o")
        .arg(&output_path);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("\"identifier\": \"https://rustacean.net/\""));
}

#[test]
fn test_glob_pattern() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg("tests/fixtures/*.json")
        .arg("--skip-invalid")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://example.org/fine"))
        .stdout(predicate::str::contains("https://rustacean.net/"));
}

#[test]
fn test_families_follow_input_argument_order() {
    let temp_dir = TempDir::new().unwrap();
    let a_path = temp_dir.path().join("a.json");
    let b_path = temp_dir.path().join("b.json");
    fs::write(
        &a_path,
        r#"[{"title":"Ant","identifier":"https://a.example/x","body":"Ants march."}]"#,
    )
    .unwrap();
    fs::write(
        &b_path,
        r#"[{"title":"Bee","identifier":"https://b.example/x","body":"Bees hum."}]"#,
    )
    .unwrap();

    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-q")
        .arg("-i")
        .arg(&b_path)
        .arg("-i")
        .arg(&a_path);

    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let bee = stdout.find("https://b.example/x").unwrap();
    let ant = stdout.find("https://a.example/x").unwrap();
    assert!(bee < ant, "Bee family should come first:\n{stdout}");
}

#[test]
fn test_invalid_file() {
    let mut cmd = pagina();
    cmd.arg("paginate")
        .arg("-i")
        .arg("nonexistent-file.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_segment_command() {
    let mut cmd = pagina();
    cmd.arg("segment")
        .arg("-i")
        .arg(fixture_path("article.txt"))
        .arg("-m")
        .arg("60");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[0] 0..40\tPagination keeps search results compact.",
        ))
        .stdout(predicate::str::contains("[1] 40.."));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pagina.toml");

    pagina()
        .arg("generate-config")
        .arg("-o")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    pagina()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Max fragment length: 200"));
}

#[test]
fn test_validate_rejects_bad_length() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[pagination]\nmax_fragment_length = 0\n").unwrap();

    pagina()
        .arg("validate")
        .arg("-c")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_list_formats() {
    let mut cmd = pagina();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_help_command() {
    let mut cmd = pagina();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("paginate"))
        .stdout(predicate::str::contains("segment"));
}
