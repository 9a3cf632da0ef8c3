//! End-to-end runs of the CLI against files in a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

use card_validator_cli::error::LoadError;
use card_validator_cli::render::Palette;
use card_validator_cli::{run, Cli, EXIT_INVALID, EXIT_OK};

fn write_cards(dir: &TempDir, cards: &Value) -> PathBuf {
    let path = dir.path().join("cards.json");
    fs::write(&path, serde_json::to_string(cards).unwrap()).unwrap();
    path
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn run_cli(args: &[&str]) -> (anyhow::Result<u8>, String) {
    let cli = Cli::parse_from(std::iter::once("validate-cards").chain(args.iter().copied()));
    let mut out = Vec::new();
    let result = run(&cli, Palette::plain(), &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn good_card(id: &str) -> Value {
    json!({"id": id, "question": "Q?", "answer": "A.", "difficulty": "medium"})
}

#[test]
fn clean_file_exits_ok() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_cards(&dir, &json!([good_card("a-1")]));

    let (result, out) = run_cli(&[path.to_str().unwrap()]);

    assert_eq!(result.unwrap(), EXIT_OK);
    assert_eq!(out, "OK — no problems found.\n");
}

#[test]
fn errors_exit_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_cards(&dir, &json!([{"id": "x"}]));

    let (result, out) = run_cli(&[path.to_str().unwrap()]);

    assert_eq!(result.unwrap(), EXIT_INVALID);
    assert!(out.contains("Errors (2):"));
}

#[test]
fn suggestions_alone_exit_ok() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_cards(&dir, &json!([{"id": "a", "question": "q", "answer": "a"}]));

    let (result, out) = run_cli(&[path.to_str().unwrap()]);

    assert_eq!(result.unwrap(), EXIT_OK);
    assert!(out.contains("Suggestions (1):"));
    assert!(!out.contains("[applied]"));
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let (result, out) = run_cli(&[path.to_str().unwrap()]);

    let error = result.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<LoadError>(),
        Some(LoadError::NotFound(_))
    ));
    assert!(out.is_empty());
}

#[test]
fn unparseable_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cards.json");
    fs::write(&path, "[{").unwrap();

    let (result, _) = run_cli(&[path.to_str().unwrap()]);

    assert!(matches!(
        result.unwrap_err().downcast_ref::<LoadError>(),
        Some(LoadError::Parse(_))
    ));
}

#[test]
fn fix_in_place_keeps_backup() {
    let dir = tempfile::tempdir().unwrap();
    let original = json!([{"id": "a", "question": "q", "answer": "a", "grasped": "yes"}]);
    let path = write_cards(&dir, &original);

    let (result, out) = run_cli(&[path.to_str().unwrap(), "--fix"]);

    assert_eq!(result.unwrap(), EXIT_OK);
    assert!(out.contains("[applied]"));
    assert!(out.contains("Original backed up to:"));
    assert_eq!(read_json(&dir.path().join("cards.json.bak")), original);
    assert_eq!(
        read_json(&path),
        json!([{"id": "a", "question": "q", "answer": "a", "grasped": true, "difficulty": "medium"}])
    );
}

#[test]
fn fix_to_separate_output() {
    let dir = tempfile::tempdir().unwrap();
    let original = json!([{"id": "a", "question": "q", "answer": "a", "difficulty": "HARD"}]);
    let path = write_cards(&dir, &original);
    let out_path = dir.path().join("fixed.json");

    let (result, _) = run_cli(&[
        path.to_str().unwrap(),
        "--fix",
        "--out",
        out_path.to_str().unwrap(),
    ]);

    assert_eq!(result.unwrap(), EXIT_OK);
    assert_eq!(read_json(&path), original);
    assert_eq!(read_json(&out_path)[0]["difficulty"], json!("hard"));
    assert!(!dir.path().join("cards.json.bak").exists());
}

#[test]
fn unchanged_fix_in_place_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_cards(&dir, &json!([good_card("a-1")]));

    let (result, out) = run_cli(&[path.to_str().unwrap(), "--fix"]);

    assert_eq!(result.unwrap(), EXIT_OK);
    assert_eq!(out, "OK — no problems found.\n");
    assert!(!dir.path().join("cards.json.bak").exists());
}

#[test]
fn unchanged_fix_still_writes_explicit_out() {
    let dir = tempfile::tempdir().unwrap();
    let cards = json!([good_card("a-1")]);
    let path = write_cards(&dir, &cards);
    let out_path = dir.path().join("fixed.json");

    let (result, out) = run_cli(&[
        path.to_str().unwrap(),
        "--fix",
        "--out",
        out_path.to_str().unwrap(),
    ]);

    assert_eq!(result.unwrap(), EXIT_OK);
    assert!(out.contains("Fixed JSON written to:"));
    assert_eq!(read_json(&out_path), cards);
    assert!(!dir.path().join("cards.json.bak").exists());
}

#[test]
fn report_written_for_clean_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_cards(&dir, &json!([good_card("a-1")]));
    let report = dir.path().join("report.json");

    let (result, _) = run_cli(&[path.to_str().unwrap(), "--report", report.to_str().unwrap()]);

    assert_eq!(result.unwrap(), EXIT_OK);
    assert_eq!(read_json(&report), json!({"errors": [], "suggestions": []}));
}

#[test]
fn report_lists_findings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_cards(&dir, &json!({"cards": []}));
    let report = dir.path().join("report.json");

    let (result, _) = run_cli(&[path.to_str().unwrap(), "--fix", "--report", report.to_str().unwrap()]);

    assert_eq!(result.unwrap(), EXIT_INVALID);
    assert_eq!(
        read_json(&report),
        json!({
            "errors": [{"loc": [], "err": "top_level", "msg": "Top-level JSON must be an array of card objects."}],
            "suggestions": []
        })
    );
    assert!(!dir.path().join("cards.json.bak").exists());
}
