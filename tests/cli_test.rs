// ABOUTME: End-to-end tests for the nutrilens-cli binary
// ABOUTME: Runs each subcommand against temporary JSON fixtures and checks stdout and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLens

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{dieter_profile_json, jeyuk_analysis_json};
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_nutrilens-cli"));
    command.env_remove("RUST_LOG").env("LOG_FORMAT", "compact");
    command
}

fn write_fixture(dir: &Path, name: &str, value: &Value) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(value)?)?;
    Ok(path)
}

fn stdout_json(output: &Output) -> Result<Value> {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_analyze_for_user() -> Result<()> {
    let dir = TempDir::new()?;
    let analysis = write_fixture(dir.path(), "analysis.json", &jeyuk_analysis_json())?;
    let profile = write_fixture(dir.path(), "profile.json", &dieter_profile_json())?;

    let output = cli()
        .arg("analyze")
        .arg("--analysis")
        .arg(&analysis)
        .arg("--profile")
        .arg(&profile)
        .output()?;
    let result = stdout_json(&output)?;

    assert_eq!(result["score100"], 70);
    assert_eq!(result["grade"], "good");
    assert!(result["warnings"][0].as_str().unwrap().contains("대두"));
    for key in [
        "pros",
        "cons",
        "goalFit",
        "dietFit",
        "healthImpact",
        "reasons",
        "alternatives",
        "tips",
    ] {
        assert!(!result[key].as_array().unwrap().is_empty(), "{key} empty");
    }
    Ok(())
}

#[test]
fn test_analyze_embed_keeps_unknown_fields() -> Result<()> {
    let dir = TempDir::new()?;
    let analysis = write_fixture(dir.path(), "analysis.json", &jeyuk_analysis_json())?;

    let output = cli()
        .args(["analyze", "--embed", "--compact", "--analysis"])
        .arg(&analysis)
        .output()?;
    let embedded = stdout_json(&output)?;

    assert_eq!(embedded["dishName"], "제육볶음");
    assert_eq!(embedded["imageId"], "img_42");
    assert_eq!(embedded["userAnalysis"]["score100"], 70);
    Ok(())
}

#[test]
fn test_score_from_stdin() -> Result<()> {
    let mut child = cli()
        .args(["score", "--analysis", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .unwrap()
        .write_all(json!({"userAnalysis": {"grade": "good"}}).to_string().as_bytes())?;
    let report = stdout_json(&child.wait_with_output()?)?;

    assert_eq!(report["analyzed"], true);
    assert_eq!(report["score100"], 75);
    assert_eq!(report["grade"], "good");
    assert_eq!(report["badge"], "warning");
    Ok(())
}

#[test]
fn test_score_not_analyzed() -> Result<()> {
    let dir = TempDir::new()?;
    let analysis = write_fixture(dir.path(), "analysis.json", &json!({"dishName": "비빔밥"}))?;

    let output = cli().arg("score").arg("--analysis").arg(&analysis).output()?;
    let report = stdout_json(&output)?;

    assert_eq!(report["analyzed"], false);
    assert!(report.get("score100").is_none());
    assert_eq!(report["badge"], "default");
    Ok(())
}

#[test]
fn test_allergens_reports_hits_and_needles() -> Result<()> {
    let dir = TempDir::new()?;
    let analysis = write_fixture(dir.path(), "analysis.json", &json!({"dishName": "계란찜"}))?;

    let output = cli()
        .arg("allergens")
        .arg("--analysis")
        .arg(&analysis)
        .args(["--allergen", "난류(계란)", "--allergen", "우유"])
        .output()?;
    let report = stdout_json(&output)?;

    assert_eq!(report["hits"], json!(["난류(계란)"]));
    assert_eq!(report["terms"][0]["hit"], true);
    assert_eq!(report["terms"][0]["groups"], json!(["egg"]));
    assert_eq!(report["terms"][1]["hit"], false);
    Ok(())
}

#[test]
fn test_catalog_lists_picker_entries() -> Result<()> {
    let output = cli().args(["catalog", "--compact"]).output()?;
    let entries = stdout_json(&output)?;
    let entries = entries.as_array().unwrap();

    assert_eq!(entries.len(), 20);
    assert_eq!(entries[0]["label"], "난류(계란)");
    assert_eq!(entries[0]["label_en"], "Egg");
    assert_eq!(entries[0]["group_labels"], json!(["난류"]));
    Ok(())
}

#[test]
fn test_missing_file_exits_with_not_found() -> Result<()> {
    let dir = TempDir::new()?;
    let output = cli()
        .arg("score")
        .arg("--analysis")
        .arg(dir.path().join("nope.json"))
        .output()?;

    assert_eq!(output.status.code(), Some(3));
    let error: Value = serde_json::from_slice(&output.stderr)?;
    assert_eq!(error["error"]["code"], "RESOURCE_NOT_FOUND");
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_malformed_json_exits_with_invalid_format() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"dishName\": ")?;

    let output = cli().arg("analyze").arg("--analysis").arg(&path).output()?;

    assert_eq!(output.status.code(), Some(2));
    let error: Value = serde_json::from_slice(&output.stderr)?;
    assert_eq!(error["error"]["code"], "INVALID_FORMAT");
    Ok(())
}

#[test]
fn test_analyze_rejects_inverted_threshold_override() -> Result<()> {
    let dir = TempDir::new()?;
    let analysis = write_fixture(dir.path(), "analysis.json", &jeyuk_analysis_json())?;

    let output = cli()
        .env("NUTRILENS_PROTEIN_LOW_G", "35")
        .arg("analyze")
        .arg("--analysis")
        .arg(&analysis)
        .output()?;

    assert_eq!(output.status.code(), Some(4));
    let error: Value = serde_json::from_slice(&output.stderr)?;
    assert_eq!(error["error"]["code"], "CONFIG_INVALID");
    let message = error["error"]["message"].as_str().unwrap();
    assert!(message.contains("protein_low_g"));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_analyze_rejects_unparsable_threshold_override() -> Result<()> {
    let dir = TempDir::new()?;
    let analysis = write_fixture(dir.path(), "analysis.json", &jeyuk_analysis_json())?;

    let output = cli()
        .env("NUTRILENS_SODIUM_HIGH_MG", "salty")
        .arg("analyze")
        .arg("--analysis")
        .arg(&analysis)
        .output()?;

    assert_eq!(output.status.code(), Some(4));
    let error: Value = serde_json::from_slice(&output.stderr)?;
    assert_eq!(error["error"]["code"], "CONFIG_INVALID");
    Ok(())
}

#[test]
fn test_analyze_applies_sodium_threshold_override() -> Result<()> {
    let dir = TempDir::new()?;
    let analysis = write_fixture(dir.path(), "analysis.json", &jeyuk_analysis_json())?;

    let output = cli()
        .env("NUTRILENS_SODIUM_HIGH_MG", "2000")
        .arg("analyze")
        .arg("--analysis")
        .arg(&analysis)
        .output()?;
    let result = stdout_json(&output)?;

    let cons = result["cons"].as_array().unwrap();
    assert!(!cons.is_empty());
    for line in cons {
        assert!(!line.as_str().unwrap().starts_with("나트륨"), "{line}");
    }
    Ok(())
}
