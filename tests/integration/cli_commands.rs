//! Integration tests that run the gridpaper binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary inside `workspace` with an isolated config home.
fn run(workspace: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_gridpaper");
    Command::new(bin)
        .env("XDG_CONFIG_HOME", workspace.join(".xdg"))
        .env_remove("GRIDPAPER_ENV")
        .env_remove("GRIDPAPER_LOG")
        .arg("--workspace")
        .arg(workspace)
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_generate_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("sheets").join("a4.svg");
    let output = run(
        temp_dir.path(),
        &["generate", "--preset", "a4", "--spacing", "10", "--output", out.to_str().unwrap()],
    );
    assert!(
        output.status.success(),
        "generate should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("a4.svg"));
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.ends_with("</svg>\n"));
}

#[test]
fn test_generate_stdout_matches_library() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["generate", "--stdout"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), gridpaper::generate(&gridpaper::Settings::default()));
}

#[test]
fn test_workspace_config_sets_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("gridpaper.toml"),
        "[defaults]\ngrid_type = \"dots\"\n\n[output]\ndirectory = \"out\"\nfile_name = \"dots.svg\"\n",
    )
    .unwrap();
    let output = run(temp_dir.path(), &["generate"]);
    assert!(output.status.success());
    let svg = fs::read_to_string(temp_dir.path().join("out").join("dots.svg")).unwrap();
    assert!(svg.contains("<circle"));
}

#[test]
fn test_environment_overrides_workspace_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("gridpaper.toml"),
        "[defaults]\ngrid_type = \"dots\"\n",
    )
    .unwrap();
    let bin = env!("CARGO_BIN_EXE_gridpaper");
    let output = Command::new(bin)
        .env("XDG_CONFIG_HOME", temp_dir.path().join(".xdg"))
        .env("GRIDPAPER__DEFAULTS__GRID_TYPE", "lines")
        .env_remove("GRIDPAPER_ENV")
        .arg("--workspace")
        .arg(temp_dir.path())
        .arg("--quiet")
        .args(["inspect", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["grid_type"], "lines");
}

#[test]
fn test_inspect_json_reports_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        temp_dir.path(),
        &[
            "inspect",
            "--format",
            "json",
            "--spacing",
            "10",
            "--rect-width",
            "100",
            "--rect-height",
            "80",
        ],
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["vertical_lines"], 11);
    assert_eq!(value["horizontal_lines"], 9);
    assert_eq!(value["rectangle_origin_mm"]["x"], 55.0);
    assert_eq!(value["rectangle_origin_mm"]["y"], 108.5);
}

#[test]
fn test_presets_lists_letter() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["presets"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("letter"));
}

#[test]
fn test_unknown_preset_fails_with_hint() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["generate", "--preset", "b7"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("gridpaper presets"));
    assert!(!temp_dir.path().join("grid.svg").exists());
}
