//! Integration tests for backdrop

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::io;
use std::path::Path;
use tempfile::TempDir;

fn backdrop_cmd(root: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("backdrop");
    cmd.env_remove("BACKDROP_CONFIG")
        .env("BACKDROP_LOG_DIR", root.join(".logs"))
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .arg("--no-log-file")
        .arg("-C")
        .arg(root);
    cmd
}

fn write_component(root: &Path, rel: &str, content: &[u8]) -> io::Result<()> {
    let path = root.join("src/lib/backgrounds").join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

#[test]
fn test_version() {
    cargo_bin_cmd!("backdrop")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("backdrop"));
}

#[test]
fn test_help() {
    cargo_bin_cmd!("backdrop")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("registry manifest"));
}

#[test]
fn test_invalid_command() {
    cargo_bin_cmd!("backdrop").arg("invalid").assert().failure();
}

#[test]
fn test_generate_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(
        root,
        "Foo/Foo.svelte",
        b"// A test component\nimport { x } from \"some-pkg\";\n",
    )?;

    backdrop_cmd(root)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully processed 1 components!"));

    let manifest = fs::read_to_string(root.join("static/backgrounds/foo.json"))?;
    let value: serde_json::Value = serde_json::from_str(&manifest)?;
    assert_eq!(value["title"], "Foo");
    assert_eq!(value["name"], "foo");
    assert_eq!(value["type"], "registry:block");
    assert_eq!(value["description"], "A test component");
    assert_eq!(value["dependencies"], serde_json::json!(["some-pkg"]));
    assert_eq!(value["files"][0]["path"], "src/lib/backgrounds/Foo/Foo.svelte");
    assert_eq!(value["files"][0]["type"], "registry:component");
    assert!(manifest.starts_with("{\n  \"$schema\""));
    assert!(!manifest.ends_with('\n'));
    Ok(())
}

#[test]
fn test_generate_continues_past_bad_component() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(root, "Aurora/Aurora.svelte", b"// Aurora\n")?;
    write_component(root, "Broken/Broken.svelte", &[0xc3, 0x28, 0xff])?;
    write_component(root, "Orb/Orb.svelte", b"import { Renderer } from 'ogl';\n")?;

    backdrop_cmd(root)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully processed 2 components!"))
        .stderr(predicate::str::contains("Failed to process Broken"));

    assert!(root.join("static/backgrounds/aurora.json").is_file());
    assert!(root.join("static/backgrounds/orb.json").is_file());
    assert!(!root.join("static/backgrounds/broken.json").exists());
    Ok(())
}

#[test]
fn test_bad_component_is_reported_once() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(root, "Aurora/Aurora.svelte", b"// Aurora\n")?;
    write_component(root, "Broken/Broken.svelte", &[0xc3, 0x28, 0xff])?;

    let output = backdrop_cmd(root).arg("generate").output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let failure_lines: Vec<_> = stderr
        .lines()
        .filter(|line| line.contains("Broken") && line.to_lowercase().contains("fail"))
        .collect();
    assert_eq!(failure_lines.len(), 1, "stderr was:\n{}", stderr);
    assert!(failure_lines[0].contains("Failed to read"));
    assert!(stderr.contains("1 component(s) could not be processed"));
    Ok(())
}

#[test]
fn test_verbose_run_reports_processed_and_failed() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(root, "Aurora/Aurora.svelte", b"// Aurora\n")?;
    write_component(root, "Broken/Broken.svelte", &[0xc3, 0x28, 0xff])?;

    backdrop_cmd(root)
        .args(["-v", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully processed 1 components!"))
        .stderr(predicate::str::contains("Generation finished: 1 processed, 1 failed"));
    Ok(())
}

#[test]
fn test_generate_skips_excluded_files() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(root, "Aurora/Aurora.svelte", b"")?;
    write_component(root, "Aurora/Aurora copy.svelte", b"")?;
    write_component(root, "Aurora/Aurora.old.svelte", b"")?;
    write_component(root, "Aurora/OldAurora.svelte", b"")?;
    write_component(root, "Aurora/index.ts", b"")?;

    backdrop_cmd(root)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully processed 1 components!"));

    let written: Vec<_> = fs::read_dir(root.join("static/backgrounds"))?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(written, vec!["aurora.json"]);
    Ok(())
}

#[test]
fn test_generate_missing_components_dir_fails() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    backdrop_cmd(temp_dir.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_generate_with_directory_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    let component = root.join("ui/bg/Orb/Orb.svelte");
    if let Some(parent) = component.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&component, "")?;

    backdrop_cmd(root)
        .args(["generate", "--components-dir", "ui/bg", "--output-dir", "public/r"])
        .assert()
        .success();

    let manifest = fs::read_to_string(root.join("public/r/orb.json"))?;
    assert!(manifest.contains("\"path\": \"ui/bg/Orb/Orb.svelte\""));
    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(root, "Orb/Orb.svelte", b"")?;
    fs::write(root.join("backdrop.toml"), "output-dir = \"registry\"\n")?;

    backdrop_cmd(root).arg("generate").assert().success();

    assert!(root.join("registry/orb.json").is_file());
    assert!(!root.join("static/backgrounds").exists());
    Ok(())
}

#[test]
fn test_malformed_config_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(root, "Orb/Orb.svelte", b"")?;
    fs::write(root.join("backdrop.toml"), "output-dir = [\n")?;

    backdrop_cmd(root)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn test_check_detects_drift() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(root, "Aurora/Aurora.svelte", b"// Aurora\n")?;

    backdrop_cmd(root)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing Aurora"));

    backdrop_cmd(root).arg("generate").assert().success();
    backdrop_cmd(root).arg("check").assert().success();

    write_component(root, "Aurora/Aurora.svelte", b"// Aurora, brighter\n")?;
    fs::write(root.join("static/backgrounds/gone.json"), "{}")?;

    backdrop_cmd(root)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("stale Aurora"))
        .stdout(predicate::str::contains("orphaned static/backgrounds/gone.json"))
        .stderr(predicate::str::contains("2 problem(s)"));
    Ok(())
}

#[test]
fn test_list_json_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    write_component(root, "Galaxy/Galaxy.svelte", b"import * as THREE from 'three';\n")?;

    let output = backdrop_cmd(root).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value[0]["title"], "Galaxy");
    assert_eq!(value[0]["output"], "static/backgrounds/galaxy.json");
    assert_eq!(value[0]["description"], "Galaxy background component");
    assert_eq!(value[0]["dependencies"], serde_json::json!(["three"]));
    assert!(!root.join("static/backgrounds").exists());
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();

    backdrop_cmd(root).arg("init").assert().success();
    let written = fs::read_to_string(root.join("backdrop.toml"))?;
    assert!(written.contains("components-dir = \"src/lib/backgrounds\""));

    backdrop_cmd(root)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    backdrop_cmd(root).args(["init", "--force"]).assert().success();
    Ok(())
}

#[test]
fn test_config_path_and_show() {
    let Ok(temp_dir) = TempDir::new() else {
        return;
    };
    let root = temp_dir.path();

    backdrop_cmd(root)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backdrop.toml"));

    backdrop_cmd(root)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output-dir: static/backgrounds"));
}

#[test]
fn test_config_env_var_is_honored() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(temp_dir) = TempDir::new() else {
        return Ok(());
    };
    let root = temp_dir.path();
    let alt = root.join("alt.toml");
    fs::write(&alt, "output-dir = \"alt-out\"\n")?;

    backdrop_cmd(root)
        .env("BACKDROP_CONFIG", &alt)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output-dir: alt-out"));
    Ok(())
}
