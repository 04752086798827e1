//! End-to-end tests for the `agentdocs` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary run inside `dir` with config lookups and env overrides isolated.
fn agentdocs(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("agentdocs");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("AGENTDOCS_GENERATE__DIRECT")
        .env_remove("AGENTDOCS_GENERATE__OUTPUT_DIR")
        .env_remove("AGENTDOCS_GENERATE__SUBDIRECTORY")
        .env_remove("AGENTDOCS_PROJECT__OUTPUT_DIR")
        .env_remove("AGENTDOCS_OUTPUT__FORMAT");
    cmd
}

const SET: [&str; 6] = [
    "docs/PROJECT_CONTEXT_PRIMING.md",
    "cursor/rules/implementation_patterns.mdc",
    "docs/architecture_overview.md",
    "README.md",
    "USAGE_GUIDE.md",
    "scripts/setup_new_project.sh",
];

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_mentions_overwriting() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("overwritten without confirmation"))
        .stdout(predicate::str::contains("--direct"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn bare_invocation_writes_into_subdirectory() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path()).assert().success();

    let root = temp.path().join("universal-ai-docs");
    for file in SET {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("[PROJECT_NAME]"), "generic set keeps placeholders");
}

#[test]
fn direct_mode_writes_into_dir() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .args(["out", "--direct"])
        .assert()
        .success();

    let root = temp.path().join("out");
    assert!(root.join("README.md").is_file());
    assert!(!root.join("universal-ai-docs").exists());
}

#[cfg(unix)]
#[test]
fn setup_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    agentdocs(temp.path()).arg("--here").assert().success();

    let mode = fs::metadata(temp.path().join("scripts/setup_new_project.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o111, 0);
}

#[test]
fn existing_files_are_overwritten() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("README.md"), "mine").unwrap();

    agentdocs(temp.path()).arg("-d").assert().success();

    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert_ne!(readme, "mine");
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("would write 6 files"))
        .stdout(predicate::str::contains("README.md"));

    assert!(!temp.path().join("universal-ai-docs").exists());
}

#[test]
fn json_report_lists_every_file() {
    let temp = TempDir::new().unwrap();
    let out = agentdocs(temp.path())
        .args(["--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["outcomes"].as_array().unwrap().len(), SET.len());
}

#[test]
fn config_file_sets_destination() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("agentdocs.toml");
    fs::write(&config, "[generate]\nsubdirectory = \"ai\"\n").unwrap();

    agentdocs(temp.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(temp.path().join("ai/README.md").is_file());
}

#[test]
fn environment_sets_direct_mode() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .env("AGENTDOCS_GENERATE__DIRECT", "true")
        .assert()
        .success();

    assert!(temp.path().join("README.md").is_file());
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_named_project_directory() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .args([
            "new",
            "My Cool Project",
            "--backend",
            "Rust",
            "--database",
            "SQLite",
            "--no-input",
            "--output",
            "work",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-cool-project"));

    let root = temp.path().join("work/my-cool-project");
    for file in SET {
        assert!(root.join(file).is_file(), "missing {file}");
    }
    let readme = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(readme.contains("My Cool Project"));
    assert!(readme.contains("Rust"));
    assert!(!readme.contains("[PROJECT_NAME]"));
}

#[test]
fn new_copies_guide_and_script_verbatim() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .args(["new", "atlas", "--no-input"])
        .assert()
        .success();

    let script = fs::read_to_string(temp.path().join("atlas/scripts/setup_new_project.sh")).unwrap();
    assert!(script.starts_with("#!"));
}

#[test]
fn new_reads_answers_from_piped_stdin() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .arg("new")
        .write_stdin("Piped Project\nA tool for tests\n")
        .assert()
        .success();

    let readme =
        fs::read_to_string(temp.path().join("piped-project/README.md")).unwrap();
    assert!(readme.contains("Piped Project"));
    assert!(readme.contains("A tool for tests"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_names() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readme"))
        .stdout(predicate::str::contains("usage-guide"));
}

#[test]
fn list_json_is_ordered() {
    let temp = TempDir::new().unwrap();
    let out = agentdocs(temp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let templates: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
    let paths: Vec<_> = templates
        .iter()
        .map(|t| t["path"].as_str().unwrap().replace('\\', "/"))
        .collect();
    assert_eq!(paths, SET);
}

#[test]
fn list_csv_has_header() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .args(["ls", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name,path,mode,executable,bytes"));
}

// ── config / init / completions ───────────────────────────────────────────────

#[test]
fn config_get_reads_environment() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .env("AGENTDOCS_GENERATE__SUBDIRECTORY", "ai-docs")
        .args(["config", "get", "generate.subdirectory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ai-docs"));
}

#[test]
fn config_list_shows_keys() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generate.direct"));
}

#[test]
fn init_writes_config_then_needs_force() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("conf/agentdocs.toml");

    agentdocs(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    assert!(config.is_file());

    agentdocs(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    agentdocs(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn init_replaces_broken_default_config_with_force() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join(".config/agentdocs/config.toml");
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "garbage = [").unwrap();

    agentdocs(temp.path()).arg("list").assert().code(4);

    agentdocs(temp.path())
        .args(["init", "--force"])
        .assert()
        .success();
    agentdocs(temp.path()).arg("list").assert().success();
}

#[test]
fn config_path_names_missing_explicit_file() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .args(["--config", "later.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("later.toml"));
}

#[test]
fn no_color_accepts_any_non_false_value() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "yes", "true", "0", ""] {
        agentdocs(temp.path())
            .env("NO_COLOR", value)
            .args(["list", "--format", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("readme"));
    }
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    agentdocs(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("agentdocs"));
}
