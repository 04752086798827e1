//! End-to-end tests: core services wired to the real adapters.

use std::path::Path;

use agentdocs_adapters::{
    InMemoryStore, LocalFilesystem, MemoryFilesystem, SimpleRenderer, builtin_templates,
};
use agentdocs_core::{
    application::{Filesystem, ProjectInitializer, ScaffoldService, ensure_parent_dirs},
    domain::{ProjectAnswers, PromptKey, RelativePath, RunStatus, Template, WriteStatus},
};
use tempfile::TempDir;

fn local_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

#[test]
fn scaffold_writes_every_template_verbatim() {
    let tmp = TempDir::new().unwrap();
    let report = local_service().scaffold(tmp.path()).unwrap();

    let templates = builtin_templates::list_templates();
    assert_eq!(report.outcomes.len(), templates.len());
    assert_eq!(report.status(), RunStatus::Complete);

    for template in &templates {
        let written = std::fs::read_to_string(tmp.path().join(template.path.as_path())).unwrap();
        assert_eq!(written, template.body(), "{}", template.name);
    }
}

#[cfg(unix)]
#[test]
fn setup_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    local_service().scaffold(tmp.path()).unwrap();

    let script = tmp.path().join("scripts/setup_new_project.sh");
    let mode = std::fs::metadata(script).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0o111);
}

#[test]
fn scaffold_overwrites_existing_files() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("README.md"), "old content").unwrap();

    local_service().scaffold(tmp.path()).unwrap();

    let readme = std::fs::read_to_string(tmp.path().join("README.md")).unwrap();
    assert_ne!(readme, "old content");
}

#[test]
fn blocked_directory_fails_only_its_file() {
    let tmp = TempDir::new().unwrap();
    // A regular file where `blocked/` must be created.
    std::fs::write(tmp.path().join("blocked"), "in the way").unwrap();

    let templates = vec![
        Template::new("first", RelativePath::new("a/first.md"), "1"),
        Template::new("second", RelativePath::new("blocked/second.md"), "2"),
        Template::new("third", RelativePath::new("c/third.md"), "3"),
    ];
    let report = local_service().write_all(
        tmp.path(),
        &templates,
        &Default::default(),
    );

    let written: Vec<_> = report.outcomes.iter().map(|o| o.is_written()).collect();
    assert_eq!(written, [true, false, true]);
    match &report.outcomes[1].status {
        WriteStatus::Failed { reason } => assert!(reason.contains("blocked")),
        WriteStatus::Written => panic!("second template should have failed"),
    }
    assert!(tmp.path().join("c/third.md").is_file());
}

#[test]
fn ensure_parent_dirs_twice_is_harmless() {
    let tmp = TempDir::new().unwrap();
    let fs = LocalFilesystem::new();
    let file = tmp.path().join("docs/deep/file.md");

    ensure_parent_dirs(&fs, &file).unwrap();
    ensure_parent_dirs(&fs, &file).unwrap();

    assert!(tmp.path().join("docs/deep").is_dir());
    assert!(!file.exists());
}

#[test]
fn initializer_creates_named_directory_with_answers() {
    let tmp = TempDir::new().unwrap();
    let initializer = ProjectInitializer::new(local_service());
    let answers = ProjectAnswers::new()
        .with(PromptKey::ProjectDescription, "A docs generator")
        .with(PromptKey::BackendTech, "Rust")
        .with(PromptKey::Date, "2024-05-01");

    let result = initializer
        .initialize_project("My Cool Project", &answers, tmp.path())
        .unwrap();

    assert_eq!(result.project_dir, tmp.path().join("my-cool-project"));
    assert!(result.report.is_complete());

    let readme = std::fs::read_to_string(result.project_dir.join("README.md")).unwrap();
    assert!(readme.starts_with("# My Cool Project"));
    assert!(readme.contains("A docs generator"));
    assert!(readme.contains("2024-05-01"));

    let guide = std::fs::read_to_string(result.project_dir.join("USAGE_GUIDE.md")).unwrap();
    assert!(guide.contains("[PROJECT_NAME]"));
}

#[test]
fn memory_filesystem_sees_full_layout() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
    );

    service.scaffold("/out/universal-ai-docs").unwrap();

    for rel in [
        "docs/PROJECT_CONTEXT_PRIMING.md",
        "cursor/rules/implementation_patterns.mdc",
        "docs/architecture_overview.md",
        "README.md",
        "USAGE_GUIDE.md",
        "scripts/setup_new_project.sh",
    ] {
        let path = Path::new("/out/universal-ai-docs").join(rel);
        assert!(fs.exists(&path), "missing {rel}");
    }
    assert!(fs.is_executable(Path::new(
        "/out/universal-ai-docs/scripts/setup_new_project.sh"
    )));
}
