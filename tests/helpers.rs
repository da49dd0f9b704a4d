//! Shared test utilities for extpack tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use extpack::config::{BuildMode, Config};

/// Test environment with a mock extension project in a temp directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Project root (holds package.json and .env)
    pub base_dir: PathBuf,
    /// Extension source tree
    pub src: PathBuf,
    /// Packaging destination
    pub dist: PathBuf,
}

impl TestEnv {
    /// Create a test environment with a complete mock extension source tree.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let src = base_dir.join("src");
        let dist = base_dir.join("dist");

        create_mock_extension(&base_dir);

        Self {
            _temp_dir: temp_dir,
            base_dir,
            src,
            dist,
        }
    }

    /// Build a Config pointing at this environment.
    pub fn config(&self, mode: BuildMode) -> Config {
        Config {
            src_dir: self.src.clone(),
            dist_dir: self.dist.clone(),
            mode,
            version: None,
        }
    }

    /// Template variable map covering the mock popup/options templates.
    pub fn template_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("POPUP_TITLE".to_string(), "Mock Timer".to_string());
        vars.insert("OPTIONS_HEADING".to_string(), "Settings".to_string());
        vars
    }
}

/// Populate `base_dir` with a mock extension project: package.json plus a
/// src/ tree containing every input the default rule table expects.
pub fn create_mock_extension(base_dir: &Path) {
    let src = base_dir.join("src");

    fs::write(
        base_dir.join("package.json"),
        r#"{"name": "mock-extension", "version": "1.2.3"}"#,
    )
    .expect("Failed to write package.json");

    write(
        &src.join("manifest.json"),
        r#"{
  "name": "Mock Timer",
  "version": "0.0.0",
  "permissions": ["storage", "notifications"]
}"#,
    );

    write(
        &src.join("_locales/en/messages.json"),
        r#"{"appName": {"message": "Mock Timer"}}"#,
    );
    write(
        &src.join("_locales/de/messages.json"),
        r#"{"appName": {"message": "Mock Timer (de)"}}"#,
    );

    // icon.xcf is the authoring file the packager must skip
    write_bytes(&src.join("icons/icon16.png"), &[0x89, 0x50, 0x4e, 0x47]);
    write_bytes(&src.join("icons/icon48.png"), &[0x89, 0x50, 0x4e, 0x47]);
    write_bytes(&src.join("icons/icon.xcf"), b"gimp authoring file");

    write_bytes(&src.join("sounds/ding.mp3"), &[0xff, 0xfb, 0x90, 0x00]);

    write(
        &src.join("popup/popup.html"),
        "<html><head><title>{{ POPUP_TITLE }}</title></head></html>",
    );
    write(
        &src.join("options/options.html"),
        "<html><body><h1>{{ OPTIONS_HEADING }}</h1></body></html>",
    );
}

fn write(path: &Path, content: &str) {
    write_bytes(path, content.as_bytes());
}

fn write_bytes(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(path, content).expect("Failed to write mock file");
}

/// Assert a file exists at the given path.
pub fn assert_file_exists(path: &Path) {
    assert!(path.is_file(), "Expected file to exist: {}", path.display());
}

/// Assert a file does not exist at the given path.
pub fn assert_file_absent(path: &Path) {
    assert!(!path.exists(), "Expected no file at: {}", path.display());
}

/// Assert a file exists and contains the given substring.
pub fn assert_file_contains(path: &Path, needle: &str) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    assert!(
        content.contains(needle),
        "Expected {} to contain '{}', got:\n{}",
        path.display(),
        needle,
        content
    );
}
