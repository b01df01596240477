// Test utility module for covermap integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway JavaScript project on disk.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Empty project with a `package.json` named `name`.
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let project = Self { dir };
        project.write(
            "package.json",
            &format!(r#"{{"name": "{name}", "version": "1.0.0"}}"#),
        );
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.write(relative, content);
        self
    }
}

/// Small component with no detectable features beyond rendering.
pub const PLAIN_COMPONENT: &str = "export default function Logo() {\n  return <Image source={logo} />;\n}\n";

/// Placeholder test body.
pub const PLAIN_TEST: &str = "it('renders', () => {});\n";

/// A component padded to exactly `lines` lines.
pub fn padded_component(body: &str, lines: usize) -> String {
    let mut source = body.trim_end().to_string();
    let mut count = source.lines().count();
    while count < lines {
        source.push_str("\n// filler");
        count += 1;
    }
    source.push('\n');
    source
}
