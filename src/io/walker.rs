use crate::core::Language;
use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Directories never descended into when enumerating source files.
pub const EXCLUDED_DIRS: [&str; 4] = ["__tests__", "__mocks__", "node_modules", ".git"];

/// Directories skipped when enumerating test files.
pub const TEST_EXCLUDED_DIRS: [&str; 2] = ["node_modules", ".git"];

/// File-name markers identifying a test file.
pub const TEST_MARKERS: [&str; 2] = [".test.", ".spec."];

/// File-name markers excluding a file from the source set.
pub const EXCLUDED_FILE_MARKERS: [&str; 4] = [".test.", ".spec.", ".d.ts", ".stories."];

/// Which half of the project a walk enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkTarget {
    Sources,
    Tests,
}

impl WalkTarget {
    fn excluded_dirs(&self) -> &'static [&'static str] {
        match self {
            WalkTarget::Sources => &EXCLUDED_DIRS,
            WalkTarget::Tests => &TEST_EXCLUDED_DIRS,
        }
    }
}

pub struct FileWalker {
    root: PathBuf,
    target: WalkTarget,
    ignore_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            target: WalkTarget::Sources,
            ignore_patterns: vec![],
        }
    }

    pub fn with_target(mut self, target: WalkTarget) -> Self {
        self.target = target;
        self
    }

    /// Extra glob patterns, matched against root-relative `/`-separated paths.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns = patterns
            .iter()
            .filter_map(|p| match glob::Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    log::warn!("Ignoring invalid ignore pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();
        self
    }

    /// Enumerate matching files, sorted by file name within each directory.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let excluded = self.target.excluded_dirs();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir
                    && entry.depth() > 0
                    && excluded.iter().any(|d| entry.file_name() == *d))
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        log::debug!(
            "Found {} {:?} files under {}",
            files.len(),
            self.target,
            self.root.display()
        );
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !Language::from_path(path).is_supported() {
            return false;
        }

        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };

        let wanted = match self.target {
            WalkTarget::Sources => !has_any_marker(&name, &EXCLUDED_FILE_MARKERS),
            WalkTarget::Tests => is_test_file_name(&name),
        };

        wanted && !self.is_ignored(path)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.ignore_patterns.is_empty() {
            return false;
        }
        let relative = relative_path(&self.root, path);
        self.ignore_patterns.iter().any(|p| p.matches(&relative))
    }
}

fn has_any_marker(name: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| name.contains(m))
}

pub fn is_test_file_name(name: &str) -> bool {
    has_any_marker(name, &TEST_MARKERS)
}

/// Root-relative path with `/` separators, falling back to the full path.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn find_source_files(root: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_target(WalkTarget::Sources)
        .with_ignore_patterns(ignore_patterns)
        .walk()
}

pub fn find_test_files(root: &Path) -> Result<Vec<PathBuf>> {
    FileWalker::new(root.to_path_buf())
        .with_target(WalkTarget::Tests)
        .walk()
}
