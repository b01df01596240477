//! Source-to-test matching.

use crate::io::walker::TEST_MARKERS;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Conventional nested directory holding tests next to their sources.
pub const NESTED_TEST_DIR: &str = "__tests__";

/// Test files grouped by directory, each group in walk order.
#[derive(Debug, Default)]
pub struct TestIndex {
    by_dir: HashMap<PathBuf, Vec<PathBuf>>,
}

impl TestIndex {
    pub fn new(test_files: &[PathBuf]) -> Self {
        let mut by_dir: HashMap<PathBuf, Vec<PathBuf>> = HashMap::new();
        for file in test_files {
            if let Some(dir) = file.parent() {
                by_dir
                    .entry(dir.to_path_buf())
                    .or_default()
                    .push(file.clone());
            }
        }
        Self { by_dir }
    }

    pub fn len(&self) -> usize {
        self.by_dir.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_dir.is_empty()
    }

    /// First test for `source`: same directory, then `__tests__` below it.
    pub fn find_test_for(&self, source: &Path) -> Option<&Path> {
        let base = source.file_stem()?.to_string_lossy();
        let dir = source.parent()?;

        self.find_in(dir, &base)
            .or_else(|| self.find_in(&dir.join(NESTED_TEST_DIR), &base))
    }

    fn find_in(&self, dir: &Path, base: &str) -> Option<&Path> {
        self.by_dir.get(dir)?.iter().find_map(|test| {
            let name = test.file_name()?.to_string_lossy();
            test_base_name(&name)
                .starts_with(base)
                .then_some(test.as_path())
        })
    }
}

/// File name with everything from the first test marker removed.
pub fn test_base_name(name: &str) -> &str {
    TEST_MARKERS
        .iter()
        .filter_map(|marker| name.find(marker))
        .min()
        .map_or(name, |idx| &name[..idx])
}
