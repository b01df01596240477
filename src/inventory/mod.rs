//! Project file inventory.
//!
//! Enumerates the source and test files of a project and turns each source
//! file into an initial [`FileRecord`] carrying its type and matched test.

pub mod classify;
pub mod matching;

pub use classify::{classify_file_type, component_name, is_hook_file_name};
pub use matching::{test_base_name, TestIndex};

use crate::core::FileRecord;
use crate::io::walker::{find_source_files, find_test_files, relative_path};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct Inventory {
    pub root: PathBuf,
    pub sources: Vec<PathBuf>,
    pub tests: TestIndex,
}

impl Inventory {
    /// Walk `root` once for sources and once for tests.
    pub fn collect(root: &Path, ignore_patterns: &[String]) -> Result<Self> {
        let sources = find_source_files(root, ignore_patterns)
            .with_context(|| format!("Failed to enumerate sources in {}", root.display()))?;
        let test_files = find_test_files(root)
            .with_context(|| format!("Failed to enumerate tests in {}", root.display()))?;

        log::info!(
            "Inventory: {} source files, {} test files",
            sources.len(),
            test_files.len()
        );

        Ok(Self {
            root: root.to_path_buf(),
            sources,
            tests: TestIndex::new(&test_files),
        })
    }

    /// Initial records: classified and matched, no complexity or coverage yet.
    pub fn records(&self) -> Vec<FileRecord> {
        self.sources
            .iter()
            .map(|source| self.record_for(source))
            .collect()
    }

    fn record_for(&self, source: &Path) -> FileRecord {
        let relative = relative_path(&self.root, source);
        let file_type = classify_file_type(Path::new(&relative));
        let test_file = self
            .tests
            .find_test_for(source)
            .map(|test| relative_path(&self.root, test));

        FileRecord::new(relative, source.to_path_buf(), file_type).with_test_file(test_file)
    }
}
