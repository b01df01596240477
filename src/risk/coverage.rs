//! Istanbul `coverage-summary.json` loading and path joining.
//!
//! The summary is an object keyed by file path plus one `total` entry:
//!
//! ```json
//! {
//!   "total": { "lines": { "pct": 82 }, "branches": { "pct": 70 }, ... },
//!   "/app/src/components/Button.tsx": { "lines": { "pct": 91.3 }, ... }
//! }
//! ```
//!
//! Keys are kept in document order because lookups return the first key that
//! matches, and that choice must not depend on hashing.

use crate::core::CoverageMetrics;
use crate::errors::CovermapError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// Key holding the aggregate figures.
pub const TOTAL_KEY: &str = "total";

#[derive(Debug, Default, Deserialize)]
struct PctEntry {
    #[serde(default, deserialize_with = "deserialize_pct")]
    pct: f64,
}

// Istanbul writes "Unknown" when a file has nothing to count.
fn deserialize_pct<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

#[derive(Debug, Default, Deserialize)]
struct SummaryEntry {
    #[serde(default)]
    lines: PctEntry,
    #[serde(default)]
    branches: PctEntry,
    #[serde(default)]
    functions: PctEntry,
    #[serde(default)]
    statements: PctEntry,
}

impl From<SummaryEntry> for CoverageMetrics {
    fn from(entry: SummaryEntry) -> Self {
        CoverageMetrics {
            lines: entry.lines.pct,
            branches: entry.branches.pct,
            functions: entry.functions.pct,
            statements: entry.statements.pct,
        }
    }
}

/// Per-file coverage in document order, plus the optional aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageMap {
    entries: Vec<(String, CoverageMetrics)>,
    total: Option<CoverageMetrics>,
}

impl CoverageMap {
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let root: serde_json::Map<String, Value> = serde_json::from_str(content)?;

        let mut map = CoverageMap::default();
        for (key, value) in root {
            let metrics: CoverageMetrics = serde_json::from_value::<SummaryEntry>(value)?.into();
            if key == TOTAL_KEY {
                map.total = Some(metrics);
            } else if !key.is_empty() {
                map.entries.push((key.replace('\\', "/"), metrics));
            }
        }
        Ok(map)
    }

    /// Read and parse a summary file. Any failure names the file.
    pub fn load(path: &Path) -> Result<Self, CovermapError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CovermapError::coverage(format!("read failed: {e}"), path)
        })?;
        let map = Self::from_json_str(&content).map_err(|e| {
            CovermapError::coverage(e.to_string(), path)
        })?;
        log::debug!(
            "Loaded coverage for {} files from {}",
            map.len(),
            path.display()
        );
        Ok(map)
    }

    /// Coverage for a record path.
    ///
    /// The first key, in document order, that contains the path or is
    /// contained by it wins. `None` means no data, which is different from
    /// zero coverage.
    pub fn find(&self, record_path: &str) -> Option<CoverageMetrics> {
        if record_path.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(key, _)| key.contains(record_path) || record_path.contains(key.as_str()))
            .map(|(_, metrics)| *metrics)
    }

    pub fn total(&self) -> Option<CoverageMetrics> {
        self.total
    }

    /// Aggregate line percentage from the `total` entry.
    pub fn total_lines(&self) -> Option<f64> {
        self.total.map(|t| t.lines)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
