pub mod report;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use report::{CoverageInput, CoverageReport, PriorityCounts, ReportSummary, TypeCounts};

/// Source language of a component or project file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub enum Language {
    JavaScript,
    TypeScript,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[
            (&["js", "jsx"], Language::JavaScript),
            (&["ts", "tsx"], Language::TypeScript),
        ];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Language::Unknown)
    }

    /// Extension used for generated test files.
    pub fn test_extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript | Language::Unknown => "js",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Language, &str)] = &[
            (Language::JavaScript, "JavaScript"),
            (Language::TypeScript, "TypeScript"),
            (Language::Unknown, "Unknown"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(l, _)| l == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Role of a source file inferred from where it lives in the project.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Components,
    Hooks,
    Screens,
    Utils,
    Services,
    Contexts,
    Other,
}

impl FileType {
    pub const ALL: [FileType; 7] = [
        FileType::Components,
        FileType::Hooks,
        FileType::Screens,
        FileType::Utils,
        FileType::Services,
        FileType::Contexts,
        FileType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Components => "components",
            FileType::Hooks => "hooks",
            FileType::Screens => "screens",
            FileType::Utils => "utils",
            FileType::Services => "services",
            FileType::Contexts => "contexts",
            FileType::Other => "other",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileType::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                format!(
                    "Unknown file type '{}' (expected one of: {})",
                    s,
                    FileType::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

/// Coarse structural-risk bucket from the heuristic complexity score.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
    /// The file could not be read while scoring
    Unknown,
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ComplexityLevel::Low => "low",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::High => "high",
            ComplexityLevel::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Testing urgency of a file, or severity of a recommendation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Copy, Ord, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Priority, &str)] = &[
            (Priority::Low, "Low"),
            (Priority::Medium, "Medium"),
            (Priority::High, "High"),
            (Priority::Critical, "Critical"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(p, _)| p == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Per-file coverage percentages taken from a coverage summary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Copy, Default)]
pub struct CoverageMetrics {
    pub lines: f64,
    pub branches: f64,
    pub functions: f64,
    pub statements: f64,
}

/// One analysed source file as it moves through the coverage pipeline.
///
/// Records are created by the inventory and rebuilt by each later stage
/// through the `with_*` methods. The priority is only ever assigned by
/// [`FileRecord::prioritized`], which runs the decision table.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Path relative to the project root, `/`-separated
    pub path: String,
    #[serde(skip)]
    pub absolute_path: PathBuf,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub has_test: bool,
    pub test_file: Option<String>,
    pub coverage: Option<CoverageMetrics>,
    pub complexity: ComplexityLevel,
    priority: Priority,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, absolute_path: PathBuf, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            absolute_path,
            file_type,
            has_test: false,
            test_file: None,
            coverage: None,
            complexity: ComplexityLevel::Unknown,
            priority: Priority::Low,
        }
    }

    pub fn with_test_file(self, test_file: Option<String>) -> Self {
        Self {
            has_test: test_file.is_some(),
            test_file,
            ..self
        }
    }

    pub fn with_complexity(self, complexity: ComplexityLevel) -> Self {
        Self { complexity, ..self }
    }

    pub fn with_coverage(self, coverage: Option<CoverageMetrics>) -> Self {
        Self { coverage, ..self }
    }

    /// Derive the priority from the record's current signals.
    pub fn prioritized(self, threshold: f64) -> Self {
        let priority = crate::risk::priority::classify_priority(&self, threshold);
        Self { priority, ..self }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn line_coverage(&self) -> Option<f64> {
        self.coverage.map(|c| c.lines)
    }
}
