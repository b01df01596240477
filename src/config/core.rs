use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 70.0;
pub const DEFAULT_TEST_DIR: &str = "__tests__";

/// Root configuration structure for covermap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CovermapConfig {
    /// Coverage analysis options
    #[serde(default)]
    pub analysis: Option<AnalysisConfig>,

    /// Scaffold generation options
    #[serde(default)]
    pub scaffold: Option<ScaffoldConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Line coverage percentage a project is expected to meet
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Coverage summary location, relative to the project root
    #[serde(default)]
    pub coverage_file: Option<String>,

    /// Extra glob patterns excluded from the inventory
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            coverage_file: None,
            ignore: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScaffoldConfig {
    /// Directory, next to the component, that generated tests go into
    #[serde(default = "default_test_dir")]
    pub test_dir: String,

    #[serde(default)]
    pub include_mock_integration: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            test_dir: default_test_dir(),
            include_mock_integration: false,
        }
    }
}

pub fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

pub fn default_test_dir() -> String {
    DEFAULT_TEST_DIR.to_string()
}

impl CovermapConfig {
    pub fn analysis(&self) -> AnalysisConfig {
        self.analysis.clone().unwrap_or_default()
    }

    pub fn scaffold(&self) -> ScaffoldConfig {
        self.scaffold.clone().unwrap_or_default()
    }
}
