// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod core;
pub mod errors;
pub mod inventory;
pub mod io;
pub mod observability;
pub mod pipeline;
pub mod risk;
pub mod scaffold;

// Re-export commonly used types
pub use crate::core::{
    ComplexityLevel, CoverageMetrics, CoverageReport, FileRecord, FileType, Language, Priority,
    ReportSummary,
};

pub use crate::analyzers::{detect_features, FeatureVector};
pub use crate::complexity::{classify_file, classify_source, score_source};
pub use crate::errors::{CovermapError, Result};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::risk::{classify_priority, generate_recommendations, CoverageMap, Recommendation};
pub use crate::scaffold::{synthesize, ScaffoldDocument, ScaffoldOptions};
