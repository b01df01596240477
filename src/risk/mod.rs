//! Risk ranking for the coverage pipeline: coverage joining, priority
//! classification and recommendations.

pub mod coverage;
pub mod priority;
pub mod recommendations;

pub use coverage::CoverageMap;
pub use priority::classify_priority;
pub use recommendations::{generate_recommendations, Recommendation};
