//! Lexical analyzers for component source text.

pub mod features;
pub(crate) mod patterns;

pub use features::{
    detect_features, extract_accessibility_roles, extract_event_handlers, FeatureVector,
    ROLE_VOCABULARY,
};
