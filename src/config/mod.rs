// Core configuration types
mod core;
mod loader;

pub use self::core::{
    default_test_dir, default_threshold, AnalysisConfig, CovermapConfig, ScaffoldConfig,
    DEFAULT_TEST_DIR, DEFAULT_THRESHOLD,
};
pub use loader::{
    directory_ancestors, find_config_file, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, validate_threshold, CONFIG_FILE_NAME,
};
