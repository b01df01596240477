use std::fs;
use std::path::{Path, PathBuf};

use super::core::CovermapConfig;
use crate::errors::CovermapError;

pub const CONFIG_FILE_NAME: &str = ".covermap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<CovermapConfig, CovermapError> {
    let config = toml::from_str::<CovermapConfig>(contents).map_err(|e| {
        CovermapError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;

    if let Some(analysis) = &config.analysis {
        validate_threshold(analysis.threshold)?;
    }

    Ok(config)
}

/// Threshold must be a percentage.
pub fn validate_threshold(threshold: f64) -> Result<f64, CovermapError> {
    if (0.0..=100.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(CovermapError::validation(format!(
            "Threshold must be between 0 and 100, got {}",
            threshold
        )))
    }
}

/// Load a config file, falling back to defaults when it is unreadable or invalid.
pub fn load_config_from_path(config_path: &Path) -> CovermapConfig {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            );
            return CovermapConfig::default();
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            CovermapConfig::default()
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest `.covermap.toml` at or above `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Load the nearest config above `start`, or defaults.
pub fn load_config_from(start: &Path) -> CovermapConfig {
    match find_config_file(start) {
        Some(path) => load_config_from_path(&path),
        None => {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CovermapConfig::default()
        }
    }
}

pub fn load_config() -> CovermapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CovermapConfig::default()
        }
    }
}
