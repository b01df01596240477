use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Covermap Configuration

[analysis]
# Line coverage percentage the project should meet (0-100)
threshold = 70
# Istanbul summary, relative to the project root
coverage_file = "coverage/coverage-summary.json"
# Extra glob patterns to leave out of the inventory
ignore = []

[scaffold]
# Directory next to the component that generated tests go into
test_dir = "__tests__"
# Import the MSW server in async test cases
include_mock_integration = false
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(path, DEFAULT_CONFIG)
}
