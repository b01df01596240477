use crate::config::{self, AnalysisConfig};
use crate::core::{CoverageReport, FileType};
use crate::errors::CovermapError;
use crate::io::{self, OutputFormat};
use crate::observability::{set_phase, AnalysisPhase};
use crate::pipeline::{self, PipelineOptions};
use crate::risk::CoverageMap;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Coverage summary looked for when nothing else is configured.
pub const DEFAULT_COVERAGE_SUMMARY: &str = "coverage/coverage-summary.json";
const PACKAGE_MANIFEST: &str = "package.json";

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub focus: Option<String>,
    pub coverage_file: Option<PathBuf>,
    pub plain: bool,
}

/// Options for [`analyze_coverage`], already merged from flags and config.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub threshold: Option<f64>,
    pub focus: Option<String>,
    pub coverage_file: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let format = if config.json {
        OutputFormat::Json
    } else {
        config.format
    };
    io::configure_colors(config.plain, config.output.is_some());

    let settings = config::load_config().analysis();
    let options = AnalyzeOptions {
        threshold: config.threshold,
        focus: config.focus,
        coverage_file: config.coverage_file,
    };
    let report = analyze_coverage(&config.path, &options, &settings)?;

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let sink: Box<dyn Write> = match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                io::ensure_dir(parent)?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };
    io::create_writer(format, sink, config.plain).write_report(&report)?;

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}

/// Analyze a project root and build its coverage report.
pub fn analyze_coverage(
    root: &Path,
    options: &AnalyzeOptions,
    settings: &AnalysisConfig,
) -> Result<CoverageReport> {
    validate_project_root(root)?;

    let threshold = config::validate_threshold(options.threshold.unwrap_or(settings.threshold))?;
    let focus = options.focus.as_deref().map(parse_focus).transpose()?;

    let coverage = {
        let _phase = set_phase(AnalysisPhase::CoverageLoading);
        load_coverage(root, options.coverage_file.as_deref(), settings)?
    };
    if let Some(map) = &coverage {
        log::info!("Loaded coverage for {} files", map.len());
    }

    let project = project_name(root);
    let pipeline_options = PipelineOptions {
        threshold,
        focus,
        coverage: coverage.as_ref(),
        ignore_patterns: &settings.ignore,
    };
    pipeline::analyze_project(root, &project, &pipeline_options)
        .with_context(|| format!("Failed to analyze {}", root.display()))
}

fn validate_project_root(root: &Path) -> Result<(), CovermapError> {
    if !root.is_dir() {
        return Err(CovermapError::validation_with_path(
            "Project root is not a directory",
            root,
        ));
    }
    if !root.join(PACKAGE_MANIFEST).is_file() {
        return Err(CovermapError::validation_with_path(
            "No package.json found; not a JavaScript project",
            root,
        ));
    }
    Ok(())
}

pub fn parse_focus(value: &str) -> Result<FileType, CovermapError> {
    FileType::from_str(value).map_err(CovermapError::validation)
}

/// Explicit file, then the configured one, then the conventional location.
///
/// An explicit file that is missing is an error; a configured one only warns.
pub fn load_coverage(
    root: &Path,
    explicit: Option<&Path>,
    settings: &AnalysisConfig,
) -> Result<Option<CoverageMap>, CovermapError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(CovermapError::coverage("file not found", path));
        }
        return CoverageMap::load(path).map(Some);
    }

    if let Some(configured) = &settings.coverage_file {
        let path = root.join(configured);
        if path.is_file() {
            return CoverageMap::load(&path).map(Some);
        }
        log::warn!(
            "Configured coverage file {} not found, continuing without coverage data",
            path.display()
        );
        return Ok(None);
    }

    let path = root.join(DEFAULT_COVERAGE_SUMMARY);
    if path.is_file() {
        return CoverageMap::load(&path).map(Some);
    }
    log::debug!("No coverage summary at {}", path.display());
    Ok(None)
}

/// `name` from package.json, else the directory name.
pub fn project_name(root: &Path) -> String {
    let from_manifest = std::fs::read_to_string(root.join(PACKAGE_MANIFEST))
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
        .and_then(|manifest| {
            manifest
                .get("name")
                .and_then(|name| name.as_str())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
        });

    from_manifest.unwrap_or_else(|| {
        root.canonicalize()
            .ok()
            .as_deref()
            .unwrap_or(root)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(manifest: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("package.json"), manifest).unwrap();
        dir
    }

    #[test]
    fn test_project_name_from_manifest() {
        let dir = project(r#"{"name": "shop-app", "version": "1.0.0"}"#);
        assert_eq!(project_name(dir.path()), "shop-app");
    }

    #[test]
    fn test_project_name_falls_back_to_directory() {
        let dir = project("{}");
        let expected = dir
            .path()
            .canonicalize()
            .unwrap()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned();
        assert_eq!(project_name(dir.path()), expected);
    }

    #[test]
    fn test_missing_manifest_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let err = validate_project_root(dir.path()).unwrap_err();
        assert!(matches!(err, CovermapError::Validation { .. }));
    }

    #[test]
    fn test_parse_focus() {
        assert_eq!(parse_focus("hooks").unwrap(), FileType::Hooks);
        let err = parse_focus("widgets").unwrap_err();
        assert!(err.to_string().contains("widgets"));
    }

    #[test]
    fn test_explicit_missing_coverage_file_fails() {
        let dir = project("{}");
        let missing = dir.path().join("nope.json");
        let err = load_coverage(dir.path(), Some(&missing), &AnalysisConfig::default())
            .unwrap_err();
        assert!(matches!(err, CovermapError::Coverage { .. }));
    }

    #[test]
    fn test_missing_configured_coverage_file_is_skipped() {
        let dir = project("{}");
        let settings = AnalysisConfig {
            coverage_file: Some("reports/summary.json".to_string()),
            ..Default::default()
        };
        assert!(load_coverage(dir.path(), None, &settings).unwrap().is_none());
    }

    #[test]
    fn test_default_coverage_location_is_used() {
        let dir = project("{}");
        std::fs::create_dir_all(dir.path().join("coverage")).unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_COVERAGE_SUMMARY),
            r#"{"total": {"lines": {"pct": 64}}}"#,
        )
        .unwrap();
        let map = load_coverage(dir.path(), None, &AnalysisConfig::default())
            .unwrap()
            .unwrap();
        assert_eq!(map.total_lines(), Some(64.0));
    }

    #[test]
    fn test_out_of_range_threshold_is_rejected() {
        let dir = project("{}");
        let options = AnalyzeOptions {
            threshold: Some(140.0),
            ..Default::default()
        };
        let err = analyze_coverage(dir.path(), &options, &AnalysisConfig::default()).unwrap_err();
        assert!(err.downcast_ref::<CovermapError>().is_some());
    }
}
