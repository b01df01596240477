//! `covermap scaffold`: generate a test skeleton for one component.

use crate::analyzers::{detect_features, FeatureVector};
use crate::config::ScaffoldConfig;
use crate::core::Language;
use crate::errors::CovermapError;
use crate::inventory::component_name;
use crate::observability::{set_current_file, set_phase, AnalysisPhase};
use crate::scaffold::{synthesize, ScaffoldDocument, ScaffoldOptions};
use anyhow::Result;
use std::path::{Component, Path, PathBuf};

pub struct ScaffoldRequest {
    pub component: PathBuf,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub force: bool,
    pub include_mock_integration: bool,
}

#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub component_name: String,
    pub output_path: PathBuf,
    pub document: ScaffoldDocument,
    /// False for dry runs
    pub written: bool,
}

/// Validate, detect, synthesize, and (unless dry-running) write.
pub fn generate_scaffold(
    request: &ScaffoldRequest,
    settings: &ScaffoldConfig,
) -> std::result::Result<ScaffoldOutcome, CovermapError> {
    let component = &request.component;
    let language = validate_component(component)?;

    let features = {
        let _phase = set_phase(AnalysisPhase::FeatureDetection);
        let _file = set_current_file(component);
        let source =
            std::fs::read_to_string(component).map_err(|e| CovermapError::read(component, e))?;
        detect_features(&source)
    };
    let name = derive_component_name(component).ok_or_else(|| {
        CovermapError::validation_with_path("Cannot derive a component name", component)
    })?;
    log_features(&name, &features);

    let output_path = resolve_output_path(
        component,
        request.output.as_deref(),
        &name,
        language,
        settings,
    );
    let options = ScaffoldOptions::default()
        .with_mock_integration(request.include_mock_integration || settings.include_mock_integration)
        .with_component_import(import_specifier(component, &output_path, &name));

    let document = {
        let _phase = set_phase(AnalysisPhase::ScaffoldSynthesis);
        synthesize(&features, &name, &options)
    };

    if request.dry_run {
        return Ok(ScaffoldOutcome {
            component_name: name,
            output_path,
            document,
            written: false,
        });
    }

    if output_path.exists() && !request.force {
        return Err(CovermapError::write_collision(output_path));
    }

    {
        let _phase = set_phase(AnalysisPhase::OutputGeneration);
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&output_path, document.render())?;
    }
    log::info!("Wrote {}", output_path.display());

    Ok(ScaffoldOutcome {
        component_name: name,
        output_path,
        document,
        written: true,
    })
}

/// Resolve against the working directory first so `index.tsx` given without
/// a directory still takes the name of the folder it lives in.
fn derive_component_name(component: &Path) -> Option<String> {
    component_name(&absolutize(component)).or_else(|| component_name(component))
}

fn log_features(name: &str, features: &FeatureVector) {
    let detected = features.detected();
    if detected.is_empty() {
        log::info!("No testable features detected in {name}");
    } else {
        log::info!("Detected features for {}: {}", name, detected.join(", "));
    }
    if !features.event_handlers.is_empty() {
        log::info!("Event handlers: {}", features.event_handlers.join(", "));
    }
    if !features.accessibility_roles.is_empty() {
        log::debug!(
            "Accessibility roles: {}",
            features.accessibility_roles.join(", ")
        );
    }
}

fn validate_component(path: &Path) -> std::result::Result<Language, CovermapError> {
    if !path.is_file() {
        return Err(CovermapError::validation_with_path(
            "Component file not found",
            path,
        ));
    }
    let language = Language::from_path(path);
    if !language.is_supported() {
        return Err(CovermapError::validation_with_path(
            "Unsupported file extension (expected .js, .jsx, .ts or .tsx)",
            path,
        ));
    }
    Ok(language)
}

/// `<component dir>/<test_dir>/<Name>.test.<ext>` unless given explicitly.
pub fn resolve_output_path(
    component: &Path,
    explicit: Option<&Path>,
    name: &str,
    language: Language,
    settings: &ScaffoldConfig,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let dir = component.parent().unwrap_or_else(|| Path::new(""));
    dir.join(&settings.test_dir)
        .join(format!("{}.test.{}", name, language.test_extension()))
}

/// Module specifier importing `component` from the directory of `output`.
///
/// Relative, `/`-separated, `./`-prefixed when needed, extension removed.
pub fn import_specifier(component: &Path, output: &Path, name: &str) -> String {
    let target = absolutize(&component.with_extension(""));
    let base = absolutize(output.parent().unwrap_or_else(|| Path::new("")));

    let relative = match pathdiff::diff_paths(&target, &base) {
        Some(relative) => relative,
        None => return format!("../{name}"),
    };

    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if joined.starts_with("../") || joined.starts_with("./") {
        joined
    } else {
        format!("./{joined}")
    }
}

fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    normalize(&joined)
}

/// Lexically drop `.` and resolve `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

pub struct ScaffoldCommandConfig {
    pub component: PathBuf,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub force: bool,
    pub with_msw: bool,
}

pub fn handle_scaffold(config: ScaffoldCommandConfig) -> Result<()> {
    let settings = crate::config::load_config().scaffold();
    let request = ScaffoldRequest {
        component: config.component,
        output: config.output,
        dry_run: config.dry_run,
        force: config.force,
        include_mock_integration: config.with_msw,
    };

    let outcome = generate_scaffold(&request, &settings)?;
    if outcome.written {
        println!(
            "Created {} for {}",
            outcome.output_path.display(),
            outcome.component_name
        );
    } else {
        print!("{}", outcome.document.render());
    }
    Ok(())
}
