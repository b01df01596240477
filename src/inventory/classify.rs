//! Path-based file type classification.
//!
//! Rules are checked in order and the first match wins, so a hook living
//! under `components/` is still a component.

use crate::core::FileType;
use std::path::Path;

type Rule = (FileType, fn(&[String], &str) -> bool);

const RULES: [Rule; 6] = [
    (FileType::Components, is_component),
    (FileType::Hooks, is_hook),
    (FileType::Screens, is_screen),
    (FileType::Utils, is_util),
    (FileType::Services, is_service),
    (FileType::Contexts, is_context),
];

fn is_component(dirs: &[String], _name: &str) -> bool {
    has_dir(dirs, &["components"])
}

fn is_hook(dirs: &[String], name: &str) -> bool {
    has_dir(dirs, &["hooks"]) || is_hook_file_name(name)
}

fn is_screen(dirs: &[String], _name: &str) -> bool {
    has_dir(dirs, &["screens", "pages"])
}

fn is_util(dirs: &[String], _name: &str) -> bool {
    has_dir(dirs, &["utils", "helpers", "lib"])
}

fn is_service(dirs: &[String], _name: &str) -> bool {
    has_dir(dirs, &["api", "services"])
}

fn is_context(dirs: &[String], _name: &str) -> bool {
    has_dir(dirs, &["contexts", "context", "providers"])
}

fn has_dir(dirs: &[String], names: &[&str]) -> bool {
    dirs.iter().any(|d| names.contains(&d.as_str()))
}

/// `useSomething.ts`: `use` followed by an uppercase letter.
pub fn is_hook_file_name(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

/// Classify a root-relative path.
pub fn classify_file_type(relative: &Path) -> FileType {
    let dirs: Vec<String> = relative
        .parent()
        .map(|p| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy().to_lowercase())
                .collect()
        })
        .unwrap_or_default();
    let name = relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    RULES
        .iter()
        .find(|(_, matches)| matches(dirs.as_slice(), name.as_str()))
        .map(|(file_type, _)| *file_type)
        .unwrap_or(FileType::Other)
}

/// Component name for a source file: its stem, or the parent directory for
/// `index` files. A bare `index.tsx` with no named parent keeps its stem.
pub fn component_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy().into_owned();
    if stem == "index" {
        if let Some(dir) = path.parent().and_then(|p| p.file_name()) {
            return Some(dir.to_string_lossy().into_owned());
        }
    }
    Some(stem)
}
