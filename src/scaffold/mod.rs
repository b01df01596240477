//! Test scaffold synthesis.
//!
//! [`synthesize`] turns a [`FeatureVector`] into a [`ScaffoldDocument`]. The
//! assembly order is fixed: imports, component import, optional mock-server
//! imports, optional navigation mock, then one root `describe` whose nested
//! groups are included per detected feature. Rendering and accessibility
//! groups are always present.

pub mod document;
mod sections;

pub use document::{CaseKind, DescribeBlock, ScaffoldDocument, Section, SectionKind, TestCase};
pub use sections::{PRESS_HANDLER, TEXT_CHANGE_HANDLER};

use crate::analyzers::FeatureVector;

pub const DEFAULT_MOCK_SERVER_MODULE: &str = "../mocks/server";

/// Generation options supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Import MSW helpers when the component is async
    pub include_mock_integration: bool,
    /// Specifier used to import the component; `../<Name>` when unset
    pub component_import: Option<String>,
    pub mock_server_module: String,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            include_mock_integration: false,
            component_import: None,
            mock_server_module: DEFAULT_MOCK_SERVER_MODULE.to_string(),
        }
    }
}

impl ScaffoldOptions {
    pub fn with_mock_integration(mut self, include: bool) -> Self {
        self.include_mock_integration = include;
        self
    }

    pub fn with_component_import(mut self, specifier: impl Into<String>) -> Self {
        self.component_import = Some(specifier.into());
        self
    }

    fn import_for(&self, name: &str) -> String {
        self.component_import
            .clone()
            .unwrap_or_else(|| format!("../{name}"))
    }
}

/// PascalCase JS identifier for a component name taken from a file path.
///
/// `user-card` becomes `UserCard` and `[id]` becomes `Id`. Names that
/// contain no letters or digits fall back to `Component`, and a leading digit
/// gets the same prefix.
pub fn component_identifier(name: &str) -> String {
    let mut ident: String = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if ident.is_empty() {
        return "Component".to_string();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert_str(0, "Component");
    }
    ident
}

/// Build the test document for a component.
///
/// `component_name` is the raw name (file stem or directory). It titles the
/// root `describe`; the import binding and JSX tag use
/// [`component_identifier`].
pub fn synthesize(
    features: &FeatureVector,
    component_name: &str,
    options: &ScaffoldOptions,
) -> ScaffoldDocument {
    let with_mock_server = options.include_mock_integration && features.has_async;
    let ident = component_identifier(component_name);

    let mut top = vec![
        sections::imports(features),
        sections::component_import(&ident, &options.import_for(component_name)),
    ];
    if with_mock_server {
        top.push(sections::mock_server_imports(options));
    }
    if features.has_navigation {
        top.push(sections::navigation_mock());
    }

    let describe = DescribeBlock {
        name: component_name.to_string(),
        setup: sections::describe_setup(features),
        cases: test_cases(features, &ident, with_mock_server),
    };

    ScaffoldDocument::new(top, describe)
}

fn test_cases(features: &FeatureVector, name: &str, with_mock_server: bool) -> Vec<TestCase> {
    let mut cases = vec![sections::rendering_case(name, features)];

    if features.has_props {
        cases.push(sections::props_case(name, features));
    }
    if features.has_interactions {
        cases.push(sections::interactions_case(name, features));
    }
    if features.has_async {
        cases.push(sections::async_case(name, features, with_mock_server));
    }
    if features.has_forms {
        cases.push(sections::forms_case(name, features));
    }
    if features.has_lists {
        cases.push(sections::lists_case(name, features));
    }
    if features.has_modals {
        cases.push(sections::modals_case(name, features));
    }

    cases.push(sections::accessibility_case(name, features));
    cases
}
