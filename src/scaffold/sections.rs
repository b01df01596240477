//! Text generators for each part of a scaffold.
//!
//! The generated files target Jest with React Native Testing Library. Anything
//! the heuristics cannot know (selectors, copy, fixture data) is emitted as a
//! commented placeholder so the skeleton stays runnable.

use super::document::{CaseKind, Section, SectionKind, TestCase};
use super::ScaffoldOptions;
use crate::analyzers::FeatureVector;

/// Handlers that get concrete callback wiring.
pub const PRESS_HANDLER: &str = "onPress";
pub const TEXT_CHANGE_HANDLER: &str = "onChangeText";

const TESTING_LIBRARY: &str = "@testing-library/react-native";

pub(super) fn imports(features: &FeatureVector) -> Section {
    let mut names = vec!["render", "screen"];
    if features.has_interactions {
        names.push("userEvent");
    }
    if features.has_async {
        names.push("waitFor");
    }

    Section {
        kind: SectionKind::Imports,
        content: format!(
            "import {{ {} }} from '{}';",
            names.join(", "),
            TESTING_LIBRARY
        ),
    }
}

pub(super) fn component_import(name: &str, import_path: &str) -> Section {
    Section {
        kind: SectionKind::ComponentImport,
        content: format!("import {name} from '{import_path}';"),
    }
}

pub(super) fn mock_server_imports(options: &ScaffoldOptions) -> Section {
    Section {
        kind: SectionKind::MockServerImports,
        content: format!(
            "import {{ http, HttpResponse }} from 'msw';\nimport {{ server }} from '{}';",
            options.mock_server_module
        ),
    }
}

pub(super) fn navigation_mock() -> Section {
    let content = [
        "const mockNavigate = jest.fn();",
        "const mockGoBack = jest.fn();",
        "",
        "jest.mock('@react-navigation/native', () => ({",
        "  ...jest.requireActual('@react-navigation/native'),",
        "  useNavigation: () => ({",
        "    navigate: mockNavigate,",
        "    goBack: mockGoBack,",
        "  }),",
        "  useRoute: () => ({ params: {} }),",
        "}));",
    ]
    .join("\n");

    Section {
        kind: SectionKind::NavigationMock,
        content,
    }
}

/// Handlers among the detected ones that receive wired assertions.
pub(super) fn wired_handlers(features: &FeatureVector) -> Vec<&'static str> {
    [PRESS_HANDLER, TEXT_CHANGE_HANDLER]
        .into_iter()
        .filter(|h| features.has_handler(h))
        .collect()
}

fn mock_name(handler: &str) -> String {
    format!("mock{}", capitalize(handler))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Setup statements at the top of the root describe.
pub(super) fn describe_setup(features: &FeatureVector) -> Vec<String> {
    let mut setup = Vec::new();

    if features.has_interactions {
        setup.push("  const user = userEvent.setup();".to_string());
    }

    if features.has_props {
        if !setup.is_empty() {
            setup.push(String::new());
        }
        let handlers = wired_handlers(features);
        for handler in &handlers {
            setup.push(format!("  const {} = jest.fn();", mock_name(handler)));
        }
        setup.push("  const defaultProps = {".to_string());
        setup.push("    // TODO: add the component's required props".to_string());
        for handler in &handlers {
            setup.push(format!("    {}: {},", handler, mock_name(handler)));
        }
        setup.push("  };".to_string());
    }

    setup
}

fn render_call(name: &str, features: &FeatureVector) -> String {
    if features.has_props {
        format!("render(<{name} {{...defaultProps}} />);")
    } else {
        format!("render(<{name} />);")
    }
}

/// Wraps `it` blocks with the fixed nested indentation.
struct CaseWriter {
    lines: Vec<String>,
}

impl CaseWriter {
    fn new() -> Self {
        Self { lines: Vec::new() }
    }

    fn it(&mut self, title: &str, is_async: bool, body: &[String]) -> &mut Self {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let arrow = if is_async { "async () =>" } else { "() =>" };
        self.lines.push(format!("    it('{title}', {arrow} {{"));
        for line in body {
            self.lines.push(format!("      {line}"));
        }
        self.lines.push("    });".to_string());
        self
    }

    fn comment(&mut self, text: &str) -> &mut Self {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(format!("    // {text}"));
        self
    }

    fn finish(&mut self, kind: CaseKind) -> TestCase {
        TestCase {
            kind,
            body: std::mem::take(&mut self.lines),
        }
    }
}

pub(super) fn rendering_case(name: &str, features: &FeatureVector) -> TestCase {
    CaseWriter::new()
        .it(
            "renders without crashing",
            false,
            &[
                render_call(name, features),
                "// TODO: assert on a visible element, e.g.".to_string(),
                "// expect(screen.getByText('...')).toBeOnTheScreen();".to_string(),
                "expect(screen.toJSON()).toBeTruthy();".to_string(),
            ],
        )
        .finish(CaseKind::Rendering)
}

pub(super) fn props_case(name: &str, features: &FeatureVector) -> TestCase {
    CaseWriter::new()
        .it(
            "renders with custom props",
            false,
            &[
                format!("render(<{name} {{...defaultProps}} />);"),
                "// TODO: override a prop and assert it is reflected in the output".to_string(),
                "// expect(screen.getByText('...')).toBeOnTheScreen();".to_string(),
            ],
        )
        .it(
            "renders with default props",
            false,
            &[
                render_call(name, features),
                "expect(screen.toJSON()).toBeTruthy();".to_string(),
            ],
        )
        .finish(CaseKind::Props)
}

pub(super) fn interactions_case(name: &str, features: &FeatureVector) -> TestCase {
    let mut writer = CaseWriter::new();
    let wired = wired_handlers(features);

    for handler in &wired {
        // Without a props block there is no shared mock, so the case owns one.
        let (setup, render, mock) = if features.has_props {
            (None, render_call(name, features), mock_name(handler))
        } else {
            let local = mock_name(handler);
            (
                Some(format!("const {local} = jest.fn();")),
                format!("render(<{name} {handler}={{{local}}} />);"),
                local,
            )
        };

        let mut body: Vec<String> = setup.into_iter().collect();
        body.push(render);

        if *handler == PRESS_HANDLER {
            body.push("await user.press(screen.getByRole('button'));".to_string());
            body.push(format!("expect({mock}).toHaveBeenCalledTimes(1);"));
            writer.it("calls onPress when pressed", true, &body);
        } else {
            body.push(
                "await user.type(screen.getByPlaceholderText('TODO: placeholder'), 'hello');"
                    .to_string(),
            );
            body.push(format!("expect({mock}).toHaveBeenLastCalledWith('hello');"));
            writer.it("calls onChangeText when text changes", true, &body);
        }
    }

    let unwired: Vec<&str> = features
        .event_handlers
        .iter()
        .map(String::as_str)
        .filter(|h| !wired.iter().any(|w| w == h))
        .collect();

    if !unwired.is_empty() {
        writer.comment(&format!("Detected handlers not wired: {}", unwired.join(", ")));
    }

    if wired.is_empty() {
        writer.it(
            "responds to user interaction",
            true,
            &[
                render_call(name, features),
                "// TODO: trigger the interaction and assert the outcome, e.g.".to_string(),
                "// await user.press(screen.getByText('...'));".to_string(),
            ],
        );
    }

    writer.finish(CaseKind::Interactions)
}

pub(super) fn async_case(
    name: &str,
    features: &FeatureVector,
    with_mock_server: bool,
) -> TestCase {
    let mut error_body = Vec::new();
    if with_mock_server {
        error_body.push("server.use(".to_string());
        error_body.push(
            "  http.get('*', () => HttpResponse.json({ message: 'Server error' }, { status: 500 })),"
                .to_string(),
        );
        error_body.push(");".to_string());
    } else {
        error_body.push("// TODO: make the data source fail".to_string());
    }
    error_body.push(render_call(name, features));
    error_body.push("await waitFor(() => {".to_string());
    error_body.push("  // TODO: assert the error state".to_string());
    error_body.push("  expect(screen.toJSON()).toBeTruthy();".to_string());
    error_body.push("});".to_string());

    CaseWriter::new()
        .it(
            "shows loaded data",
            true,
            &[
                render_call(name, features),
                "await waitFor(() => {".to_string(),
                "  // TODO: assert the loaded state".to_string(),
                "  expect(screen.toJSON()).toBeTruthy();".to_string(),
                "});".to_string(),
            ],
        )
        .it("handles loading errors", true, &error_body)
        .finish(CaseKind::Async)
}

pub(super) fn forms_case(name: &str, features: &FeatureVector) -> TestCase {
    CaseWriter::new()
        .it(
            "validates required fields",
            false,
            &[
                render_call(name, features),
                "// TODO: submit the form empty and assert validation messages".to_string(),
            ],
        )
        .it(
            "submits entered values",
            false,
            &[
                render_call(name, features),
                "// TODO: fill the inputs, submit and assert the submitted values".to_string(),
            ],
        )
        .finish(CaseKind::Forms)
}

pub(super) fn lists_case(name: &str, features: &FeatureVector) -> TestCase {
    CaseWriter::new()
        .it(
            "renders list items",
            false,
            &[
                render_call(name, features),
                "// TODO: assert every item renders, e.g.".to_string(),
                "// expect(screen.getAllByTestId('list-item')).toHaveLength(items.length);"
                    .to_string(),
            ],
        )
        .it(
            "renders the empty state",
            false,
            &[
                render_call(name, features),
                "// TODO: render with no items and assert the empty state".to_string(),
            ],
        )
        .finish(CaseKind::Lists)
}

pub(super) fn modals_case(name: &str, features: &FeatureVector) -> TestCase {
    CaseWriter::new()
        .it(
            "opens the modal",
            false,
            &[
                render_call(name, features),
                "// TODO: trigger the modal and assert its content is visible".to_string(),
            ],
        )
        .it(
            "closes the modal",
            false,
            &[
                render_call(name, features),
                "// TODO: dismiss the modal and assert its content is gone".to_string(),
            ],
        )
        .finish(CaseKind::Modals)
}

fn role_assertion(role: &str) -> String {
    match role {
        "labeled" => "// expect(screen.getByLabelText('...')).toBeOnTheScreen();".to_string(),
        "textbox" => {
            "// expect(screen.getByPlaceholderText('...')).toBeOnTheScreen();".to_string()
        }
        other => format!("// expect(screen.getByRole('{other}')).toBeOnTheScreen();"),
    }
}

pub(super) fn accessibility_case(name: &str, features: &FeatureVector) -> TestCase {
    let mut body = vec![render_call(name, features)];
    if features.accessibility_roles.is_empty() {
        body.push("// TODO: no accessible roles detected; add accessibilityRole or accessibilityLabel to the component".to_string());
    } else {
        body.extend(features.accessibility_roles.iter().map(|r| role_assertion(r)));
    }

    CaseWriter::new()
        .it("exposes accessible elements", false, &body)
        .finish(CaseKind::Accessibility)
}
