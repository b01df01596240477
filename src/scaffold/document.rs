//! Scaffold document model.
//!
//! A document is a fixed sequence of top-level sections followed by one root
//! `describe` block holding the test cases. It is built once by the
//! synthesizer and only read afterwards.

use serde::Serialize;
use std::fmt;

/// Top-level sections, in the order they appear in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Imports,
    ComponentImport,
    MockServerImports,
    NavigationMock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub content: String,
}

/// Test-case groups inside the root `describe`, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    Rendering,
    Props,
    Interactions,
    Async,
    Forms,
    Lists,
    Modals,
    Accessibility,
}

impl CaseKind {
    /// Name of the nested `describe` block.
    pub fn label(&self) -> &'static str {
        match self {
            CaseKind::Rendering => "rendering",
            CaseKind::Props => "props",
            CaseKind::Interactions => "interactions",
            CaseKind::Async => "async behavior",
            CaseKind::Forms => "forms",
            CaseKind::Lists => "lists",
            CaseKind::Modals => "modals",
            CaseKind::Accessibility => "accessibility",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub kind: CaseKind,
    /// `it` blocks of the group, already indented for the nested describe
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescribeBlock {
    pub name: String,
    /// Setup statements, each already indented one level
    pub setup: Vec<String>,
    pub cases: Vec<TestCase>,
}

/// A generated test file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldDocument {
    sections: Vec<Section>,
    describe: DescribeBlock,
}

impl ScaffoldDocument {
    pub(crate) fn new(sections: Vec<Section>, describe: DescribeBlock) -> Self {
        Self { sections, describe }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn describe(&self) -> &DescribeBlock {
        &self.describe
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }

    pub fn case_kinds(&self) -> Vec<CaseKind> {
        self.describe.cases.iter().map(|c| c.kind).collect()
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }

    pub fn has_case(&self, kind: CaseKind) -> bool {
        self.describe.cases.iter().any(|c| c.kind == kind)
    }

    /// Serialize to the final file text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for section in &self.sections {
            out.push_str(section.content.trim_end());
            out.push_str("\n\n");
        }

        out.push_str(&format!(
            "describe('{}', () => {{\n",
            escape_single_quoted(&self.describe.name)
        ));

        for line in &self.describe.setup {
            push_line(&mut out, line);
        }
        out.push_str("\n  beforeEach(() => {\n    jest.clearAllMocks();\n  });\n");

        for case in &self.describe.cases {
            out.push('\n');
            out.push_str(&format!("  describe('{}', () => {{\n", case.kind.label()));
            for line in &case.body {
                push_line(&mut out, line);
            }
            out.push_str("  });\n");
        }

        out.push_str("});\n");
        out
    }
}

impl fmt::Display for ScaffoldDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Escape text for a single-quoted JS string literal.
fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

fn push_line(out: &mut String, line: &str) {
    if line.trim().is_empty() {
        out.push('\n');
    } else {
        out.push_str(line);
        out.push('\n');
    }
}
