//! Line templates and their render context.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  LineTemplate (Value Object)                                │
//! │  └── Ordered &'static lines with {{SLOT}} placeholders      │
//! │                                                             │
//! │  RenderContext (Value Object)                               │
//! │  └── Slot substitution: {{USE_CASE_PASCAL}} -> "PlaceOrder" │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generated files are written line by line, so a template is a list of
//! lines rather than a single string. Rendering substitutes every slot in
//! every line and never adds or removes lines.

use std::collections::HashMap;

use crate::domain::names::{ProjectName, UseCaseName};

/// Slot holding the project name as given (`shop`).
pub const PROJECT_NAME: &str = "PROJECT_NAME";
/// Slot holding the PascalCase project name (`Shop`).
pub const PROJECT_NAME_PASCAL: &str = "PROJECT_NAME_PASCAL";
/// Slot holding the use case name as given (`place_order`).
pub const USE_CASE: &str = "USE_CASE";
/// Slot holding the PascalCase use case name (`PlaceOrder`).
pub const USE_CASE_PASCAL: &str = "USE_CASE_PASCAL";

/// An ordered list of line templates.
///
/// Blueprints are compile-time constants, so lines are `&'static str` and
/// construction is `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTemplate {
    lines: &'static [&'static str],
}

impl LineTemplate {
    pub const fn new(lines: &'static [&'static str]) -> Self {
        Self { lines }
    }

    pub const fn lines(&self) -> &'static [&'static str] {
        self.lines
    }

    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render every line against `ctx`.
    pub fn render(&self, ctx: &RenderContext) -> Vec<String> {
        self.lines.iter().map(|line| ctx.render(line)).collect()
    }
}

/// Named substitution slots for [`LineTemplate::render`].
///
/// Built-in slots are `SCREAMING_SNAKE_CASE`:
///
/// | Slot | Example |
/// |------|---------|
/// | `PROJECT_NAME` | "shop" |
/// | `PROJECT_NAME_PASCAL` | "Shop" |
/// | `USE_CASE` | "place_order" |
/// | `USE_CASE_PASCAL` | "PlaceOrder" |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Context for project-level files.
    pub fn for_project(project: &ProjectName) -> Self {
        Self::default()
            .with_variable(PROJECT_NAME, project.as_str())
            .with_variable(PROJECT_NAME_PASCAL, project.pascal())
    }

    /// Add the use case slots, consuming self.
    pub fn with_use_case(self, use_case: &UseCaseName) -> Self {
        self.with_variable(USE_CASE, use_case.as_str())
            .with_variable(USE_CASE_PASCAL, use_case.pascal())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace `{{SLOT}}` placeholders in `template`.
    ///
    /// - `{{UNKNOWN}}` stays as literal `{{UNKNOWN}}`
    /// - single braces (Rust blocks, `Self {}`) are left alone
    pub fn render(&self, template: &str) -> String {
        if !template.contains("{{") {
            return template.to_string();
        }

        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
