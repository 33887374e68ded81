//! Name rules for projects and use cases.
//!
//! Both kinds of name end up as directory names, crate names and Rust module
//! names in the generated workspace, so they share one rule set:
//!
//! - no uppercase characters (`validate_snake_case`)
//! - not empty
//! - no path separators, no leading `.`
//!
//! [`ProjectName`] and [`UseCaseName`] are only constructible through
//! `parse`, so holding one means the rules were checked.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

pub const PROJECT_LABEL: &str = "Project name";
pub const USE_CASE_LABEL: &str = "Use case";

/// Reject `name` if any character is uppercase.
///
/// Only casing is checked here; `label` names the offending input in the
/// error message (`"<label> must be in snake_case"`).
pub fn validate_snake_case(name: &str, label: &'static str) -> Result<(), DomainError> {
    if name.chars().any(char::is_uppercase) {
        return Err(DomainError::NotSnakeCase {
            label,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Convert a snake_case name to PascalCase.
///
/// Splits on `_` and upper-cases the first character of every segment.
/// Empty segments (leading, trailing or doubled underscores) contribute
/// nothing.
///
/// | Input | Output |
/// |-------|--------|
/// | "create_order" | "CreateOrder" |
/// | "a" | "A" |
/// | "" | "" |
/// | "a__b" | "AB" |
pub fn to_pascal_case(snake_case: &str) -> String {
    snake_case
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

fn validate_name(name: &str, label: &'static str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::EmptyName { label });
    }
    validate_snake_case(name, label)?;
    if name.starts_with('.') || name.contains('/') || name.contains('\\') {
        return Err(DomainError::UnsafeName {
            label,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Name of the generated workspace; also its root directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name, PROJECT_LABEL)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn pascal(&self) -> String {
        to_pascal_case(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of one use case, e.g. `place_order`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UseCaseName(String);

impl UseCaseName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name, USE_CASE_LABEL)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn pascal(&self) -> String {
        to_pascal_case(&self.0)
    }

    /// Module name of the business-layer package: `<name>_use_case`.
    pub fn module(&self) -> String {
        format!("{}_use_case", self.0)
    }
}

impl fmt::Display for UseCaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── validate_snake_case ───────────────────────────────────────────────

    #[test]
    fn lowercase_names_pass() {
        for name in ["shop", "place_order", "v2_api", "", "__", "déjà_vu", "a-b"] {
            assert!(validate_snake_case(name, USE_CASE_LABEL).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn any_uppercase_fails_with_label() {
        for name in ["Shop", "placeOrder", "ALL", "x_Y"] {
            let err = validate_snake_case(name, PROJECT_LABEL).unwrap_err();
            assert_eq!(err.to_string(), "Project name must be in snake_case");
        }
    }

    #[test]
    fn use_case_label_in_message() {
        let err = validate_snake_case("PlaceOrder", USE_CASE_LABEL).unwrap_err();
        assert_eq!(err.to_string(), "Use case must be in snake_case");
    }

    // ── to_pascal_case ────────────────────────────────────────────────────

    #[test]
    fn pascal_case_examples() {
        assert_eq!(to_pascal_case("create_order"), "CreateOrder");
        assert_eq!(to_pascal_case("a"), "A");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn pascal_case_skips_empty_segments() {
        assert_eq!(to_pascal_case("a__b"), "AB");
        assert_eq!(to_pascal_case("_leading"), "Leading");
        assert_eq!(to_pascal_case("trailing_"), "Trailing");
    }

    #[test]
    fn pascal_case_keeps_digits() {
        assert_eq!(to_pascal_case("add_user2"), "AddUser2");
        assert_eq!(to_pascal_case("v2_api"), "V2Api");
    }

    // ── parse ─────────────────────────────────────────────────────────────

    #[test]
    fn project_name_rejects_uppercase() {
        assert!(matches!(
            ProjectName::parse("Shop"),
            Err(DomainError::NotSnakeCase { label: PROJECT_LABEL, .. })
        ));
    }

    #[test]
    fn project_name_rejects_empty() {
        assert_eq!(
            ProjectName::parse(""),
            Err(DomainError::EmptyName { label: PROJECT_LABEL })
        );
    }

    #[test]
    fn names_reject_path_tricks() {
        assert!(matches!(
            UseCaseName::parse("../escape"),
            Err(DomainError::UnsafeName { .. })
        ));
        assert!(matches!(
            ProjectName::parse(".hidden"),
            Err(DomainError::UnsafeName { .. })
        ));
        assert!(UseCaseName::parse("a\\b").is_err());
    }

    #[test]
    fn use_case_derived_names() {
        let uc = UseCaseName::parse("place_order").unwrap();
        assert_eq!(uc.pascal(), "PlaceOrder");
        assert_eq!(uc.module(), "place_order_use_case");
        assert_eq!(uc.to_string(), "place_order");
    }
}
