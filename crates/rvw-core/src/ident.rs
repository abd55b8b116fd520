//! JavaScript export name validation.
//!
//! The generated module binds the records with `export const <name> = ...;`,
//! so the name has to parse as a binding identifier in strict-mode ES modules.

use crate::errors::CoreError;

/// Default binding name for the generated module.
pub const DEFAULT_EXPORT_NAME: &str = "reviewsData";

/// Reserved words that cannot be used as a `const` binding in a module.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

fn is_start_char(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_alphabetic()
}

fn is_part_char(ch: char) -> bool {
    is_start_char(ch) || ch.is_alphanumeric()
}

/// Check that `name` can be used as `export const <name>`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidIdentifier`] when the name is empty, starts
/// with a digit, contains characters outside identifier syntax, or is a
/// reserved word.
pub fn validate_export_name(name: &str) -> Result<(), CoreError> {
    let invalid = |reason: &str| CoreError::InvalidIdentifier {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("name is empty"));
    };

    if !is_start_char(first) {
        return Err(invalid("must start with a letter, '_' or '$'"));
    }

    if let Some(bad) = chars.find(|ch| !is_part_char(*ch)) {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }

    if RESERVED_WORDS.contains(&name) {
        return Err(invalid("reserved word"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("reviewsData")]
    #[case("_private")]
    #[case("$store")]
    #[case("data2024")]
    #[case("données")]
    fn accepts_identifiers(#[case] name: &str) {
        assert!(validate_export_name(name).is_ok(), "{name} should be valid");
    }

    #[rstest]
    #[case("")]
    #[case("2fast")]
    #[case("reviews-data")]
    #[case("reviews.data")]
    #[case("has space")]
    #[case("default")]
    #[case("await")]
    fn rejects_non_identifiers(#[case] name: &str) {
        let err = validate_export_name(name).expect_err("name should be rejected");
        assert!(matches!(err, CoreError::InvalidIdentifier { .. }));
    }

    #[test]
    fn default_export_name_is_valid() {
        assert!(validate_export_name(DEFAULT_EXPORT_NAME).is_ok());
    }
}
