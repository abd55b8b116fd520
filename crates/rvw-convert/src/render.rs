//! ES module rendering.

use std::fmt::Write as _;

use rvw_core::ReviewRecord;
use rvw_core::ident::validate_export_name;

use crate::error::ConvertError;

/// Render records as `export const <name> = <json>;`.
///
/// The JSON is `serde_json`'s pretty form: two-space indent, `"key": value`,
/// and `[]` for an empty list. No newline follows the semicolon.
///
/// # Errors
///
/// [`ConvertError::ExportName`] if `export_name` is not a JavaScript
/// identifier, [`ConvertError::Render`] if serialization fails.
pub fn render_module(
    records: &[ReviewRecord],
    export_name: &str,
    ascii_only: bool,
) -> Result<String, ConvertError> {
    validate_export_name(export_name)?;

    let json = serde_json::to_string_pretty(records)?;
    let json = if ascii_only {
        escape_non_ascii(&json)
    } else {
        json
    };

    Ok(format!("export const {export_name} = {json};"))
}

/// Replace every non-ASCII character, and DEL, with a lowercase `\uXXXX` escape.
///
/// Only valid on JSON text: non-ASCII can only occur inside string literals
/// there, where the escape is equivalent. Characters outside the BMP become a
/// UTF-16 surrogate pair.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() && ch != '\u{7f}' {
            out.push(ch);
            continue;
        }

        for unit in ch.encode_utf16(&mut units) {
            let _ = write!(out, "\\u{unit:04x}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_list_renders_inline_brackets() {
        let module = render_module(&[], "reviewsData", false).expect("render should work");
        assert_eq!(module, "export const reviewsData = [];");
    }

    #[test]
    fn single_record_matches_expected_layout() {
        let records = [ReviewRecord::from_cells([
            "Store A",
            "Retail",
            "2023-01-01",
            "Great service",
        ])];
        let module = render_module(&records, "reviewsData", false).expect("render should work");

        let expected = r#"export const reviewsData = [
  {
    "Location_Name": "Store A",
    "Location_Type": "Retail",
    "Published_Date": "2023-01-01",
    "reviews.text": "Great service"
  }
];"#;
        assert_eq!(module, expected);
    }

    #[test]
    fn custom_export_name_is_used() {
        let module = render_module(&[], "tripReviews", false).expect("render should work");
        assert!(module.starts_with("export const tripReviews = "));
    }

    #[test]
    fn invalid_export_name_is_rejected() {
        let err = render_module(&[], "reviews-data", false).expect_err("should fail");
        assert!(matches!(err, ConvertError::ExportName(_)));
    }

    #[test]
    fn standard_json_escaping_applies() {
        let records = [ReviewRecord::from_cells([
            "Joe's \"Diner\"",
            "Food",
            "2023-01-01",
            "tab\there\nnew line \\ slash /",
        ])];
        let module = render_module(&records, "reviewsData", false).expect("render should work");
        assert!(module.contains(r#""Location_Name": "Joe's \"Diner\"""#));
        assert!(module.contains(r#""reviews.text": "tab\there\nnew line \\ slash /""#));
    }

    #[test]
    fn utf8_is_kept_by_default() {
        let records = [ReviewRecord::from_cells(["Café", "Food", "2023-01-01", "👍"])];
        let module = render_module(&records, "reviewsData", false).expect("render should work");
        assert!(module.contains("\"Café\""));
        assert!(module.contains("\"👍\""));
    }

    #[test]
    fn ascii_only_escapes_bmp_and_astral_characters() {
        let records = [ReviewRecord::from_cells(["Café", "Food", "2023-01-01", "👍"])];
        let module = render_module(&records, "reviewsData", true).expect("render should work");
        assert!(module.is_ascii());
        assert!(module.contains(r#""Café""#));
        assert!(module.contains(r#""👍""#));
    }

    #[test]
    fn ascii_only_escapes_delete_character() {
        let records = [ReviewRecord::from_cells(["a\u{7f}b", "Food", "2023-01-01", "ok"])];
        let module = render_module(&records, "reviewsData", true).expect("render should work");
        assert!(module.contains(r#""Location_Name": "a\u007fb""#));
        assert!(!module.contains('\u{7f}'));
    }

    #[test]
    fn delete_character_is_raw_by_default() {
        let records = [ReviewRecord::from_cells(["a\u{7f}b", "Food", "2023-01-01", "ok"])];
        let module = render_module(&records, "reviewsData", false).expect("render should work");
        assert!(module.contains("\"a\u{7f}b\""));
    }

    #[test]
    fn ascii_only_output_parses_back_to_same_text() {
        let json = escape_non_ascii(r#"["Zürich ☕ 🎉"]"#);
        let parsed: Vec<String> = serde_json::from_str(&json).expect("escaped json should parse");
        assert_eq!(parsed, vec!["Zürich ☕ 🎉".to_string()]);
    }
}
