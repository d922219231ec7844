//! Form field validation pipeline
//!
//! Every submitted field goes through the same sequence: trim surrounding
//! whitespace, check constraints against the trimmed value, then HTML-escape
//! it. Optional fields are only format-checked when non-empty, so an empty
//! optional date is "absent" rather than an error.

use chrono::NaiveDate;
use serde::Serialize;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Ordered collection of field errors gathered while validating a form
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable messages in submission order, for the form's error list
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }
}

/// Trim surrounding whitespace and escape HTML-significant characters
pub fn sanitize(raw: &str) -> String {
    tera::escape_html(raw.trim())
}

/// Trim, enforce a minimum length, then escape.
///
/// The length check runs against the trimmed raw value, before escaping
/// inflates the character count.
pub fn validate_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    min: usize,
    message: &str,
) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() < min {
        errors.push(field, message);
    }
    tera::escape_html(trimmed)
}

/// Parse an optional ISO-8601 calendar date.
///
/// Empty or whitespace-only input is treated as absent and never fails;
/// non-empty input must parse as `YYYY-MM-DD`.
pub fn optional_iso_date(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
    message: &str,
) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(field, message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn validate_text_trims_then_escapes() {
        let mut errors = ValidationErrors::new();
        let value = validate_text(&mut errors, "name", "  a&b  ", 3, "too short");
        assert!(errors.is_empty());
        assert_eq!(value, "a&amp;b");
    }

    #[test]
    fn length_is_checked_before_escaping() {
        let mut errors = ValidationErrors::new();
        // "&&" escapes to ten characters; the check must see the raw two
        let value = validate_text(&mut errors, "name", "&&", 3, "too short");
        assert_eq!(errors.messages(), vec!["too short"]);
        assert_eq!(value, "&amp;&amp;");
    }

    #[test]
    fn whitespace_only_fails_minimum_length() {
        let mut errors = ValidationErrors::new();
        let value = validate_text(&mut errors, "name", "   ", 1, "Genre name required");
        assert_eq!(value, "");
        assert_eq!(errors.messages(), vec!["Genre name required"]);
    }

    #[test]
    fn empty_optional_date_is_absent_not_an_error() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            optional_iso_date(&mut errors, "due_back", "", "Invalid date"),
            None
        );
        assert_eq!(
            optional_iso_date(&mut errors, "due_back", "   ", "Invalid date"),
            None
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn valid_iso_date_parses() {
        let mut errors = ValidationErrors::new();
        let date = optional_iso_date(&mut errors, "due_back", "2023-05-01", "Invalid date");
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 5, 1));
        assert!(errors.is_empty());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut errors = ValidationErrors::new();
        assert_eq!(
            optional_iso_date(&mut errors, "due_back", "not-a-date", "Invalid date"),
            None
        );
        assert_eq!(errors.messages(), vec!["Invalid date"]);
    }

    #[test]
    fn errors_keep_submission_order() {
        let mut errors = ValidationErrors::new();
        errors.push("book", "Book must be specified");
        errors.push("imprint", "Imprint must be specified");
        assert_eq!(
            errors.messages(),
            vec!["Book must be specified", "Imprint must be specified"]
        );
    }
}
