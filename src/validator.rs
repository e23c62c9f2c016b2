//! Field validation for login and registration forms.
//!
//! Every field is checked independently and yields at most one issue. The
//! first failing rule wins:
//!
//! 1. required fields must not be blank
//! 2. email fields must look like `local@domain.tld`
//! 3. password confirmations must equal the primary password

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::config::primary_password_field;
use crate::types::{FieldKind, FieldSpec, ValidationIssue};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Whitespace as browsers define it for `String.prototype.trim` and `\s`.
/// Differs from Unicode `White_Space`: includes U+FEFF, excludes U+0085.
const BROWSER_WHITESPACE: &str = concat!(
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{BROWSER_WHITESPACE}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid email pattern")
});

fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t'
            | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Rejection of a form submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Please correct the errors above.")]
    Invalid { issues: Vec<ValidationIssue> },
}

impl SubmissionError {
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            SubmissionError::Invalid { issues } => issues,
        }
    }
}

/// Validates a single field, as done when it loses focus.
///
/// `primary_password` is the raw value of the primary password field; when
/// `None` a confirmation field is not compared.
pub fn validate_field(
    field: &FieldSpec,
    primary_password: Option<&str>,
) -> Option<ValidationIssue> {
    let value = field.value.trim_matches(is_browser_whitespace);

    if field.required && value.is_empty() {
        return Some(ValidationIssue::new(&field.name, REQUIRED_MESSAGE));
    }
    if value.is_empty() {
        return None;
    }

    match &field.kind {
        FieldKind::Email if !EMAIL_PATTERN.is_match(value) => {
            Some(ValidationIssue::new(&field.name, INVALID_EMAIL_MESSAGE))
        }
        FieldKind::PasswordConfirmation => match primary_password {
            Some(primary) if primary != value => {
                Some(ValidationIssue::new(&field.name, PASSWORD_MISMATCH_MESSAGE))
            }
            _ => None,
        },
        _ => None,
    }
}

/// Raw value of the primary password field, if present.
fn primary_value<'a>(fields: &'a [FieldSpec], primary_field: Option<&str>) -> Option<&'a str> {
    let name = primary_field
        .map(str::to_string)
        .unwrap_or_else(primary_password_field);
    fields
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.value.as_str())
}

/// Validates all fields in order and returns every issue found.
///
/// `primary_field` names the field confirmations are compared against;
/// `None` falls back to the configured default. If that field is not among
/// `fields`, confirmations are not compared.
pub fn validate(fields: &[FieldSpec], primary_field: Option<&str>) -> Vec<ValidationIssue> {
    let primary = primary_value(fields, primary_field);

    let issues: Vec<ValidationIssue> = fields
        .iter()
        .filter_map(|field| validate_field(field, primary))
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(fields = fields.len(), issues = issues.len(), "form validated");

    issues
}

/// Gate run before a form is submitted.
///
/// Only required fields are checked, matching what the page blocks on.
/// Any issue rejects the submission with the form-level message.
pub fn check_submission(
    fields: &[FieldSpec],
    primary_field: Option<&str>,
) -> Result<(), SubmissionError> {
    let primary = primary_value(fields, primary_field);

    let issues: Vec<ValidationIssue> = fields
        .iter()
        .filter(|f| f.required)
        .filter_map(|field| validate_field(field, primary))
        .collect();

    if issues.is_empty() {
        return Ok(());
    }

    #[cfg(feature = "tracing")]
    for issue in &issues {
        tracing::info!(field = %issue.field_name, "submission blocked: {}", issue.message);
    }

    Err(SubmissionError::Invalid { issues })
}
