//! Validation rules shared by the API and the CLI.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

pub const INVALID_EMAIL: &str = "Please provide a valid e-mail address.";
pub const EMAIL_EXISTS: &str = "Email already exists.";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// One or two alphanumeric segments, `@`, a domain with at most one
/// sub-segment, then one of the accepted top-level domains.
fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern =
            r"(?i)^[a-z0-9]+\.?[a-z0-9]*@[a-z0-9_]+\.?[a-z0-9_]*\.(com|gov|edu|net|org)$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("e-mail regex failed to compile: {error}"))
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// `validator` hook for the e-mail field. Empty input is left to the
/// required-field rule so it is reported once.
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || is_valid_email(email) {
        return Ok(());
    }

    let mut error = ValidationError::new("email_format");
    error.message = Some(Cow::Borrowed(INVALID_EMAIL));
    Err(error)
}

/// Flattens `errors` into client-facing messages, ordered by field name.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}
