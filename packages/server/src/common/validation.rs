//! Form validation helpers.
//!
//! Inputs implement [`Validate`] by reporting problems into [`FieldErrors`];
//! [`validate_form`] turns that into a `Result`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

lazy_static! {
    /// More permissive than a strict RFC 5322 check
    pub static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    /// Letters, spaces, hyphens, apostrophes
    pub static ref NAME_PATTERN: Regex = Regex::new(r"^[a-zA-Z\s'-]+$").unwrap();
    static ref UPPERCASE: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref LOWERCASE: Regex = Regex::new(r"[a-z]").unwrap();
    static ref DIGIT: Regex = Regex::new(r"\d").unwrap();
    static ref SPECIAL_CHAR: Regex = Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).unwrap();
}

pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Field name → message. One message per field, the last one reported wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

pub trait Validate {
    fn validate(&self, errors: &mut FieldErrors);
}

/// Run validation and hand the input back untouched when it passes.
pub fn validate_form<T: Validate>(data: T) -> Result<T, FieldErrors> {
    let mut errors = FieldErrors::new();
    data.validate(&mut errors);
    if errors.is_empty() {
        Ok(data)
    } else {
        Err(errors)
    }
}

/// Decode a JSON request body. Failures are reported against the offending
/// field (`body` when the payload is not a JSON object at all).
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, FieldErrors> {
    let deserializer = &mut serde_json::Deserializer::from_slice(body);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();
        let mut errors = FieldErrors::new();
        match missing_field(&inner) {
            Some(field) if path == "." => errors.add(&field, format!("{} is required", field)),
            _ if path == "." => errors.add("body", strip_location(&inner)),
            _ => errors.add(&path, strip_location(&inner)),
        }
        errors
    })
}

fn missing_field(err: &serde_json::Error) -> Option<String> {
    let message = err.to_string();
    let rest = message.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(field, _)| field.to_string())
}

/// serde_json appends " at line L column C"
fn strip_location(err: &serde_json::Error) -> String {
    let message = err.to_string();
    match message.rsplit_once(" at line ") {
        Some((head, _)) => head.to_string(),
        None => message,
    }
}

/// Required, trimmed, at most `max` characters.
pub fn check_required_text(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{} is required", field));
    } else if trimmed.chars().count() > max {
        errors.add(field, format!("{} must be at most {} characters", field, max));
    }
}

/// Progress is a percentage.
pub fn check_percentage(errors: &mut FieldErrors, field: &str, value: i32) {
    if !(0..=100).contains(&value) {
        errors.add(field, format!("{} must be between 0 and 100", field));
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value)
}

/// Password rules a sign-up form enforces. Empty when the password passes.
pub fn password_problems(password: &str) -> Vec<&'static str> {
    let mut problems = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        problems.push("Password must be at least 8 characters");
    }
    if !UPPERCASE.is_match(password) {
        problems.push("Password must contain an uppercase letter");
    }
    if !LOWERCASE.is_match(password) {
        problems.push("Password must contain a lowercase letter");
    }
    if !DIGIT.is_match(password) {
        problems.push("Password must contain a number");
    }
    if !SPECIAL_CHAR.is_match(password) {
        problems.push("Password must contain a special character");
    }
    problems
}
