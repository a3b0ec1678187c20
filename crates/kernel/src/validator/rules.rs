//! Field validator with first-error-wins aggregation.

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::patterns::{EMAIL_RX, PHONE_RX};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Collects at most one error message per field, in insertion order.
///
/// Rule methods return `true` when the rule passes so callers can skip
/// dependent checks after a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: Vec<(String, String)>,
}

impl Validator {
    /// Create an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator pre-seeded with errors, keeping the first message per field.
    pub fn with_errors<I, F, M>(errors: I) -> Self
    where
        I: IntoIterator<Item = (F, M)>,
        F: Into<String>,
        M: Into<String>,
    {
        let mut v = Self::new();
        for (field, message) in errors {
            v.add_error(field, message);
        }
        v
    }

    /// Whether `input` is an 11-digit mobile number.
    pub fn is_phone(input: Option<&str>) -> bool {
        input.is_some_and(|s| !s.is_empty() && PHONE_RX.is_match(s))
    }

    /// Whether `input` is a well-formed login email address.
    pub fn is_email(input: Option<&str>) -> bool {
        input.is_some_and(|s| !s.is_empty() && EMAIL_RX.is_match(s))
    }

    /// Record `message` for `field` unless the field already has one.
    ///
    /// A recorded empty message does not count and is replaced.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        match self.errors.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) if existing.is_empty() => *existing = message.into(),
            Some(_) => {}
            None => self.errors.push((field, message.into())),
        }
    }

    /// True when no errors have been recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for `field`, or the first non-blank message when `field` is
    /// `None` or blank. Returns an empty string when nothing matches.
    pub fn error_by(&self, field: Option<&str>) -> &str {
        match field {
            Some(f) if !f.trim().is_empty() => self
                .errors
                .iter()
                .find(|(name, _)| name == f)
                .map(|(_, msg)| msg.as_str())
                .unwrap_or_default(),
            _ => self
                .errors
                .iter()
                .map(|(_, msg)| msg.as_str())
                .find(|msg| !msg.trim().is_empty())
                .unwrap_or_default(),
        }
    }

    /// Recorded errors as `(field, message)` pairs in insertion order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// Recorded errors as a list, in insertion order.
    pub fn to_errors(&self) -> Vec<ValidationError> {
        self.errors
            .iter()
            .map(|(field, message)| ValidationError {
                field: field.clone(),
                message: message.clone(),
            })
            .collect()
    }

    /// Consume the validator, yielding its errors in insertion order.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
            .into_iter()
            .map(|(field, message)| ValidationError { field, message })
            .collect()
    }

    /// True when `value` equals one of `options`.
    pub fn one_of<T: PartialEq>(&self, value: &T, options: &[T]) -> bool {
        options.contains(value)
    }

    /// Record `message` for `field` when `expr` is false.
    pub fn check(&mut self, expr: bool, field: &str, message: &str) -> bool {
        if !expr {
            self.add_error(field, message);
        }
        expr
    }

    /// True when `input` is present, non-empty and matches `pattern`.
    pub fn matches(&self, input: Option<&str>, pattern: &Regex) -> bool {
        input.is_some_and(|s| !s.is_empty() && pattern.is_match(s))
    }

    /// Fails when `input` is absent or blank after trimming.
    pub fn require(&mut self, field: &str, input: Option<&str>, message: Option<&str>) -> bool {
        if input.is_some_and(|s| !s.trim().is_empty()) {
            return true;
        }
        let msg = message.map_or_else(|| format!("{field} must not be empty"), str::to_string);
        self.add_error(field, msg);
        false
    }

    /// Fails when `input` is absent or shorter than `size` characters.
    ///
    /// Absence counts as a violation even though the rule is about length.
    pub fn min_len(
        &mut self,
        size: usize,
        field: &str,
        input: Option<&str>,
        message: Option<&str>,
    ) -> bool {
        if input.is_some_and(|s| !s.is_empty() && s.chars().count() >= size) {
            return true;
        }
        let msg = message.map_or_else(|| format!("{field} length must be >= {size}"), str::to_string);
        self.add_error(field, msg);
        false
    }

    /// Fails when `input` is absent or longer than `size` characters.
    ///
    /// Absence counts as a violation even though the rule is about length.
    pub fn max_len(
        &mut self,
        size: usize,
        field: &str,
        input: Option<&str>,
        message: Option<&str>,
    ) -> bool {
        if input.is_some_and(|s| !s.is_empty() && s.chars().count() <= size) {
            return true;
        }
        let msg = message.map_or_else(|| format!("{field} length must be <= {size}"), str::to_string);
        self.add_error(field, msg);
        false
    }
}

impl Serialize for Validator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, message) in &self.errors {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}
