//! Field validators.
//!
//! Each validator is a pure function from a raw field value to an optional
//! [`ValidationError`]. The error's `Display` text is what the form shows
//! under the input.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::field::Field;
use super::values::FormValues;

/// Minimum number of non-surrounding-whitespace characters in a first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// local@domain.tld, case-insensitive.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("Invalid email regex pattern")
});

/// A user-facing validation message for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("firstName must have at least 5 characters.")]
    FirstNameTooShort,

    #[error("lastName is a required field.")]
    LastNameRequired,

    #[error("email must be a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(self) -> Field {
        match self {
            ValidationError::FirstNameTooShort => Field::FirstName,
            ValidationError::LastNameRequired => Field::LastName,
            ValidationError::InvalidEmail => Field::Email,
        }
    }
}

pub fn validate_first_name(value: &str) -> Option<ValidationError> {
    (value.trim().chars().count() < FIRST_NAME_MIN_LEN).then_some(ValidationError::FirstNameTooShort)
}

pub fn validate_last_name(value: &str) -> Option<ValidationError> {
    value.is_empty().then_some(ValidationError::LastNameRequired)
}

pub fn validate_email(value: &str) -> Option<ValidationError> {
    (!EMAIL_REGEX.is_match(value)).then_some(ValidationError::InvalidEmail)
}

/// Run the validator for `field` against its current value.
///
/// The message field is optional and never fails.
pub fn validate_field(field: Field, values: &FormValues) -> Option<ValidationError> {
    let value = values.get(field);
    match field {
        Field::FirstName => validate_first_name(value),
        Field::LastName => validate_last_name(value),
        Field::Email => validate_email(value),
        Field::Message => None,
    }
}

/// Per-field error slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    slots: [Option<ValidationError>; 4],
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.slots[field.index()]
    }

    pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
        self.slots[field.index()] = error;
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Present errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }
}

/// Validate every field at once, as a submit does.
pub fn validate_all(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::new();
    for field in Field::ALL {
        errors.set(field, validate_field(field, values));
    }
    errors
}
