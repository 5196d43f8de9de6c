//! Form values and the submitted snapshot.

use serde::{Deserialize, Serialize};

use super::field::Field;

/// Current contents of the four inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Builder-style setter, mostly useful in tests.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.get_mut(field) = value.into();
        self
    }
}

/// Snapshot of [`FormValues`] taken by a successful submit.
///
/// Only [`ContactForm::submit`](super::ContactForm::submit) constructs one,
/// and only after every required field has validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmittedValues {
    pub(crate) fn snapshot(values: &FormValues) -> Self {
        let message = if values.message.is_empty() {
            None
        } else {
            Some(values.message.clone())
        };
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message,
        }
    }

    /// Summary lines in display order. The message line is present only when
    /// a non-empty message was submitted.
    pub fn summary_lines(&self) -> Vec<(Field, &str)> {
        let mut lines = vec![
            (Field::FirstName, self.first_name.as_str()),
            (Field::LastName, self.last_name.as_str()),
            (Field::Email, self.email.as_str()),
        ];
        if let Some(message) = &self.message {
            lines.push((Field::Message, message.as_str()));
        }
        lines
    }
}
