//! Contact form state holder.
//!
//! [`ContactForm`] owns the current values, the live error map, keyboard
//! focus, and the last accepted submission. Every mutation revalidates the
//! fields it touched so the renderer can draw errors straight from
//! [`ContactForm::errors`].

use super::field::Field;
use super::validation::{validate_all, validate_field, FormErrors, ValidationError};
use super::values::{FormValues, SubmittedValues};

/// What currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    /// Next focus target in tab order, wrapping from Submit to the first field.
    pub fn next(self) -> Focus {
        match self {
            Focus::Field(field) => field.next().map(Focus::Field).unwrap_or(Focus::Submit),
            Focus::Submit => Focus::Field(Field::FirstName),
        }
    }

    /// Previous focus target in tab order, wrapping from the first field to Submit.
    pub fn prev(self) -> Focus {
        match self {
            Focus::Field(field) => field.prev().map(Focus::Field).unwrap_or(Focus::Submit),
            Focus::Submit => Focus::Field(Field::Message),
        }
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::FirstName)
    }
}

/// Lifecycle of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Values are being edited (initial state, and after any edit).
    #[default]
    Editing,
    /// The most recent action was a submit that passed validation.
    Submitted,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmittedValues),
    /// Submission refused; every failing required field now shows its error.
    Rejected(Vec<ValidationError>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: FormValues,
    errors: FormErrors,
    focus: Focus,
    phase: FormPhase,
    submitted: Option<SubmittedValues>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn focus_target(&self) -> Focus {
        self.focus
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The last accepted submission, if any.
    pub fn submitted(&self) -> Option<&SubmittedValues> {
        self.submitted.as_ref()
    }

    /// Case-insensitive label lookup, e.g. `"first name"`.
    pub fn field_by_label(&self, query: &str) -> Option<Field> {
        Field::from_label(query)
    }

    /// Replace the whole value of `field` and revalidate it.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
        self.after_edit(field);
    }

    /// Append a character to the focused field.
    ///
    /// Returns `false` when focus is on the Submit button or the character is
    /// a control character. The message field accepts `'\n'` as its only
    /// control character.
    pub fn insert_char(&mut self, c: char) -> bool {
        let Some(field) = self.focus.field() else {
            return false;
        };
        if c.is_control() && !(c == '\n' && field.is_multiline()) {
            return false;
        }
        self.values.get_mut(field).push(c);
        self.after_edit(field);
        true
    }

    /// Type a whole string into the focused field, one character at a time.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    /// Insert pasted text into the focused field.
    ///
    /// `\r\n` and lone `\r` become `\n`, so pasted line breaks land as
    /// newlines in the message and are dropped from single-line fields.
    pub fn paste(&mut self, text: &str) -> bool {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let mut changed = false;
        for c in normalized.chars() {
            changed |= self.insert_char(c);
        }
        changed
    }

    /// Remove the last character of the focused field.
    pub fn backspace(&mut self) -> bool {
        let Some(field) = self.focus.field() else {
            return false;
        };
        if self.values.get_mut(field).pop().is_none() {
            return false;
        }
        self.after_edit(field);
        true
    }

    /// Clear the focused field entirely.
    pub fn clear_field(&mut self) -> bool {
        let Some(field) = self.focus.field() else {
            return false;
        };
        self.set_value(field, String::new());
        true
    }

    /// Move focus. Leaving a field counts as a blur and revalidates it.
    pub fn focus(&mut self, target: Focus) {
        if self.focus == target {
            return;
        }
        if let Focus::Field(left) = self.focus {
            self.revalidate(left);
        }
        tracing::trace!(from = ?self.focus, to = ?target, "focus changed");
        self.focus = target;
    }

    pub fn focus_field(&mut self, field: Field) {
        self.focus(Focus::Field(field));
    }

    pub fn focus_next(&mut self) {
        self.focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus(self.focus.prev());
    }

    /// Validate every field; snapshot the values if all required fields pass.
    ///
    /// A rejected submit leaves any earlier snapshot in place.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate_all(&self.values);

        if self.errors.is_empty() {
            let snapshot = SubmittedValues::snapshot(&self.values);
            tracing::info!(
                has_message = snapshot.message.is_some(),
                "contact form submitted"
            );
            self.submitted = Some(snapshot.clone());
            self.phase = FormPhase::Submitted;
            SubmitOutcome::Accepted(snapshot)
        } else {
            let errors: Vec<ValidationError> = self.errors.iter().map(|(_, e)| e).collect();
            tracing::debug!(error_count = errors.len(), "submit rejected");
            self.phase = FormPhase::Editing;
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Return to the pristine state.
    pub fn reset(&mut self) {
        tracing::debug!("form reset");
        *self = Self::default();
    }

    fn after_edit(&mut self, field: Field) {
        self.revalidate(field);
        self.phase = FormPhase::Editing;
    }

    fn revalidate(&mut self, field: Field) {
        let error = validate_field(field, &self.values);
        tracing::debug!(%field, valid = error.is_none(), "field validated");
        self.errors.set(field, error);
    }
}
