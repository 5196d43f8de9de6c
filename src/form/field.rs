//! Form field identifiers.
//!
//! A [`Field`] names one of the four inputs of the contact form and carries
//! its display label, whether it is required, and its position in tab order.

use serde::{Deserialize, Serialize};

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in tab order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Fields that must pass validation before a submission is accepted.
    pub const REQUIRED: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

    /// Label rendered above the input. Required fields carry a trailing `*`.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name*",
            Field::LastName => "Last Name*",
            Field::Email => "Email*",
            Field::Message => "Message",
        }
    }

    /// Label used in the submission summary, e.g. `First Name`.
    pub fn summary_label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Placeholder shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FirstName => "Edd",
            Field::LastName => "Burke",
            Field::Email => "bluebill1049@hotmail.com",
            Field::Message => "",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }

    /// Whether the input accepts newlines.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }

    /// Position in tab order.
    pub fn index(self) -> usize {
        match self {
            Field::FirstName => 0,
            Field::LastName => 1,
            Field::Email => 2,
            Field::Message => 3,
        }
    }

    /// The field after this one, or `None` for the last field.
    pub fn next(self) -> Option<Field> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The field before this one, or `None` for the first field.
    pub fn prev(self) -> Option<Field> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Find a field whose label contains `query`, ignoring case and the
    /// required-marker.
    ///
    /// ```
    /// use contact_form::form::Field;
    ///
    /// assert_eq!(Field::from_label("first name"), Some(Field::FirstName));
    /// assert_eq!(Field::from_label("EMAIL"), Some(Field::Email));
    /// assert_eq!(Field::from_label("phone"), None);
    /// ```
    pub fn from_label(query: &str) -> Option<Field> {
        let query = query.trim().trim_end_matches('*').to_lowercase();
        if query.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|field| field.label().to_lowercase().contains(&query))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.summary_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_order_round_trip() {
        assert_eq!(Field::FirstName.next(), Some(Field::LastName));
        assert_eq!(Field::Message.next(), None);
        assert_eq!(Field::FirstName.prev(), None);
        assert_eq!(Field::Message.prev(), Some(Field::Email));
    }

    #[test]
    fn test_required_fields() {
        assert!(Field::FirstName.is_required());
        assert!(Field::LastName.is_required());
        assert!(Field::Email.is_required());
        assert!(!Field::Message.is_required());
        assert!(Field::REQUIRED.iter().all(|f| f.is_required()));
    }

    #[test]
    fn test_from_label_is_case_insensitive() {
        assert_eq!(Field::from_label("Last Name*"), Some(Field::LastName));
        assert_eq!(Field::from_label("message"), Some(Field::Message));
        assert_eq!(Field::from_label("   "), None);
    }

    #[test]
    fn test_labels_mark_required_fields() {
        for field in Field::ALL {
            assert_eq!(field.label().ends_with('*'), field.is_required());
        }
    }
}
