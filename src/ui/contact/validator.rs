// SPDX-License-Identifier: MPL-2.0
//! Contact form draft validation.
//!
//! Rules, per field: name, subject, and message must be non-blank after
//! trimming; the email must look like an address; the trimmed message must
//! be at least [`MIN_MESSAGE_LEN`] characters. At most one error is reported
//! per field, emptiness winning over format.

/// Minimum trimmed message length.
pub const MIN_MESSAGE_LEN: usize = 10;

/// The four form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Editable form content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Draft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// True when every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    SubjectRequired,
    MessageRequired,
    MessageTooShort,
}

impl ValidationError {
    /// The field the error belongs to.
    #[must_use]
    pub fn field(self) -> Field {
        match self {
            ValidationError::NameRequired => Field::Name,
            ValidationError::EmailRequired | ValidationError::EmailInvalid => Field::Email,
            ValidationError::SubjectRequired => Field::Subject,
            ValidationError::MessageRequired | ValidationError::MessageTooShort => Field::Message,
        }
    }

    /// Fluent key for the user-facing error message.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::NameRequired => "validation-name-required",
            ValidationError::EmailRequired => "validation-email-required",
            ValidationError::EmailInvalid => "validation-email-invalid",
            ValidationError::SubjectRequired => "validation-subject-required",
            ValidationError::MessageRequired => "validation-message-required",
            ValidationError::MessageTooShort => "validation-message-too-short",
        }
    }
}

/// Checks a draft, returning at most one error per field, in field order.
#[must_use]
pub fn validate(draft: &Draft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(ValidationError::NameRequired);
    }

    if draft.email.trim().is_empty() {
        errors.push(ValidationError::EmailRequired);
    } else if !is_valid_email(&draft.email) {
        errors.push(ValidationError::EmailInvalid);
    }

    if draft.subject.trim().is_empty() {
        errors.push(ValidationError::SubjectRequired);
    }

    let message = draft.message.trim();
    if message.is_empty() {
        errors.push(ValidationError::MessageRequired);
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.push(ValidationError::MessageTooShort);
    }

    errors
}

/// Loose address shape check: one `@`, no whitespace, and a dot somewhere
/// inside the domain with characters on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }
    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}
