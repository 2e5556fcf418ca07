//! Contact form model and validation.
//!
//! The form never leaves the process: a valid submission is handed to the
//! GUI, which fakes delivery with a short delay.

use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_MESSAGE_CHARS: usize = 5;

/// A validation failure of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("Name must be at least {min} characters.")]
    NameTooShort { min: usize },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Message must be at least {min} characters.")]
    MessageTooShort { min: usize },
}

/// Per-field validation results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<ContactFieldError>,
    pub email: Option<ContactFieldError>,
    pub message: Option<ContactFieldError>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.email, &self.message]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Editable form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated message ready to be "sent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Validates every field, reporting all failures at once.
    pub fn validate(&self) -> Result<ContactSubmission, ContactErrors> {
        let mut errors = ContactErrors::default();

        if self.name.chars().count() < MIN_NAME_CHARS {
            errors.name = Some(ContactFieldError::NameTooShort { min: MIN_NAME_CHARS });
        }
        if !is_valid_email(&self.email) {
            errors.email = Some(ContactFieldError::InvalidEmail);
        }
        if self.message.chars().count() < MIN_MESSAGE_CHARS {
            errors.message = Some(ContactFieldError::MessageTooShort { min: MIN_MESSAGE_CHARS });
        }

        if errors.is_empty() {
            Ok(ContactSubmission {
                name: self.name.clone(),
                email: self.email.clone(),
                message: self.message.clone(),
            })
        } else {
            Err(errors)
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Syntactic email check: `local@domain.tld`, no whitespace, one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|l| !l.is_empty() && !l.starts_with('-') && !l.ends_with('-'))
        && labels.last().is_some_and(|tld| tld.len() >= 2)
}
