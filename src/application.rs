//! Job applications submitted through the contact/apply form.
//!
//! Applications are validated and acknowledged; they are not stored.

use crate::i18n::{ApplyFormStrings, Language};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"))
}

/// Apply form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Form language by name or code; English when absent
    #[serde(default)]
    pub language: Option<String>,
}

/// Form rule violations. `Display` gives the English message; use
/// [`ApplicationError::localized`] for the form's language.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Your Name This field is required.")]
    NameRequired,
    #[error("Your Email This field is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ApplicationInput {
    /// Form rules, checked in order: name, email presence, email format.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.name.trim().is_empty() {
            return Err(ApplicationError::NameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(ApplicationError::EmailRequired);
        }
        if !email_pattern().is_match(&self.email) {
            return Err(ApplicationError::InvalidEmail);
        }
        Ok(())
    }
}

impl ApplicationError {
    /// Message as the form shows it in `language`, e.g. "आपका नाम यह फ़ील्ड आवश्यक है।"
    pub fn localized(&self, language: Language) -> String {
        let strings = ApplyFormStrings::for_language(language);
        match self {
            Self::NameRequired => format!("{} {}", strings.your_name, strings.field_required),
            Self::EmailRequired => format!("{} {}", strings.your_email, strings.field_required),
            Self::InvalidEmail => strings.invalid_email.to_string(),
        }
    }
}

/// How a poster can be reached, derived from the free-text contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
}

impl ContactKind {
    pub fn of(contact: &str) -> Self {
        if contact.contains('@') {
            Self::Email
        } else {
            Self::Phone
        }
    }
}
