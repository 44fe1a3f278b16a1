//! # Registration form model and validation
//!
//! [`RegistrationForm`] is the editable, untrimmed state behind the sign-up
//! form. [`RegistrationForm::validate`] runs the three checks in order (name,
//! email, consent) and, on success, produces the trimmed [`Registration`] that
//! [`crate::Registry::submit`] persists.
//!
//! [`FormStatus`] is what the UI shows under the submit button.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::email::is_valid_email;
use crate::models::{new_registration_id, Anonymity, Interest, Registration};

/// A user-facing reason a submission was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    NameRequired,
    #[error("Please enter a valid email.")]
    InvalidEmail,
    #[error("Please agree to the consent + privacy note.")]
    ConsentRequired,
}

/// Message shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Registered! Your info is saved locally in this browser.";

/// Outcome banner for the registration form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Error(String),
    Success(String),
}

impl FormStatus {
    pub fn from_result<T>(result: &Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => FormStatus::Success(SUCCESS_MESSAGE.to_string()),
            Err(e) => FormStatus::Error(e.to_string()),
        }
    }
}

/// Editable sign-up state. Text fields hold raw input until validation.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub interests: Vec<Interest>,
    pub anonymity: Anonymity,
    pub message: String,
    pub consent: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            city: String::new(),
            interests: vec![Interest::Updates],
            anonymity: Anonymity::Public,
            message: String::new(),
            consent: false,
        }
    }
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the interest if absent, remove it if present. Order of selection is kept.
    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// Check the form and build the record it would create at `now`.
    ///
    /// Does not touch `self`; clearing the form is the caller's job once the
    /// record has been stored.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<Registration, ValidationError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }

        let interests = if self.interests.is_empty() {
            vec![Interest::Updates]
        } else {
            self.interests.clone()
        };

        Ok(Registration {
            id: new_registration_id(&now),
            created_at: now,
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            city: self.city.trim().to_string(),
            message: self.message.trim().to_string(),
            interests,
            anonymity: self.anonymity,
            consent: true,
        })
    }

    /// Restore the empty defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
