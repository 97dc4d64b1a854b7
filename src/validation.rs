//! Form validation feedback.
//!
//! The store accepts any text. These checks only decide what the form shows
//! under a field after the user submits.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::constants::{ERROR_EMAIL_INVALID, ERROR_EMAIL_REQUIRED};
use crate::store::{Friend, FriendField};

/// Per-field error messages for one friend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FriendField, &'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: FriendField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn insert(&mut self, field: FriendField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// `local@domain.tld`: dot-separated domain labels, letters-only TLD of two or more
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").expect("invalid email regex")
});

/// Email shape check; surrounding whitespace is ignored.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.trim().is_empty() {
        Some(ERROR_EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(ERROR_EMAIL_INVALID)
    } else {
        None
    }
}

pub fn validate_friend(friend: &Friend) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if let Some(message) = validate_email(&friend.email) {
        errors.insert(FriendField::Email, message);
    }
    errors
}

/// Validate every row. The result is index-aligned with `friends`.
pub fn validate_all(friends: &[Friend]) -> Vec<FieldErrors> {
    friends.iter().map(validate_friend).collect()
}

pub fn has_errors(errors: &[FieldErrors]) -> bool {
    errors.iter().any(|e| !e.is_empty())
}
