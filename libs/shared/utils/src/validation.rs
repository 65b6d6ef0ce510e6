// Field-level form validation shared by the login and onboarding forms.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email) && email.len() <= 254
}

/// Collects one message per field; the first failure recorded for a field wins.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn min_length(&mut self, field: &str, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            debug!("Field {} shorter than {} characters", field, min);
            self.add(field, message);
        }
    }

    pub fn email(&mut self, field: &str, value: &str, message: &str) {
        if !is_valid_email(value) {
            debug!("Field {} is not a valid email", field);
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, otherwise the collected messages.
    pub fn into_result(self) -> Result<(), BTreeMap<String, String>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_and_rejects_emails() {
        assert!(is_valid_email("john.patient@example.com"));
        assert!(!is_valid_email("john.patient"));
        assert!(!is_valid_email("john@localhost"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.min_length("password", "abc", 6, "too short");
        errors.add("password", "second message");
        assert_eq!(errors.get("password"), Some("too short"));
        assert_matches!(errors.into_result(), Err(map) if map.len() == 1);
    }

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let mut errors = FieldErrors::new();
        errors.min_length("first_name", "Zoë", 3, "too short");
        assert!(errors.is_empty());
        assert_eq!(errors.into_result(), Ok(()));
    }
}
