//! Per-field validation rules.
//!
//! Each rule is independent and pure. Errors carry the dictionary key of
//! their localized inline message; the web layer translates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected field. The variant maps 1:1 to a localized message key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("errors.required")]
    Required,
    #[error("errors.name_too_short")]
    NameTooShort,
    #[error("errors.email_invalid")]
    EmailInvalid,
    #[error("errors.phone_invalid")]
    PhoneInvalid,
    #[error("errors.location_too_short")]
    LocationTooShort,
    #[error("errors.experience_required")]
    ExperienceRequired,
    #[error("errors.cv_required")]
    CvRequired,
    #[error("errors.cv_type")]
    CvType,
    #[error("errors.cv_size")]
    CvSize,
    #[error("errors.message_too_short")]
    MessageTooShort,
}

impl FieldError {
    /// Dictionary key of the inline message.
    pub fn message_key(self) -> &'static str {
        match self {
            FieldError::Required => "errors.required",
            FieldError::NameTooShort => "errors.name_too_short",
            FieldError::EmailInvalid => "errors.email_invalid",
            FieldError::PhoneInvalid => "errors.phone_invalid",
            FieldError::LocationTooShort => "errors.location_too_short",
            FieldError::ExperienceRequired => "errors.experience_required",
            FieldError::CvRequired => "errors.cv_required",
            FieldError::CvType => "errors.cv_type",
            FieldError::CvSize => "errors.cv_size",
            FieldError::MessageTooShort => "errors.message_too_short",
        }
    }
}

/// Non-empty after trim, at least 2 characters.
pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    if trimmed.chars().count() < 2 {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

/// Non-empty and shaped like `local@domain.tld`.
///
/// This is deliberately the simple shape check, not RFC 5322: exactly one
/// `@`, a non-empty local part, and a dotted domain whose labels are all
/// non-empty. `a@b.co` passes, `a@b` does not.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(FieldError::EmailInvalid);
    }

    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FieldError::EmailInvalid);
    };
    if local.is_empty() || domain.is_empty() {
        return Err(FieldError::EmailInvalid);
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(FieldError::EmailInvalid);
    }

    Ok(())
}

/// Non-empty, with at least 7 digits once everything else is stripped.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if digits < 7 {
        return Err(FieldError::PhoneInvalid);
    }
    Ok(())
}

/// Optional; when present, at least 2 characters.
pub fn validate_location(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if trimmed.chars().count() < 2 {
        return Err(FieldError::LocationTooShort);
    }
    Ok(())
}

/// Non-empty after trim, at least 10 characters.
pub fn validate_message(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    if trimmed.chars().count() < 10 {
        return Err(FieldError::MessageTooShort);
    }
    Ok(())
}

/// Experience brackets offered by the application form. Closed set; the
/// select is invalid until one is chosen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "apply.experience_junior",
            ExperienceLevel::Mid => "apply.experience_mid",
            ExperienceLevel::Senior => "apply.experience_senior",
            ExperienceLevel::Lead => "apply.experience_lead",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_two_characters_after_trim() {
        assert_eq!(validate_name(""), Err(FieldError::Required));
        assert_eq!(validate_name("   "), Err(FieldError::Required));
        assert_eq!(validate_name(" a "), Err(FieldError::NameTooShort));
        assert_eq!(validate_name("Al"), Ok(()));
        assert_eq!(validate_name("رضا"), Ok(()));
    }

    #[test]
    fn email_accepts_the_minimal_valid_shape() {
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("buyer.name@example.org"), Ok(()));
    }

    #[test]
    fn email_rejects_missing_tld_and_empty_input() {
        assert_eq!(validate_email("a@b"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email(""), Err(FieldError::Required));
    }

    #[test]
    fn email_rejects_malformed_shapes() {
        assert_eq!(validate_email("@b.co"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b..co"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@b.co@d.ir"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a b@c.de"), Err(FieldError::EmailInvalid));
        assert_eq!(validate_email("a@.co"), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn phone_counts_digits_after_stripping_formatting() {
        assert_eq!(validate_phone("+1 (555) 123-4567"), Ok(()));
        assert_eq!(validate_phone("12345"), Err(FieldError::PhoneInvalid));
        assert_eq!(validate_phone(""), Err(FieldError::Required));
        assert_eq!(validate_phone("021-1234567"), Ok(()));
    }

    #[test]
    fn location_is_optional_but_bounded_when_present() {
        assert_eq!(validate_location(""), Ok(()));
        assert_eq!(validate_location("  "), Ok(()));
        assert_eq!(validate_location("X"), Err(FieldError::LocationTooShort));
        assert_eq!(validate_location("Qom"), Ok(()));
    }

    #[test]
    fn message_requires_ten_characters() {
        assert_eq!(validate_message(""), Err(FieldError::Required));
        assert_eq!(validate_message("too short"), Err(FieldError::MessageTooShort));
        assert_eq!(validate_message("we need two pallets of dates"), Ok(()));
    }

    #[test]
    fn experience_values_round_trip() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::from_value(level.as_str()), Some(level));
        }
        assert_eq!(ExperienceLevel::from_value("wizard"), None);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any input containing at least 7 digit characters
            /// passes the phone rule, whatever surrounds them.
            #[test]
            fn phone_accepts_any_string_with_seven_digits(
                prefix in "[ +()\\-a-z]{0,10}",
                digits in "[0-9]{7,15}",
                suffix in "[ +()\\-a-z]{0,10}"
            ) {
                let value = format!("{prefix}{digits}{suffix}");
                prop_assert_eq!(validate_phone(&value), Ok(()));
            }

            /// Property: fewer than 7 digits is always rejected (or
            /// required, when blank).
            #[test]
            fn phone_rejects_fewer_than_seven_digits(
                prefix in "[ +()\\-a-z]{0,10}",
                digits in "[0-9]{0,6}"
            ) {
                let value = format!("{prefix}{digits}");
                prop_assert!(validate_phone(&value).is_err());
            }
        }
    }
}
