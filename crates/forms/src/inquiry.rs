//! Contact-page inquiry form model.
//!
//! Same touched/errors lifecycle as the application form, smaller field
//! set.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use zagros_core::DomainError;

use crate::field::{
    validate_email, validate_location, validate_message, validate_name, FieldError,
};

/// The fields of the inquiry form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InquiryField {
    Name,
    Email,
    Company,
    Message,
}

impl InquiryField {
    pub const ALL: [InquiryField; 4] = [
        InquiryField::Name,
        InquiryField::Email,
        InquiryField::Company,
        InquiryField::Message,
    ];
}

/// What the gateway receives on a valid submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

/// Inquiry form state.
#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    touched: BTreeSet<InquiryField>,
    errors: BTreeMap<InquiryField, FieldError>,
}

impl InquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self, field: InquiryField) -> Result<(), FieldError> {
        match field {
            InquiryField::Name => validate_name(&self.name),
            InquiryField::Email => validate_email(&self.email),
            // Optional free text; reuses the optional-minimum rule.
            InquiryField::Company => validate_location(&self.company),
            InquiryField::Message => validate_message(&self.message),
        }
    }

    fn refresh(&mut self, field: InquiryField) {
        match self.check(field) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    pub fn touch(&mut self, field: InquiryField) {
        self.touched.insert(field);
        self.refresh(field);
    }

    pub fn set_text(&mut self, field: InquiryField, value: &str) {
        match field {
            InquiryField::Name => self.name = value.to_string(),
            InquiryField::Email => self.email = value.to_string(),
            InquiryField::Company => self.company = value.to_string(),
            InquiryField::Message => self.message = value.to_string(),
        }
        if self.touched.contains(&field) {
            self.refresh(field);
        }
    }

    pub fn error(&self, field: InquiryField) -> Option<FieldError> {
        if self.touched.contains(&field) {
            self.errors.get(&field).copied()
        } else {
            None
        }
    }

    /// Submit-time validation over every field, touched or not.
    pub fn validate_all(&mut self) -> Result<InquiryPayload, DomainError> {
        for field in InquiryField::ALL {
            self.touched.insert(field);
            self.refresh(field);
        }

        if !self.errors.is_empty() {
            tracing::debug!(invalid = self.errors.len(), "inquiry blocked");
            return Err(DomainError::validation("inquiry form has invalid fields"));
        }

        let company = {
            let trimmed = self.company.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(InquiryPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company,
            message: self.message.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        let mut form = InquiryForm::new();
        form.set_text(InquiryField::Name, "Peter Novak");
        form.set_text(InquiryField::Email, "peter@wholesale.eu");
        form.set_text(InquiryField::Message, "Please quote two pallets of Mazafati dates.");
        form
    }

    #[test]
    fn valid_inquiry_produces_payload_without_company() {
        let mut form = valid_form();
        let payload = form.validate_all().unwrap();
        assert_eq!(payload.company, None);
        assert_eq!(payload.name, "Peter Novak");
    }

    #[test]
    fn short_message_blocks_submission() {
        let mut form = valid_form();
        form.set_text(InquiryField::Message, "hi");
        assert!(form.validate_all().is_err());
        assert_eq!(
            form.error(InquiryField::Message),
            Some(FieldError::MessageTooShort)
        );
    }

    #[test]
    fn errors_stay_hidden_until_touched_or_submitted() {
        let mut form = InquiryForm::new();
        form.set_text(InquiryField::Email, "broken");
        assert_eq!(form.error(InquiryField::Email), None);

        form.touch(InquiryField::Email);
        assert_eq!(form.error(InquiryField::Email), Some(FieldError::EmailInvalid));
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = valid_form();
        form.touch(InquiryField::Name);
        form.reset();
        assert_eq!(form.name, "");
        assert_eq!(form.error(InquiryField::Name), None);
    }
}
