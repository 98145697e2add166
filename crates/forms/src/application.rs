//! Careers application form model.
//!
//! Fields only show errors once touched (blur, or change after blur), but
//! submission re-validates everything regardless. The web layer feeds
//! values in and renders `error(field)`; the rules live in [`crate::field`]
//! and [`crate::file`].

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use zagros_core::{DomainError, JobId};

use crate::field::{
    validate_email, validate_location, validate_name, validate_phone, ExperienceLevel, FieldError,
};
use crate::file::{validate_cv, CvFile};

/// The fields of the application form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ApplicationField {
    FirstName,
    LastName,
    Email,
    Phone,
    Location,
    Experience,
    Cv,
}

impl ApplicationField {
    pub const ALL: [ApplicationField; 7] = [
        ApplicationField::FirstName,
        ApplicationField::LastName,
        ApplicationField::Email,
        ApplicationField::Phone,
        ApplicationField::Location,
        ApplicationField::Experience,
        ApplicationField::Cv,
    ];
}

/// What the gateway receives on a valid submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationPayload {
    pub job_id: JobId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: Option<String>,
    pub experience: ExperienceLevel,
    pub cv: CvFile,
}

/// Form state: current values, which fields the user has visited, and the
/// errors currently on display.
#[derive(Debug, Clone)]
pub struct ApplicationForm {
    job_id: JobId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub experience: Option<ExperienceLevel>,
    pub cv: Option<CvFile>,
    touched: BTreeSet<ApplicationField>,
    errors: BTreeMap<ApplicationField, FieldError>,
}

impl ApplicationForm {
    pub fn for_job(job_id: JobId) -> Self {
        Self {
            job_id,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            experience: None,
            cv: None,
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
        }
    }

    pub fn job_id(&self) -> JobId {
        self.job_id
    }

    fn check(&self, field: ApplicationField) -> Result<(), FieldError> {
        match field {
            ApplicationField::FirstName => validate_name(&self.first_name),
            ApplicationField::LastName => validate_name(&self.last_name),
            ApplicationField::Email => validate_email(&self.email),
            ApplicationField::Phone => validate_phone(&self.phone),
            ApplicationField::Location => validate_location(&self.location),
            ApplicationField::Experience => match self.experience {
                Some(_) => Ok(()),
                None => Err(FieldError::ExperienceRequired),
            },
            ApplicationField::Cv => validate_cv(self.cv.as_ref()),
        }
    }

    fn refresh(&mut self, field: ApplicationField) {
        match self.check(field) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    /// Blur: the field becomes touched and is validated immediately.
    pub fn touch(&mut self, field: ApplicationField) {
        self.touched.insert(field);
        self.refresh(field);
    }

    /// Change: store the value; re-validate only if already touched.
    pub fn set_text(&mut self, field: ApplicationField, value: &str) {
        match field {
            ApplicationField::FirstName => self.first_name = value.to_string(),
            ApplicationField::LastName => self.last_name = value.to_string(),
            ApplicationField::Email => self.email = value.to_string(),
            ApplicationField::Phone => self.phone = value.to_string(),
            ApplicationField::Location => self.location = value.to_string(),
            ApplicationField::Experience | ApplicationField::Cv => return,
        }
        if self.touched.contains(&field) {
            self.refresh(field);
        }
    }

    /// Selecting counts as interacting with the field.
    pub fn set_experience(&mut self, level: Option<ExperienceLevel>) {
        self.experience = level;
        self.touch(ApplicationField::Experience);
    }

    /// Picking (or clearing) a file counts as interacting with the field.
    pub fn set_cv(&mut self, file: Option<CvFile>) {
        self.cv = file;
        self.touch(ApplicationField::Cv);
    }

    /// The error to display for a field. Untouched fields stay silent.
    pub fn error(&self, field: ApplicationField) -> Option<FieldError> {
        if self.touched.contains(&field) {
            self.errors.get(&field).copied()
        } else {
            None
        }
    }

    /// Submit-time validation: every field, touched or not. On failure all
    /// fields become touched so their errors show, and the caller raises
    /// the generic banner.
    pub fn validate_all(&mut self) -> Result<ApplicationPayload, DomainError> {
        for field in ApplicationField::ALL {
            self.touched.insert(field);
            self.refresh(field);
        }

        if !self.errors.is_empty() {
            tracing::debug!(invalid = self.errors.len(), "application blocked");
            return Err(DomainError::validation("application form has invalid fields"));
        }

        let location = {
            let trimmed = self.location.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        // Guarded by the error check above.
        let (Some(experience), Some(cv)) = (self.experience, self.cv.clone()) else {
            return Err(DomainError::validation("application form has invalid fields"));
        };

        Ok(ApplicationPayload {
            job_id: self.job_id,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location,
            experience,
            cv,
        })
    }

    /// Back to the pristine state after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::for_job(self.job_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ApplicationForm {
        let mut form = ApplicationForm::for_job(JobId::new(1));
        form.set_text(ApplicationField::FirstName, "Sara");
        form.set_text(ApplicationField::LastName, "Ahmadi");
        form.set_text(ApplicationField::Email, "sara@example.com");
        form.set_text(ApplicationField::Phone, "+98 912 345 6789");
        form.set_experience(Some(ExperienceLevel::Mid));
        form.set_cv(Some(CvFile {
            name: "cv.pdf".to_string(),
            mime: "application/pdf".to_string(),
            size: 200_000,
        }));
        form
    }

    #[test]
    fn untouched_fields_show_no_error() {
        let form = ApplicationForm::for_job(JobId::new(1));
        assert_eq!(form.error(ApplicationField::Email), None);
    }

    #[test]
    fn blur_surfaces_the_error() {
        let mut form = ApplicationForm::for_job(JobId::new(1));
        form.touch(ApplicationField::Email);
        assert_eq!(form.error(ApplicationField::Email), Some(FieldError::Required));
    }

    #[test]
    fn change_after_blur_revalidates() {
        let mut form = ApplicationForm::for_job(JobId::new(1));
        form.touch(ApplicationField::Email);
        assert!(form.error(ApplicationField::Email).is_some());

        form.set_text(ApplicationField::Email, "buyer@example.com");
        assert_eq!(form.error(ApplicationField::Email), None);

        form.set_text(ApplicationField::Email, "buyer@example");
        assert_eq!(
            form.error(ApplicationField::Email),
            Some(FieldError::EmailInvalid)
        );
    }

    #[test]
    fn change_before_blur_stays_silent() {
        let mut form = ApplicationForm::for_job(JobId::new(1));
        form.set_text(ApplicationField::Email, "not-an-email");
        assert_eq!(form.error(ApplicationField::Email), None);
    }

    #[test]
    fn submit_validates_untouched_fields_and_blocks() {
        let mut form = ApplicationForm::for_job(JobId::new(1));
        let err = form.validate_all().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // After the blocked submit every field reports its error.
        for field in ApplicationField::ALL {
            if field == ApplicationField::Location {
                continue; // optional
            }
            assert!(form.error(field).is_some(), "{field:?} should be invalid");
        }
    }

    #[test]
    fn valid_form_produces_the_payload() {
        let mut form = valid_form();
        let payload = form.validate_all().unwrap();
        assert_eq!(payload.job_id, JobId::new(1));
        assert_eq!(payload.first_name, "Sara");
        assert_eq!(payload.location, None);
        assert_eq!(payload.experience, ExperienceLevel::Mid);
        assert_eq!(payload.cv.name, "cv.pdf");
    }

    #[test]
    fn optional_location_is_trimmed_into_the_payload() {
        let mut form = valid_form();
        form.set_text(ApplicationField::Location, "  Tehran ");
        let payload = form.validate_all().unwrap();
        assert_eq!(payload.location.as_deref(), Some("Tehran"));
    }

    #[test]
    fn reset_returns_to_pristine_state() {
        let mut form = valid_form();
        form.touch(ApplicationField::FirstName);
        form.reset();
        assert_eq!(form.first_name, "");
        assert_eq!(form.error(ApplicationField::FirstName), None);
        assert_eq!(form.job_id(), JobId::new(1));
    }

    #[test]
    fn oversized_cv_blocks_submission() {
        let mut form = valid_form();
        form.set_cv(Some(CvFile {
            name: "cv.pdf".to_string(),
            mime: "application/pdf".to_string(),
            size: 6 * 1024 * 1024,
        }));
        assert_eq!(form.error(ApplicationField::Cv), Some(FieldError::CvSize));
        assert!(form.validate_all().is_err());
    }
}
