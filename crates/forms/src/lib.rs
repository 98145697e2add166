//! `zagros-forms` — pure form validation and submission payloads.
//!
//! Every rule here is a deterministic function of the field's current
//! value; no DOM types leak in. The web layer owns event wiring and
//! translates the error keys; this crate owns the rules, the
//! touched/errors lifecycle, and the payloads handed to the submission
//! gateway.

pub mod application;
pub mod field;
pub mod file;
pub mod inquiry;
pub mod submit;

pub use application::{ApplicationField, ApplicationForm, ApplicationPayload};
pub use field::{
    validate_email, validate_location, validate_message, validate_name, validate_phone,
    ExperienceLevel, FieldError,
};
pub use file::{validate_cv, CvFile, MAX_CV_BYTES};
pub use inquiry::{InquiryField, InquiryForm, InquiryPayload};
pub use submit::{SubmissionError, SubmissionReceipt};
