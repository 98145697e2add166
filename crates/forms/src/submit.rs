//! Submission boundary types.
//!
//! The site has no backend; real transmission is an expected external
//! collaborator. The gateway operations in the web layer return these
//! types so a real transport can replace the mock without touching the
//! forms.

use serde::Serialize;
use thiserror::Error;

/// Why a submission was not accepted. The shipped mock never produces
/// this, but the boundary admits failure so a real endpoint can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Acknowledgement returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// Human-readable reference the UI can show.
    pub reference: String,
}

impl SubmissionReceipt {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}
