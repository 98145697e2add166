//! Job openings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use zagros_core::{JobId, LocalizedList, LocalizedText};

/// Employment type. Closed set of three values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
}

impl JobType {
    pub fn label_key(self) -> &'static str {
        match self {
            JobType::FullTime => "careers.type_full_time",
            JobType::PartTime => "careers.type_part_time",
            JobType::Contract => "careers.type_contract",
        }
    }
}

/// A job opening. Defined in the static dataset, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub department: LocalizedText,
    pub location: LocalizedText,
    pub job_type: JobType,
    pub responsibilities: LocalizedList,
    pub requirements: LocalizedList,
    pub benefits: LocalizedList,
    /// Publication date; careers page lists newest first.
    pub posted: NaiveDate,
}

impl Job {
    /// Locale-relative route suffix of the detail page.
    pub fn route(&self) -> String {
        format!("careers/{}", self.id)
    }
}
