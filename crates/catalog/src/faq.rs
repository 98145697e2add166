//! FAQ entries.

use serde::{Deserialize, Serialize};

use zagros_core::{FaqId, LocalizedText};

/// FAQ topic tag. Closed set; drives the topic chips on the FAQ page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqCategory {
    Ordering,
    Shipping,
    Quality,
    Payment,
}

impl FaqCategory {
    pub const ALL: [FaqCategory; 4] = [
        FaqCategory::Ordering,
        FaqCategory::Shipping,
        FaqCategory::Quality,
        FaqCategory::Payment,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            FaqCategory::Ordering => "faq.cat_ordering",
            FaqCategory::Shipping => "faq.cat_shipping",
            FaqCategory::Quality => "faq.cat_quality",
            FaqCategory::Payment => "faq.cat_payment",
        }
    }
}

/// A question/answer pair. Defined in the static dataset, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: FaqId,
    pub question: LocalizedText,
    pub answer: LocalizedText,
    pub category: FaqCategory,
}
