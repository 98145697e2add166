//! Bilingual text value objects.
//!
//! Every user-facing string in the catalog exists in both locales. These
//! value objects are immutable and compared by value; the bilingual-parity
//! invariant (both sides non-blank) is checked by `is_complete` and
//! enforced dataset-wide in the catalog tests.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// A string carried in both locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub fa: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, fa: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fa: fa.into(),
        }
    }

    /// The string for the active locale.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Fa => &self.fa,
        }
    }

    /// Both sides present and non-blank.
    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.fa.trim().is_empty()
    }
}

/// A list of strings carried in both locales, item-for-item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedList {
    pub en: Vec<String>,
    pub fa: Vec<String>,
}

impl LocalizedList {
    pub fn new<E, F>(en: E, fa: F) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            en: en.into_iter().map(Into::into).collect(),
            fa: fa.into_iter().map(Into::into).collect(),
        }
    }

    pub fn get(&self, locale: Locale) -> &[String] {
        match locale {
            Locale::En => &self.en,
            Locale::Fa => &self.fa,
        }
    }

    /// Same item count on both sides, nothing blank, nothing empty.
    pub fn is_complete(&self) -> bool {
        !self.en.is_empty()
            && self.en.len() == self.fa.len()
            && self.en.iter().chain(&self.fa).all(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_the_requested_side() {
        let t = LocalizedText::new("Saffron", "زعفران");
        assert_eq!(t.get(Locale::En), "Saffron");
        assert_eq!(t.get(Locale::Fa), "زعفران");
    }

    #[test]
    fn completeness_requires_both_sides_non_blank() {
        assert!(LocalizedText::new("Saffron", "زعفران").is_complete());
        assert!(!LocalizedText::new("Saffron", "   ").is_complete());
        assert!(!LocalizedText::new("", "زعفران").is_complete());
    }

    #[test]
    fn list_completeness_requires_matching_lengths() {
        let ok = LocalizedList::new(["a", "b"], ["آ", "ب"]);
        assert!(ok.is_complete());

        let skewed = LocalizedList::new(["a", "b"], ["آ"]);
        assert!(!skewed.is_complete());

        let empty = LocalizedList::new(Vec::<String>::new(), Vec::<String>::new());
        assert!(!empty.is_complete());
    }
}
