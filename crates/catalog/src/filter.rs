//! Product filtering and sorting.
//!
//! Filters are an independent predicate conjunction: category match AND
//! any-of certification match AND origin match. Resetting means applying
//! the default (empty) filter, which selects the entire catalog again.

use zagros_core::{Locale, LocalizedText};

use crate::data::{faqs, products};
use crate::faq::{FaqCategory, FaqItem};
use crate::product::{Certification, Product, ProductCategory};

/// Active predicates over the product list. The default value selects
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<ProductCategory>,
    /// Any-of semantics: a product passes when it carries at least one of
    /// the selected certifications. Empty means "don't care".
    pub certifications: Vec<Certification>,
    /// Matched against the English origin string, the stable filter key
    /// across locales.
    pub origin: Option<String>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.certifications.is_empty() && self.origin.is_none()
    }

    /// Conjunction of the three independent predicates.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .is_none_or(|category| product.category == category);

        let certs_ok = self.certifications.is_empty()
            || self
                .certifications
                .iter()
                .any(|cert| product.certifications.contains(cert));

        let origin_ok = self
            .origin
            .as_deref()
            .is_none_or(|origin| product.origin.en == origin);

        category_ok && certs_ok && origin_ok
    }
}

/// Sort order for the product list.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Passthrough: keeps the current filtered order untouched.
    #[default]
    Relevance,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Relevance, SortKey::NameAsc, SortKey::NameDesc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            SortKey::Relevance => "products.sort_relevance",
            SortKey::NameAsc => "products.sort_name_asc",
            SortKey::NameDesc => "products.sort_name_desc",
        }
    }
}

/// Apply the filter to the full catalog, preserving source order.
pub fn filter_products(filter: &ProductFilter) -> Vec<&'static Product> {
    let filtered: Vec<_> = products().iter().filter(|p| filter.matches(p)).collect();
    tracing::debug!(
        total = products().len(),
        matched = filtered.len(),
        "product filter applied"
    );
    filtered
}

/// Sort in place. `Relevance` does not reorder; name sorts compare the
/// active locale's name case-insensitively.
pub fn sort_products(items: &mut [&'static Product], key: SortKey, locale: Locale) {
    let by_name =
        |a: &&Product, b: &&Product| a.name.get(locale).to_lowercase().cmp(&b.name.get(locale).to_lowercase());

    match key {
        SortKey::Relevance => {}
        SortKey::NameAsc => items.sort_by(by_name),
        SortKey::NameDesc => items.sort_by(|a, b| by_name(b, a)),
    }
}

/// Distinct product origins in source order, for the origin `<select>`.
pub fn origins() -> Vec<&'static LocalizedText> {
    let mut seen: Vec<&'static LocalizedText> = Vec::new();
    for product in products() {
        if !seen.iter().any(|o| o.en == product.origin.en) {
            seen.push(&product.origin);
        }
    }
    seen
}

/// FAQ entries for a topic; `None` selects all of them.
pub fn faqs_in_category(category: Option<FaqCategory>) -> Vec<&'static FaqItem> {
    faqs()
        .iter()
        .filter(|f| category.is_none_or(|c| f.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_selects_the_whole_catalog() {
        let all = filter_products(&ProductFilter::default());
        assert_eq!(all.len(), products().len());
    }

    #[test]
    fn predicates_combine_as_a_conjunction() {
        let filter = ProductFilter {
            category: Some(ProductCategory::Nuts),
            certifications: vec![Certification::Fda],
            origin: Some("Kerman".to_string()),
        };
        let hits = filter_products(&filter);
        assert!(!hits.is_empty());
        for p in &hits {
            assert_eq!(p.category, ProductCategory::Nuts);
            assert!(p.certifications.contains(&Certification::Fda));
            assert_eq!(p.origin.en, "Kerman");
        }

        // Relaxing one predicate can only grow the result set.
        let relaxed = ProductFilter {
            certifications: Vec::new(),
            ..filter
        };
        assert!(filter_products(&relaxed).len() >= hits.len());
    }

    #[test]
    fn certification_filter_uses_any_of_semantics() {
        let filter = ProductFilter {
            certifications: vec![Certification::Organic, Certification::Fda],
            ..ProductFilter::default()
        };
        for p in filter_products(&filter) {
            assert!(
                p.certifications.contains(&Certification::Organic)
                    || p.certifications.contains(&Certification::Fda)
            );
        }
    }

    #[test]
    fn resetting_restores_the_full_original_list() {
        let narrow = ProductFilter {
            category: Some(ProductCategory::Saffron),
            ..ProductFilter::default()
        };
        let narrowed = filter_products(&narrow);
        assert!(narrowed.len() < products().len());

        // Reset = default filter; the full catalog comes back, not the
        // last-filtered subset.
        let reset = filter_products(&ProductFilter::default());
        assert_eq!(reset.len(), products().len());
    }

    #[test]
    fn name_ascending_sorts_by_english_name() {
        let mut items = filter_products(&ProductFilter::default());
        sort_products(&mut items, SortKey::NameAsc, Locale::En);

        let names: Vec<_> = items.iter().map(|p| p.name.en.to_lowercase()).collect();
        let mut expected = names.clone();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn name_descending_reverses_the_ascending_order() {
        let mut asc = filter_products(&ProductFilter::default());
        sort_products(&mut asc, SortKey::NameAsc, Locale::En);

        let mut desc = filter_products(&ProductFilter::default());
        sort_products(&mut desc, SortKey::NameDesc, Locale::En);

        asc.reverse();
        assert_eq!(
            asc.iter().map(|p| p.id).collect::<Vec<_>>(),
            desc.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn relevance_is_a_passthrough() {
        let mut items = filter_products(&ProductFilter::default());
        let before: Vec<_> = items.iter().map(|p| p.id).collect();
        sort_products(&mut items, SortKey::Relevance, Locale::Fa);
        let after: Vec<_> = items.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn origins_are_distinct_and_in_source_order() {
        let all = origins();
        for (i, origin) in all.iter().enumerate() {
            assert!(
                !all[..i].iter().any(|o| o.en == origin.en),
                "duplicate origin {}",
                origin.en
            );
        }
        assert_eq!(all[0].en, products()[0].origin.en);
    }

    #[test]
    fn faq_category_filter_selects_only_that_topic() {
        let shipping = faqs_in_category(Some(FaqCategory::Shipping));
        assert!(!shipping.is_empty());
        assert!(shipping.iter().all(|f| f.category == FaqCategory::Shipping));

        assert_eq!(faqs_in_category(None).len(), faqs().len());
    }
}
