//! Header quick search.
//!
//! A linear substring scan over a fixed field set per entity type. Both
//! language variants of every field are checked regardless of the active
//! locale, so a Persian query finds results while browsing in English and
//! vice versa. Results are capped per group and keep source-array order;
//! group order is fixed: products, careers, FAQ.

use zagros_core::LocalizedText;

use crate::data::{faqs, jobs, products};
use crate::faq::FaqItem;
use crate::job::Job;
use crate::product::Product;

/// Per-group result caps.
pub const PRODUCT_CAP: usize = 6;
pub const JOB_CAP: usize = 5;
pub const FAQ_CAP: usize = 5;

/// Which dataset a hit came from. Variant order is the rendering order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SearchGroup {
    Products,
    Careers,
    Faq,
}

impl SearchGroup {
    /// Dictionary key of the group heading.
    pub fn heading_key(self) -> &'static str {
        match self {
            SearchGroup::Products => "header.search_group_products",
            SearchGroup::Careers => "header.search_group_careers",
            SearchGroup::Faq => "header.search_group_faq",
        }
    }
}

/// One row of the flattened result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub group: SearchGroup,
    pub title: &'static LocalizedText,
    /// Locale-relative route suffix, e.g. `products/3`.
    pub route: String,
}

/// Grouped search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub products: Vec<&'static Product>,
    pub jobs: Vec<&'static Job>,
    pub faqs: Vec<&'static FaqItem>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.jobs.is_empty() && self.faqs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len() + self.jobs.len() + self.faqs.len()
    }

    /// Flatten in the fixed group order for keyboard navigation.
    pub fn flatten(&self) -> Vec<SearchHit> {
        let mut hits = Vec::with_capacity(self.len());
        for p in &self.products {
            hits.push(SearchHit {
                group: SearchGroup::Products,
                title: &p.name,
                route: p.route(),
            });
        }
        for j in &self.jobs {
            hits.push(SearchHit {
                group: SearchGroup::Careers,
                title: &j.title,
                route: j.route(),
            });
        }
        for f in &self.faqs {
            hits.push(SearchHit {
                group: SearchGroup::Faq,
                title: &f.question,
                route: "faq".to_string(),
            });
        }
        hits
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Case-insensitive containment in either language variant.
fn field_matches(field: &LocalizedText, needle: &str) -> bool {
    field.en.to_lowercase().contains(needle) || field.fa.to_lowercase().contains(needle)
}

fn product_matches(product: &Product, needle: &str) -> bool {
    field_matches(&product.name, needle)
        || field_matches(&product.description, needle)
        || field_matches(&product.origin, needle)
        || field_matches(&product.grade, needle)
}

fn job_matches(job: &Job, needle: &str) -> bool {
    field_matches(&job.title, needle)
        || field_matches(&job.description, needle)
        || field_matches(&job.department, needle)
        || field_matches(&job.location, needle)
}

fn faq_matches(faq: &FaqItem, needle: &str) -> bool {
    field_matches(&faq.question, needle) || field_matches(&faq.answer, needle)
}

/// Scan all three datasets for the query. Blank queries return nothing.
pub fn quick_search(query: &str) -> SearchResults {
    let needle = normalize(query);
    if needle.is_empty() {
        return SearchResults::default();
    }

    let results = SearchResults {
        products: products()
            .iter()
            .filter(|p| product_matches(p, &needle))
            .take(PRODUCT_CAP)
            .collect(),
        jobs: jobs()
            .iter()
            .filter(|j| job_matches(j, &needle))
            .take(JOB_CAP)
            .collect(),
        faqs: faqs()
            .iter()
            .filter(|f| faq_matches(f, &needle))
            .take(FAQ_CAP)
            .collect(),
    };

    tracing::debug!(
        query = %needle,
        products = results.products.len(),
        jobs = results.jobs.len(),
        faqs = results.faqs.len(),
        "quick search"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_nothing() {
        assert!(quick_search("").is_empty());
        assert!(quick_search("   ").is_empty());
    }

    #[test]
    fn unmatched_query_returns_an_empty_flattened_list() {
        let results = quick_search("zzzzqqq");
        assert!(results.is_empty());
        assert!(results.flatten().is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = quick_search("saffron");
        let upper = quick_search("SAFFRON");
        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
    }

    #[test]
    fn persian_query_matches_regardless_of_field_language() {
        let results = quick_search("زعفران");
        assert!(!results.products.is_empty());
        // The same entities match through their English fields.
        let english = quick_search("saffron");
        assert_eq!(
            results.products.iter().map(|p| p.id).collect::<Vec<_>>(),
            english.products.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn groups_are_capped_and_keep_source_order() {
        // "a" hits every English field in the fixture data.
        let results = quick_search("a");
        assert!(results.products.len() <= PRODUCT_CAP);
        assert!(results.jobs.len() <= JOB_CAP);
        assert!(results.faqs.len() <= FAQ_CAP);
        assert_eq!(results.products.len(), PRODUCT_CAP);

        let ids: Vec<_> = results.products.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "source order must be preserved");
    }

    #[test]
    fn flattened_list_keeps_the_fixed_group_order() {
        // "kerman" appears in product origins and in a job location.
        let results = quick_search("kerman");
        assert!(!results.products.is_empty());
        assert!(!results.jobs.is_empty());

        let flat = results.flatten();
        let first_career = flat
            .iter()
            .position(|h| h.group == SearchGroup::Careers)
            .unwrap();
        let last_product = flat
            .iter()
            .rposition(|h| h.group == SearchGroup::Products)
            .unwrap();
        assert!(last_product < first_career);
    }

    #[test]
    fn hits_carry_navigable_routes() {
        let results = quick_search("saffron");
        let flat = results.flatten();
        assert!(!flat.is_empty());
        for hit in &flat {
            match hit.group {
                SearchGroup::Products => assert!(hit.route.starts_with("products/")),
                SearchGroup::Careers => assert!(hit.route.starts_with("careers/")),
                SearchGroup::Faq => assert_eq!(hit.route, "faq"),
            }
        }
    }

    #[test]
    fn query_matching_two_categories_returns_both_groups() {
        // "shipment" appears in job copy and FAQ answers.
        let results = quick_search("shipment");
        assert!(!results.jobs.is_empty());
        assert!(!results.faqs.is_empty());
    }
}
