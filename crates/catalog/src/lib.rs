//! `zagros-catalog` — the static data layer and the read operations on it.
//!
//! Three flat, immutable-at-runtime entity arrays (products, job openings,
//! FAQ entries) form the entire data model; there is no write path. On top
//! of them sit the product filter/sort pipeline and the header quick-search
//! scan. Everything is deterministic and target-independent.

pub mod data;
pub mod faq;
pub mod filter;
pub mod job;
pub mod product;
pub mod search;

pub use data::{faqs, job_by_id, jobs, product_by_id, products};
pub use faq::{FaqCategory, FaqItem};
pub use filter::{faqs_in_category, filter_products, origins, sort_products, ProductFilter, SortKey};
pub use job::{Job, JobType};
pub use product::{Certification, Product, ProductCategory};
pub use search::{quick_search, SearchGroup, SearchHit, SearchResults};
