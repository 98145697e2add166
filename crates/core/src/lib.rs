//! `zagros-core` — shared domain primitives.
//!
//! This crate contains **pure domain** building blocks (no IO, no DOM):
//! locales, bilingual text value objects, typed identifiers and the domain
//! error model. Everything here compiles for both native and WASM targets.

pub mod error;
pub mod id;
pub mod locale;
pub mod text;

pub use error::{DomainError, DomainResult};
pub use id::{FaqId, JobId, ProductId};
pub use locale::{Locale, TextDirection};
pub use text::{LocalizedList, LocalizedText};
