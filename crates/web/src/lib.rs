//! `zagros-web` — the browser frontend.
//!
//! **Responsibility:** the bilingual marketing site as a client-side
//! rendered Leptos application.
//!
//! The `frontend` subtree is WASM-only. The root-level modules hold the
//! interaction logic that does not need a DOM (count-up timelines,
//! result-list cycling, reveal configuration, locale-prefixed paths), so
//! it compiles and tests natively.

pub mod countup;
pub mod listnav;
pub mod reveal;
pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use countup::CountUpTimeline;
pub use listnav::{cycle_down, cycle_up};
pub use reveal::RevealOptions;
